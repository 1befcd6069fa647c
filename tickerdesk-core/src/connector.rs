use async_trait::async_trait;

use crate::TickerdeskError;
use crate::types::{ArticleLink, Candle, CompanyInfo, QuarterlyFinancials, Ticker};
use tickerdesk_types::HistoryRange;

/// Focused role trait for connectors that provide the company info mapping.
#[async_trait]
pub trait InfoProvider: Send + Sync {
    /// Fetch the info mapping (name, sector, website, market cap...) for a ticker.
    async fn info(&self, ticker: &Ticker) -> Result<CompanyInfo, TickerdeskError>;
}

/// Focused role trait for connectors that provide daily price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch daily candles for the requested range, oldest first.
    async fn history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
    ) -> Result<Vec<Candle>, TickerdeskError>;
}

/// Focused role trait for connectors that provide quarterly financial statements.
#[async_trait]
pub trait FinancialsProvider: Send + Sync {
    /// Fetch quarterly statement rows; each series is ordered most-recent-first.
    async fn quarterly_financials(
        &self,
        ticker: &Ticker,
    ) -> Result<QuarterlyFinancials, TickerdeskError>;
}

/// Source of headline links for a free-text phrase.
///
/// Implementations return at most `max_articles` absolute links in provider
/// relevance order, and an empty vector when nothing matched.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Search news published within the last `lookback_months` (30-day months).
    ///
    /// # Errors
    /// `InvalidQuery` for a blank phrase, `Network` when the fetch fails.
    async fn find_news(
        &self,
        phrase: &str,
        lookback_months: u32,
        max_articles: usize,
    ) -> Result<Vec<ArticleLink>, TickerdeskError>;
}

/// Main connector trait implemented by market-data providers. Exposes capability discovery.
#[async_trait]
pub trait MarketDataConnector: Send + Sync {
    /// A stable identifier for logs and errors (e.g., "tickerdesk-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for the info mapping.
    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        None
    }

    /// If implemented, returns a trait object for price history.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// If implemented, returns a trait object for quarterly financials.
    fn as_financials_provider(&self) -> Option<&dyn FinancialsProvider> {
        None
    }
}
