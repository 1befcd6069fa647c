use async_trait::async_trait;
use tickerdesk_core::connector::{
    FinancialsProvider, HistoryProvider, InfoProvider, MarketDataConnector,
};
use tickerdesk_core::{
    Candle, CompanyInfo, HistoryRange, QuarterlyFinancials, Ticker, TickerdeskError,
};

mod fixtures;

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Two symbols misbehave on purpose: `FAIL` returns a connector error for every
/// call and `TIMEOUT` sleeps before answering `NotFound`.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name reported by [`MarketDataConnector::name`].
    pub const NAME: &'static str = "tickerdesk-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> TickerdeskError {
        TickerdeskError::not_found(what.to_string())
    }

    async fn maybe_fail_or_stall(
        symbol: &str,
        capability: &'static str,
    ) -> Result<(), TickerdeskError> {
        match symbol {
            "FAIL" => Err(TickerdeskError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl MarketDataConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        Some(self as &dyn InfoProvider)
    }
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_financials_provider(&self) -> Option<&dyn FinancialsProvider> {
        Some(self as &dyn FinancialsProvider)
    }
}

#[async_trait]
impl InfoProvider for MockConnector {
    async fn info(&self, ticker: &Ticker) -> Result<CompanyInfo, TickerdeskError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_stall(s, "info").await?;
        fixtures::info::by_symbol(ticker).ok_or_else(|| Self::not_found(&format!("info for {s}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
    ) -> Result<Vec<Candle>, TickerdeskError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_stall(s, "history").await?;
        let candles = fixtures::history::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("history for {s}")))?;
        Ok(fixtures::history::within(candles, range))
    }
}

#[async_trait]
impl FinancialsProvider for MockConnector {
    async fn quarterly_financials(
        &self,
        ticker: &Ticker,
    ) -> Result<QuarterlyFinancials, TickerdeskError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_stall(s, "financials").await?;
        fixtures::financials::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("financials for {s}")))
    }
}
