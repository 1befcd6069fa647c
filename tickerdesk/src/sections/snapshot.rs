use tickerdesk_core::{Ticker, TickerdeskError};

use crate::Desk;
use crate::core::absent_as_default;
use crate::tabs::{DashboardSnapshot, FinancialsTab, NewsSection, Overview};

impl Desk {
    /// Everything the dashboard shows for one ticker.
    ///
    /// The info mapping is required and is fetched first because the news
    /// phrases depend on it (company name, sector). History, financials and the
    /// three news searches then run concurrently. History and financials that
    /// the connector does not support or has no data for become empty; news
    /// failures are kept on the affected section.
    ///
    /// # Errors
    /// Fails when the info call fails, or when history or financials fail for a
    /// reason other than absence (connector error, timeout).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::desk", skip(self), fields(ticker = %ticker))
    )]
    pub async fn snapshot(&self, ticker: &Ticker) -> Result<DashboardSnapshot, TickerdeskError> {
        let info = self.fetch_info(ticker).await?;
        let company = info
            .long_name()
            .map_or_else(|| ticker.base_symbol().to_string(), str::to_string);
        let sector = info.sector().map(str::to_string);

        let sector_section = async {
            match &sector {
                Some(s) => self.sector_news(s).await,
                None => NewsSection::skipped("sector not available"),
            }
        };
        let (history, statements, company_news, orders, sector_news) = tokio::join!(
            self.price_history(ticker),
            self.financials(ticker),
            self.news(&company),
            self.orders(&company),
            sector_section,
        );

        let history = absent_as_default(history)?;
        let financials: FinancialsTab = absent_as_default(statements)?;
        let overview = Overview::from_parts(ticker, &info, &history, self.cfg.history_range);

        Ok(DashboardSnapshot {
            overview,
            history,
            financials,
            company_news,
            orders,
            sector_news,
        })
    }
}
