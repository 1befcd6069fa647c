use tickerdesk_core::{Candle, Capability, CompanyInfo, QuarterlyFinancials, Ticker, TickerdeskError};

use crate::Desk;
use crate::tabs::{FinancialsTab, LineSummary, Overview};

impl Desk {
    pub(crate) async fn fetch_info(&self, ticker: &Ticker) -> Result<CompanyInfo, TickerdeskError> {
        let p = self
            .connector
            .as_info_provider()
            .ok_or_else(|| TickerdeskError::unsupported(Capability::Info.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::Info,
            self.cfg.provider_timeout,
            p.info(ticker),
        )
        .await
    }

    /// Company overview: descriptive fields plus the price change over the chart range.
    ///
    /// The info mapping is required. Price history is fetched concurrently and
    /// only enriches the result; when it is unavailable the price fields read
    /// `None`/`"N/A"`.
    ///
    /// # Errors
    /// Returns the info call's error (`NotFound`, `Unsupported`, `ProviderTimeout`, ...).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::desk", skip(self), fields(ticker = %ticker))
    )]
    pub async fn overview(&self, ticker: &Ticker) -> Result<Overview, TickerdeskError> {
        let (info, history) = tokio::join!(self.fetch_info(ticker), self.price_history(ticker));
        let info = info?;
        let candles = history.unwrap_or_else(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "tickerdesk::desk", error = %_e, "overview without price history");
            Vec::new()
        });
        Ok(Overview::from_parts(
            ticker,
            &info,
            &candles,
            self.cfg.history_range,
        ))
    }

    /// Daily candles over the configured range, oldest first.
    ///
    /// # Errors
    /// `Unsupported` when the connector has no history capability, otherwise the
    /// connector's error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::desk", skip(self), fields(ticker = %ticker))
    )]
    pub async fn price_history(&self, ticker: &Ticker) -> Result<Vec<Candle>, TickerdeskError> {
        let p = self
            .connector
            .as_history_provider()
            .ok_or_else(|| TickerdeskError::unsupported(Capability::History.as_str()))?;
        let mut candles = Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::History,
            self.cfg.provider_timeout,
            p.history(ticker, self.cfg.history_range),
        )
        .await?;
        candles.sort_by_key(|c| c.date);
        Ok(candles)
    }

    /// Raw quarterly statement rows as returned by the connector.
    ///
    /// # Errors
    /// `Unsupported` when the connector has no financials capability, otherwise
    /// the connector's error.
    pub async fn quarterly_financials(
        &self,
        ticker: &Ticker,
    ) -> Result<QuarterlyFinancials, TickerdeskError> {
        let p = self
            .connector
            .as_financials_provider()
            .ok_or_else(|| TickerdeskError::unsupported(Capability::Financials.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::Financials,
            self.cfg.provider_timeout,
            p.quarterly_financials(ticker),
        )
        .await
    }

    /// Financial statements tab: latest value, QoQ and YoY per statement line.
    ///
    /// # Errors
    /// Same as [`Desk::quarterly_financials`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::desk", skip(self), fields(ticker = %ticker))
    )]
    pub async fn financials(&self, ticker: &Ticker) -> Result<FinancialsTab, TickerdeskError> {
        let statements = self.quarterly_financials(ticker).await?;
        Ok(FinancialsTab {
            rows: statements.rows.iter().map(LineSummary::from_row).collect(),
        })
    }
}
