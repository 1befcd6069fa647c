use std::sync::Arc;
use std::time::Duration;

use tickerdesk_core::{
    CacheConfig, Capability, DeskConfig, HeadlineSource, HistoryRange, MarketDataConnector,
    TickerdeskError,
};
use tickerdesk_middleware::ConnectorBuilder;
use tickerdesk_news::NewsFinder;

/// Orchestrator that builds dashboard tabs from one connector and one headline source.
pub struct Desk {
    pub(crate) connector: Arc<dyn MarketDataConnector>,
    pub(crate) headlines: Arc<dyn HeadlineSource>,
    pub(crate) cfg: DeskConfig,
}

/// Builder for constructing a [`Desk`].
pub struct DeskBuilder {
    connector: Option<Arc<dyn MarketDataConnector>>,
    headlines: Option<Arc<dyn HeadlineSource>>,
    cache: Option<CacheConfig>,
    cfg: DeskConfig,
}

impl Default for DeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeskBuilder {
    /// Create a builder with default configuration and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            headlines: None,
            cache: None,
            cfg: DeskConfig::default(),
        }
    }

    /// Register the market-data connector. A later call replaces the earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MarketDataConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Use a custom headline source instead of the default news finder.
    #[must_use]
    pub fn headline_source(mut self, source: Arc<dyn HeadlineSource>) -> Self {
        self.headlines = Some(source);
        self
    }

    /// Wrap the connector in a per-ticker cache.
    #[must_use]
    pub fn with_cache(mut self, cfg: CacheConfig) -> Self {
        self.cache = Some(cfg);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DeskConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// News lookback window in months.
    #[must_use]
    pub const fn news_lookback_months(mut self, months: u32) -> Self {
        self.cfg.news_lookback_months = months;
        self
    }

    /// Maximum links per news section.
    #[must_use]
    pub const fn max_articles(mut self, max: usize) -> Self {
        self.cfg.max_articles = max;
        self
    }

    /// Range for the price chart and the overview price change.
    #[must_use]
    pub const fn history_range(mut self, range: HistoryRange) -> Self {
        self.cfg.history_range = range;
        self
    }

    /// Timeout for each market-data connector call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the `Desk`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered, or an error from
    /// constructing the default news finder.
    pub fn build(self) -> Result<Desk, TickerdeskError> {
        let Some(raw) = self.connector else {
            return Err(TickerdeskError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        let connector = match &self.cache {
            Some(cache) => ConnectorBuilder::new(raw).with_cache(cache).build(),
            None => raw,
        };
        let headlines: Arc<dyn HeadlineSource> = match self.headlines {
            Some(h) => h,
            None => Arc::new(NewsFinder::new_default()?),
        };
        Ok(Desk {
            connector,
            headlines,
            cfg: self.cfg,
        })
    }
}

/// Tag untagged connector errors with the connector name.
pub(crate) fn tag_err(connector: &str, e: TickerdeskError) -> TickerdeskError {
    match e {
        e @ (TickerdeskError::NotFound { .. }
        | TickerdeskError::Unsupported { .. }
        | TickerdeskError::ProviderTimeout { .. }
        | TickerdeskError::Connector { .. }
        | TickerdeskError::InvalidArg(_)) => e,
        other => TickerdeskError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Map "the provider has nothing" to an empty value; keep real failures.
pub(crate) fn absent_as_default<T: Default>(
    res: Result<T, TickerdeskError>,
) -> Result<T, TickerdeskError> {
    match res {
        Err(e) if e.is_absence() => Ok(T::default()),
        other => other,
    }
}

impl Desk {
    /// Start building a new `Desk`.
    #[must_use]
    pub fn builder() -> DeskBuilder {
        DeskBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DeskConfig {
        &self.cfg
    }

    /// Connector the desk reads market data from (possibly cache-wrapped).
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn MarketDataConnector> {
        &self.connector
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerdesk::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, TickerdeskError>
    where
        Fut: core::future::Future<Output = Result<T, TickerdeskError>>,
    {
        match tokio::time::timeout(timeout, fut).await {
            Ok(res) => res.map_err(|e| tag_err(connector_name, e)),
            Err(_) => Err(TickerdeskError::provider_timeout(
                connector_name,
                capability.as_str(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_err_keeps_classified_errors() {
        let nf = TickerdeskError::not_found("info for X");
        assert_eq!(tag_err("mock", nf.clone()), nf);
        assert_eq!(
            tag_err("mock", TickerdeskError::Other("bad row".into())),
            TickerdeskError::connector("mock", "unknown error: bad row")
        );
    }

    #[test]
    fn absence_becomes_default() {
        let r: Result<Vec<u8>, _> = Err(TickerdeskError::unsupported("history"));
        assert_eq!(absent_as_default(r), Ok(vec![]));
        let r: Result<Vec<u8>, _> = Err(TickerdeskError::network("down"));
        assert!(absent_as_default(r).is_err());
    }

    #[tokio::test]
    async fn timeout_maps_to_provider_timeout() {
        let slow = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, TickerdeskError>(1)
        };
        let err = Desk::provider_call_with_timeout(
            "slow",
            Capability::Info,
            Duration::from_millis(10),
            slow,
        )
        .await
        .unwrap_err();
        assert_eq!(err, TickerdeskError::provider_timeout("slow", "info"));
    }
}
