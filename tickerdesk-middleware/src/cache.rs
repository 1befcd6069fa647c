use std::hash::Hash;
use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use tickerdesk_core::connector::{
    FinancialsProvider, HistoryProvider, InfoProvider, MarketDataConnector,
};
use tickerdesk_core::{
    CacheConfig, Candle, Capability, CompanyInfo, HistoryRange, QuarterlyFinancials, Ticker,
    TickerdeskError,
};

type HistoryKey = (Ticker, HistoryRange);

/// Per-capability store; `None` means caching is disabled for it (TTL=0).
type Store<K, V> = Option<Cache<K, Arc<V>>>;

fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Store<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    let ttl = cfg.ttl_for(cap)?;
    Some(
        Cache::builder()
            .max_capacity(cfg.default_max_entries.max(1))
            .time_to_live(ttl)
            .build(),
    )
}

/// Look up `key`, otherwise run `fetch` and store a successful result.
///
/// Concurrent misses on the same key share one `fetch`. Errors are never cached.
async fn cached<K, V, F>(store: &Store<K, V>, key: K, fetch: F) -> Result<V, TickerdeskError>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: Future<Output = Result<V, TickerdeskError>>,
{
    let Some(store) = store else {
        return fetch.await;
    };
    store
        .try_get_with(key, async move { fetch.await.map(Arc::new) })
        .await
        .map(|hit| (*hit).clone())
        .map_err(|e| (*e).clone())
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Create the middleware from a cache configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl tickerdesk_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn MarketDataConnector>) -> Arc<dyn MarketDataConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        CachingConnector::LAYER_NAME
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "default_ttl_ms": self.cfg.default_ttl_ms,
            "default_max_entries": self.cfg.default_max_entries,
            "per_capability_ttl_ms": self.cfg.per_capability_ttl_ms,
        })
    }
}

/// Connector wrapper that memoizes successful market-data calls per ticker.
///
/// Keys are `(ticker, call kind)`; history is additionally keyed by range.
/// Capabilities the inner connector lacks stay absent on the wrapper.
pub struct CachingConnector {
    inner: Arc<dyn MarketDataConnector>,
    info: Store<Ticker, CompanyInfo>,
    history: Store<HistoryKey, Vec<Candle>>,
    financials: Store<Ticker, QuarterlyFinancials>,
}

impl CachingConnector {
    /// Middleware name used for introspection and replacement in the builder.
    pub const LAYER_NAME: &'static str = "CachingMiddleware";

    /// Wrap `inner` with stores configured from `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn MarketDataConnector>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            info: maybe_store(cfg, Capability::Info),
            history: maybe_store(cfg, Capability::History),
            financials: maybe_store(cfg, Capability::Financials),
        }
    }
}

#[async_trait]
impl MarketDataConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        self.inner
            .as_info_provider()
            .map(|_| self as &dyn InfoProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        self.inner
            .as_history_provider()
            .map(|_| self as &dyn HistoryProvider)
    }

    fn as_financials_provider(&self) -> Option<&dyn FinancialsProvider> {
        self.inner
            .as_financials_provider()
            .map(|_| self as &dyn FinancialsProvider)
    }
}

#[async_trait]
impl InfoProvider for CachingConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::middleware::cache", skip(self, ticker), fields(ticker = %ticker))
    )]
    async fn info(&self, ticker: &Ticker) -> Result<CompanyInfo, TickerdeskError> {
        let inner = self
            .inner
            .as_info_provider()
            .ok_or_else(|| TickerdeskError::unsupported(Capability::Info.as_str()))?;
        cached(&self.info, ticker.clone(), inner.info(ticker)).await
    }
}

#[async_trait]
impl HistoryProvider for CachingConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::middleware::cache", skip(self, ticker), fields(ticker = %ticker))
    )]
    async fn history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
    ) -> Result<Vec<Candle>, TickerdeskError> {
        let inner = self
            .inner
            .as_history_provider()
            .ok_or_else(|| TickerdeskError::unsupported(Capability::History.as_str()))?;
        cached(
            &self.history,
            (ticker.clone(), range),
            inner.history(ticker, range),
        )
        .await
    }
}

#[async_trait]
impl FinancialsProvider for CachingConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tickerdesk::middleware::cache", skip(self, ticker), fields(ticker = %ticker))
    )]
    async fn quarterly_financials(
        &self,
        ticker: &Ticker,
    ) -> Result<QuarterlyFinancials, TickerdeskError> {
        let inner = self
            .inner
            .as_financials_provider()
            .ok_or_else(|| TickerdeskError::unsupported(Capability::Financials.as_str()))?;
        cached(
            &self.financials,
            ticker.clone(),
            inner.quarterly_financials(ticker),
        )
        .await
    }
}
