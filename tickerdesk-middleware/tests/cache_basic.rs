use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use tickerdesk_core::connector::{FinancialsProvider, HistoryProvider, InfoProvider};
use tickerdesk_core::{
    CacheConfig, Candle, CompanyInfo, HistoryRange, MarketDataConnector, QuarterlyFinancials,
    Ticker, TickerdeskError,
};
use tickerdesk_middleware::ConnectorBuilder;
use tickerdesk_mock::MockConnector;

/// Counts calls reaching the inner connector, per capability.
struct Counting {
    inner: MockConnector,
    delay: Duration,
    info: Arc<AtomicUsize>,
    history: Arc<AtomicUsize>,
    financials: Arc<AtomicUsize>,
}

#[derive(Clone, Default)]
struct Counters {
    info: Arc<AtomicUsize>,
    history: Arc<AtomicUsize>,
    financials: Arc<AtomicUsize>,
}

impl Counting {
    fn new(c: &Counters) -> Self {
        Self {
            inner: MockConnector::new(),
            delay: Duration::ZERO,
            info: c.info.clone(),
            history: c.history.clone(),
            financials: c.financials.clone(),
        }
    }
}

#[async_trait::async_trait]
impl MarketDataConnector for Counting {
    fn name(&self) -> &'static str {
        "counting"
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

#[async_trait::async_trait]
impl InfoProvider for Counting {
    async fn info(&self, t: &Ticker) -> Result<CompanyInfo, TickerdeskError> {
        self.info.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.info(t).await
    }
}

#[async_trait::async_trait]
impl HistoryProvider for Counting {
    async fn history(&self, t: &Ticker, r: HistoryRange) -> Result<Vec<Candle>, TickerdeskError> {
        self.history.fetch_add(1, Ordering::SeqCst);
        self.inner.history(t, r).await
    }
}

#[async_trait::async_trait]
impl FinancialsProvider for Counting {
    async fn quarterly_financials(
        &self,
        t: &Ticker,
    ) -> Result<QuarterlyFinancials, TickerdeskError> {
        self.financials.fetch_add(1, Ordering::SeqCst);
        self.inner.quarterly_financials(t).await
    }
}

fn wrapped(cfg: &CacheConfig) -> (Arc<dyn MarketDataConnector>, Counters) {
    wrapped_slow(cfg, Duration::ZERO)
}

fn wrapped_slow(cfg: &CacheConfig, delay: Duration) -> (Arc<dyn MarketDataConnector>, Counters) {
    let counters = Counters::default();
    let mut inner = Counting::new(&counters);
    inner.delay = delay;
    let raw: Arc<dyn MarketDataConnector> = Arc::new(inner);
    (ConnectorBuilder::new(raw).with_cache(cfg).build(), counters)
}

fn t(s: &str) -> Ticker {
    Ticker::parse(s).unwrap()
}

#[tokio::test]
async fn second_info_call_hits_cache() {
    let (c, n) = wrapped(&CacheConfig::default());
    let p = c.as_info_provider().unwrap();
    let a = p.info(&t("INFY.NS")).await.unwrap();
    let b = p.info(&t("INFY.NS")).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(n.info.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_tickers_are_cached_independently() {
    let (c, n) = wrapped(&CacheConfig::default());
    let p = c.as_financials_provider().unwrap();
    for _ in 0..3 {
        p.quarterly_financials(&t("INFY.NS")).await.unwrap();
        p.quarterly_financials(&t("TCS.NS")).await.unwrap();
    }
    assert_eq!(n.financials.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn history_key_includes_range() {
    let (c, n) = wrapped(&CacheConfig::default());
    let p = c.as_history_provider().unwrap();
    let year = p.history(&t("INFY.NS"), HistoryRange::Y1).await.unwrap();
    let month = p.history(&t("INFY.NS"), HistoryRange::M1).await.unwrap();
    let _ = p.history(&t("INFY.NS"), HistoryRange::Y1).await.unwrap();
    assert_ne!(year.len(), month.len());
    assert_eq!(n.history.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn zero_ttl_disables_one_capability() {
    let mut cfg = CacheConfig::default();
    cfg.per_capability_ttl_ms.insert("info".into(), 0);
    let (c, n) = wrapped(&cfg);
    let info = c.as_info_provider().unwrap();
    let fin = c.as_financials_provider().unwrap();
    for _ in 0..2 {
        info.info(&t("INFY.NS")).await.unwrap();
        fin.quarterly_financials(&t("INFY.NS")).await.unwrap();
    }
    assert_eq!(n.info.load(Ordering::SeqCst), 2);
    assert_eq!(n.financials.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn entries_expire_after_ttl() {
    let mut cfg = CacheConfig::default();
    cfg.per_capability_ttl_ms.insert("info".into(), 50);
    let (c, n) = wrapped(&cfg);
    let p = c.as_info_provider().unwrap();
    p.info(&t("INFY.NS")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    p.info(&t("INFY.NS")).await.unwrap();
    assert_eq!(n.info.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn errors_are_not_cached() {
    let (c, n) = wrapped(&CacheConfig::default());
    let p = c.as_info_provider().unwrap();
    assert!(p.info(&t("NOPE.NS")).await.is_err());
    assert!(p.info(&t("NOPE.NS")).await.is_err());
    assert_eq!(n.info.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn concurrent_misses_share_one_inner_call() {
    let (c, n) = wrapped_slow(&CacheConfig::default(), Duration::from_millis(50));
    let p = c.as_info_provider().unwrap();
    let ticker = t("INFY.NS");
    let (a, b) = tokio::join!(p.info(&ticker), p.info(&ticker));
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(n.info.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_failures_are_shared_but_not_cached() {
    let (c, n) = wrapped_slow(&CacheConfig::default(), Duration::from_millis(50));
    let p = c.as_info_provider().unwrap();
    let ticker = t("NOPE.NS");
    let (a, b) = tokio::join!(p.info(&ticker), p.info(&ticker));
    assert!(a.is_err());
    assert_eq!(a, b);
    assert_eq!(n.info.load(Ordering::SeqCst), 1);
    assert!(p.info(&ticker).await.is_err());
    assert_eq!(n.info.load(Ordering::SeqCst), 2);
}
