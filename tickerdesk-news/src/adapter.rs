use std::sync::Arc;

use async_trait::async_trait;
use tickerdesk_core::{NewsConfig, TickerdeskError};
use url::Url;

/// Page fetch abstraction (so we can inject canned pages in tests).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issue a single GET for `url` and return the response body.
    ///
    /// Implementations must not retry.
    async fn get(&self, url: &Url) -> Result<String, TickerdeskError>;
}

/// Real fetcher backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build a client with the configured timeout and user agent.
    ///
    /// # Errors
    /// Returns `Other` if the TLS backend or client cannot be initialized.
    pub fn new(cfg: &NewsConfig) -> Result<Self, TickerdeskError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|e| TickerdeskError::Other(e.to_string()))?;
        Ok(Self { client })
    }
}

fn map_reqwest_error(e: &reqwest::Error) -> TickerdeskError {
    if e.is_timeout() {
        TickerdeskError::network(format!("request timed out: {e}"))
    } else if let Some(status) = e.status() {
        TickerdeskError::network(format!("provider returned HTTP {status}"))
    } else {
        TickerdeskError::network(e.to_string())
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn get(&self, url: &Url) -> Result<String, TickerdeskError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| map_reqwest_error(&e))?
            .error_for_status()
            .map_err(|e| map_reqwest_error(&e))?;
        resp.text().await.map_err(|e| map_reqwest_error(&e))
    }
}

impl dyn PageFetcher {
    /// Build a `PageFetcher` from a closure (tests and offline fixtures).
    pub fn from_fn<F>(f: F) -> Arc<dyn PageFetcher>
    where
        F: Send + Sync + 'static + Fn(&Url) -> Result<String, TickerdeskError>,
    {
        struct FnFetcher<F>(F);

        #[async_trait]
        impl<F> PageFetcher for FnFetcher<F>
        where
            F: Send + Sync + 'static + Fn(&Url) -> Result<String, TickerdeskError>,
        {
            async fn get(&self, url: &Url) -> Result<String, TickerdeskError> {
                (self.0)(url)
            }
        }

        Arc::new(FnFetcher(f))
    }
}
