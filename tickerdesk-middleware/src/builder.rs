//! Builder for composing connectors with middleware layers.
//!
//! Layers form an onion around the raw connector. They are stored
//! outermost-first (the last added layer is the outermost) and applied in
//! reverse during [`ConnectorBuilder::build`]:
//!
//! ```text
//! builder.with_cache(..).layer(custom)
//!
//! Storage: [Custom, Cache]
//! Result:   Custom(Cache(Raw))
//! ```

use std::sync::Arc;

use tickerdesk_core::connector::MarketDataConnector;
use tickerdesk_core::{CacheConfig, Middleware};

use crate::cache::{CacheMiddleware, CachingConnector};

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn MarketDataConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn MarketDataConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the caching layer.
    ///
    /// If caching is already configured it is replaced in place, keeping its
    /// position in the stack.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        let layer: Box<dyn Middleware> = Box::new(CacheMiddleware::new(cfg.clone()));
        match self
            .layers
            .iter()
            .position(|m| m.name() == CachingConnector::LAYER_NAME)
        {
            Some(idx) => self.layers[idx] = layer,
            None => self.layers.insert(0, layer),
        }
        self
    }

    /// Remove caching if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers
            .retain(|m| m.name() != CachingConnector::LAYER_NAME);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Layer names with their configuration, outermost first, ending with the raw connector.
    #[must_use]
    pub fn describe(&self) -> Vec<(&'static str, serde_json::Value)> {
        let mut out: Vec<_> = self
            .layers
            .iter()
            .map(|m| (m.name(), m.config_json()))
            .collect();
        out.push((
            "RawConnector",
            serde_json::json!({ "name": self.raw.name() }),
        ));
        out
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn MarketDataConnector> {
        let mut acc: Arc<dyn MarketDataConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "tickerdesk::middleware", connector = acc.name(), "connector stack built");
        acc
    }
}
