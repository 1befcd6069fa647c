use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tickerdesk workspace.
///
/// Caller input problems (`InvalidQuery`, `InvalidArg`) fail loudly, transport
/// problems surface as `Network`, and connector failures are tagged with the
/// connector that produced them. Data incompleteness is never an error: it is
/// represented as `None` or an empty collection by the operations themselves.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TickerdeskError {
    /// The news search query was rejected before any request was made.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The HTTP fetch failed, timed out, or returned a non-success status.
    #[error("network error: {0}")]
    Network(String),

    /// Invalid input argument other than a news query (e.g. an empty ticker).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability label describing what was requested (e.g. "history").
        capability: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "info for INFY.NS".
        what: String,
    },

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A connector call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "info", "history", "financials").
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl TickerdeskError {
    /// Helper: build an `InvalidQuery` error.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Helper: build a `Network` error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Returns true if the error stems from caller input and should be shown as such.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery(_) | Self::InvalidArg(_) | Self::NotFound { .. }
        )
    }

    /// Returns true for conditions a dashboard renders as "no data" rather than a failure.
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}
