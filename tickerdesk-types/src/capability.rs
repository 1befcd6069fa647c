use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for caching, errors, and telemetry.
///
/// These map one-to-one with the connector provider traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Company info mapping (name, sector, website, market cap...).
    Info,
    /// Daily OHLCV price history.
    History,
    /// Quarterly financial statement rows.
    Financials,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors/config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::History => "history",
            Self::Financials => "financials",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
