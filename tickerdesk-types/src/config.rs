//! Configuration types shared across the desk, the news finder, and middleware.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Capability;

/// Lookback window for price history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HistoryRange {
    /// One month.
    M1,
    /// Three months.
    M3,
    /// Six months.
    M6,
    /// One year.
    #[default]
    Y1,
    /// Five years.
    Y5,
    /// Everything the provider has.
    Max,
}

impl HistoryRange {
    /// Provider-style period label (`1mo`, `1y`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y5 => "5y",
            Self::Max => "max",
        }
    }

    /// Approximate calendar length in days; `None` for [`HistoryRange::Max`].
    #[must_use]
    pub const fn approx_days(self) -> Option<u32> {
        match self {
            Self::M1 => Some(30),
            Self::M3 => Some(91),
            Self::M6 => Some(182),
            Self::Y1 => Some(365),
            Self::Y5 => Some(5 * 365),
            Self::Max => None,
        }
    }
}

impl core::str::FromStr for HistoryRange {
    type Err = crate::TickerdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1mo" => Ok(Self::M1),
            "3mo" => Ok(Self::M3),
            "6mo" => Ok(Self::M6),
            "1y" => Ok(Self::Y1),
            "5y" => Ok(Self::Y5),
            "max" => Ok(Self::Max),
            other => Err(crate::TickerdeskError::InvalidArg(format!(
                "unknown history range '{other}'"
            ))),
        }
    }
}

/// Locale/region parameters appended to every news search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleParams {
    /// Interface language (`hl`).
    pub language: String,
    /// Region (`gl`).
    pub region: String,
    /// Edition identifier (`ceid`).
    pub edition: String,
}

impl Default for LocaleParams {
    fn default() -> Self {
        Self {
            language: "en-IN".to_string(),
            region: "IN".to_string(),
            edition: "IN:en".to_string(),
        }
    }
}

/// Configuration for the news finder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Provider origin; relative headline links are resolved against it.
    pub origin: String,
    /// Path of the HTML search page below the origin.
    pub search_path: String,
    /// Fixed locale/region parameters.
    pub locale: LocaleParams,
    /// User agent sent with the search request.
    pub user_agent: String,
    /// Timeout for the single search request.
    pub timeout: Duration,
    /// Cap used when a caller does not pass an explicit maximum.
    pub default_max_articles: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            origin: "https://news.google.com".to_string(),
            search_path: "/search".to_string(),
            locale: LocaleParams::default(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36".to_string(),
            timeout: Duration::from_secs(10),
            default_max_articles: 5,
        }
    }
}

/// Cache settings for the `(ticker, call kind)` caching middleware.
///
/// A TTL of zero disables caching for that capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL applied when no per-capability override exists.
    pub default_ttl_ms: u64,
    /// Maximum entries held per capability store.
    pub default_max_entries: u64,
    /// Per-capability TTL overrides keyed by [`Capability::as_str`].
    pub per_capability_ttl_ms: HashMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: 10 * 60 * 1000,
            default_max_entries: 256,
            per_capability_ttl_ms: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Effective TTL for a capability, or `None` when caching is disabled for it.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        let ms = self
            .per_capability_ttl_ms
            .get(cap.as_str())
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }
}

/// Global configuration for the `Desk` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// News lookback window in months (cutoff is 30 days per month).
    pub news_lookback_months: u32,
    /// Maximum headline links per news section.
    pub max_articles: usize,
    /// Range used for the price chart and the overview price change.
    pub history_range: HistoryRange,
    /// Timeout for each market-data connector call.
    pub provider_timeout: Duration,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            news_lookback_months: 6,
            max_articles: 5,
            history_range: HistoryRange::Y1,
            provider_timeout: Duration::from_secs(10),
        }
    }
}
