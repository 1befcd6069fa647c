//! tickerdesk-core
//!
//! Core types, traits, and utilities shared across the tickerdesk workspace.
//!
//! - `types`: tickers, company info, candles, financial series, article links.
//! - `connector`: the `MarketDataConnector` trait, its capability traits, and
//!   the `HeadlineSource` trait implemented by the news finder.
//! - `metrics`: magnitude formatting and QoQ/YoY percent changes.
//! - `middleware`: the trait implemented by connector wrappers.
#![warn(missing_docs)]

/// Connector capability traits and the primary `MarketDataConnector` interface.
pub mod connector;
/// Pure display and percent-change helpers.
pub mod metrics;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
pub mod types;

pub use connector::{
    FinancialsProvider, HeadlineSource, HistoryProvider, InfoProvider, MarketDataConnector,
};
pub use metrics::{format_magnitude, format_percent, percent_change};
pub use middleware::Middleware;
pub use tickerdesk_types::*;
pub use types::*;
