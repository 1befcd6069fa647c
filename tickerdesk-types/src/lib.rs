//! Tickerdesk-specific error taxonomy, capability labels, and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;

pub use capability::Capability;
pub use config::{CacheConfig, DeskConfig, HistoryRange, LocaleParams, NewsConfig};
pub use error::TickerdeskError;
