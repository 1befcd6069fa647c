//! tickerdesk assembles the tabs of a single-ticker equity dashboard.
//!
//! Overview
//! - Market data (company info, daily history, quarterly statements) comes from
//!   a [`MarketDataConnector`]; retrieval itself lives outside this crate.
//! - Headline links come from a [`HeadlineSource`], by default the
//!   [`NewsFinder`](tickerdesk_news::NewsFinder) scraper.
//! - Display values use the pure helpers from `tickerdesk_core::metrics`.
//!
//! Every market-data call is bounded by `DeskConfig::provider_timeout`. The
//! news sections of a snapshot run concurrently and never fail the snapshot;
//! their errors are kept next to the (empty) link list.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerdesk::{Desk, Ticker};
//!
//! let desk = Desk::builder()
//!     .with_connector(Arc::new(tickerdesk_mock::MockConnector::new()))
//!     .build()?;
//! let snap = desk.snapshot(&Ticker::parse("INFY.NS")?).await?;
//! println!("{} {}", snap.overview.name, snap.overview.market_cap);
//! ```
#![warn(missing_docs)]

mod core;
mod sections;
/// Dashboard tab view models.
pub mod tabs;

pub use crate::core::{Desk, DeskBuilder};
pub use tabs::{DashboardSnapshot, FinancialsTab, LineSummary, NewsSection, Overview};
pub use tickerdesk_core::{
    ArticleLink, CacheConfig, Candle, Capability, ChangeKind, ChangeMetric, CompanyInfo,
    DeskConfig, FinancialSeries, HeadlineSource, HistoryRange, MarketDataConnector, NewsConfig,
    QuarterlyFinancials, StatementRow, Ticker, TickerdeskError, format_magnitude,
    format_percent, percent_change,
};
