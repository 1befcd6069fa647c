//! Connector wrappers layered between the desk and a raw market-data connector.
#![warn(missing_docs)]

/// Builder that composes a raw connector with middleware layers.
pub mod builder;
/// Per-(ticker, call kind) caching connector.
pub mod cache;

pub use builder::ConnectorBuilder;
pub use cache::{CacheMiddleware, CachingConnector};
