//! # moex-gateway
//!
//! A stateless HTTP gateway that reshapes data from the Moscow Exchange
//! ISS API into a simplified JSON API with three operations:
//!
//! - **quotes**: snapshot quotes for a set of tickers
//! - **history**: daily candles for a ticker over a date window
//! - **search**: security directory search, shares only
//!
//! ISS publishes every logical table as an ordered `columns` name list plus
//! positional `data` rows; the gateway zips the two back into field-keyed
//! records ([`presentation::table::IssTable`]) and derives the simplified
//! shapes from there. Nothing is cached or persisted: every inbound
//! request maps to one or more fresh outbound ISS calls.
//!
//! ## Usage
//!
//! ```ignore
//! use moex_gateway::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::new());
//! let client = Arc::new(IssHttpClientImpl::new(config.clone())?);
//! let service = Arc::new(MarketServiceImpl::new(config.clone(), client));
//! let quotes = service.get_current_quotes(&config.default_ticker_list()).await?;
//! ```

/// Inbound HTTP surface: dispatch, response builders, query parsing
pub mod api;
/// Application layer: service interfaces and implementations
pub mod application;
/// Environment-driven configuration
pub mod config;
/// Crate-wide named defaults
pub mod constants;
/// Error types
pub mod error;
/// Curated re-exports of the most commonly used items
pub mod prelude;
/// Data models: ISS tables, envelopes, and the simplified API shapes
pub mod presentation;
/// HTTP transport to the ISS API
pub mod transport;
/// Shared utilities: env helpers, price arithmetic, logging setup
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
