//! # Gateway Prelude
//!
//! Convenient single import for the types and traits most code needs.
//!
//! ## Usage
//!
//! ```rust
//! use moex_gateway::prelude::*;
//!
//! let config = Config::new();
//! assert!(!config.default_tickers.is_empty());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Gateway configuration
pub use crate::config::{Config, IssApiConfig, ServerConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the gateway
pub use crate::error::AppError;

// ============================================================================
// TRANSPORT
// ============================================================================

/// Typed GET access to the ISS API
pub use crate::transport::http_client::{IssHttpClient, IssHttpClientImpl};

// ============================================================================
// SERVICES
// ============================================================================

/// Market service interface
pub use crate::application::interfaces::MarketService;

/// Market service implementation
pub use crate::application::services::MarketServiceImpl;

// ============================================================================
// DATA MODELS
// ============================================================================

/// Tabular JSON convention
pub use crate::presentation::table::{IssRecord, IssTable};

/// Upstream envelopes
pub use crate::presentation::envelope::{HistoryPage, QuoteSnapshot, SecurityDirectory};

/// Simplified API shapes
pub use crate::presentation::candle::{Candle, HistoryResponse};
pub use crate::presentation::quote::{Quote, QuotesResponse};
pub use crate::presentation::security::{SearchResponse, SecuritySearchResult};

// ============================================================================
// INBOUND API
// ============================================================================

/// Gateway request handler
pub use crate::api::handle_request;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
