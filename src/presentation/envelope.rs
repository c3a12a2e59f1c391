//! Top-level envelopes of the ISS responses we consume.
//!
//! ISS responds with a JSON object carrying one table per logical section;
//! sections we do not read are ignored and a missing section deserializes
//! as an empty table.

use crate::presentation::table::IssTable;
use serde::{Deserialize, Serialize};

/// Envelope of the stock-board quote snapshot endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Intraday market data for the security
    #[serde(default)]
    pub marketdata: IssTable,
    /// Static reference data (short name, lot size, ...)
    #[serde(default)]
    pub securities: IssTable,
}

/// Envelope of the history endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryPage {
    /// One row per trading session within the requested window
    #[serde(default)]
    pub history: IssTable,
}

/// Envelope of the security directory search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityDirectory {
    /// One row per security matching the search query
    #[serde(default)]
    pub securities: IssTable,
}
