use serde::{Deserialize, Serialize};

/// Snapshot quote for a single security on the TQBR board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Trading symbol the quote was requested for
    pub ticker: String,
    /// Display name, falling back to the ticker when ISS carries no short name
    pub name: String,
    /// Last trade price, `CURRENTVALUE` when `LAST` is absent
    pub price: Option<f64>,
    /// Absolute change against the previous session's price
    pub change: f64,
    /// Relative change against the previous session's price, in percent
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
    /// Traded volume for the current session
    pub volume: f64,
    /// Session high
    pub high: Option<f64>,
    /// Session low
    pub low: Option<f64>,
    /// Session open
    pub open: Option<f64>,
}

/// Result set of a quotes request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotesResponse {
    /// One entry per ticker that resolved, in request order
    pub quotes: Vec<Quote>,
}
