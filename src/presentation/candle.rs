use serde::{Deserialize, Serialize};

/// One trading session's summary within a history window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Trade date of the session, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Session open
    pub open: Option<f64>,
    /// Session high
    pub high: Option<f64>,
    /// Session low
    pub low: Option<f64>,
    /// Session close
    pub close: Option<f64>,
    /// Traded volume for the session
    pub volume: f64,
}

/// Result of a history request.
///
/// An upstream failure is folded into the payload: the candle list comes
/// back empty and `error` carries the message, still as a 200 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Ticker the window was requested for, echoed verbatim
    pub ticker: String,
    /// Candles in upstream order, sessions without a close excluded
    pub history: Vec<Candle>,
    /// Failure message when the upstream fetch did not succeed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
