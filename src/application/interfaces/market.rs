use crate::error::AppError;
use crate::presentation::candle::HistoryResponse;
use crate::presentation::quote::QuotesResponse;
use crate::presentation::security::SearchResponse;
use async_trait::async_trait;

/// Interface for the market service.
///
/// The three operations carry deliberately different failure contracts:
/// quotes drops failed tickers from the result set without surfacing an
/// error, while history and search fold the failure into their payload
/// and therefore never fail at the type level.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Fetches snapshot quotes for the given tickers, in input order.
    ///
    /// A ticker whose upstream fetch fails or that has no market data is
    /// omitted from the result; the remaining tickers are still served.
    async fn get_current_quotes(&self, tickers: &[String]) -> Result<QuotesResponse, AppError>;

    /// Fetches daily candles for a ticker over the last `days` days.
    ///
    /// An upstream failure yields an empty candle list with the message in
    /// the payload's `error` field.
    async fn get_history(&self, ticker: &str, days: i64) -> HistoryResponse;

    /// Searches the security directory, returning only common and
    /// preferred shares, capped at 20 matches.
    ///
    /// An upstream failure yields an empty result list with the message in
    /// the payload's `error` field.
    async fn search_securities(&self, query: &str) -> SearchResponse;
}
