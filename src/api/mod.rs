//! Inbound HTTP surface of the gateway.
//!
//! The API is function-style: the request path is ignored and the `action`
//! query parameter selects the operation. CORS is wide open so browser
//! frontends can call the gateway directly.

mod query;
mod response;

use crate::application::interfaces::MarketService;
use crate::config::Config;
use crate::error::AppError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

pub use query::*;
pub use response::*;

/// Gateway request handler
///
/// Dispatches on method first (OPTIONS preflight, anything but GET
/// rejected), then on the `action` query parameter. An `AppError` escaping
/// an operation is converted into a 500 with the error message as the
/// body; operation-local failures never reach that boundary.
pub async fn handle_request<S, B>(
    req: Request<B>,
    service: Arc<S>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    S: MarketService,
{
    let method = req.method().clone();
    debug!("{} {}", method, req.uri());

    if method == Method::OPTIONS {
        return Ok(preflight());
    }

    if method != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let params = query::parse(req.uri().query().unwrap_or(""));
    let action = params.get("action").map_or("quotes", String::as_str);

    match action {
        "quotes" => {
            let tickers: Vec<String> = params
                .get("tickers")
                .map_or_else(|| config.default_tickers.clone(), String::clone)
                .split(',')
                .map(str::to_string)
                .collect();

            match service.get_current_quotes(&tickers).await {
                Ok(body) => json_response(StatusCode::OK, &body),
                Err(e) => internal_error(&e),
            }
        }
        "history" => {
            let ticker = params
                .get("ticker")
                .map_or(config.default_history_ticker.as_str(), String::as_str);

            let days = match params.get("days") {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(days) => days,
                    Err(_) => {
                        return internal_error(&AppError::InvalidInput(format!(
                            "days must be an integer, got '{raw}'"
                        )));
                    }
                },
                None => config.default_history_days,
            };

            json_response(StatusCode::OK, &service.get_history(ticker, days).await)
        }
        "search" => {
            let q = params.get("q").map_or("", String::as_str);
            json_response(StatusCode::OK, &service.search_securities(q).await)
        }
        _ => error_response(StatusCode::BAD_REQUEST, "Unknown action"),
    }
}
