// Common utilities for integration tests

use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use moex_gateway::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

/// Builds a gateway config pointing at the given (mock) ISS base URL
pub fn test_config(base_url: &str) -> Arc<Config> {
    Arc::new(Config {
        iss: IssApiConfig {
            base_url: base_url.to_string(),
            timeout: 5,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        default_tickers: "SBER,GAZP,LKOH,YNDX".to_string(),
        default_history_ticker: "YNDX".to_string(),
        default_history_days: 30,
    })
}

/// Creates a market service wired to the given (mock) ISS base URL
pub fn test_service(
    base_url: &str,
) -> (Arc<Config>, Arc<MarketServiceImpl<IssHttpClientImpl>>) {
    setup_logger();
    let config = test_config(base_url);
    let client = Arc::new(IssHttpClientImpl::new(config.clone()).expect("client should build"));
    let service = Arc::new(MarketServiceImpl::new(config.clone(), client));
    (config, service)
}

/// ISS path of the quote snapshot endpoint for a ticker
pub fn snapshot_path(ticker: &str) -> String {
    format!("/engines/stock/markets/shares/boards/TQBR/securities/{ticker}.json")
}

/// ISS path of the history endpoint for a ticker
pub fn history_path(ticker: &str) -> String {
    format!("/history/engines/stock/markets/shares/boards/TQBR/securities/{ticker}.json")
}

/// Canned quote snapshot body in the ISS tabular convention.
///
/// Price-related cells are taken as raw JSON values so tests can exercise
/// null and zero readings.
pub fn quote_snapshot_body(
    secid: &str,
    last: Value,
    currentvalue: Value,
    prevprice: Value,
    shortname: Value,
) -> String {
    json!({
        "marketdata": {
            "columns": [
                "SECID", "BOARDID", "LAST", "CURRENTVALUE", "PREVPRICE",
                "OPEN", "LOW", "HIGH", "VOLTODAY"
            ],
            "data": [[
                secid, "TQBR", last, currentvalue, prevprice,
                101.5, 100.2, 106.0, 1_000_000
            ]]
        },
        "securities": {
            "columns": ["SECID", "SHORTNAME", "LOTSIZE"],
            "data": [[secid, shortname, 10]]
        }
    })
    .to_string()
}

/// Builds an inbound request with an empty body
pub fn request(method: &str, uri: &str) -> Request<Empty<Bytes>> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Empty::new())
        .expect("request should build")
}

/// Collects a handler response body and parses it as JSON
pub async fn body_json(response: Response<Full<Bytes>>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
