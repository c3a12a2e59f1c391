// Response builders for the gateway API

use crate::error::AppError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;
use tracing::error;

/// Build a JSON response with CORS headers
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            error!("Failed to serialize response: {e}");
            return Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error")))));
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            error!("Failed to build response: {e}");
            Response::new(Full::new(Bytes::from("Error")))
        }))
}

/// Build a `{"error": message}` response with the given status
pub fn error_response(
    status: StatusCode,
    message: &str,
) -> Result<Response<Full<Bytes>>, Infallible> {
    json_response(status, &serde_json::json!({ "error": message }))
}

/// 500 response carrying the error's display message
pub fn internal_error(err: &AppError) -> Result<Response<Full<Bytes>>, Infallible> {
    error!("Unhandled operation error: {err}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}

/// CORS preflight response: 200, empty body, permissive headers
pub fn preflight() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
