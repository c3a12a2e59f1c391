/// Module containing the HTTP client for the ISS API
pub mod http_client;

pub use http_client::*;
