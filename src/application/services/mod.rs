/// Module containing the market service implementation
pub mod market_service;

pub use market_service::*;
