/// Module containing the market service interface
pub mod market;

pub use market::*;
