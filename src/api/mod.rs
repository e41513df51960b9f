// src/api/mod.rs
pub mod client;
#[cfg(test)]
pub mod mock;
pub mod rest;

pub use client::MarketApi;
pub use rest::RestMarketApi;
