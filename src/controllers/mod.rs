// src/controllers/mod.rs
pub mod auth;
pub mod fundamental;
pub mod overview;
pub mod search;
pub mod series;
pub mod symbols;
pub mod technical;
pub mod watchlist;

pub use auth::{AuthFlow, RegistrationForm};
pub use fundamental::{FundamentalAnalysis, DEFAULT_NEWS_LIMIT};
pub use overview::{market_stats, top_gainers, top_losers, volume_leaders, MarketOverview};
pub use search::SymbolSearch;
pub use series::SeriesWindow;
pub use symbols::SymbolDirectory;
pub use technical::TechnicalAnalysis;
pub use watchlist::Watchlist;
