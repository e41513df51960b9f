// src/api/client.rs
use crate::domain::errors::ApiResult;
use crate::domain::models::{
    AnalysisResult, DailyRecord, LatestNews, LoginCredentials, MarketSentiment,
    MarketSnapshotRow, Registration, SentimentSummary, StockSummary, Timeframe,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Remote market-data service interface
#[async_trait]
pub trait MarketApi: Send + Sync {
    /// List every listed symbol
    async fn symbols(&self) -> ApiResult<Vec<String>>;

    /// Daily trading records for a symbol over a closed date window
    async fn daily_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<DailyRecord>>;

    /// One summary row per listed security
    async fn market_overview(&self) -> ApiResult<Vec<MarketSnapshotRow>>;

    /// Server-curated list of popular stocks
    async fn popular_stocks(&self) -> ApiResult<Vec<StockSummary>>;

    /// The user's wishlist
    async fn wishlist(&self) -> ApiResult<Vec<StockSummary>>;

    /// Add a symbol to the wishlist
    async fn add_to_wishlist(&self, symbol: &str) -> ApiResult<()>;

    /// Remove a symbol from the wishlist
    async fn remove_from_wishlist(&self, symbol: &str) -> ApiResult<()>;

    /// Technical indicator table for a symbol, all periods in one payload
    async fn technical_analysis(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> ApiResult<AnalysisResult>;

    /// Latest translated news articles for a symbol
    async fn latest_news(&self, symbol: &str, limit: usize) -> ApiResult<LatestNews>;

    /// Aggregated news sentiment for a symbol
    async fn sentiment(&self, symbol: &str) -> ApiResult<SentimentSummary>;

    /// Market-wide sentiment aggregate
    async fn market_sentiment(&self) -> ApiResult<MarketSentiment>;

    /// Authenticate an existing account
    async fn login(&self, credentials: &LoginCredentials) -> ApiResult<()>;

    /// Create a new account
    async fn register(&self, registration: &Registration) -> ApiResult<()>;
}
