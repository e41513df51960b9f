// src/domain/mod.rs
pub mod errors;
pub mod models;

// Re-export common types for convenience
pub use errors::{ApiError, ApiResult, AppError, AppResult};
pub use models::{
    AnalysisResult, AnalysisRow, CompanyNews, DailyRecord, LatestNews, LoginCredentials,
    MarketSentiment, MarketSnapshotRow, MarketStats, NewsArticle, Period, RecommendationCounts,
    Registration, SearchHit, SentimentSummary, Signal, StockSummary, Timeframe, TranslatedText,
};
