// src/api/mock.rs
//! Canned in-memory service used by controller tests. Records every call so
//! tests can assert which endpoints were hit and with what arguments.

use crate::api::client::MarketApi;
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{
    AnalysisResult, DailyRecord, LatestNews, LoginCredentials, MarketSentiment,
    MarketSnapshotRow, Registration, SentimentSummary, StockSummary, Timeframe,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Symbols,
    DailySeries,
    MarketOverview,
    PopularStocks,
    Wishlist,
    AddToWishlist,
    RemoveFromWishlist,
    TechnicalAnalysis,
    LatestNews,
    Sentiment,
    MarketSentiment,
    Login,
    Register,
}

#[derive(Default)]
pub struct MockApi {
    symbols: Vec<String>,
    series: Vec<DailyRecord>,
    overview: Vec<MarketSnapshotRow>,
    popular: Vec<StockSummary>,
    wishlist: Mutex<Vec<StockSummary>>,
    analysis: Option<AnalysisResult>,
    news: Option<LatestNews>,
    sentiment: Option<SentimentSummary>,
    market_sentiment: Option<MarketSentiment>,
    failing: Mutex<HashSet<Endpoint>>,
    calls: Mutex<Vec<Endpoint>>,
    pub last_series_request: Mutex<Option<(String, NaiveDate, NaiveDate)>>,
    pub last_analysis_request: Mutex<Option<(String, Timeframe)>>,
    pub last_news_request: Mutex<Option<(String, usize)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(mut self, symbols: &[&str]) -> Self {
        self.symbols = symbols.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_series(mut self, series: Vec<DailyRecord>) -> Self {
        self.series = series;
        self
    }

    pub fn with_overview(mut self, rows: Vec<MarketSnapshotRow>) -> Self {
        self.overview = rows;
        self
    }

    pub fn with_popular(mut self, rows: Vec<StockSummary>) -> Self {
        self.popular = rows;
        self
    }

    pub fn with_wishlist(self, rows: Vec<StockSummary>) -> Self {
        *self.wishlist.lock().unwrap() = rows;
        self
    }

    pub fn with_analysis(mut self, result: AnalysisResult) -> Self {
        self.analysis = Some(result);
        self
    }

    pub fn with_news(mut self, news: LatestNews) -> Self {
        self.news = Some(news);
        self
    }

    pub fn with_sentiment(mut self, sentiment: SentimentSummary) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn with_market_sentiment(mut self, sentiment: MarketSentiment) -> Self {
        self.market_sentiment = Some(sentiment);
        self
    }

    /// Make one endpoint answer with a 500 from now on.
    pub fn failing(self, endpoint: Endpoint) -> Self {
        self.failing.lock().unwrap().insert(endpoint);
        self
    }

    /// Flip an endpoint into the failing state after construction.
    pub fn set_failing(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|recorded| **recorded == endpoint)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, endpoint: Endpoint) -> ApiResult<()> {
        self.calls.lock().unwrap().push(endpoint);
        if self.failing.lock().unwrap().contains(&endpoint) {
            return Err(ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn missing<T>() -> ApiResult<T> {
        Err(ApiError::Status {
            status: 404,
            message: "Not Found".to_string(),
        })
    }
}

#[async_trait]
impl MarketApi for MockApi {
    async fn symbols(&self) -> ApiResult<Vec<String>> {
        self.record(Endpoint::Symbols)?;
        Ok(self.symbols.clone())
    }

    async fn daily_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<DailyRecord>> {
        self.record(Endpoint::DailySeries)?;
        *self.last_series_request.lock().unwrap() = Some((symbol.to_string(), start, end));
        Ok(self.series.clone())
    }

    async fn market_overview(&self) -> ApiResult<Vec<MarketSnapshotRow>> {
        self.record(Endpoint::MarketOverview)?;
        Ok(self.overview.clone())
    }

    async fn popular_stocks(&self) -> ApiResult<Vec<StockSummary>> {
        self.record(Endpoint::PopularStocks)?;
        Ok(self.popular.clone())
    }

    async fn wishlist(&self) -> ApiResult<Vec<StockSummary>> {
        self.record(Endpoint::Wishlist)?;
        Ok(self.wishlist.lock().unwrap().clone())
    }

    async fn add_to_wishlist(&self, symbol: &str) -> ApiResult<()> {
        self.record(Endpoint::AddToWishlist)?;
        let mut wishlist = self.wishlist.lock().unwrap();
        if !wishlist.iter().any(|row| row.symbol == symbol) {
            let row = self
                .popular
                .iter()
                .find(|row| row.symbol == symbol)
                .cloned()
                .unwrap_or_else(|| StockSummary {
                    symbol: symbol.to_string(),
                    company_name: symbol.to_string(),
                    price: Decimal::ZERO,
                    change_percentage: Decimal::ZERO,
                });
            wishlist.push(row);
        }
        Ok(())
    }

    async fn remove_from_wishlist(&self, symbol: &str) -> ApiResult<()> {
        self.record(Endpoint::RemoveFromWishlist)?;
        self.wishlist
            .lock()
            .unwrap()
            .retain(|row| row.symbol != symbol);
        Ok(())
    }

    async fn technical_analysis(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> ApiResult<AnalysisResult> {
        self.record(Endpoint::TechnicalAnalysis)?;
        *self.last_analysis_request.lock().unwrap() = Some((symbol.to_string(), timeframe));
        match &self.analysis {
            Some(result) => Ok(result.clone()),
            None => Self::missing(),
        }
    }

    async fn latest_news(&self, symbol: &str, limit: usize) -> ApiResult<LatestNews> {
        self.record(Endpoint::LatestNews)?;
        *self.last_news_request.lock().unwrap() = Some((symbol.to_string(), limit));
        match &self.news {
            Some(news) => Ok(news.clone()),
            None => Self::missing(),
        }
    }

    async fn sentiment(&self, _symbol: &str) -> ApiResult<SentimentSummary> {
        self.record(Endpoint::Sentiment)?;
        match &self.sentiment {
            Some(sentiment) => Ok(sentiment.clone()),
            None => Self::missing(),
        }
    }

    async fn market_sentiment(&self) -> ApiResult<MarketSentiment> {
        self.record(Endpoint::MarketSentiment)?;
        match &self.market_sentiment {
            Some(sentiment) => Ok(sentiment.clone()),
            None => Self::missing(),
        }
    }

    async fn login(&self, _credentials: &LoginCredentials) -> ApiResult<()> {
        self.record(Endpoint::Login)
    }

    async fn register(&self, _registration: &Registration) -> ApiResult<()> {
        self.record(Endpoint::Register)
    }
}
