// src/api/rest.rs
use crate::api::client::MarketApi;
use crate::domain::errors::{ApiError, ApiResult, AppError, AppResult};
use crate::domain::models::{
    AnalysisResult, DailyRecord, LatestNews, LoginCredentials, MarketSentiment,
    MarketSnapshotRow, Registration, SentimentSummary, StockSummary, Timeframe,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// HTTP implementation of [`MarketApi`]. One attempt per call; the service
/// reports failures as non-2xx statuses with a `{"detail": ...}` body.
#[derive(Debug, Clone)]
pub struct RestMarketApi {
    base_url: String,
    client: Client,
}

impl RestMarketApi {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = Self::normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Http)?;

        log::info!("market api client ready: base_url={}", base_url);
        Ok(Self { base_url, client })
    }

    fn normalize_base_url(raw: &str) -> AppResult<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(AppError::Config(format!(
                "base url must start with http:// or https://, got '{}'",
                trimmed
            )));
        }
        Ok(trimmed.to_string())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: Self::error_detail(&body),
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn ack(response: Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(ApiError::Status {
            status: status.as_u16(),
            message: Self::error_detail(&body),
        })
    }

    /// Pull the human-readable message out of a `{"detail": ...}` error body,
    /// falling back to the raw body.
    fn error_detail(body: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait]
impl MarketApi for RestMarketApi {
    async fn symbols(&self) -> ApiResult<Vec<String>> {
        self.get_json("/stocks/symbols").await
    }

    async fn daily_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<DailyRecord>> {
        let url = self.url(&format!("/stocks/data/{}", symbol));
        log::debug!("GET {} window {}..{}", url, start, end);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("start_date", start.format(DATE_FORMAT).to_string()),
                ("end_date", end.format(DATE_FORMAT).to_string()),
            ])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn market_overview(&self) -> ApiResult<Vec<MarketSnapshotRow>> {
        self.get_json("/stocks/market-overview").await
    }

    async fn popular_stocks(&self) -> ApiResult<Vec<StockSummary>> {
        self.get_json("/stocks/popular-stocks").await
    }

    async fn wishlist(&self) -> ApiResult<Vec<StockSummary>> {
        self.get_json("/stocks/wishlist").await
    }

    async fn add_to_wishlist(&self, symbol: &str) -> ApiResult<()> {
        let url = self.url(&format!("/stocks/wishlist/{}", symbol));
        log::debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        Self::ack(response).await
    }

    async fn remove_from_wishlist(&self, symbol: &str) -> ApiResult<()> {
        let url = self.url(&format!("/stocks/wishlist/{}", symbol));
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::ack(response).await
    }

    async fn technical_analysis(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> ApiResult<AnalysisResult> {
        let url = self.url(&format!("/analysis/technical/{}", symbol));
        log::debug!("GET {} timeframe={}", url, timeframe);
        let response = self
            .client
            .get(&url)
            .query(&[("timeframe", timeframe.as_str())])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn latest_news(&self, symbol: &str, limit: usize) -> ApiResult<LatestNews> {
        let url = self.url(&format!("/fundamental/news/{}/latest", symbol));
        log::debug!("GET {} limit={}", url, limit);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn sentiment(&self, symbol: &str) -> ApiResult<SentimentSummary> {
        self.get_json(&format!("/fundamental/news/{}/sentiment", symbol))
            .await
    }

    async fn market_sentiment(&self) -> ApiResult<MarketSentiment> {
        self.get_json("/fundamental/market/sentiment").await
    }

    async fn login(&self, credentials: &LoginCredentials) -> ApiResult<()> {
        let url = self.url("/auth/login");
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(credentials).send().await?;
        Self::ack(response).await
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let url = self.url("/auth/register");
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(registration).send().await?;
        Self::ack(response).await
    }
}
