// src/controllers/series.rs
use crate::api::MarketApi;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::models::DailyRecord;
use crate::notify::Notifier;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Date-windowed price history for one symbol.
///
/// Window bounds and the fetched series are independent: changing the window
/// never fetches, and a failed fetch keeps the previous series on screen.
#[derive(Clone)]
pub struct SeriesWindow {
    api: Arc<dyn MarketApi>,
    notifier: Notifier,
    start_date: Arc<RwLock<Option<NaiveDate>>>,
    end_date: Arc<RwLock<Option<NaiveDate>>>,
    series: Arc<RwLock<Vec<DailyRecord>>>,
    loading: Arc<RwLock<bool>>,
}

impl SeriesWindow {
    pub fn new(api: Arc<dyn MarketApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            start_date: Arc::new(RwLock::new(None)),
            end_date: Arc::new(RwLock::new(None)),
            series: Arc::new(RwLock::new(Vec::new())),
            loading: Arc::new(RwLock::new(false)),
        }
    }

    /// Pick a trailing window of `days` calendar days ending today (UTC).
    /// Stores the bounds only. Spans that would leave the calendar clamp
    /// to its floor.
    pub async fn select_preset_window(&self, days: i64) {
        let end = Utc::now().date_naive();
        let start = Duration::try_days(days)
            .and_then(|span| end.checked_sub_signed(span))
            .unwrap_or(NaiveDate::MIN);
        *self.start_date.write().await = Some(start);
        *self.end_date.write().await = Some(end);
    }

    pub async fn set_start_date(&self, date: NaiveDate) {
        *self.start_date.write().await = Some(date);
    }

    pub async fn set_end_date(&self, date: NaiveDate) {
        *self.end_date.write().await = Some(date);
    }

    pub async fn get_start_date(&self) -> Option<NaiveDate> {
        *self.start_date.read().await
    }

    pub async fn get_end_date(&self) -> Option<NaiveDate> {
        *self.end_date.read().await
    }

    pub async fn get_series(&self) -> Vec<DailyRecord> {
        self.series.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }

    /// Fetch the series for `symbol` over the current window.
    ///
    /// An empty symbol is a silent no-op. Unset window bounds notify and
    /// return without issuing a request.
    pub async fn fetch(&self, symbol: &str) -> AppResult<()> {
        if symbol.is_empty() {
            return Ok(());
        }

        let start = *self.start_date.read().await;
        let end = *self.end_date.read().await;
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                self.notifier.error("Select a date range");
                return Err(AppError::Validation("date window is not set".to_string()));
            }
        };

        *self.loading.write().await = true;
        let outcome = match self.api.daily_series(symbol, start, end).await {
            Ok(series) => {
                log::debug!(
                    "daily series loaded: {} records for {} ({}..{})",
                    series.len(),
                    symbol,
                    start,
                    end
                );
                *self.series.write().await = series;
                self.notifier.success("Data loaded successfully");
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Failed to fetch stock data");
                log::error!("daily series fetch failed for {}: {}", symbol, e);
                Err(e.into())
            }
        };
        *self.loading.write().await = false;
        outcome
    }
}
