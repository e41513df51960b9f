// src/controllers/technical.rs
use crate::api::MarketApi;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::models::{AnalysisResult, AnalysisRow, Period, Timeframe};
use crate::notify::Notifier;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Technical indicator table for one symbol.
///
/// One request returns rows for all three periods; switching the active tab
/// or the timeframe is purely local.
#[derive(Clone)]
pub struct TechnicalAnalysis {
    api: Arc<dyn MarketApi>,
    notifier: Notifier,
    timeframe: Arc<RwLock<Timeframe>>,
    active_tab: Arc<RwLock<Period>>,
    result: Arc<RwLock<Option<AnalysisResult>>>,
    loading: Arc<RwLock<bool>>,
}

impl TechnicalAnalysis {
    pub fn new(api: Arc<dyn MarketApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            timeframe: Arc::new(RwLock::new(Timeframe::default())),
            active_tab: Arc::new(RwLock::new(Period::default())),
            result: Arc::new(RwLock::new(None)),
            loading: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn get_timeframe(&self) -> Timeframe {
        *self.timeframe.read().await
    }

    /// Takes effect on the next `analyze`; never refetches by itself.
    pub async fn set_timeframe(&self, timeframe: Timeframe) {
        *self.timeframe.write().await = timeframe;
    }

    pub async fn get_active_tab(&self) -> Period {
        *self.active_tab.read().await
    }

    pub async fn set_active_tab(&self, period: Period) {
        *self.active_tab.write().await = period;
    }

    pub async fn get_result(&self) -> Option<AnalysisResult> {
        self.result.read().await.clone()
    }

    /// Rows of the active period tab, empty until a result arrives.
    pub async fn active_rows(&self) -> Vec<AnalysisRow> {
        let period = *self.active_tab.read().await;
        match &*self.result.read().await {
            Some(result) => result.rows(period).to_vec(),
            None => Vec::new(),
        }
    }

    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }

    /// Run the analysis for `symbol` at the current timeframe. The result is
    /// replaced wholesale on success and retained on failure.
    pub async fn analyze(&self, symbol: &str) -> AppResult<()> {
        if symbol.is_empty() {
            self.notifier.error("Select a symbol");
            return Err(AppError::Validation("no symbol selected".to_string()));
        }

        let timeframe = *self.timeframe.read().await;
        *self.loading.write().await = true;
        let outcome = match self.api.technical_analysis(symbol, timeframe).await {
            Ok(result) => {
                log::debug!("technical analysis ready for {} over {}", symbol, timeframe);
                *self.result.write().await = Some(result);
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Analysis failed");
                log::error!("Analysis error for {}: {}", symbol, e);
                Err(e.into())
            }
        };
        *self.loading.write().await = false;
        outcome
    }
}
