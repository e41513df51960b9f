// src/controllers/fundamental.rs
use crate::api::MarketApi;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::models::{CompanyNews, MarketSentiment};
use crate::notify::Notifier;
use futures_util::future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Articles requested per company analysis unless configured otherwise.
pub const DEFAULT_NEWS_LIMIT: usize = 5;

/// News and sentiment view: a market-wide aggregate plus an on-demand
/// per-company combination of latest news and sentiment.
#[derive(Clone)]
pub struct FundamentalAnalysis {
    api: Arc<dyn MarketApi>,
    notifier: Notifier,
    news_limit: usize,
    company_news: Arc<RwLock<Option<CompanyNews>>>,
    market_sentiment: Arc<RwLock<Option<MarketSentiment>>>,
    loading: Arc<RwLock<bool>>,
}

impl FundamentalAnalysis {
    pub fn new(api: Arc<dyn MarketApi>, notifier: Notifier) -> Self {
        Self::with_news_limit(api, notifier, DEFAULT_NEWS_LIMIT)
    }

    pub fn with_news_limit(
        api: Arc<dyn MarketApi>,
        notifier: Notifier,
        news_limit: usize,
    ) -> Self {
        Self {
            api,
            notifier,
            news_limit,
            company_news: Arc::new(RwLock::new(None)),
            market_sentiment: Arc::new(RwLock::new(None)),
            loading: Arc::new(RwLock::new(false)),
        }
    }

    /// Fetch the market-wide sentiment aggregate. Independent of any symbol;
    /// failures are logged only.
    pub async fn load(&self) -> AppResult<()> {
        match self.api.market_sentiment().await {
            Ok(sentiment) => {
                log::debug!(
                    "market sentiment loaded: {} companies as of {}",
                    sentiment.total_companies_analyzed,
                    sentiment.analysis_date
                );
                *self.market_sentiment.write().await = Some(sentiment);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to fetch market sentiment: {}", e);
                Err(e.into())
            }
        }
    }

    pub async fn get_market_sentiment(&self) -> Option<MarketSentiment> {
        self.market_sentiment.read().await.clone()
    }

    pub async fn get_company_news(&self) -> Option<CompanyNews> {
        self.company_news.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }

    /// Fetch latest news and sentiment for `symbol` together. The combined
    /// result is published only when both halves arrive; either failure
    /// aborts the combination with no partial update.
    pub async fn analyze(&self, symbol: &str) -> AppResult<()> {
        if symbol.is_empty() {
            self.notifier.error("Please select a symbol");
            return Err(AppError::Validation("no symbol selected".to_string()));
        }

        *self.loading.write().await = true;
        let result = future::try_join(
            self.api.latest_news(symbol, self.news_limit),
            self.api.sentiment(symbol),
        )
        .await;
        let outcome = match result {
            Ok((news, sentiment)) => {
                log::debug!(
                    "fundamental analysis ready for {}: {} articles",
                    symbol,
                    news.latest_news.len()
                );
                *self.company_news.write().await = Some(CompanyNews { news, sentiment });
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Failed to fetch analysis");
                log::error!("Analysis error for {}: {}", symbol, e);
                Err(e.into())
            }
        };
        *self.loading.write().await = false;
        outcome
    }
}
