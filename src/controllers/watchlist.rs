// src/controllers/watchlist.rs
use crate::api::MarketApi;
use crate::domain::errors::AppResult;
use crate::domain::models::StockSummary;
use crate::notify::Notifier;
use futures_util::future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Popular stocks plus the user's wishlist.
///
/// Membership lives on the server; after every successful mutation both
/// lists are refetched rather than patched locally.
#[derive(Clone)]
pub struct Watchlist {
    api: Arc<dyn MarketApi>,
    notifier: Notifier,
    popular: Arc<RwLock<Vec<StockSummary>>>,
    wishlist: Arc<RwLock<Vec<StockSummary>>>,
    loading: Arc<RwLock<bool>>,
}

impl Watchlist {
    pub fn new(api: Arc<dyn MarketApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            popular: Arc::new(RwLock::new(Vec::new())),
            wishlist: Arc::new(RwLock::new(Vec::new())),
            loading: Arc::new(RwLock::new(true)),
        }
    }

    /// Fetch the popular list and the wishlist together. Both must resolve;
    /// one failure leaves both lists as they were.
    pub async fn load(&self) -> AppResult<()> {
        let result =
            future::try_join(self.api.popular_stocks(), self.api.wishlist()).await;
        let outcome = match result {
            Ok((popular, wishlist)) => {
                log::debug!(
                    "stock lists loaded: {} popular, {} wishlisted",
                    popular.len(),
                    wishlist.len()
                );
                *self.popular.write().await = popular;
                *self.wishlist.write().await = wishlist;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to fetch stocks: {}", e);
                self.notifier.error("Failed to load stocks");
                Err(e.into())
            }
        };
        *self.loading.write().await = false;
        outcome
    }

    pub async fn get_popular_stocks(&self) -> Vec<StockSummary> {
        self.popular.read().await.clone()
    }

    pub async fn get_wishlist_stocks(&self) -> Vec<StockSummary> {
        self.wishlist.read().await.clone()
    }

    /// Membership test over the last-fetched wishlist. Never fetches.
    pub async fn is_in_wishlist(&self, symbol: &str) -> bool {
        self.wishlist
            .read()
            .await
            .iter()
            .any(|row| row.symbol == symbol)
    }

    pub async fn add(&self, symbol: &str) -> AppResult<()> {
        match self.api.add_to_wishlist(symbol).await {
            Ok(()) => {
                self.notifier.success("Added to wishlist");
                // Resync failures notify on their own.
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to add {} to wishlist: {}", symbol, e);
                self.notifier.error("Failed to add to wishlist");
                Err(e.into())
            }
        }
    }

    pub async fn remove(&self, symbol: &str) -> AppResult<()> {
        match self.api.remove_from_wishlist(symbol).await {
            Ok(()) => {
                self.notifier.success("Removed from wishlist");
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to remove {} from wishlist: {}", symbol, e);
                self.notifier.error("Failed to remove from wishlist");
                Err(e.into())
            }
        }
    }

    /// Remove when present, add when absent. Exactly one mutation per call.
    pub async fn toggle(&self, symbol: &str) -> AppResult<()> {
        if self.is_in_wishlist(symbol).await {
            self.remove(symbol).await
        } else {
            self.add(symbol).await
        }
    }

    /// True from construction until the first `load` settles.
    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }
}
