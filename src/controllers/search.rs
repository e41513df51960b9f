// src/controllers/search.rs
use crate::api::MarketApi;
use crate::domain::models::SearchHit;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Case-insensitive substring search over the symbol directory.
///
/// Results are fully derived from the current query; clearing the query
/// clears them without touching the network.
#[derive(Clone)]
pub struct SymbolSearch {
    api: Arc<dyn MarketApi>,
    query: Arc<RwLock<String>>,
    results: Arc<RwLock<Vec<SearchHit>>>,
    show_results: Arc<RwLock<bool>>,
}

impl SymbolSearch {
    pub fn new(api: Arc<dyn MarketApi>) -> Self {
        Self {
            api,
            query: Arc::new(RwLock::new(String::new())),
            results: Arc::new(RwLock::new(Vec::new())),
            show_results: Arc::new(RwLock::new(false)),
        }
    }

    /// Update the query and refresh results from the directory. An empty
    /// query hides and clears the results instead. Fetch failures are
    /// logged and leave the previous results standing.
    pub async fn set_query(&self, query: &str) {
        *self.query.write().await = query.to_string();

        if query.is_empty() {
            *self.results.write().await = Vec::new();
            *self.show_results.write().await = false;
            return;
        }

        match self.api.symbols().await {
            Ok(symbols) => {
                let needle = query.to_lowercase();
                let hits: Vec<SearchHit> = symbols
                    .into_iter()
                    .filter(|symbol| symbol.to_lowercase().contains(&needle))
                    .map(|symbol| SearchHit { symbol })
                    .collect();
                log::debug!("search '{}' matched {} symbols", query, hits.len());
                *self.results.write().await = hits;
                *self.show_results.write().await = true;
            }
            Err(e) => {
                log::error!("Search failed: {}", e);
            }
        }
    }

    pub async fn get_query(&self) -> String {
        self.query.read().await.clone()
    }

    pub async fn get_results(&self) -> Vec<SearchHit> {
        self.results.read().await.clone()
    }

    pub async fn is_showing_results(&self) -> bool {
        *self.show_results.read().await
    }
}
