// src/controllers/symbols.rs
use crate::api::MarketApi;
use crate::domain::errors::AppResult;
use crate::notify::Notifier;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Directory of listed symbols plus the user's current selection.
///
/// The directory is fetched once per screen; the selection changes freely
/// without touching the network.
#[derive(Clone)]
pub struct SymbolDirectory {
    api: Arc<dyn MarketApi>,
    notifier: Notifier,
    symbols: Arc<RwLock<Vec<String>>>,
    selected: Arc<RwLock<Option<String>>>,
    loading: Arc<RwLock<bool>>,
}

impl SymbolDirectory {
    pub fn new(api: Arc<dyn MarketApi>, notifier: Notifier) -> Self {
        Self::new_with_initial(api, notifier, None)
    }

    /// Seed the selection up front, e.g. from a route parameter.
    pub fn new_with_initial(
        api: Arc<dyn MarketApi>,
        notifier: Notifier,
        initial: Option<&str>,
    ) -> Self {
        Self {
            api,
            notifier,
            symbols: Arc::new(RwLock::new(Vec::new())),
            selected: Arc::new(RwLock::new(initial.map(str::to_string))),
            loading: Arc::new(RwLock::new(true)),
        }
    }

    /// Fetch the full symbol directory.
    pub async fn load(&self) -> AppResult<()> {
        let outcome = match self.api.symbols().await {
            Ok(list) => {
                log::debug!("symbol directory loaded: {} symbols", list.len());
                *self.symbols.write().await = list;
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Failed to fetch stock symbols");
                log::error!("symbol directory fetch failed: {}", e);
                Err(e.into())
            }
        };
        *self.loading.write().await = false;
        outcome
    }

    pub async fn get_symbols(&self) -> Vec<String> {
        self.symbols.read().await.clone()
    }

    pub async fn get_selected(&self) -> Option<String> {
        self.selected.read().await.clone()
    }

    pub async fn set_selected_symbol(&self, symbol: &str) {
        *self.selected.write().await = Some(symbol.to_string());
    }

    pub async fn clear_selection(&self) {
        *self.selected.write().await = None;
    }

    /// Externally driven selection (route parameter). Always wins over
    /// whatever the user picked.
    pub async fn adopt_external(&self, symbol: &str) {
        *self.selected.write().await = Some(symbol.to_string());
    }

    /// True from construction until the first `load` settles.
    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Endpoint, MockApi};
    use crate::notify::NotificationLevel;

    #[tokio::test]
    async fn load_fills_the_directory() {
        let api = Arc::new(MockApi::new().with_symbols(&["ALK", "KMB", "TEL"]));
        let directory = SymbolDirectory::new(api.clone(), Notifier::new());

        assert!(directory.is_loading().await);
        directory.load().await.unwrap();

        assert_eq!(directory.get_symbols().await, vec!["ALK", "KMB", "TEL"]);
        assert!(!directory.is_loading().await);
        assert_eq!(api.calls(Endpoint::Symbols), 1);
    }

    #[tokio::test]
    async fn load_failure_keeps_directory_empty_and_notifies() {
        let api = Arc::new(MockApi::new().failing(Endpoint::Symbols));
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let directory = SymbolDirectory::new(api, notifier);

        assert!(directory.load().await.is_err());

        assert!(directory.get_symbols().await.is_empty());
        assert!(!directory.is_loading().await);
        let toast = rx.recv().await.unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.message, "Failed to fetch stock symbols");
    }

    #[tokio::test]
    async fn selection_changes_without_requests() {
        let api = Arc::new(MockApi::new().with_symbols(&["ALK"]));
        let directory = SymbolDirectory::new(api.clone(), Notifier::new());

        directory.set_selected_symbol("ALK").await;
        assert_eq!(directory.get_selected().await.as_deref(), Some("ALK"));

        directory.clear_selection().await;
        assert_eq!(directory.get_selected().await, None);

        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn external_symbol_overrides_user_selection() {
        let api = Arc::new(MockApi::new());
        let directory =
            SymbolDirectory::new_with_initial(api, Notifier::new(), Some("KMB"));

        assert_eq!(directory.get_selected().await.as_deref(), Some("KMB"));

        directory.set_selected_symbol("ALK").await;
        directory.adopt_external("TEL").await;
        assert_eq!(directory.get_selected().await.as_deref(), Some("TEL"));
    }
}
