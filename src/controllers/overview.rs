// src/controllers/overview.rs
use crate::api::MarketApi;
use crate::domain::errors::AppResult;
use crate::domain::models::{MarketSnapshotRow, MarketStats};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Whole-market snapshot with derived rankings.
///
/// The snapshot is fetched once; every derived view is recomputed from it on
/// read, so they can never disagree with each other.
#[derive(Clone)]
pub struct MarketOverview {
    api: Arc<dyn MarketApi>,
    snapshot: Arc<RwLock<Vec<MarketSnapshotRow>>>,
    loading: Arc<RwLock<bool>>,
}

impl MarketOverview {
    pub fn new(api: Arc<dyn MarketApi>) -> Self {
        Self {
            api,
            snapshot: Arc::new(RwLock::new(Vec::new())),
            loading: Arc::new(RwLock::new(true)),
        }
    }

    /// Fetch one summary row per listed security. Failures are logged and
    /// leave the snapshot empty.
    pub async fn load(&self) -> AppResult<()> {
        let outcome = match self.api.market_overview().await {
            Ok(rows) => {
                log::debug!("market overview loaded: {} rows", rows.len());
                *self.snapshot.write().await = rows;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to fetch market data: {}", e);
                Err(e.into())
            }
        };
        *self.loading.write().await = false;
        outcome
    }

    pub async fn get_snapshot(&self) -> Vec<MarketSnapshotRow> {
        self.snapshot.read().await.clone()
    }

    pub async fn get_stats(&self) -> MarketStats {
        market_stats(&self.snapshot.read().await)
    }

    pub async fn get_top_gainers(&self) -> Vec<MarketSnapshotRow> {
        top_gainers(&self.snapshot.read().await)
    }

    pub async fn get_top_losers(&self) -> Vec<MarketSnapshotRow> {
        top_losers(&self.snapshot.read().await)
    }

    pub async fn get_volume_leaders(&self) -> Vec<MarketSnapshotRow> {
        volume_leaders(&self.snapshot.read().await)
    }

    /// Distinguishes "not yet loaded" from "loaded an empty market".
    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }
}

/// Aggregate counters over a snapshot. Zero-change rows count on neither
/// side.
pub fn market_stats(rows: &[MarketSnapshotRow]) -> MarketStats {
    MarketStats {
        total_turnover: rows.iter().map(|row| row.total_turnover).sum(),
        total_volume: rows.iter().map(|row| row.total_volume).sum(),
        gainers: rows
            .iter()
            .filter(|row| row.price_change > Decimal::ZERO)
            .count(),
        losers: rows
            .iter()
            .filter(|row| row.price_change < Decimal::ZERO)
            .count(),
    }
}

/// Positive movers, strongest first, capped at five. Snapshot order breaks
/// ties.
pub fn top_gainers(rows: &[MarketSnapshotRow]) -> Vec<MarketSnapshotRow> {
    let mut gainers: Vec<MarketSnapshotRow> = rows
        .iter()
        .filter(|row| row.price_change > Decimal::ZERO)
        .cloned()
        .collect();
    gainers.sort_by(|a, b| b.price_change.cmp(&a.price_change));
    gainers.truncate(5);
    gainers
}

/// Negative movers, steepest first, capped at five.
pub fn top_losers(rows: &[MarketSnapshotRow]) -> Vec<MarketSnapshotRow> {
    let mut losers: Vec<MarketSnapshotRow> = rows
        .iter()
        .filter(|row| row.price_change < Decimal::ZERO)
        .cloned()
        .collect();
    losers.sort_by(|a, b| a.price_change.cmp(&b.price_change));
    losers.truncate(5);
    losers
}

/// Every row ranked by traded volume, capped at ten.
pub fn volume_leaders(rows: &[MarketSnapshotRow]) -> Vec<MarketSnapshotRow> {
    let mut leaders = rows.to_vec();
    leaders.sort_by(|a, b| b.total_volume.cmp(&a.total_volume));
    leaders.truncate(10);
    leaders
}
