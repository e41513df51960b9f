// src/domain/models.rs
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market Data Structures
///
/// One trading day for a single symbol, as served by
/// `GET /stocks/data/{symbol}`. Windows are ordered by date ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub last_trade_price: Decimal,
    pub max_price: Decimal,
    pub min_price: Decimal,
    pub change_percentage: Decimal,
    pub volume: u64,
    pub avg_price: Decimal,
    /// Turnover in the exchange's BEST trading system.
    pub turnover_best: Decimal,
    pub total_turnover: Decimal,
}

/// One symbol's row in the full-market snapshot
/// (`GET /stocks/market-overview`). Rows are replaced wholesale on refresh,
/// never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshotRow {
    pub symbol: String,
    pub current_price: Decimal,
    pub start_price: Decimal,
    /// Percentage change from start to current price over the snapshot window.
    pub price_change: Decimal,
    pub total_volume: u64,
    pub total_turnover: Decimal,
    pub last_trade_date: NaiveDate,
}

/// Scalar aggregates reduced from one market snapshot. Never stored
/// independently; always a pure function of the snapshot rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub total_turnover: Decimal,
    pub total_volume: u64,
    pub gainers: usize,
    pub losers: usize,
}

/// Compact card row served by the popular-stocks and wishlist endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub symbol: String,
    pub company_name: String,
    pub price: Decimal,
    pub change_percentage: Decimal,
}

/// A single row of symbol-directory search output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub symbol: String,
}

/// Technical Analysis
///
/// Quick-select lookback for a technical analysis request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Granularity of one analysis table. Each result payload carries all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combined indicator vote, also used for sentiment recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of an indicator table. The period a row belongs to is carried by
/// which `AnalysisResult` table holds it, so indicator fields need no period
/// suffix. Indicators the service could not compute for a row arrive null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub date: NaiveDate,
    pub close: Decimal,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub stoch_k: Option<f64>,
    #[serde(default)]
    pub stoch_d: Option<f64>,
    #[serde(default)]
    pub williams_r: Option<f64>,
    #[serde(default)]
    pub cci: Option<f64>,
    #[serde(default)]
    pub mfi: Option<f64>,
    #[serde(default)]
    pub sma: Option<f64>,
    #[serde(default)]
    pub ema: Option<f64>,
    #[serde(default)]
    pub wma: Option<f64>,
    #[serde(default)]
    pub tema: Option<f64>,
    #[serde(default)]
    pub wema: Option<f64>,
    #[serde(default)]
    pub signal: Option<Signal>,
}

/// Full technical analysis payload: one independently-sized table per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    #[serde(rename = "timeframe_selected", default)]
    pub timeframe: Timeframe,
    pub daily: Vec<AnalysisRow>,
    pub weekly: Vec<AnalysisRow>,
    pub monthly: Vec<AnalysisRow>,
}

impl AnalysisResult {
    /// Rows for the given period.
    pub fn rows(&self, period: Period) -> &[AnalysisRow] {
        match period {
            Period::Daily => &self.daily,
            Period::Weekly => &self.weekly,
            Period::Monthly => &self.monthly,
        }
    }
}

/// News & Sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedText {
    pub original: String,
    pub translated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Publication date exactly as the news feed reported it.
    pub date: String,
    pub title: TranslatedText,
    pub content: TranslatedText,
    pub url: String,
}

/// Per-symbol sentiment aggregate (`GET /fundamental/news/{symbol}/sentiment`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub symbol: String,
    pub company_name: String,
    pub average_sentiment: f64,
    pub recommendation: Signal,
    pub article_count: usize,
}

/// Most recent articles for a symbol (`GET /fundamental/news/{symbol}/latest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestNews {
    pub symbol: String,
    pub company_name: String,
    pub latest_news: Vec<NewsArticle>,
    #[serde(default)]
    pub overall_sentiment: Option<Signal>,
}

/// News and sentiment for one symbol, published only after both halves of
/// the concurrent fetch have resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyNews {
    pub news: LatestNews,
    pub sentiment: SentimentSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCounts {
    pub buy: usize,
    pub hold: usize,
    pub sell: usize,
}

/// Market-wide sentiment aggregate, refreshed independently of any symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    pub market_sentiment: f64,
    pub recommendations: RecommendationCounts,
    pub total_companies_analyzed: usize,
    pub analysis_date: NaiveDate,
}

/// Authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
}
