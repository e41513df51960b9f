// src/main.rs
use market_pulse::api::{MarketApi, RestMarketApi};
use market_pulse::config::Config;
use market_pulse::controllers::{
    AuthFlow, FundamentalAnalysis, MarketOverview, SeriesWindow, SymbolDirectory,
    SymbolSearch, TechnicalAnalysis, Watchlist,
};
use market_pulse::domain::errors::AppResult;
use market_pulse::domain::models::{LoginCredentials, Period, Timeframe};
use market_pulse::notify::{NotificationLevel, Notifier};

use std::env;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting market_pulse v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using market service at {}", config.api.base_url);

    let api: Arc<dyn MarketApi> =
        Arc::new(RestMarketApi::new(&config.api.base_url, config.api.timeout())?);
    let notifier = Notifier::new();

    // Render notifications the way the dashboard shows toasts
    let mut notifications = notifier.subscribe();
    tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            match notification.level {
                NotificationLevel::Success => log::info!("toast: {}", notification.message),
                NotificationLevel::Error => log::warn!("toast: {}", notification.message),
            }
        }
    });

    // Symbol directory drives everything else
    let directory = SymbolDirectory::new(api.clone(), notifier.clone());
    directory.load().await?;
    let symbols = directory.get_symbols().await;
    log::info!("{} symbols listed", symbols.len());

    let symbol = match symbols.first() {
        Some(symbol) => symbol.clone(),
        None => {
            log::warn!("No symbols listed; nothing to walk through");
            return Ok(());
        }
    };
    directory.set_selected_symbol(&symbol).await;
    log::info!("Selected {}", symbol);

    // Whole-market snapshot and rankings
    let overview = MarketOverview::new(api.clone());
    overview.load().await?;
    let stats = overview.get_stats().await;
    log::info!(
        "Market: {} gainers, {} losers, total volume {}, total turnover {}",
        stats.gainers,
        stats.losers,
        stats.total_volume,
        stats.total_turnover
    );
    for row in overview.get_top_gainers().await {
        log::info!("  top gainer {}: {}%", row.symbol, row.price_change);
    }
    for row in overview.get_volume_leaders().await.iter().take(3) {
        log::info!("  volume leader {}: {}", row.symbol, row.total_volume);
    }

    // One month of price history for the selected symbol
    let series = SeriesWindow::new(api.clone(), notifier.clone());
    series.select_preset_window(30).await;
    series.fetch(&symbol).await?;
    let records = series.get_series().await;
    log::info!("{}: {} daily records over the last month", symbol, records.len());
    if let Some(latest) = records.last() {
        log::info!(
            "  latest close {} on {} ({}%)",
            latest.last_trade_price,
            latest.date,
            latest.change_percentage
        );
    }

    // Popular stocks and the wishlist round trip
    let watchlist = Watchlist::new(api.clone(), notifier.clone());
    watchlist.load().await?;
    log::info!(
        "{} popular stocks, {} wishlisted",
        watchlist.get_popular_stocks().await.len(),
        watchlist.get_wishlist_stocks().await.len()
    );
    watchlist.toggle(&symbol).await?;
    log::info!(
        "{} in wishlist after toggle: {}",
        symbol,
        watchlist.is_in_wishlist(&symbol).await
    );
    watchlist.toggle(&symbol).await?;

    // Substring search over the directory
    let search = SymbolSearch::new(api.clone());
    let prefix: String = symbol.chars().take(2).collect();
    search.set_query(&prefix).await;
    log::info!(
        "Search '{}' matched {} symbols",
        prefix,
        search.get_results().await.len()
    );

    // Technical indicators, weekly tab
    let technical = TechnicalAnalysis::new(api.clone(), notifier.clone());
    technical.set_timeframe(Timeframe::SixMonths).await;
    technical.analyze(&symbol).await?;
    technical.set_active_tab(Period::Weekly).await;
    let rows = technical.active_rows().await;
    log::info!("{}: {} weekly indicator rows", symbol, rows.len());
    if let Some(row) = rows.last() {
        log::info!(
            "  {} close {}, rsi {:?}, signal {:?}",
            row.date,
            row.close,
            row.rsi,
            row.signal
        );
    }

    // Market sentiment plus company news
    let fundamental =
        FundamentalAnalysis::with_news_limit(api.clone(), notifier.clone(), config.api.news_limit);
    fundamental.load().await?;
    if let Some(market) = fundamental.get_market_sentiment().await {
        log::info!(
            "Market sentiment {:.3} across {} companies ({} buy / {} hold / {} sell)",
            market.market_sentiment,
            market.total_companies_analyzed,
            market.recommendations.buy,
            market.recommendations.hold,
            market.recommendations.sell
        );
    }
    fundamental.analyze(&symbol).await?;
    if let Some(company) = fundamental.get_company_news().await {
        log::info!(
            "{}: {} articles, recommendation {}",
            symbol,
            company.news.latest_news.len(),
            company.sentiment.recommendation
        );
        for article in &company.news.latest_news {
            log::info!("  {} - {}", article.date, article.title.translated);
        }
    }

    // Optional sign-in when demo credentials are provided
    if let (Ok(email), Ok(password)) = (env::var("DEMO_EMAIL"), env::var("DEMO_PASSWORD")) {
        let auth = AuthFlow::new(api.clone(), notifier.clone());
        let credentials = LoginCredentials { email, password };
        if auth.login(&credentials).await.is_ok() {
            log::info!("Signed in as {}", credentials.email);
        }
    }

    // Give the toast task a moment to drain
    sleep(Duration::from_millis(100)).await;
    log::info!("Walkthrough complete");
    Ok(())
}
