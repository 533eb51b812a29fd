use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use advisor::{Advisor, InstrumentFileConfig, OpenRouterClient};
use common::{Config, MarketDataSource, ModelClient};
use feed::{NewsClient, TwelveDataClient};

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!(default_pair = %cfg.default_pair, "GoldSight starting");

    let instruments = InstrumentFileConfig::load(&cfg.instrument_config_path);
    info!(count = instruments.instruments.len(), "Instruments loaded");

    // ── Clients (injected; optional collaborators stay None when unset) ──────
    let feed: Arc<dyn MarketDataSource> =
        Arc::new(TwelveDataClient::new(cfg.twelvedata_api_key.clone()));

    let news = cfg
        .news_api_key
        .as_ref()
        .map(|key| Arc::new(NewsClient::new(key.clone())));

    let model: Option<Arc<dyn ModelClient>> = match &cfg.openrouter_api_key {
        Some(key) => {
            info!(model = %cfg.openrouter_model, "Remote model configured");
            Some(Arc::new(OpenRouterClient::new(
                key.clone(),
                cfg.openrouter_model.clone(),
            )))
        }
        None => {
            info!("No model key set; serving local analysis only");
            None
        }
    };

    let advisor = Arc::new(Advisor::new(model));

    // ── API ───────────────────────────────────────────────────────────────────
    let state = api::AppState {
        feed,
        news,
        advisor,
        instruments: Arc::new(instruments),
        api_token: cfg.api_token.clone(),
        default_pair: cfg.default_pair.clone(),
    };

    api::serve(state, cfg.port).await;
}
