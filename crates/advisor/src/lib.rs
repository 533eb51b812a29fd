//! Advisory layer over the local analyzer.
//!
//! The deterministic analysis always runs and is always returned; a
//! configured remote model can only add commentary on top of it. Any
//! remote failure degrades to the local result alone.

pub mod config;
pub mod model;
pub mod prompt;
pub mod reply;

pub use config::{InstrumentConfig, InstrumentFileConfig};
pub use model::OpenRouterClient;

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use common::{Candle, MarketAnalysis, ModelClient};
use feed::Headline;

/// The merged local-plus-remote product served to callers.
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub analysis: MarketAnalysis,
    /// Model commentary. Absent in local-only mode or after a remote
    /// failure.
    pub commentary: Option<String>,
}

/// Orchestrates the analyzer and the optional remote model.
pub struct Advisor {
    model: Option<Arc<dyn ModelClient>>,
}

impl Advisor {
    pub fn new(model: Option<Arc<dyn ModelClient>>) -> Self {
        Self { model }
    }

    /// Whether a remote model is configured.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Analyze a newest-first candle series and, when a model is
    /// configured, attach its commentary.
    ///
    /// The structured analysis never depends on the remote call: a model
    /// error is logged and the advice carries the local result alone.
    pub async fn advise(&self, pair: &str, candles: &[Candle], headlines: &[Headline]) -> Advice {
        let analysis = analysis::analyze(pair, candles);

        let commentary = match &self.model {
            Some(model) => {
                let prompt = prompt::build(pair, &analysis, headlines);
                match model.complete(&prompt).await {
                    Ok(text) => reply::extract_commentary(&text),
                    Err(e) => {
                        warn!(pair, error = %e, "Model call failed; serving local analysis only");
                        None
                    }
                }
            }
            None => None,
        };

        Advice { analysis, commentary }
    }
}
