use serde::{Deserialize, Serialize};

/// Top-level instrument config file (TOML).
///
/// Example `config/instruments.toml`:
/// ```toml
/// [[instrument]]
/// pair = "XAU/USD"
/// interval = "15min"
/// candles = 50
/// news_query = "gold price"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstrumentFileConfig {
    #[serde(rename = "instrument")]
    pub instruments: Vec<InstrumentConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstrumentConfig {
    /// Instrument identifier, e.g. "XAU/USD".
    pub pair: String,
    /// Candle interval requested from the feed.
    #[serde(default = "default_interval")]
    pub interval: String,
    /// How many candles one analysis fetches.
    #[serde(default = "default_candles")]
    pub candles: usize,
    /// Query term for the news feed. Defaults to the pair itself.
    pub news_query: Option<String>,
}

fn default_interval() -> String {
    "15min".to_string()
}

fn default_candles() -> usize {
    50
}

impl InstrumentFileConfig {
    /// Load from a TOML file. Exits process on error.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
            panic!("Failed to read instrument config at '{path}': {e}")
        });
        toml::from_str(&content).unwrap_or_else(|e| {
            panic!("Failed to parse instrument config at '{path}': {e}")
        })
    }

    /// Look up a configured instrument by pair.
    pub fn find(&self, pair: &str) -> Option<&InstrumentConfig> {
        self.instruments.iter().find(|i| i.pair == pair)
    }
}
