/// All configuration loaded from environment variables at startup.
/// Missing required variables cause an immediate panic with a clear message.
#[derive(Debug, Clone)]
pub struct Config {
    // Market data
    pub twelvedata_api_key: String,

    // Remote model. Unset key means the advisor runs in local-only mode.
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,

    // News headlines. Unset key means no headlines are fetched.
    pub news_api_key: Option<String>,

    // HTTP server
    pub api_token: String,
    pub port: u16,

    // Analysis defaults
    pub default_pair: String,
    pub instrument_config_path: String,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present. Panics on any missing required variable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        Config {
            twelvedata_api_key: required_env("TWELVEDATA_API_KEY"),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_model: optional_env("OPENROUTER_MODEL")
                .unwrap_or_else(|| "openai/gpt-4o-mini".to_string()),
            news_api_key: optional_env("NEWS_API_KEY"),
            api_token: required_env("API_TOKEN"),
            port: optional_env("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            default_pair: optional_env("DEFAULT_PAIR")
                .unwrap_or_else(|| "XAU/USD".to_string()),
            instrument_config_path: optional_env("INSTRUMENT_CONFIG_PATH")
                .unwrap_or_else(|| "config/instruments.toml".to_string()),
        }
    }
}

fn required_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        panic!("Required environment variable '{key}' is not set. Check your .env file.")
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
