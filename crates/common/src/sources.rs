use async_trait::async_trait;

use crate::{Candle, Result};

/// Abstraction over the candle feed.
///
/// `TwelveDataClient` in `crates/feed` implements this against the hosted
/// API; tests substitute in-memory stubs. Implementations return series
/// newest first.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch up to `count` candles for `pair` at `interval`, newest first.
    async fn candles(&self, pair: &str, interval: &str, count: usize) -> Result<Vec<Candle>>;
}

/// Abstraction over the remote language model.
///
/// `OpenRouterClient` in `crates/advisor` implements this. Clients are
/// constructed once and injected explicitly; nothing reads keys from
/// ambient state.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt and return the raw reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
