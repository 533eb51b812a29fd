use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{Error, Result};

const BASE_URL: &str = "https://newsapi.org/v2";

/// How many headlines one fetch returns at most.
const MAX_HEADLINES: usize = 5;

/// One news headline attached to an analysis prompt.
#[derive(Debug, Clone, Serialize)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

/// REST client for a newsapi.org-style headline feed.
///
/// An optional collaborator: it is only constructed when a key is
/// configured, and a failed fetch never blocks an analysis.
pub struct NewsClient {
    api_key: String,
    http: Client,
}

impl NewsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: Client::builder()
                .use_rustls_tls()
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Fetch recent headlines matching `query`, most recent first.
    pub async fn headlines(&self, query: &str) -> Result<Vec<Headline>> {
        debug!(query, "Fetching headlines");
        let page_size = MAX_HEADLINES.to_string();
        let resp = self
            .http
            .get(format!("{BASE_URL}/everything"))
            .query(&[
                ("q", query),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::MarketData(format!("HTTP {status}: {body}")));
        }

        let parsed: EverythingResponse =
            serde_json::from_str(&body).map_err(|e| Error::MarketData(e.to_string()))?;

        Ok(parsed
            .articles
            .into_iter()
            .map(|a| Headline {
                title: a.title,
                source: a.source.name,
                published_at: a.published_at,
            })
            .collect())
    }
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: String,
    source: ArticleSource,
    published_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ArticleSource {
    name: String,
}
