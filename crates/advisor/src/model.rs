use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use common::{Error, ModelClient, Result};

const BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Chat-completion client for the OpenRouter gateway.
pub struct OpenRouterClient {
    api_key: String,
    model: String,
    http: Client,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: Client::builder()
                .use_rustls_tls()
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl ModelClient for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        debug!(model = %self.model, "Requesting model completion");
        let resp = self
            .http
            .post(format!("{BASE_URL}/chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::Model(format!("HTTP {status}: {text}")));
        }

        let completion: ChatCompletion =
            serde_json::from_str(&text).map_err(|e| Error::Model(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Model("completion carried no choices".to_string()))
    }
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_payload_yields_first_choice_content() {
        let body = r#"{
            "id": "gen-1",
            "choices": [
                { "message": { "role": "assistant", "content": "Bias agrees with structure." } }
            ]
        }"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        let content = completion.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content, "Bias agrees with structure.");
    }

    #[test]
    fn empty_choices_deserialize_cleanly() {
        let completion: ChatCompletion = serde_json::from_str(r#"{ "id": "gen-2" }"#).unwrap();
        assert!(completion.choices.is_empty());
    }
}
