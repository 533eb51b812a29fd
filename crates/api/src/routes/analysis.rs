use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use advisor::Advice;

use crate::AppState;

pub fn analysis_router() -> Router<AppState> {
    Router::new().route("/api/analysis", get(get_analysis))
}

#[derive(Deserialize)]
struct AnalysisQuery {
    pair: Option<String>,
}

/// Fetch candles (and headlines when configured), run the advisor, and
/// return the merged advice.
async fn get_analysis(
    State(state): State<AppState>,
    Query(q): Query<AnalysisQuery>,
) -> Result<Json<Advice>, (StatusCode, Json<Value>)> {
    let pair = q.pair.unwrap_or_else(|| state.default_pair.clone());

    let Some(instrument) = state.instruments.find(&pair) else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown pair '{pair}'") })),
        ));
    };

    let candles = state
        .feed
        .candles(&instrument.pair, &instrument.interval, instrument.candles)
        .await
        .map_err(|e| {
            warn!(pair = %instrument.pair, error = %e, "Candle fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    // The analyzer requires a non-empty series; enforce the precondition here.
    if candles.is_empty() {
        return Err((
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": "upstream returned an empty candle series" })),
        ));
    }

    let headlines = match &state.news {
        Some(news) => {
            let query = instrument.news_query.as_deref().unwrap_or(&instrument.pair);
            match news.headlines(query).await {
                Ok(headlines) => headlines,
                Err(e) => {
                    warn!(pair = %instrument.pair, error = %e, "Headline fetch failed; continuing without");
                    Vec::new()
                }
            }
        }
        None => Vec::new(),
    };

    let advice = state
        .advisor
        .advise(&instrument.pair, &candles, &headlines)
        .await;

    Ok(Json(advice))
}
