//! Axum route handlers for the link generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

const MISSING_QUERY: &str = "Missing query parameter";

#[derive(Debug, Serialize)]
pub struct GenerateLinkResponse {
    pub apollo_url: String,
    pub status: &'static str,
}

/// POST /api/generate-link
///
/// Body: `{"query": "<natural-language search>"}`. Returns the filtered search URL.
/// An empty query string is accepted and yields the unfiltered base URL.
pub async fn handle_generate_link(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateLinkResponse>, AppError> {
    let Json(body) = payload.map_err(|_| AppError::Validation(MISSING_QUERY.to_string()))?;

    let query = body
        .get("query")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation(MISSING_QUERY.to_string()))?;

    info!("Processing query: {query}");

    let apollo_url = state.generator.generate_filter_url(query).await;

    Ok(Json(GenerateLinkResponse {
        apollo_url,
        status: "success",
    }))
}
