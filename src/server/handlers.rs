//! HTTP handlers for status, tones, history, and analytics

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use super::types::{
    ClearRequest, ClearResponse, DailyCountsResponse, HistoryQuery, HistoryResponse,
    KeywordCountsResponse, ToneInfo, TonesResponse,
};
use crate::state::AppState;
use crate::tone::ToneProfile;

/// Health check and status endpoint
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    let verses_ready = state.verses.all().await.is_ok();
    Json(json!({
        "status": "ok",
        "generator": state.generator.name(),
        "database": verses_ready,
    }))
}

/// Tone profiles with their suggested-question presets
pub async fn tones_handler() -> Json<TonesResponse> {
    let tones = ToneProfile::ALL
        .into_iter()
        .map(|tone| ToneInfo {
            name: tone.to_string(),
            style_instruction: tone.style_instruction().to_string(),
            suggested_questions: tone
                .suggested_questions()
                .iter()
                .map(|q| q.to_string())
                .collect(),
        })
        .collect();

    Json(TonesResponse { tones })
}

/// A session's transcript, oldest first
pub async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let turns = state.sessions.transcript(&query.session_id).await;
    Json(HistoryResponse {
        session_id: query.session_id,
        turns,
    })
}

/// Clear a session's transcript
pub async fn clear_handler(
    State(state): State<AppState>,
    Json(req): Json<ClearRequest>,
) -> Json<ClearResponse> {
    let cleared = state.sessions.clear(&req.session_id).await;
    Json(ClearResponse {
        session_id: req.session_id,
        cleared,
    })
}

/// Keyword counts, descending by count
pub async fn keyword_counts_handler(
    State(state): State<AppState>,
) -> Result<Json<KeywordCountsResponse>, (StatusCode, String)> {
    let keywords = state
        .analytics
        .keyword_counts()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("analytics query failed: {}", e)))?;

    Ok(Json(KeywordCountsResponse { keywords }))
}

/// Daily counts, ascending by day
pub async fn daily_counts_handler(
    State(state): State<AppState>,
) -> Result<Json<DailyCountsResponse>, (StatusCode, String)> {
    let days = state
        .analytics
        .daily_counts()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("analytics query failed: {}", e)))?;

    Ok(Json(DailyCountsResponse { days }))
}
