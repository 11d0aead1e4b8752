//! The chat round trip
//!
//! One synchronous request/response cycle per submit: guard input, match a
//! verse, record the keyword, build the prompt, generate, clean, append to
//! the session, persist, reply. No retries, no intermediate states.

use std::str::FromStr;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::types::{ChatRequest, ChatResponse};
use crate::prompt::build_prompt;
use crate::response::clean_response;
use crate::session::Role;
use crate::state::AppState;
use crate::tone::ToneProfile;

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    // Empty input never reaches generation.
    let message = req.message.trim();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message must not be empty".into()));
    }

    let tone = match &req.tone {
        Some(name) => ToneProfile::from_str(name)
            .map_err(|_| (StatusCode::BAD_REQUEST, format!("unknown tone '{}'", name)))?,
        None => ToneProfile::Gentle,
    };

    let session_id = req
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // Verse lookup is load-bearing: a database failure surfaces to the client.
    let verse = state
        .verses
        .find_match(message)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("verse lookup failed: {}", e)))?;

    // The analytics write is a side channel: failure is logged, never fatal.
    if let Some(entry) = &verse {
        debug!(keyword = %entry.keyword, "verse matched");
        if let Err(e) = state.analytics.record_keyword(&entry.keyword).await {
            warn!(keyword = %entry.keyword, "failed to record keyword search: {}", e);
        }
    }

    let history = state.sessions.recent(&session_id, state.history_turn_cap).await;
    let prompt = build_prompt(tone, verse.as_ref(), &history, message, state.history_turn_cap);

    let raw = state
        .generator
        .generate(&prompt, &state.sampling)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, format!("generation failed: {}", e)))?;

    let reply = clean_response(&raw, &prompt, state.sentence_limit);

    state.sessions.append_exchange(&session_id, message, &reply).await;

    // History persistence is write-only bookkeeping; treat like analytics.
    for (role, text) in [(Role::Student, message), (Role::Teacher, reply.as_str())] {
        if let Err(e) = state.history.save_turn(&session_id, role, text).await {
            warn!(session_id = %session_id, "failed to persist chat history: {}", e);
        }
    }

    info!(
        session_id = %session_id,
        tone = %tone,
        matched = verse.is_some(),
        "chat round trip complete"
    );

    Ok(Json(ChatResponse {
        session_id,
        tone: tone.to_string(),
        reply,
        verse,
    }))
}
