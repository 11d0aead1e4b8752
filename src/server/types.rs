//! Server wire types
//!
//! Request/response bodies for the REST API.

use serde::{Deserialize, Serialize};

use crate::analytics::{DailyCount, KeywordCount};
use crate::session::Turn;
use crate::verse::VerseEntry;

/// Chat request from the front-end
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Omitted on the first message; the server mints one and returns it.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Tone name ("gentle", "direct", "academic", "biblical"); defaults to gentle.
    #[serde(default)]
    pub tone: Option<String>,
}

/// One completed chat round trip
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub tone: String,
    pub reply: String,
    /// The matched verse, when the lookup found one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse: Option<VerseEntry>,
}

/// One tone profile as presented to the front-end
#[derive(Debug, Serialize)]
pub struct ToneInfo {
    pub name: String,
    pub style_instruction: String,
    pub suggested_questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TonesResponse {
    pub tones: Vec<ToneInfo>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub turns: Vec<Turn>,
}

#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub session_id: String,
    /// Number of turns removed
    pub cleared: usize,
}

#[derive(Debug, Serialize)]
pub struct KeywordCountsResponse {
    pub keywords: Vec<KeywordCount>,
}

#[derive(Debug, Serialize)]
pub struct DailyCountsResponse {
    pub days: Vec<DailyCount>,
}
