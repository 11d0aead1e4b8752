// src/state.rs

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;

use crate::analytics::AnalyticsStore;
use crate::config::SelahConfig;
use crate::llm::{Generator, SamplingConfig};
use crate::session::{HistoryStore, SessionStore};
use crate::verse::VerseStore;

/// Shared application state, one per process, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    // -------- Storage --------
    pub verses: Arc<VerseStore>,
    pub history: Arc<HistoryStore>,
    pub analytics: Arc<AnalyticsStore>,

    // -------- Conversation --------
    pub sessions: Arc<SessionStore>,
    pub history_turn_cap: usize,
    pub sentence_limit: usize,

    // -------- Generation --------
    pub generator: Arc<dyn Generator>,
    pub sampling: SamplingConfig,
}

/// Assemble the application state from a pool and a generation backend.
pub fn create_app_state(
    db: SqlitePool,
    generator: Arc<dyn Generator>,
    config: &SelahConfig,
) -> AppState {
    AppState {
        verses: Arc::new(VerseStore::new(db.clone())),
        history: Arc::new(HistoryStore::new(db.clone())),
        analytics: Arc::new(AnalyticsStore::new(db)),
        sessions: Arc::new(SessionStore::new()),
        history_turn_cap: config.history_turn_cap,
        sentence_limit: config.sentence_limit,
        generator,
        sampling: SamplingConfig::from_config(config),
    }
}
