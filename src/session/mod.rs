//! Session-scoped conversation state
//!
//! Each client session owns one turn list. The store is an explicit object
//! passed through `AppState` rather than process-global state, so a
//! session's lifecycle is the client session, not the process.
//!
//! Accepted exchanges are additionally persisted to `theology_chat_history`,
//! which is write-only from this service's perspective.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Transcript label, matching the prompt format.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }
}

/// One exchange unit. Immutable once created; ordering is append order.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub created_at: i64,
}

impl Turn {
    pub fn new(role: Role, text: String) -> Self {
        Self {
            role,
            text,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// One client session's transcript.
#[derive(Debug, Default)]
pub struct Session {
    turns: Vec<Turn>,
}

impl Session {
    pub fn append(&mut self, role: Role, text: String) {
        self.turns.push(Turn::new(role, text));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Empties the turn list. Subsequent appends start a fresh transcript.
    pub fn clear(&mut self) -> usize {
        let cleared = self.turns.len();
        self.turns.clear();
        cleared
    }
}

/// Session id → session, shared across handlers.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a full student/teacher exchange to a session, creating the
    /// session on first use.
    pub async fn append_exchange(&self, session_id: &str, student: &str, teacher: &str) {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(session_id.to_string()).or_default();
        session.append(Role::Student, student.to_string());
        session.append(Role::Teacher, teacher.to_string());
    }

    /// The most recent `n` turns of a session, oldest first. An unknown
    /// session id reads as an empty transcript.
    pub async fn recent(&self, session_id: &str, n: usize) -> Vec<Turn> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .map(|s| s.recent(n).to_vec())
            .unwrap_or_default()
    }

    /// Full transcript of a session, oldest first.
    pub async fn transcript(&self, session_id: &str) -> Vec<Turn> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .map(|s| s.turns().to_vec())
            .unwrap_or_default()
    }

    /// Clear a session's transcript. Returns the number of turns removed.
    pub async fn clear(&self, session_id: &str) -> usize {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(session_id).map(Session::clear).unwrap_or(0)
    }
}

/// Write-side of `theology_chat_history`.
pub struct HistoryStore {
    db: SqlitePool,
}

impl HistoryStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Persist one turn. Callers decide whether a failure is fatal.
    pub async fn save_turn(&self, session_id: &str, role: Role, content: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO theology_chat_history (id, session_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(session_id)
        .bind(role.label())
        .bind(content)
        .bind(Utc::now().timestamp())
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
