// tests/chat_api.rs
//
// Router-level tests: in-memory sqlite, scripted generation backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use selah::config::SelahConfig;
use selah::llm::{GenerationError, Generator, SamplingConfig};
use selah::server::create_router;
use selah::state::create_app_state;

/// Echoes the prompt (as small local models do) and continues with four
/// sentences, so the cleaner has both a prefix to strip and a limit to hit.
struct CannedTeacher;

#[async_trait::async_trait]
impl Generator for CannedTeacher {
    async fn generate(
        &self,
        prompt: &str,
        _sampling: &SamplingConfig,
    ) -> Result<String, GenerationError> {
        Ok(format!(
            "{} Peace comes slowly. Sit with the question. It will open. A fourth sentence to drop.",
            prompt
        ))
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

/// Always fails, like an inference server that is still loading the model.
struct DownBackend;

#[async_trait::async_trait]
impl Generator for DownBackend {
    async fn generate(
        &self,
        _prompt: &str,
        _sampling: &SamplingConfig,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Api {
            status: 503,
            body: "model is loading".into(),
        })
    }

    fn name(&self) -> &'static str {
        "down"
    }
}

async fn test_app(generator: Arc<dyn Generator>) -> Router {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    selah::db::init_schema(&pool).await.unwrap();
    selah::verse::seed_if_empty(&pool).await.unwrap();

    let config = SelahConfig::from_env();
    create_router(create_app_state(pool, generator, &config))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn status_reports_backend_and_database() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    let (status, body) = get_json(&app, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["generator"], "canned");
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn tones_lists_all_profiles_with_presets() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    let (status, body) = get_json(&app, "/api/tones").await;
    assert_eq!(status, StatusCode::OK);

    let tones = body["tones"].as_array().unwrap();
    assert_eq!(tones.len(), 4);
    assert_eq!(tones[0]["name"], "gentle");
    for tone in tones {
        assert!(!tone["style_instruction"].as_str().unwrap().is_empty());
        assert!(!tone["suggested_questions"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn chat_round_trip_matches_verse_and_cleans_reply() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    let (status, body) = post_json(
        &app,
        "/api/chat",
        json!({"message": "Why do we suffer?", "tone": "gentle"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tone"], "gentle");
    assert_eq!(body["verse"]["keyword"], "suffering");
    assert!(body["verse"]["verse"].as_str().unwrap().starts_with("Dhammapada 216"));

    // Prompt echo stripped, limited to three sentences, terminal punctuation.
    assert_eq!(body["reply"], "Peace comes slowly. Sit with the question. It will open.");
    assert!(!body["session_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn chat_without_matching_keyword_has_no_verse() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    let (status, body) = post_json(&app, "/api/chat", json!({"message": "Good morning"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["verse"].is_null());

    let (_, analytics) = get_json(&app, "/api/analytics/keywords").await;
    assert!(analytics["keywords"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn clear_empties_transcript_and_next_submit_is_fresh() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    let (_, first) = post_json(
        &app,
        "/api/chat",
        json!({"message": "What does faith mean?"}),
    )
    .await;
    let session_id = first["session_id"].as_str().unwrap().to_string();

    post_json(
        &app,
        "/api/chat",
        json!({"message": "Tell me more.", "session_id": session_id}),
    )
    .await;

    let (_, history) = get_json(&app, &format!("/api/chat/history?session_id={}", session_id)).await;
    assert_eq!(history["turns"].as_array().unwrap().len(), 4);

    let (status, cleared) = post_json(
        &app,
        "/api/chat/clear",
        json!({"session_id": session_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["cleared"], 4);

    let (_, history) = get_json(&app, &format!("/api/chat/history?session_id={}", session_id)).await;
    assert!(history["turns"].as_array().unwrap().is_empty());

    post_json(
        &app,
        "/api/chat",
        json!({"message": "Starting over.", "session_id": session_id}),
    )
    .await;
    let (_, history) = get_json(&app, &format!("/api/chat/history?session_id={}", session_id)).await;
    let turns = history["turns"].as_array().unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0]["role"], "student");
    assert_eq!(turns[0]["text"], "Starting over.");
}

#[tokio::test]
async fn analytics_aggregate_matched_keywords() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    for message in [
        "Why do we suffer?",
        "My grief will not lift.",
        "What does faith ask of us?",
    ] {
        let (status, _) = post_json(&app, "/api/chat", json!({"message": message})).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get_json(&app, "/api/analytics/keywords").await;
    assert_eq!(status, StatusCode::OK);
    let keywords = body["keywords"].as_array().unwrap();
    assert_eq!(keywords[0]["keyword"], "suffering");
    assert_eq!(keywords[0]["count"], 2);
    assert_eq!(keywords[1]["keyword"], "faith");
    assert_eq!(keywords[1]["count"], 1);

    let (status, body) = get_json(&app, "/api/analytics/daily").await;
    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["count"], 3);
}

#[tokio::test]
async fn empty_message_is_rejected_before_generation() {
    let app = test_app(Arc::new(DownBackend)).await;

    // The backend is down, but an empty message must fail on the guard,
    // never reaching generation.
    for message in ["", "   \n  "] {
        let (status, _) = post_json(&app, "/api/chat", json!({"message": message})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn unknown_tone_is_rejected() {
    let app = test_app(Arc::new(CannedTeacher)).await;

    let (status, _) = post_json(
        &app,
        "/api/chat",
        json!({"message": "Why pray?", "tone": "sarcastic"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generation_failure_surfaces_as_bad_gateway() {
    let app = test_app(Arc::new(DownBackend)).await;

    let (status, _) = post_json(&app, "/api/chat", json!({"message": "Why pray?"})).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
