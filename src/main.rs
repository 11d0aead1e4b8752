// src/main.rs

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use selah::config::CONFIG;
use selah::llm::TgiClient;
use selah::server::create_router;
use selah::state::create_app_state;
use selah::{db, verse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Selah theology chat backend");
    info!("Inference server: {}", CONFIG.generation_url);
    info!("Database: {}", CONFIG.database_url);

    // Database pool and schema
    let pool = db::connect(&CONFIG.database_url, CONFIG.sqlite_max_connections).await?;
    db::init_schema(&pool).await?;

    let seeded = verse::seed_if_empty(&pool).await?;
    if seeded > 0 {
        info!("First run: seeded {} verses", seeded);
    }

    // Generation backend
    let generator = Arc::new(TgiClient::new(
        CONFIG.generation_url.clone(),
        CONFIG.generation_timeout_duration(),
    )?);

    let state = create_app_state(pool, generator, &CONFIG);
    let app = create_router(state);

    // Start server
    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
