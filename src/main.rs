//! fruitshop-rest — REST API for categories and vendors.
//!
//! Config from env vars:
//!   PORT — listen port (default: 3000)
//!   RUST_LOG — tracing filter (default: fruitshop_rest=debug,tower_http=debug,info)

use fruitshop_rest::{api, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fruitshop_rest=debug,tower_http=debug,info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let state = api::AppState::in_memory();
    bootstrap::seed_if_empty(&state).await?;

    let app = api::build_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");
    info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
