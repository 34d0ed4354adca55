//! Snippet Sentiment Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snippet_sentiment_api::api::{self, AppState};

const DEFAULT_PORT: u16 = 8000;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("snippet_sentiment_api=info,predict=debug,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    // Lexicon tables and threshold resolve once here; immutable afterwards.
    let state = AppState::from_env();
    let app = api::router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "snippet-sentiment-api listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
