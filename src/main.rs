use std::sync::Arc;

use astrologer::llm::{LlmChat, LlmClient};
use astrologer::routes;
use astrologer::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8002".into())
        .parse()
        .expect("invalid PORT");

    let max_tokens = std::env::var("AI_MAX_TOKENS").ok().and_then(|raw| {
        raw.parse::<u32>()
            .inspect_err(|_| tracing::warn!(%raw, "invalid AI_MAX_TOKENS; leaving output uncapped"))
            .ok()
    });

    let llm = match LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client) as Arc<dyn LlmChat>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client unavailable; AI answers disabled");
            None
        }
    };
    let state = AppState::new(llm).with_max_tokens(max_tokens);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "astrologer listening");
    axum::serve(listener, app).await.expect("server failed");
}
