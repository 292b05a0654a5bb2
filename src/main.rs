use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use frontdesk::config::AppConfig;
use frontdesk::handlers;
use frontdesk::services::store::supabase::SupabaseStoreProvider;
use frontdesk::services::store::StoreProvider;
use frontdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store: Option<Box<dyn StoreProvider>> = if config.store_configured() {
        tracing::info!(url = %config.supabase_url, "using hosted store");
        Some(Box::new(SupabaseStoreProvider::new(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
        )))
    } else {
        tracing::warn!(
            "SUPABASE_URL / SUPABASE_ANON_KEY not set; serving setup instructions only"
        );
        None
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::home::landing_page))
        .route("/favicon.ico", get(handlers::home::favicon))
        .route("/api/requests", post(handlers::leads::request_call))
        .route("/:name", get(handlers::greeting::greeting_page))
        .fallback(handlers::greeting::fallback_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
