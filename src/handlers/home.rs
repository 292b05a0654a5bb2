use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use crate::state::AppState;

static LANDING_HTML: &str = include_str!("../web/landing.html");
static SETUP_HTML: &str = include_str!("../web/setup.html");

pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<&'static str> {
    if !state.config.store_configured() {
        return setup_page().await;
    }
    Html(LANDING_HTML)
}

/// Rendered on every route while the configuration gate is closed.
pub async fn setup_page() -> Html<&'static str> {
    Html(SETUP_HTML)
}

/// Browsers probe this on every page view; answer before the request can fall
/// through to the name resolver and mint a junk user row.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
