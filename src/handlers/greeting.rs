use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::session::capitalize;
use crate::models::Session;
use crate::services::resolver;
use crate::state::AppState;

use super::home;

static GREETING_HTML: &str = include_str!("../web/greeting.html");
static NOT_FOUND_HTML: &str = include_str!("../web/not_found.html");

pub async fn greeting_page(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    if !state.config.store_configured() {
        return home::setup_page().await.into_response();
    }

    match resolver::resolve(state.store.as_deref(), &name).await {
        Session::Resolved { first_name } => {
            let page = render_greeting(
                &escape_html(&capitalize(&first_name)),
                &escape_html(&first_name),
            );
            Html(page).into_response()
        }
        Session::Unresolved => (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response(),
    }
}

/// Fallback for paths no route matches (multi-segment, trailing slash).
/// Renders the same variants the named route does: the setup page while the
/// gate is closed, the not-found page otherwise.
pub async fn fallback_page(State(state): State<Arc<AppState>>) -> Response {
    if !state.config.store_configured() {
        return home::setup_page().await.into_response();
    }
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
}

/// Fill both placeholders in one pass over the template. Substituted values
/// are never rescanned, so a name containing literal placeholder text renders
/// verbatim.
fn render_greeting(display_name: &str, slug: &str) -> String {
    GREETING_HTML
        .split("{{display_name}}")
        .map(|part| part.replace("{{slug}}", slug))
        .collect::<Vec<_>>()
        .join(display_name)
}

/// The name token comes straight from the URL path; it never reaches the page
/// unescaped.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
