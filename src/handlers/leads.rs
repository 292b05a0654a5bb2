use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::PhoneRequest;
use crate::state::AppState;

/// POST /api/requests, where the landing page modal submits. `phone_number`
/// is required at the type level; `name` inserts as null when absent.
pub async fn request_call(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PhoneRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.config.store_configured() {
        return Err(AppError::StoreNotConfigured);
    }
    let store = state.store.as_deref().ok_or(AppError::StoreNotConfigured)?;

    store.insert_phone_request(&payload).await?;

    tracing::info!(
        phone = %payload.phone_number,
        named = payload.name.is_some(),
        "call-back request captured"
    );

    Ok(Json(serde_json::json!({ "ok": true })))
}
