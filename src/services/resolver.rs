use chrono::Utc;

use crate::models::Session;
use crate::services::store::StoreProvider;

/// Name-to-user resolution: lowercase the path token, find-or-create the row,
/// and collapse every failure into `Unresolved`. The caller renders whichever
/// page variant the terminal state implies; no error surfaces past here.
pub async fn resolve(store: Option<&dyn StoreProvider>, raw_name: &str) -> Session {
    let store = match store {
        Some(s) => s,
        None => return Session::Unresolved,
    };
    if raw_name.is_empty() {
        return Session::Unresolved;
    }

    let normalized = raw_name.to_lowercase();

    match store.find_user(&normalized).await {
        Ok(Some(user)) => {
            // Best-effort visit stamp; a failed touch never un-resolves the
            // session.
            if let Err(e) = store.touch_last_visited(&normalized, Utc::now()).await {
                tracing::warn!(error = %e, name = %normalized, "failed to update last_visited");
            }
            Session::Resolved {
                first_name: user.first_name,
            }
        }
        Ok(None) => match store.insert_user(&normalized).await {
            Ok(user) => {
                tracing::info!(name = %user.first_name, "created user page");
                Session::Resolved {
                    first_name: user.first_name,
                }
            }
            Err(e) => {
                // Covers the unique-constraint loser of a concurrent first
                // visit as well: same terminal state as "not found", no retry.
                tracing::warn!(error = %e, name = %normalized, "user insert failed");
                Session::Unresolved
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, name = %normalized, "user lookup failed");
            Session::Unresolved
        }
    }
}
