pub mod supabase;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{PhoneRequest, UserRecord};

/// The hosted table store. Three verbs over two tables: select-one-by-equality
/// and update-by-equality on `users`, insert-one on `users` and
/// `phone_requests`. Consumed, never implemented, by the rest of the app.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// Select at most one user whose `first_name` equals the given
    /// (already lowercased) value.
    async fn find_user(&self, first_name: &str) -> anyhow::Result<Option<UserRecord>>;

    /// Insert a new user row and return the stored representation. Fails on a
    /// unique-constraint collision; callers decide what that means.
    async fn insert_user(&self, first_name: &str) -> anyhow::Result<UserRecord>;

    /// Set `last_visited` on the row matching `first_name`.
    async fn touch_last_visited(
        &self,
        first_name: &str,
        visited_at: DateTime<Utc>,
    ) -> anyhow::Result<()>;

    /// Append one call-back request. Write-only; nothing reads these back.
    async fn insert_phone_request(&self, request: &PhoneRequest) -> anyhow::Result<()>;
}
