use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row in the hosted `users` table. `first_name` is stored lowercase and is
/// the case-insensitive unique key; the store enforces uniqueness, not us.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    /// Maintained by the store (`now()` default on insert); the lookup may
    /// project it away, so it is optional here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visited: Option<DateTime<Utc>>,
}
