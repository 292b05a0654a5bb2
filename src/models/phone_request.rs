use serde::{Deserialize, Serialize};

/// A call-back request captured by the landing page modal. Written once to the
/// `phone_requests` table and never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneRequest {
    pub phone_number: String,
    /// Optional on the form; inserted as SQL null when absent.
    pub name: Option<String>,
}
