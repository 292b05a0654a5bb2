use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use super::StoreProvider;
use crate::models::{PhoneRequest, UserRecord};

/// PostgREST client for a hosted Supabase project. All requests carry the anon
/// key; row-level security on the store side decides what that key may do.
pub struct SupabaseStoreProvider {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl SupabaseStoreProvider {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            // Default client: no timeout. A hung store call hangs that one
            // request and nothing else.
            client: reqwest::Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

#[async_trait]
impl StoreProvider for SupabaseStoreProvider {
    async fn find_user(&self, first_name: &str) -> anyhow::Result<Option<UserRecord>> {
        let filter = format!("eq.{first_name}");
        let rows: Vec<UserRecord> = self
            .authed(self.client.get(self.table_url("users")))
            .query(&[
                ("select", "first_name,last_visited"),
                ("first_name", filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .context("failed to query users")?
            .error_for_status()
            .context("users lookup returned error")?
            .json()
            .await
            .context("failed to parse users lookup response")?;

        Ok(rows.into_iter().next())
    }

    async fn insert_user(&self, first_name: &str) -> anyhow::Result<UserRecord> {
        let rows: Vec<UserRecord> = self
            .authed(self.client.post(self.table_url("users")))
            .header("Prefer", "return=representation")
            .json(&json!([{ "first_name": first_name }]))
            .send()
            .await
            .context("failed to insert user")?
            .error_for_status()
            .context("user insert rejected by store")?
            .json()
            .await
            .context("failed to parse inserted user")?;

        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("store returned no representation for inserted user"))
    }

    async fn touch_last_visited(
        &self,
        first_name: &str,
        visited_at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let filter = format!("eq.{first_name}");
        self.authed(self.client.patch(self.table_url("users")))
            .query(&[("first_name", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&json!({
                "last_visited": visited_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            }))
            .send()
            .await
            .context("failed to update last_visited")?
            .error_for_status()
            .context("last_visited update rejected by store")?;

        Ok(())
    }

    async fn insert_phone_request(&self, request: &PhoneRequest) -> anyhow::Result<()> {
        self.authed(self.client.post(self.table_url("phone_requests")))
            .header("Prefer", "return=minimal")
            .json(&json!([request]))
            .send()
            .await
            .context("failed to insert phone request")?
            .error_for_status()
            .context("phone request insert rejected by store")?;

        Ok(())
    }
}
