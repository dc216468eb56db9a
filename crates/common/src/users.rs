//! Client for the user-identity service.
//!
//! Every lookup is a fresh `GET /api/users/userById/{id}`; nothing is cached
//! and no timeout or retry is applied.

use reqwest::StatusCode;
use tracing::debug;

use crate::CoreError;

#[derive(Clone, Debug)]
pub struct UserLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserLookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub fn user_url(&self, id_user: i32) -> String {
        format!("{}/api/users/userById/{}", self.base_url, id_user)
    }

    /// `Ok(Some(payload))` when the service returns a user, `Ok(None)` on 404
    /// or an empty/`null` body, `Err` for transport failures and other statuses.
    pub async fn fetch_user(&self, id_user: i32) -> Result<Option<serde_json::Value>, CoreError> {
        let url = self.user_url(id_user);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;

        let status = resp.status();
        debug!(%url, status = status.as_u16(), "user lookup response");
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CoreError::Network(format!("user service responded with {status}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let json = serde_json::from_str::<serde_json::Value>(&body)
            .map_err(|e| CoreError::Parse(e.to_string()))?;
        if json.is_null() {
            return Ok(None);
        }
        Ok(Some(json))
    }
}
