//! Typed client for the classroom REST API.

use std::sync::Arc;

use serde::Deserialize;

use crate::session::SessionTokens;

/// A client for the classroom API.
///
/// Cheap to clone: the underlying `reqwest::Client` is a handle and the
/// session provider is shared.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<dyn SessionTokens + Send + Sync>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no session token available")]
    MissingToken,
}

// -- Wire types (Deserialize; unknown response fields are discarded) --

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientClassroom {
    pub id: String,
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientMaterial {
    pub id: String,
    pub title: String,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<dyn SessionTokens + Send + Sync>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn classrooms_url(&self) -> String {
        format!("{}/api/classrooms", self.base_url)
    }

    pub fn classroom_url(&self, class_id: &str) -> String {
        format!("{}/api/classrooms/{}", self.base_url, class_id)
    }

    pub fn materials_url(&self, class_id: &str) -> String {
        format!("{}/api/classrooms/{}/materials", self.base_url, class_id)
    }

    /// Issue an authenticated GET and return the raw body on a 2xx status.
    ///
    /// The bearer token is resolved from the session provider once per
    /// request, at call time.
    async fn get(&self, url: &str) -> Result<String, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingToken)?;

        tracing::debug!("GET {url}");
        let resp = self.http.get(url).bearer_auth(token).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(resp.text().await?)
    }

    /// Fetch a single classroom record.
    pub async fn get_classroom(&self, class_id: &str) -> Result<ClientClassroom, ApiError> {
        let body = self.get(&self.classroom_url(class_id)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the learning materials for a classroom, in server response order.
    pub async fn get_materials(&self, class_id: &str) -> Result<Vec<ClientMaterial>, ApiError> {
        let body = self.get(&self.materials_url(class_id)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the classrooms the current student is enrolled in.
    pub async fn get_classrooms(&self) -> Result<Vec<ClientClassroom>, ApiError> {
        let body = self.get(&self.classrooms_url()).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
