use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppConfig, AppError};

use crate::config::normalize_base_url;

/// REST client for the student service.
///
/// Cheap to clone. All clones share the bearer credential, which is set by a
/// successful login or signup and cleared by logout.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut slot) => *slot = token,
            Err(e) => tracing::error!(error = %e, "credential lock poisoned"),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode a JSON success body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = send(builder).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "unexpected response body");
            AppError::internal("")
        })
    }

    /// Send a request whose success body is not needed.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<(), AppError> {
        send(builder).await.map(|_| ())
    }

    pub(crate) fn json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> RequestBuilder {
        self.request(method, path).json(body)
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, AppError> {
    let response = builder.send().await.map_err(|e| {
        tracing::warn!(error = %e, "request did not reach the service");
        AppError::unavailable("")
    })?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_response(status.as_u16(), &body);
    tracing::warn!(status = status.as_u16(), error = %err, "service rejected request");
    Err(err)
}
