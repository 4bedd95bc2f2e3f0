//! Typed access to the REST backend.
//!
//! One [`ApiClient`] is built from configuration and cloned into each
//! per-domain client. Every call sends exactly one request; nothing is retried.

mod analytics;
mod auth;
mod customers;
mod envelope;
mod orders;
mod payments;
mod products;
mod reviews;

use std::{error::Error, fmt::Debug, time::Duration};

use anyhow::Context;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{configuration::BackendSettings, utils::error_fmt_chain};

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use customers::CustomersApi;
pub use envelope::Listing;
pub use orders::OrdersApi;
pub use payments::PaymentsApi;
pub use products::ProductsApi;
pub use reviews::ReviewsApi;

// Shared HTTP client for the backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<ApiClient, anyhow::Error> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend base url: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Backend base url cannot carry a path: {}", base_url);
        }

        // The backend's /auth endpoints keep the session in a cookie.
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .context("Failed to build backend http client")?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<ApiClient, anyhow::Error> {
        Self::new(&settings.base_url, settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    // Segments are percent-encoded; an empty last segment yields a trailing slash.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn get<T>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http_client
            .get(self.endpoint(segments))
            .query(query);
        let response = self.execute(request).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http_client
            .post(self.endpoint(segments))
            .json(body);
        let response = self.execute(request).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    // For calls whose response body carries nothing the dashboard needs.
    pub async fn send<B>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http_client
            .request(method, self.endpoint(segments));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await?;
        Ok(())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Backend request got no response");
            ApiError::Unreachable(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message_from_body(&body);
        tracing::warn!(status = status.as_u16(), message = ?message, "Backend request failed");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

// Flask handlers report failures as {"error": "..."}; some use "message".
fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[derive(Error)]
pub enum ApiError {
    #[error("Backend did not respond")]
    Unreachable(#[source] reqwest::Error),
    #[error("Backend answered with HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("Backend response could not be decoded")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
