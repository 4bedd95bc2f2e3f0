use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    domain::Username,
    models::{AuthStatus, LoginResponse, SessionUser},
};

use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

// Session calls. The cookie the backend sets lives in the client's cookie store.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> AuthApi {
        Self { client }
    }

    #[tracing::instrument("Logging in to backend", skip(self, password))]
    pub async fn login(
        &self,
        username: &Username,
        password: &SecretString,
    ) -> Result<SessionUser, ApiError> {
        let request = LoginRequest {
            username: username.as_str(),
            password: password.expose_secret(),
        };
        let response: LoginResponse = self.client.post(&["auth", "login"], &request).await?;
        Ok(response.user)
    }

    #[tracing::instrument("Logging out of backend", skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client
            .send(Method::POST, &["auth", "logout"], Some(&serde_json::json!({})))
            .await
    }

    #[tracing::instrument("Fetching current session", skip(self))]
    pub async fn me(&self) -> Result<AuthStatus, ApiError> {
        self.client.get(&["auth", "me"], &[]).await
    }
}
