/// API client — the single point of entry for every call to the remote resume service.
///
/// The wizard, the resume library and the session all talk to the backend
/// through the `ResumeApi` trait. `HttpApiClient` is the production backend;
/// tests swap in fakes.
///
/// Requests are one-shot: no retries. A non-2xx response becomes
/// `AppError::Api`, carrying the server's `{message}` when it sent one.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::resume::{CreatedResume, ResumePayload, ResumeRecord};
use crate::models::user::User;

#[async_trait]
pub trait ResumeApi: Send + Sync {
    /// `POST /login`, returning the bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String, AppError>;

    /// `POST /register`.
    async fn register(&self, username: &str, password: &str) -> Result<(), AppError>;

    /// `GET /profile`.
    async fn profile(&self, token: &str) -> Result<User, AppError>;

    /// `POST /resume`, returning the locator of the rendered document.
    async fn create_resume(
        &self,
        token: &str,
        payload: &ResumePayload,
    ) -> Result<CreatedResume, AppError>;

    /// `GET /resume`.
    async fn list_resumes(&self, token: &str) -> Result<Vec<ResumeRecord>, AppError>;

    /// `DELETE /resume/:id`. The response body is ignored.
    async fn delete_resume(&self, token: &str, id: &str) -> Result<(), AppError>;
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// `reqwest`-backed implementation of `ResumeApi`.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    config: Config,
}

impl HttpApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            config,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "Resume API returned an error"
        );
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ResumeApi for HttpApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        debug!(username, "POST /login");
        let request = self
            .client
            .post(self.config.endpoint("/login"))
            .json(&CredentialsRequest { username, password });
        let body: TokenResponse = self.send_json(request).await?;
        Ok(body.token)
    }

    async fn register(&self, username: &str, password: &str) -> Result<(), AppError> {
        debug!(username, "POST /register");
        let request = self
            .client
            .post(self.config.endpoint("/register"))
            .json(&CredentialsRequest { username, password });
        self.send(request).await?;
        Ok(())
    }

    async fn profile(&self, token: &str) -> Result<User, AppError> {
        debug!("GET /profile");
        let request = self
            .client
            .get(self.config.endpoint("/profile"))
            .bearer_auth(token);
        self.send_json(request).await
    }

    async fn create_resume(
        &self,
        token: &str,
        payload: &ResumePayload,
    ) -> Result<CreatedResume, AppError> {
        debug!("POST /resume");
        let request = self
            .client
            .post(self.config.endpoint("/resume"))
            .bearer_auth(token)
            .json(payload);
        self.send_json(request).await
    }

    async fn list_resumes(&self, token: &str) -> Result<Vec<ResumeRecord>, AppError> {
        debug!("GET /resume");
        let request = self
            .client
            .get(self.config.endpoint("/resume"))
            .bearer_auth(token);
        self.send_json(request).await
    }

    async fn delete_resume(&self, token: &str, id: &str) -> Result<(), AppError> {
        debug!(id, "DELETE /resume/:id");
        let request = self
            .client
            .delete(self.config.endpoint(&format!("/resume/{id}")))
            .bearer_auth(token);
        self.send(request).await?;
        Ok(())
    }
}
