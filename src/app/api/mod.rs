/**
 * API Client Module
 *
 * HTTP client for the analytics backend. Attaches the session's access
 * token as a bearer credential, and on a 401 response exchanges the
 * refresh token for a new access token and retries the original request
 * exactly once. A failed refresh clears the session.
 *
 * Endpoint wrappers live in the `auth`, `analysis` and `forecast`
 * submodules; this module owns the request pipeline.
 */

use std::future::Future;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::session::SessionStore;
use crate::app::types::{TokenRefreshRequest, TokenRefreshResponse};
use crate::shared::error::ApiError;

pub mod analysis;
pub mod auth;
pub mod forecast;

/// The one endpoint exempt from the refresh-and-retry rule
pub(crate) const TOKEN_REFRESH_PATH: &str = "/token/refresh/";

/// HTTP client wrapper around the analytics REST API.
pub struct ApiClient {
    http: Client,
    config: Config,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: Config, session: SessionStore) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            config,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Run a request future to completion on a fresh runtime.
    ///
    /// The client is called from short-lived worker threads spawned by the
    /// UI, so each call carries its own runtime rather than sharing one.
    pub(crate) fn block_on<T>(
        &self,
        fut: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        let rt = Runtime::new()
            .map_err(|e| ApiError::network(format!("failed to create runtime: {}", e)))?;
        rt.block_on(fut)
    }

    /// Perform a request and decode the JSON response, applying the
    /// bearer-injection and refresh-on-401 rules.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = self.config.api_url(path);
        let mut response = self
            .send_once(&method, &url, body.as_ref(), self.session.access_token())
            .await?;

        // On 401, refresh once and retry once. The refresh endpoint itself
        // is exempt, and a request is never retried more than once. If the
        // refresh does not produce a new token the original 401 response
        // is decoded below so the server's message survives.
        if response.status() == StatusCode::UNAUTHORIZED && path != TOKEN_REFRESH_PATH {
            if self.refresh_access_token().await {
                tracing::debug!(path, "retrying request with refreshed access token");
                response = self
                    .send_once(&method, &url, body.as_ref(), self.session.access_token())
                    .await?;
            }
        }

        Self::decode(response).await
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&serde_json::Value>,
        token: Option<String>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.request(method.clone(), url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(ApiError::from)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Returns true when the session now holds a fresh access token. With
    /// no refresh token at hand this is a no-op; a rejected refresh clears
    /// the session entirely (the "retry once then log out" rule).
    async fn refresh_access_token(&self) -> bool {
        let Some(refresh) = self.session.refresh_token() else {
            return false;
        };

        let url = self.config.api_url(TOKEN_REFRESH_PATH);
        let body = match serde_json::to_value(TokenRefreshRequest { refresh }) {
            Ok(body) => body,
            Err(_) => return false,
        };

        let result = self
            .send_once(&Method::POST, &url, Some(&body), None)
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<TokenRefreshResponse>().await {
                    Ok(tokens) => {
                        tracing::info!("access token refreshed");
                        self.session.set_access_token(tokens.access);
                        true
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "token refresh response malformed, logging out");
                        self.session.clear();
                        false
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "token refresh rejected, logging out");
                self.session.clear();
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed, logging out");
                self.session.clear();
                false
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}
