//! Authentication endpoints: login, registration, logout.

use reqwest::Method;

use crate::app::api::ApiClient;
use crate::app::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::shared::error::ApiError;

impl ApiClient {
    /// Login with username and password.
    ///
    /// On success the session store is replaced with the returned user and
    /// token pair. A 401 here is a credentials failure; the server message
    /// is surfaced unchanged.
    pub fn login(&self, username: String, password: String) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(LoginRequest { username, password })?;
        let auth: AuthResponse =
            self.block_on(self.request_json(Method::POST, "/auth/login/", Some(body)))?;
        self.session()
            .set_authenticated(auth.user.clone(), auth.access.clone(), auth.refresh.clone());
        Ok(auth)
    }

    /// Register a new account. The backend logs the account in immediately,
    /// so this stores the session just like `login`.
    pub fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(RegisterRequest {
            username,
            email,
            password,
        })?;
        let auth: AuthResponse =
            self.block_on(self.request_json(Method::POST, "/auth/register/", Some(body)))?;
        self.session()
            .set_authenticated(auth.user.clone(), auth.access.clone(), auth.refresh.clone());
        Ok(auth)
    }

    /// Notify the backend of the logout and clear the local session.
    ///
    /// The local session is cleared whether or not the request succeeds;
    /// the server call is best effort.
    pub fn logout(&self) -> Result<(), ApiError> {
        let result = self.block_on(self.request_json::<serde_json::Value>(
            Method::POST,
            "/auth/logout/",
            Some(serde_json::json!({})),
        ));
        self.session().clear();
        result.map(|_| ())
    }
}
