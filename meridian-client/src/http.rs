//! HTTP client for the Meridian backend REST API
//!
//! The backend returns bare JSON bodies (no response envelope); errors are
//! mapped from the HTTP status code. Django-style routes keep their
//! trailing slashes.

use meridian_core::{
    LoginRequest, LoginResponse, MenuItem, Order, OrderStatus, PaymentRequest, PlaceOrderRequest,
    Transaction, UserInfo,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the Meridian backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the authentication token in place
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Token {}", t))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body, ignoring the response payload
    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, text));
        }
        Ok(())
    }

    /// Make a PATCH request with JSON body
    async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.patch(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Map the HTTP response to a typed result
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, text));
        }

        let body = response.text().await?;
        decode_body(&body)
    }

    /// Map a non-success status to the error taxonomy
    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Backend(text),
        }
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("auth/login/", &request).await
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("auth/me/").await
    }

    /// Logout and drop the token
    pub async fn logout(&mut self) -> ClientResult<()> {
        // The backend replies 200 with an empty body
        self.post_empty("auth/logout/").await?;
        self.token = None;
        Ok(())
    }

    // ========== Orders API ==========

    /// List orders, optionally filtered by status
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
        let path = match status {
            Some(status) => format!("orders/?status={}", status.as_str()),
            None => "orders/".to_string(),
        };
        self.get(&path).await
    }

    /// Fetch a single order
    pub async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.get(&format!("orders/{}/", id)).await
    }

    /// Place a new order
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> ClientResult<Order> {
        self.post("orders/", request).await
    }

    /// Update an order's status
    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<Order> {
        let body = serde_json::json!({ "status": status.as_str() });
        self.patch(&format!("orders/{}/", id), &body).await
    }

    // ========== Transactions API ==========

    /// Process a payment for an order
    pub async fn process_payment(&self, request: &PaymentRequest) -> ClientResult<Transaction> {
        self.post("transactions/", request).await
    }

    // ========== Menu API ==========

    /// List the menu catalogue
    pub async fn list_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("menu/items/").await
    }
}

/// Decode a successful response body into the expected shape
fn decode_body<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
