//! JSON API client for the operator's HTTP endpoints.
//!
//! Browser builds issue real requests via `gloo-net` and attach the
//! active bearer token; featureless builds get stubs that fail with a
//! network error, since these endpoints only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-200 response becomes a typed [`ApiError`] so views can turn
//! failures into banner state instead of panics, and so a 401 anywhere
//! can drive the global logout.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Failure modes of a dashboard API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 401; the caller must trigger the shared logout.
    Unauthorized(String),
    /// Any other non-200 response.
    Http { status: u16, message: String },
    /// The request never produced a response.
    Network(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized(message) => write!(f, "{message}"),
            ApiError::Http { message, .. } => write!(f, "{message}"),
            ApiError::Network(message) => write!(f, "request failed: {message}"),
        }
    }
}

/// Map a non-200 response to the matching [`ApiError`], taking the
/// message from the body's `error` field when the server supplied one.
pub fn error_for_status(status: u16, body: &serde_json::Value) -> ApiError {
    let message = body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned);
    if status == 401 {
        ApiError::Unauthorized(message.unwrap_or_else(|| "Unauthorized".to_owned()))
    } else {
        ApiError::Http {
            status,
            message: message.unwrap_or_else(|| format!("Unexpected status {status}")),
        }
    }
}

/// Response body of `POST /login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange credentials for a bearer token via `POST /login`.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    post(
        "/login",
        &serde_json::json!({ "username": username, "password": password }),
    )
    .await
}

/// GET `path` and decode the JSON response.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::get(path);
        if let Some(token) = super::token::current() {
            request = request.header("Authorization", &format!("bearer {token}"));
        }
        let response = request
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;
        decode(response).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = path;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// POST `body` to `path` and decode the JSON response.
pub async fn post<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::post(path);
        if let Some(token) = super::token::current() {
            request = request.header("Authorization", &format!("bearer {token}"));
        }
        let response = request
            .json(body)
            .map_err(|error| ApiError::Network(error.to_string()))?
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;
        decode(response).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "browser")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    if response.status() == 200 {
        response
            .json::<T>()
            .await
            .map_err(|error| ApiError::Network(format!("invalid response body: {error}")))
    } else {
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Err(error_for_status(response.status(), &body))
    }
}
