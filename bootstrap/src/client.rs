//! Thin ArangoDB HTTP client: basic-auth JSON requests plus decoding of
//! the server's error envelope.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The server answered with an error envelope.
    #[error("server returned {code} (errorNum {error_num}): {message}")]
    Api {
        code: u16,
        error_num: i64,
        message: String,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid server URL `{0}`; expected http:// or https://")]
    InvalidBaseUrl(String),
}

pub struct DbClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl DbClient {
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self, DbError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(DbError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<(), DbError> {
        self.request(reqwest::Method::POST, path, body).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<(), DbError> {
        self.request(reqwest::Method::PUT, path, body).await
    }

    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &Value,
    ) -> Result<(), DbError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let envelope = response.json::<Value>().await.unwrap_or(Value::Null);
        Err(api_error(status.as_u16(), &envelope))
    }
}

/// Decode ArangoDB's `{error, code, errorNum, errorMessage}` envelope.
/// Missing fields fall back to the HTTP status so a proxy error page
/// still produces something readable.
pub fn api_error(status: u16, envelope: &Value) -> DbError {
    let error_num = envelope
        .get("errorNum")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let message = envelope
        .get("errorMessage")
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {status}"), ToOwned::to_owned);
    DbError::Api {
        code: status,
        error_num,
        message,
    }
}
