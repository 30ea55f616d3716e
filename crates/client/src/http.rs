//! Thin JSON wrapper over reqwest with a fixed base URL.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use assetfolio_core::errors::{ApiErrorBody, Error, Result};

use crate::config::ClientConfig;

/// HTTP client shared by the API modules.
///
/// Paths passed to the request methods are appended to the configured
/// base URL and must start with `/`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token format is invalid or the
    /// reqwest client cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(Self::headers(config.access_token.as_deref())?)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let auth_value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                Error::InvalidConfigValue("Invalid access token format".to_string())
            })?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_json(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_json(response).await
    }

    /// Sends a PUT and returns the raw success body.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_body(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_body(response).await.map(|_| ())
    }

    /// Reads the body, mapping non-2xx statuses to `Error::Api`.
    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await.map_err(transport_error)?;
        debug!("API response {} ({}): {}", url, status, body);

        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(body)
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            Error::decode(format!("Failed to parse response: {}", e))
        })
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    Error::transport(e.to_string())
}

/// Builds an `Error::Api`, keeping the body only if it is a JSON error object.
fn api_error(status: StatusCode, body: &str) -> Error {
    let parsed = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => {
            serde_json::from_value::<ApiErrorBody>(value).ok()
        }
        _ => None,
    };
    Error::api(status.as_u16(), parsed)
}
