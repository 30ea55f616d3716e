//! Core error types for the Assetfolio client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest, serde_json, etc.) are converted to these types by the
//! client crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Field name to the list of messages the backend reported for it.
pub type ValidationErrors = HashMap<String, Vec<String>>;

/// Body of a non-2xx response from the assets backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<ValidationErrors>,
}

/// Root error type for the assets client.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-success status. `body` is only set
    /// when the response carried a JSON error object.
    #[error("API error ({status}): {}", api_message(.body))]
    Api {
        status: u16,
        body: Option<ApiErrorBody>,
    },

    /// The request never produced a response (connection, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// A success response could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

fn api_message(body: &Option<ApiErrorBody>) -> &str {
    body.as_ref()
        .and_then(|b| b.message.as_deref())
        .unwrap_or("no error body")
}

impl Error {
    /// Create an API error from a status and an optional decoded body.
    pub fn api(status: u16, body: Option<ApiErrorBody>) -> Self {
        Self::Api { status, body }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Returns the structured error body when the backend sent one.
    pub fn error_body(&self) -> Option<&ApiErrorBody> {
        match self {
            Error::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
