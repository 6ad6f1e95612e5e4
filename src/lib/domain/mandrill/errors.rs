//! Mandrill errors

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors raised while translating or delivering a message.
///
/// API clients report their failures with this type too, so the delivery
/// method can hand them back to the caller untouched.
#[derive(Debug, Error)]
pub enum MandrillError {
    /// The API key was missing or rejected
    #[error("invalid Mandrill API key: {0}")]
    InvalidKey(String),

    /// Mandrill rejected the call
    #[error("Mandrill error {name} ({code}): {message}")]
    Provider {
        /// The response status, usually `error`
        status: String,

        /// Mandrill's numeric error code
        code: i64,

        /// Mandrill's error name, e.g. `ValidationError`
        name: String,

        /// Human readable description
        message: String,
    },

    /// The request never reached Mandrill or the response was unreadable
    #[error("transport error: {0}")]
    Transport(anyhow::Error),

    /// A delivery option attached to the mail has the wrong shape
    #[error("invalid `{name}` option: {reason}")]
    InvalidOption {
        /// The option's name
        name: String,

        /// What was wrong with it
        reason: String,
    },

    /// The message payload could not be serialized
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MandrillError {
    fn from(err: anyhow::Error) -> Self {
        MandrillError::UnknownError(err)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    status: String,
    code: i64,
    name: String,
    message: String,
}

impl MandrillError {
    /// Decodes the error body Mandrill returns for rejected calls.
    ///
    /// # Returns
    /// [`None`] when `body` is not a Mandrill error response.
    pub fn from_response(body: &Value) -> Option<Self> {
        let response = ErrorResponse::deserialize(body).ok()?;

        if response.status != "error" {
            return None;
        }

        debug!(name = %response.name, code = response.code, "decoded Mandrill error response");

        Some(match response.name.as_str() {
            "Invalid_Key" => MandrillError::InvalidKey(response.message),
            _ => MandrillError::Provider {
                status: response.status,
                code: response.code,
                name: response.name,
                message: response.message,
            },
        })
    }

    pub(crate) fn invalid_option(name: &str, reason: impl ToString) -> Self {
        MandrillError::InvalidOption {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
