//! Error types for REST resource operations.
//!
//! This module contains [`ResourceError`], the error type returned by every
//! resource operation, and [`ApiError`], the structured error body the Twilio
//! API returns on non-2xx responses.
//!
//! # Error Handling
//!
//! - Missing required arguments fail before any I/O with
//!   [`ResourceError::EmptyArgument`], naming the argument.
//! - Non-2xx responses are parsed into [`ApiError`] (code, message,
//!   `more_info` URL). Bodies that are not the structured shape still
//!   produce an `ApiError` from the raw status and body.
//! - Malformed or type-mismatched JSON surfaces as
//!   [`ResourceError::Deserialization`], never silently defaulted.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::ResourceError;
//!
//! match Call::fetch(&client, sid).await {
//!     Ok(call) => println!("{:?}", call.status),
//!     Err(ResourceError::Api(e)) => {
//!         println!("API error {} ({:?}): {}", e.status, e.code, e.message);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse, InvalidRequestError};

/// A structured error returned by the Twilio API.
///
/// Non-2xx responses carry a JSON body of the shape:
///
/// ```json
/// {
///   "code": 20404,
///   "message": "The requested resource was not found",
///   "more_info": "https://www.twilio.com/docs/errors/20404",
///   "status": 404
/// }
/// ```
///
/// Responses without that shape (empty delete bodies, proxies, HTML error
/// pages) are mapped onto an `ApiError` from the raw status code and body.
#[derive(Debug, Error, Clone, Deserialize, PartialEq, Eq)]
#[error("Twilio API error {status}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The Twilio-specific error code, if present.
    #[serde(default)]
    pub code: Option<u32>,
    /// The human-readable error message.
    pub message: String,
    /// A URL with more information about the error, if present.
    #[serde(default)]
    pub more_info: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx response.
    ///
    /// Tries the structured error body first; falls back to the raw status
    /// and body text when the body does not parse as the documented shape.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        if let Ok(error) = serde_json::from_str::<Self>(&response.body) {
            return error;
        }

        let message = if response.body.trim().is_empty() {
            format!("HTTP {} with empty body", response.code)
        } else {
            response.body.clone()
        };

        Self {
            status: response.code,
            code: None,
            message,
            more_info: None,
        }
    }
}

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required argument was missing or empty.
    ///
    /// Raised before any I/O, naming the offending argument.
    #[error("Required argument '{argument}' cannot be empty.")]
    EmptyArgument {
        /// The wire name of the missing argument (e.g. `CustomerName`).
        argument: &'static str,
    },

    /// The API returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be deserialized into the expected type.
    #[error("Failed to deserialize {context}: {source}")]
    Deserialization {
        /// What was being deserialized (e.g. the resource name).
        context: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A list response body has no collection under the key named by `meta`.
    #[error("Response body has no '{key}' collection")]
    MissingCollection {
        /// The collection key announced by the pagination metadata.
        key: String,
    },

    /// An execution-layer error occurred (invalid request or network failure).
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidRequestError> for ResourceError {
    fn from(error: InvalidRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
