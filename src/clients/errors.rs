//! HTTP-specific error types for the Twilio API SDK.
//!
//! This module contains error types for HTTP execution: request validation
//! failures and transport-level failures.
//!
//! # Error Handling
//!
//! - [`InvalidRequestError`]: a request failed validation before being sent
//! - [`HttpError`]: unified error type for the execution layer
//!
//! Note that a non-2xx HTTP status is *not* an execution-layer error. The
//! executor hands back the response as-is and callers inspect the status
//! code; only failures that prevent a response from existing at all (invalid
//! request, network failure) surface here.

use thiserror::Error;

/// Error returned when a request fails validation before being sent.
///
/// # Example
///
/// ```rust
/// use twilio_api::InvalidRequestError;
///
/// let error = InvalidRequestError::BodyParamsNotAllowed {
///     method: "get".to_string(),
/// };
///
/// println!("{}", error); // "Cannot send body parameters with get requests."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// Body-kind parameters were attached to a non-POST request.
    #[error("Cannot send body parameters with {method} requests.")]
    BodyParamsNotAllowed {
        /// The HTTP method that cannot carry body parameters.
        method: String,
    },

    /// The same URL-segment name was supplied more than once.
    ///
    /// Each `{Name}` placeholder must be satisfied by exactly one
    /// UrlSegment-kind parameter.
    #[error("URL segment '{name}' was supplied more than once.")]
    DuplicateSegment {
        /// The duplicated segment name.
        name: String,
    },
}

/// Unified error type for the HTTP execution layer.
///
/// # Example
///
/// ```rust,ignore
/// use twilio_api::HttpError;
///
/// match client.execute(request).await {
///     Ok(response) => { /* inspect response.code */ }
///     Err(HttpError::InvalidRequest(e)) => { /* fix the request */ }
///     Err(HttpError::Network(e)) => { /* connection/DNS/timeout failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
