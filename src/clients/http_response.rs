//! Response types for the Twilio API SDK.
//!
//! This module provides the [`HttpResponse`] type: the status code, headers,
//! and raw body handed back by the executor. The response is immutable once
//! populated; interpretation of the body (typed deserialization, error-body
//! parsing) happens in the resource layer.

use std::collections::HashMap;

/// An HTTP response from the Twilio API.
///
/// Holds the raw response exactly as the transport produced it. A non-2xx
/// status code is not an error at this level; callers inspect [`code`]
/// (delete operations, for example, check for 204 No Content).
///
/// [`code`]: HttpResponse::code
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response is 204 No Content.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.code == 204
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched against the lowercased form stored by the
    /// transport.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Twilio-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("twilio-request-id")
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error when the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
