//! Pluggable HTTP transport for the Twilio API SDK.
//!
//! This module defines the [`HttpTransport`] trait — the seam between the
//! REST executor and the actual HTTP stack — and [`ReqwestTransport`], the
//! default implementation backed by `reqwest`.
//!
//! The executor hands the transport a fully-prepared [`TransportRequest`]
//! (absolute URL, credentials, headers, query pairs, form pairs) and gets
//! back a raw [`TransportResponse`]. Swapping the transport via dependency
//! injection is how tests substitute the network; see
//! [`RestClient::with_transport`](crate::clients::RestClient::with_transport).

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;

/// A fully-prepared outbound HTTP request.
///
/// Everything the transport needs is rendered down to strings: the executor
/// has already resolved URL segments, split parameters by kind, and merged
/// default headers.
#[derive(Clone)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute request URL (without query string).
    pub url: String,
    /// Basic-auth username (the account SID).
    pub username: String,
    /// Basic-auth password (the auth token).
    pub password: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// Query-string pairs, in order.
    pub query: Vec<(String, String)>,
    /// Form-encoded body pairs, in order (POST only).
    pub form: Vec<(String, String)>,
}

impl fmt::Debug for TransportRequest {
    // The auth token must not leak through Debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"*****")
            .field("headers", &self.headers)
            .field("query", &self.query)
            .field("form", &self.form)
            .finish()
    }
}

/// A raw inbound HTTP response.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased names.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

/// An HTTP transport capable of executing a single outbound request.
///
/// Implementations perform the actual I/O. The SDK ships
/// [`ReqwestTransport`]; tests inject doubles that record requests and
/// return canned responses.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Executes the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for connection, DNS, TLS, or timeout
    /// failures. A response with a non-2xx status is *not* an error.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, HttpError>;
}

/// The default transport, backed by a shared [`reqwest::Client`].
///
/// Connection pooling, TLS, redirects, and timeouts are whatever `reqwest`
/// provides natively.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new transport with a fresh `reqwest` client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Parses response headers into a `HashMap` with lowercased names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, HttpError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        builder = builder.basic_auth(&request.username, Some(&request.password));

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if request.method == HttpMethod::Post {
            builder = builder.form(&request.form);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();

        Ok(TransportResponse {
            code,
            headers,
            body,
        })
    }
}

// Verify transport types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportRequest>();
    assert_send_sync::<TransportResponse>();
    assert_send_sync::<ReqwestTransport>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_request_debug_masks_password() {
        let request = TransportRequest {
            method: HttpMethod::Get,
            url: "https://api.twilio.com/2010-04-01/Accounts.json".to_string(),
            username: "ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6".to_string(),
            password: "very-secret-token".to_string(),
            headers: HashMap::new(),
            query: vec![],
            form: vec![],
        };

        let debug = format!("{request:?}");
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_reqwest_transport_constructs() {
        let transport = ReqwestTransport::new();
        let _ = format!("{transport:?}");
    }

    #[test]
    fn test_transport_is_object_safe() {
        fn assert_dyn(_: &dyn HttpTransport) {}
        let transport = ReqwestTransport::new();
        assert_dyn(&transport);
    }
}
