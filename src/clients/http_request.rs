//! Request types for the Twilio API SDK.
//!
//! This module provides the [`RestRequest`] type and its builder. A request
//! carries an HTTP method, the target API subdomain, a resource path template
//! with `{Name}` placeholders, and an ordered list of named [`Parameter`]s
//! tagged with a [`ParamKind`] (form body, query string, or URL segment).

use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods used by the Twilio REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for fetching and listing resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The Twilio API subdomain a request is addressed to.
///
/// Each subdomain has its own host and version path segment. The core API
/// lives at `api.twilio.com/2010-04-01`; TaskRouter at
/// `taskrouter.twilio.com/v1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubDomain {
    /// The core voice/messaging API (`api.twilio.com`, version `2010-04-01`).
    Api,
    /// The TaskRouter API (`taskrouter.twilio.com`, version `v1`).
    TaskRouter,
}

impl SubDomain {
    /// Returns the host name for this subdomain.
    #[must_use]
    pub const fn host(&self) -> &'static str {
        match self {
            Self::Api => "api.twilio.com",
            Self::TaskRouter => "taskrouter.twilio.com",
        }
    }

    /// Returns the version path segment for this subdomain.
    #[must_use]
    pub const fn version(&self) -> &'static str {
        match self {
            Self::Api => "2010-04-01",
            Self::TaskRouter => "v1",
        }
    }
}

/// How a parameter is transmitted on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Sent as a form-encoded body field (POST requests).
    Body,
    /// Appended to the URL query string (GET requests).
    QueryString,
    /// Substituted into a `{Name}` placeholder in the resource template.
    UrlSegment,
}

/// A single named request parameter.
///
/// Parameters keep the order in which they were added; the Twilio API does
/// not require any particular order, but a stable one keeps requests
/// reproducible and tests simple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// The wire name of the parameter (e.g. `CustomerName`).
    pub name: String,
    /// The value, already rendered to a string.
    pub value: String,
    /// How the parameter is transmitted.
    pub kind: ParamKind,
}

impl Parameter {
    /// Creates a form-body parameter.
    #[must_use]
    pub fn body(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: ParamKind::Body,
        }
    }

    /// Creates a query-string parameter.
    #[must_use]
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: ParamKind::QueryString,
        }
    }

    /// Creates a URL-segment parameter.
    #[must_use]
    pub fn segment(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: ParamKind::UrlSegment,
        }
    }
}

/// A request to be executed against the Twilio REST API.
///
/// Use [`RestRequest::builder`] to construct requests with the builder
/// pattern.
///
/// # Example
///
/// ```rust
/// use twilio_api::{HttpMethod, ParamKind, RestRequest, SubDomain};
///
/// let request = RestRequest::builder(
///     HttpMethod::Post,
///     SubDomain::Api,
///     "Accounts/{AccountSid}/Calls.json",
/// )
/// .param("To", "+14155551234")
/// .param("From", "+14155556789")
/// .param("Url", "https://example.com/voice.xml")
/// .build()
/// .unwrap();
///
/// assert_eq!(request.params_of(ParamKind::Body).count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The API subdomain this request is addressed to.
    pub domain: SubDomain,
    /// The resource path template, with `{Name}` placeholders.
    pub resource: String,
    /// The ordered parameter list.
    pub params: Vec<Parameter>,
}

impl RestRequest {
    /// Creates a new builder for constructing a `RestRequest`.
    #[must_use]
    pub fn builder(
        method: HttpMethod,
        domain: SubDomain,
        resource: impl Into<String>,
    ) -> RestRequestBuilder {
        RestRequestBuilder::new(method, domain, resource)
    }

    /// Returns the parameters of the given kind, in insertion order.
    pub fn params_of(&self, kind: ParamKind) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(move |p| p.kind == kind)
    }

    /// Returns the value of the URL-segment parameter with the given name.
    #[must_use]
    pub fn segment_value(&self, name: &str) -> Option<&str> {
        self.params_of(ParamKind::UrlSegment)
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if:
    /// - body-kind parameters are attached to a non-POST request
    /// - the same URL-segment name appears more than once
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.method != HttpMethod::Post && self.params_of(ParamKind::Body).next().is_some() {
            return Err(InvalidRequestError::BodyParamsNotAllowed {
                method: self.method.to_string(),
            });
        }

        let segments: Vec<&str> = self
            .params_of(ParamKind::UrlSegment)
            .map(|p| p.name.as_str())
            .collect();
        for (index, name) in segments.iter().enumerate() {
            if segments[..index].contains(name) {
                return Err(InvalidRequestError::DuplicateSegment {
                    name: (*name).to_string(),
                });
            }
        }

        Ok(())
    }

    /// Resolves the resource template into a concrete path.
    ///
    /// Each `{Name}` placeholder is replaced by the UrlSegment parameter of
    /// the same name (case-sensitive). A remaining `{AccountSid}` placeholder
    /// is filled from `default_account_sid`, so an explicit `AccountSid`
    /// segment overrides the client's stored account (subaccount requests).
    /// Placeholders satisfied by no segment remain literally in the path.
    #[must_use]
    pub fn resolve_path(&self, default_account_sid: &str) -> String {
        let mut path = self.resource.clone();

        for param in self.params_of(ParamKind::UrlSegment) {
            let placeholder = format!("{{{}}}", param.name);
            path = path.replace(&placeholder, &param.value);
        }

        if path.contains("{AccountSid}") {
            path = path.replace("{AccountSid}", default_account_sid);
        }

        path
    }
}

/// Builder for constructing [`RestRequest`] instances.
///
/// The `param`/`query`/`segment` methods append parameters in call order;
/// the `_opt` variants append only when the value is present, recreating the
/// API's "only send what's set" semantics.
#[derive(Debug)]
pub struct RestRequestBuilder {
    method: HttpMethod,
    domain: SubDomain,
    resource: String,
    params: Vec<Parameter>,
}

impl RestRequestBuilder {
    fn new(method: HttpMethod, domain: SubDomain, resource: impl Into<String>) -> Self {
        Self {
            method,
            domain,
            resource: resource.into(),
            params: Vec::new(),
        }
    }

    /// Appends a form-body parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Parameter::body(name, value));
        self
    }

    /// Appends a form-body parameter only when the value is present.
    #[must_use]
    pub fn param_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Appends a query-string parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Parameter::query(name, value));
        self
    }

    /// Appends a query-string parameter only when the value is present.
    #[must_use]
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Appends a URL-segment parameter.
    #[must_use]
    pub fn segment(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Parameter::segment(name, value));
        self
    }

    /// Builds the [`RestRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<RestRequest, InvalidRequestError> {
        let request = RestRequest {
            method: self.method,
            domain: self.domain,
            resource: self.resource,
            params: self.params,
        };
        request.verify()?;
        Ok(request)
    }
}

// Verify request types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestRequest>();
    assert_send_sync::<Parameter>();
};
