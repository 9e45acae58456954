//! REST executor for the Twilio API.
//!
//! This module provides the [`RestClient`] type: given stored credentials and
//! a [`RestRequest`], it resolves URL segments, applies basic authentication,
//! dispatches the call through the configured [`HttpTransport`], and returns
//! the raw [`HttpResponse`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::http_request::{HttpMethod, ParamKind, RestRequest, SubDomain};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use crate::clients::HttpError;
use crate::config::{AccountSid, AuthToken, TwilioConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST executor for the Twilio API.
///
/// The client holds the account SID and auth token supplied at construction
/// and applies them to every request: basic authentication on the wire, and
/// substitution of the `{AccountSid}` segment in account-scoped resource
/// templates (unless an explicit `AccountSid` URL-segment parameter
/// overrides it, for subaccount requests).
///
/// A non-2xx status is not an executor-level error — the response is handed
/// back as-is and callers inspect the status code. Only request-validation
/// and transport failures produce an `Err`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twilio_api::{AccountSid, AuthToken, RestClient, TwilioConfig};
/// use twilio_api::rest::resources::api::{Call, CreateCallParams};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC...")?)
///     .auth_token(AuthToken::new("token")?)
///     .build()?;
/// let client = RestClient::new(&config);
///
/// let call = Call::create(&client, &CreateCallParams {
///     to: "+14155551234".to_string(),
///     from: "+14155556789".to_string(),
///     url: "https://example.com/voice.xml".to_string(),
///     ..Default::default()
/// }).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The pluggable HTTP transport.
    transport: Arc<dyn HttpTransport>,
    /// The account SID used for auth and `{AccountSid}` substitution.
    account_sid: AccountSid,
    /// The auth token used for basic authentication.
    auth_token: AuthToken,
    /// Base URL for the core API (default `https://api.twilio.com`).
    api_base: String,
    /// Base URL for TaskRouter (default `https://taskrouter.twilio.com`).
    taskrouter_base: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new client with the default [`ReqwestTransport`].
    #[must_use]
    pub fn new(config: &TwilioConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a new client with an injected transport.
    ///
    /// This is the seam for test doubles: inject a transport that records
    /// requests and returns canned responses instead of performing I/O.
    #[must_use]
    pub fn with_transport(config: &TwilioConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let api_base = config.api_host().map_or_else(
            || format!("https://{}", SubDomain::Api.host()),
            |host| host.as_ref().to_string(),
        );
        let taskrouter_base = config.taskrouter_host().map_or_else(
            || format!("https://{}", SubDomain::TaskRouter.host()),
            |host| host.as_ref().to_string(),
        );

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Twilio API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            transport,
            account_sid: config.account_sid().clone(),
            auth_token: config.auth_token().clone(),
            api_base,
            taskrouter_base,
            default_headers,
        }
    }

    /// Returns the account SID this client authenticates as.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the base URL used for the given subdomain.
    #[must_use]
    pub fn base_url(&self, domain: SubDomain) -> &str {
        match domain {
            SubDomain::Api => &self.api_base,
            SubDomain::TaskRouter => &self.taskrouter_base,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a request against the Twilio API.
    ///
    /// This method:
    /// - validates the request
    /// - resolves `{Name}` placeholders from UrlSegment parameters, filling
    ///   a remaining `{AccountSid}` from the stored account SID
    /// - splits Body parameters into the form body and QueryString
    ///   parameters into the query string
    /// - applies basic authentication and dispatches through the transport
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if validation fails and
    /// [`HttpError::Network`] for transport failures. A non-2xx response is
    /// returned as `Ok`.
    pub async fn execute(&self, request: RestRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let path = request.resolve_path(self.account_sid.as_ref());
        if path.contains('{') {
            tracing::warn!(
                "Unresolved placeholder in resource path '{}'; the request will likely 404",
                path
            );
        }

        let url = format!(
            "{}/{}/{}",
            self.base_url(request.domain),
            request.domain.version(),
            path
        );

        let query: Vec<(String, String)> = request
            .params_of(ParamKind::QueryString)
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect();
        let form: Vec<(String, String)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect();

        tracing::debug!("Dispatching {} request to {}", request.method, url);

        let response = self
            .transport
            .execute(TransportRequest {
                method: request.method,
                url,
                username: self.account_sid.as_ref().to_string(),
                password: self.auth_token.as_ref().to_string(),
                headers: self.default_headers.clone(),
                query,
                form,
            })
            .await?;

        Ok(HttpResponse::new(
            response.code,
            response.headers,
            response.body,
        ))
    }

    /// Fetches an absolute URL with the stored credentials.
    ///
    /// Used to follow the absolute pagination URLs (`next_page_url`,
    /// `previous_page_url`) returned in list metadata.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for transport failures.
    pub async fn get_url(&self, url: &str) -> Result<HttpResponse, HttpError> {
        tracing::debug!("Dispatching get request to {}", url);

        let response = self
            .transport
            .execute(TransportRequest {
                method: HttpMethod::Get,
                url: url.to_string(),
                username: self.account_sid.as_ref().to_string(),
                password: self.auth_token.as_ref().to_string(),
                headers: self.default_headers.clone(),
                query: Vec::new(),
                form: Vec::new(),
            })
            .await?;

        Ok(HttpResponse::new(
            response.code,
            response.headers,
            response.body,
        ))
    }
}
