//! Shared execution helpers for resource operations.
//!
//! Every resource operation follows the same four steps: validate arguments,
//! build a [`RestRequest`], execute it, and interpret the response. The
//! helpers here implement the last two steps so each resource module only
//! contributes its templates and parameter lists.

use serde::de::DeserializeOwned;

use crate::clients::{RestClient, RestRequest};
use crate::rest::errors::{ApiError, ResourceError};
use crate::rest::page::ResourcePage;

/// Validates that a required argument is non-empty.
///
/// Called before any request is built, so missing arguments fail fast
/// without I/O.
pub(crate) fn require(argument: &'static str, value: &str) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::EmptyArgument { argument });
    }
    Ok(())
}

/// Executes a request and deserializes the body into a single resource.
///
/// `context` names the resource in deserialization errors.
pub(crate) async fn fetch_resource<T: DeserializeOwned>(
    client: &RestClient,
    request: RestRequest,
    context: &'static str,
) -> Result<T, ResourceError> {
    let response = client.execute(request).await?;

    if !response.is_ok() {
        return Err(ApiError::from_response(&response).into());
    }

    serde_json::from_str(&response.body).map_err(|source| ResourceError::Deserialization {
        context: context.to_string(),
        source,
    })
}

/// Executes a request and deserializes the body into a page of resources.
pub(crate) async fn read_page<T: DeserializeOwned>(
    client: &RestClient,
    request: RestRequest,
) -> Result<ResourcePage<T>, ResourceError> {
    let response = client.execute(request).await?;

    if !response.is_ok() {
        return Err(ApiError::from_response(&response).into());
    }

    ResourcePage::from_http_response(&response)
}

/// Executes a delete-style request, succeeding only on the expected status.
///
/// The Twilio API signals delete success with a status code (204 No Content)
/// rather than a parsed body, and the expectation is checked per operation
/// rather than generalized. Any other status — including other 2xx codes —
/// is reported as an API error.
pub(crate) async fn execute_delete(
    client: &RestClient,
    request: RestRequest,
    expected_status: u16,
) -> Result<(), ResourceError> {
    let response = client.execute(request).await?;

    if response.code == expected_status {
        return Ok(());
    }

    Err(ApiError::from_response(&response).into())
}
