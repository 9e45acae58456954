//! Workspace resource implementation.
//!
//! Workspaces are the top-level TaskRouter container: workflows, workers,
//! task queues, activities, and tasks all live inside one.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::taskrouter::{Workspace, CreateWorkspaceParams};
//!
//! let workspace = Workspace::create(&client, &CreateWorkspaceParams {
//!     friendly_name: "Customer Support".to_string(),
//!     event_callback_url: Some("https://example.com/events".to_string()),
//!     template: None,
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Workspace {
    /// The unique identifier of the workspace.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// A human-readable description of the workspace.
    pub friendly_name: Option<String>,
    /// A URL TaskRouter posts workspace events to.
    pub event_callback_url: Option<String>,
    /// The SID of the activity new workers start in.
    pub default_activity_sid: Option<String>,
    /// The name of the activity new workers start in.
    pub default_activity_name: Option<String>,
    /// The SID of the activity workers move to when a reservation times out.
    pub timeout_activity_sid: Option<String>,
    /// The name of the activity workers move to when a reservation times out.
    pub timeout_activity_name: Option<String>,
    /// The absolute URL of this resource.
    pub url: Option<String>,
    /// When the workspace was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the workspace was last updated.
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating a workspace. `friendly_name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWorkspaceParams {
    /// A human-readable description of the workspace.
    pub friendly_name: String,
    /// A URL TaskRouter posts workspace events to.
    pub event_callback_url: Option<String>,
    /// A pre-configured template (`NONE` or `FIFO`).
    pub template: Option<String>,
}

/// Parameters for listing workspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWorkspaceParams {
    /// Only include workspaces with this friendly name.
    pub friendly_name: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a workspace. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWorkspaceParams {
    /// A new friendly name.
    pub friendly_name: Option<String>,
    /// A new event callback URL.
    pub event_callback_url: Option<String>,
    /// The SID of the activity new workers should start in.
    pub default_activity_sid: Option<String>,
    /// The SID of the activity workers move to when a reservation times out.
    pub timeout_activity_sid: Option<String>,
}

impl Workspace {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `friendly_name` is empty.
    pub fn create_request(params: &CreateWorkspaceParams) -> Result<RestRequest, ResourceError> {
        require("FriendlyName", &params.friendly_name)?;

        Ok(
            RestRequest::builder(HttpMethod::Post, SubDomain::TaskRouter, "Workspaces")
                .param("FriendlyName", &params.friendly_name)
                .param_opt("EventCallbackUrl", params.event_callback_url.as_deref())
                .param_opt("Template", params.template.as_deref())
                .build()?,
        )
    }

    /// Creates a new workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        params: &CreateWorkspaceParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(params)?, "Workspace").await
    }

    /// Builds the request for [`fetch`](Self::fetch).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `sid` is empty.
    pub fn fetch_request(sid: &str) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(
            RestRequest::builder(HttpMethod::Get, SubDomain::TaskRouter, "Workspaces/{Sid}")
                .segment("Sid", sid)
                .build()?,
        )
    }

    /// Fetches a single workspace by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(client: &RestClient, sid: &str) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(sid)?, "Workspace").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails validation.
    pub fn list_request(params: &ListWorkspaceParams) -> Result<RestRequest, ResourceError> {
        Ok(
            RestRequest::builder(HttpMethod::Get, SubDomain::TaskRouter, "Workspaces")
                .query_opt("FriendlyName", params.friendly_name.as_deref())
                .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
                .build()?,
        )
    }

    /// Lists workspaces, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures.
    pub async fn list(
        client: &RestClient,
        params: &ListWorkspaceParams,
    ) -> Result<ResourcePage<Self>, ResourceError> {
        read_page(client, Self::list_request(params)?).await
    }

    /// Builds the request for [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `sid` is empty.
    pub fn update_request(
        sid: &str,
        params: &UpdateWorkspaceParams,
    ) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(
            RestRequest::builder(HttpMethod::Post, SubDomain::TaskRouter, "Workspaces/{Sid}")
                .segment("Sid", sid)
                .param_opt("FriendlyName", params.friendly_name.as_deref())
                .param_opt("EventCallbackUrl", params.event_callback_url.as_deref())
                .param_opt(
                    "DefaultActivitySid",
                    params.default_activity_sid.as_deref(),
                )
                .param_opt(
                    "TimeoutActivitySid",
                    params.timeout_activity_sid.as_deref(),
                )
                .build()?,
        )
    }

    /// Updates a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        sid: &str,
        params: &UpdateWorkspaceParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::update_request(sid, params)?, "Workspace").await
    }

    /// Builds the request for [`delete`](Self::delete).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `sid` is empty.
    pub fn delete_request(sid: &str) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Delete,
            SubDomain::TaskRouter,
            "Workspaces/{Sid}",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a workspace and everything in it. Succeeds only on 204 No
    /// Content.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation or transport failures, and
    /// [`ResourceError::Api`] when the API responds with any status other
    /// than 204.
    pub async fn delete(client: &RestClient, sid: &str) -> Result<(), ResourceError> {
        execute_delete(client, Self::delete_request(sid)?, 204).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParamKind;

    #[test]
    fn test_create_request_targets_taskrouter_domain() {
        let request = Workspace::create_request(&CreateWorkspaceParams {
            friendly_name: "Customer Support".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(request.domain, SubDomain::TaskRouter);
        assert_eq!(request.resource, "Workspaces");
        assert_eq!(request.params_of(ParamKind::Body).count(), 1);
    }

    #[test]
    fn test_create_request_includes_optional_fields_when_set() {
        let request = Workspace::create_request(&CreateWorkspaceParams {
            friendly_name: "Customer Support".to_string(),
            event_callback_url: Some("https://example.com/events".to_string()),
            template: Some("FIFO".to_string()),
        })
        .unwrap();

        let body: Vec<(&str, &str)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            body,
            vec![
                ("FriendlyName", "Customer Support"),
                ("EventCallbackUrl", "https://example.com/events"),
                ("Template", "FIFO"),
            ]
        );
    }

    #[test]
    fn test_workspace_templates_have_no_json_suffix() {
        let fetch = Workspace::fetch_request("WS0000000000000000000000000000000a").unwrap();
        assert_eq!(fetch.resource, "Workspaces/{Sid}");

        let delete = Workspace::delete_request("WS0000000000000000000000000000000a").unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.resource, "Workspaces/{Sid}");
    }

    #[test]
    fn test_workspace_deserialization_with_iso_dates() {
        let json = r#"{
            "sid": "WS0000000000000000000000000000000a",
            "account_sid": "ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6",
            "friendly_name": "Customer Support",
            "default_activity_name": "Offline",
            "date_created": "2014-05-14T10:50:02Z",
            "date_updated": "2014-05-15T16:03:42Z",
            "url": "https://taskrouter.twilio.com/v1/Workspaces/WS0000000000000000000000000000000a"
        }"#;

        let workspace: Workspace = serde_json::from_str(json).unwrap();

        assert_eq!(
            workspace.friendly_name.as_deref(),
            Some("Customer Support")
        );
        assert!(workspace.date_created.is_some());
        assert!(workspace.event_callback_url.is_none());
    }
}
