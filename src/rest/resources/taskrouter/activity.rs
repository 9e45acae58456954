//! Activity resource implementation.
//!
//! Activities describe the states a worker can be in (`Offline`, `Idle`,
//! `Busy`, ...) and whether a worker in that state is available for new
//! reservations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A worker activity in a TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Activity {
    /// The unique identifier of the activity.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The SID of the containing workspace.
    pub workspace_sid: Option<String>,
    /// A human-readable description of the activity.
    pub friendly_name: Option<String>,
    /// Whether workers in this activity can receive reservations.
    pub available: Option<bool>,
    /// The absolute URL of this resource.
    pub url: Option<String>,
    /// When the activity was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the activity was last updated.
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating an activity. `friendly_name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateActivityParams {
    /// A human-readable description of the activity.
    pub friendly_name: String,
    /// Whether workers in this activity can receive reservations
    /// (default `true`).
    pub available: Option<bool>,
}

/// Parameters for listing activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListActivityParams {
    /// Only include activities with this friendly name.
    pub friendly_name: Option<String>,
    /// Only include activities with this availability.
    pub available: Option<bool>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateActivityParams {
    /// A new friendly name.
    pub friendly_name: Option<String>,
}

impl Activity {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` or
    /// `friendly_name` is empty.
    pub fn create_request(
        workspace_sid: &str,
        params: &CreateActivityParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("FriendlyName", &params.friendly_name)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Activities",
        )
        .segment("WorkspaceSid", workspace_sid)
        .param("FriendlyName", &params.friendly_name)
        .param_opt("Available", params.available.map(|v| v.to_string()))
        .build()?)
    }

    /// Creates a new activity in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        workspace_sid: &str,
        params: &CreateActivityParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::create_request(workspace_sid, params)?,
            "Activity",
        )
        .await
    }

    /// Builds the request for [`fetch`](Self::fetch).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` or `sid`
    /// is empty.
    pub fn fetch_request(workspace_sid: &str, sid: &str) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Activities/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single activity by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(workspace_sid, sid)?, "Activity").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` is empty.
    pub fn list_request(
        workspace_sid: &str,
        params: &ListActivityParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Activities",
        )
        .segment("WorkspaceSid", workspace_sid)
        .query_opt("FriendlyName", params.friendly_name.as_deref())
        .query_opt("Available", params.available.map(|v| v.to_string()))
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists activities in a workspace, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn list(
        client: &RestClient,
        workspace_sid: &str,
        params: &ListActivityParams,
    ) -> Result<ResourcePage<Self>, ResourceError> {
        read_page(client, Self::list_request(workspace_sid, params)?).await
    }

    /// Builds the request for [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` or `sid`
    /// is empty.
    pub fn update_request(
        workspace_sid: &str,
        sid: &str,
        params: &UpdateActivityParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Activities/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .build()?)
    }

    /// Updates an activity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
        params: &UpdateActivityParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::update_request(workspace_sid, sid, params)?,
            "Activity",
        )
        .await
    }

    /// Builds the request for [`delete`](Self::delete).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` or `sid`
    /// is empty.
    pub fn delete_request(workspace_sid: &str, sid: &str) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Delete,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Activities/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes an activity no worker is using. Succeeds only on 204 No
    /// Content.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation or transport failures, and
    /// [`ResourceError::Api`] when the API responds with any status other
    /// than 204.
    pub async fn delete(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
    ) -> Result<(), ResourceError> {
        execute_delete(client, Self::delete_request(workspace_sid, sid)?, 204).await
    }
}
