//! Worker resource implementation.
//!
//! Workers are the entities that process tasks: agents, bots, or anything
//! else that can be reserved. A worker's JSON `attributes` document is what
//! task queues and workflows match against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A worker in a TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Worker {
    /// The unique identifier of the worker.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The SID of the containing workspace.
    pub workspace_sid: Option<String>,
    /// A human-readable description of the worker.
    pub friendly_name: Option<String>,
    /// The SID of the worker's current activity.
    pub activity_sid: Option<String>,
    /// The name of the worker's current activity.
    pub activity_name: Option<String>,
    /// Whether the worker is currently available for reservations.
    pub available: Option<bool>,
    /// The worker's attributes as a JSON document.
    pub attributes: Option<String>,
    /// The absolute URL of this resource.
    pub url: Option<String>,
    /// When the worker was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the worker was last updated.
    pub date_updated: Option<DateTime<Utc>>,
    /// When the worker last changed activity.
    pub date_status_changed: Option<DateTime<Utc>>,
}

/// Parameters for creating a worker. `friendly_name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWorkerParams {
    /// A human-readable description of the worker.
    pub friendly_name: String,
    /// The SID of the activity the worker starts in (defaults to the
    /// workspace's default activity).
    pub activity_sid: Option<String>,
    /// The worker's attributes as a JSON document.
    pub attributes: Option<String>,
}

/// Parameters for listing workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWorkerParams {
    /// Only include workers in the activity with this name.
    pub activity_name: Option<String>,
    /// Only include workers in the activity with this SID.
    pub activity_sid: Option<String>,
    /// Only include workers with this availability.
    pub available: Option<bool>,
    /// Only include workers with this friendly name.
    pub friendly_name: Option<String>,
    /// Only include workers matching this worker expression.
    pub target_workers_expression: Option<String>,
    /// Only include workers eligible for the task queue with this SID.
    pub task_queue_sid: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a worker. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWorkerParams {
    /// The SID of the activity to move the worker to.
    pub activity_sid: Option<String>,
    /// A replacement attributes JSON document.
    pub attributes: Option<String>,
    /// A new friendly name.
    pub friendly_name: Option<String>,
}

impl Worker {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` or
    /// `friendly_name` is empty.
    pub fn create_request(
        workspace_sid: &str,
        params: &CreateWorkerParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("FriendlyName", &params.friendly_name)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Workers",
        )
        .segment("WorkspaceSid", workspace_sid)
        .param("FriendlyName", &params.friendly_name)
        .param_opt("ActivitySid", params.activity_sid.as_deref())
        .param_opt("Attributes", params.attributes.as_deref())
        .build()?)
    }

    /// Creates a new worker in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        workspace_sid: &str,
        params: &CreateWorkerParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(workspace_sid, params)?, "Worker").await
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
            "Workspaces/{WorkspaceSid}/Workers/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single worker by SID.
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
        fetch_resource(client, Self::fetch_request(workspace_sid, sid)?, "Worker").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` is empty.
    pub fn list_request(
        workspace_sid: &str,
        params: &ListWorkerParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Workers",
        )
        .segment("WorkspaceSid", workspace_sid)
        .query_opt("ActivityName", params.activity_name.as_deref())
        .query_opt("ActivitySid", params.activity_sid.as_deref())
        .query_opt("Available", params.available.map(|v| v.to_string()))
        .query_opt("FriendlyName", params.friendly_name.as_deref())
        .query_opt(
            "TargetWorkersExpression",
            params.target_workers_expression.as_deref(),
        )
        .query_opt("TaskQueueSid", params.task_queue_sid.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists workers in a workspace, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn list(
        client: &RestClient,
        workspace_sid: &str,
        params: &ListWorkerParams,
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
        params: &UpdateWorkerParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Workers/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .param_opt("ActivitySid", params.activity_sid.as_deref())
        .param_opt("Attributes", params.attributes.as_deref())
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .build()?)
    }

    /// Updates a worker: move it between activities or replace attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
        params: &UpdateWorkerParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::update_request(workspace_sid, sid, params)?,
            "Worker",
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
            "Workspaces/{WorkspaceSid}/Workers/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a worker. Succeeds only on 204 No Content.
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
