//! TaskQueue resource implementation.
//!
//! Task queues hold tasks until an eligible worker is reserved. Eligibility
//! comes from the `target_workers` expression; the reservation and
//! assignment activities control which states workers pass through while
//! handling a task from the queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A task queue in a TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaskQueue {
    /// The unique identifier of the task queue.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The SID of the containing workspace.
    pub workspace_sid: Option<String>,
    /// A human-readable description of the task queue.
    pub friendly_name: Option<String>,
    /// The worker expression that determines eligibility for this queue.
    pub target_workers: Option<String>,
    /// The SID of the activity workers enter when reserved from this queue.
    pub reservation_activity_sid: Option<String>,
    /// The name of the reservation activity.
    pub reservation_activity_name: Option<String>,
    /// The SID of the activity workers enter when assigned from this queue.
    pub assignment_activity_sid: Option<String>,
    /// The name of the assignment activity.
    pub assignment_activity_name: Option<String>,
    /// The maximum number of workers to reserve per task.
    pub max_reserved_workers: Option<u32>,
    /// The absolute URL of this resource.
    pub url: Option<String>,
    /// When the task queue was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the task queue was last updated.
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating a task queue.
///
/// `friendly_name`, `reservation_activity_sid`, and
/// `assignment_activity_sid` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskQueueParams {
    /// A human-readable description of the task queue.
    pub friendly_name: String,
    /// The SID of the activity workers enter when reserved.
    pub reservation_activity_sid: String,
    /// The SID of the activity workers enter when assigned.
    pub assignment_activity_sid: String,
    /// The worker expression that determines eligibility (defaults to all
    /// workers).
    pub target_workers: Option<String>,
    /// The maximum number of workers to reserve per task (default 1, max 50).
    pub max_reserved_workers: Option<u32>,
}

/// Parameters for listing task queues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTaskQueueParams {
    /// Only include task queues with this friendly name.
    pub friendly_name: Option<String>,
    /// Only include task queues a worker with these attributes is eligible
    /// for.
    pub evaluate_worker_attributes: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a task queue. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskQueueParams {
    /// A new friendly name.
    pub friendly_name: Option<String>,
    /// A new eligibility expression.
    pub target_workers: Option<String>,
    /// A new reservation activity SID.
    pub reservation_activity_sid: Option<String>,
    /// A new assignment activity SID.
    pub assignment_activity_sid: Option<String>,
    /// A new maximum number of reserved workers.
    pub max_reserved_workers: Option<u32>,
}

impl TaskQueue {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if a required field is empty.
    pub fn create_request(
        workspace_sid: &str,
        params: &CreateTaskQueueParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("FriendlyName", &params.friendly_name)?;
        require("ReservationActivitySid", &params.reservation_activity_sid)?;
        require("AssignmentActivitySid", &params.assignment_activity_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/TaskQueues",
        )
        .segment("WorkspaceSid", workspace_sid)
        .param("FriendlyName", &params.friendly_name)
        .param(
            "ReservationActivitySid",
            &params.reservation_activity_sid,
        )
        .param("AssignmentActivitySid", &params.assignment_activity_sid)
        .param_opt("TargetWorkers", params.target_workers.as_deref())
        .param_opt(
            "MaxReservedWorkers",
            params.max_reserved_workers.map(|v| v.to_string()),
        )
        .build()?)
    }

    /// Creates a new task queue in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        workspace_sid: &str,
        params: &CreateTaskQueueParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::create_request(workspace_sid, params)?,
            "TaskQueue",
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
            "Workspaces/{WorkspaceSid}/TaskQueues/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single task queue by SID.
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
        fetch_resource(client, Self::fetch_request(workspace_sid, sid)?, "TaskQueue").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` is empty.
    pub fn list_request(
        workspace_sid: &str,
        params: &ListTaskQueueParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/TaskQueues",
        )
        .segment("WorkspaceSid", workspace_sid)
        .query_opt("FriendlyName", params.friendly_name.as_deref())
        .query_opt(
            "EvaluateWorkerAttributes",
            params.evaluate_worker_attributes.as_deref(),
        )
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists task queues in a workspace, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn list(
        client: &RestClient,
        workspace_sid: &str,
        params: &ListTaskQueueParams,
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
        params: &UpdateTaskQueueParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/TaskQueues/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .param_opt("TargetWorkers", params.target_workers.as_deref())
        .param_opt(
            "ReservationActivitySid",
            params.reservation_activity_sid.as_deref(),
        )
        .param_opt(
            "AssignmentActivitySid",
            params.assignment_activity_sid.as_deref(),
        )
        .param_opt(
            "MaxReservedWorkers",
            params.max_reserved_workers.map(|v| v.to_string()),
        )
        .build()?)
    }

    /// Updates a task queue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
        params: &UpdateTaskQueueParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::update_request(workspace_sid, sid, params)?,
            "TaskQueue",
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
            "Workspaces/{WorkspaceSid}/TaskQueues/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a task queue. Succeeds only on 204 No Content.
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
