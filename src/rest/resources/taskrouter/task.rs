//! Task resource implementation.
//!
//! Tasks are the unit of work TaskRouter routes: each carries a JSON
//! `attributes` document that workflows match against, plus an assignment
//! status that moves through `pending`, `reserved`, `assigned`, and
//! terminal states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A task in a TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Task {
    /// The unique identifier of the task.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The SID of the containing workspace.
    pub workspace_sid: Option<String>,
    /// The SID of the workflow routing the task.
    pub workflow_sid: Option<String>,
    /// The name of the workflow routing the task.
    pub workflow_friendly_name: Option<String>,
    /// The SID of the task queue currently holding the task.
    pub task_queue_sid: Option<String>,
    /// The name of the task queue currently holding the task.
    pub task_queue_friendly_name: Option<String>,
    /// The task's attributes as a JSON document.
    pub attributes: Option<String>,
    /// The assignment status (`pending`, `reserved`, `assigned`, `canceled`,
    /// `completed`).
    pub assignment_status: Option<String>,
    /// The routing priority of the task.
    pub priority: Option<i32>,
    /// The reason recorded when the task was canceled or completed.
    pub reason: Option<String>,
    /// The age of the task in seconds.
    pub age: Option<u32>,
    /// Seconds the task may stay pending before timing out.
    pub timeout: Option<u32>,
    /// The absolute URL of this resource.
    pub url: Option<String>,
    /// When the task was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the task was last updated.
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating a task. `workflow_sid` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskParams {
    /// The SID of the workflow that routes the task.
    pub workflow_sid: String,
    /// The task's attributes as a JSON document.
    pub attributes: Option<String>,
    /// Seconds the task may stay pending before timing out (default 86400).
    pub timeout: Option<u32>,
    /// The routing priority of the task (default 0).
    pub priority: Option<i32>,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTaskParams {
    /// Only include tasks with this priority.
    pub priority: Option<i32>,
    /// Only include tasks with this assignment status.
    pub assignment_status: Option<String>,
    /// Only include tasks routed by the workflow with this SID.
    pub workflow_sid: Option<String>,
    /// Only include tasks held in the task queue with this SID.
    pub task_queue_sid: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a task. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskParams {
    /// A replacement attributes JSON document.
    pub attributes: Option<String>,
    /// A new assignment status (`canceled` or `completed` to close the task).
    pub assignment_status: Option<String>,
    /// The reason for canceling or completing the task.
    pub reason: Option<String>,
    /// A new routing priority.
    pub priority: Option<i32>,
}

impl Task {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` or
    /// `workflow_sid` is empty.
    pub fn create_request(
        workspace_sid: &str,
        params: &CreateTaskParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("WorkflowSid", &params.workflow_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Tasks",
        )
        .segment("WorkspaceSid", workspace_sid)
        .param("WorkflowSid", &params.workflow_sid)
        .param_opt("Attributes", params.attributes.as_deref())
        .param_opt("Timeout", params.timeout.map(|v| v.to_string()))
        .param_opt("Priority", params.priority.map(|v| v.to_string()))
        .build()?)
    }

    /// Creates a new task in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        workspace_sid: &str,
        params: &CreateTaskParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(workspace_sid, params)?, "Task").await
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
            "Workspaces/{WorkspaceSid}/Tasks/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single task by SID.
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
        fetch_resource(client, Self::fetch_request(workspace_sid, sid)?, "Task").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` is empty.
    pub fn list_request(
        workspace_sid: &str,
        params: &ListTaskParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Tasks",
        )
        .segment("WorkspaceSid", workspace_sid)
        .query_opt("Priority", params.priority.map(|v| v.to_string()))
        .query_opt("AssignmentStatus", params.assignment_status.as_deref())
        .query_opt("WorkflowSid", params.workflow_sid.as_deref())
        .query_opt("TaskQueueSid", params.task_queue_sid.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists tasks in a workspace, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn list(
        client: &RestClient,
        workspace_sid: &str,
        params: &ListTaskParams,
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
        params: &UpdateTaskParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Tasks/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .param_opt("Attributes", params.attributes.as_deref())
        .param_opt("AssignmentStatus", params.assignment_status.as_deref())
        .param_opt("Reason", params.reason.as_deref())
        .param_opt("Priority", params.priority.map(|v| v.to_string()))
        .build()?)
    }

    /// Updates a task: change attributes, priority, or close it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
        params: &UpdateTaskParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::update_request(workspace_sid, sid, params)?,
            "Task",
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
            "Workspaces/{WorkspaceSid}/Tasks/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a task. Succeeds only on 204 No Content.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParamKind;

    const WORKSPACE_SID: &str = "WS0000000000000000000000000000000a";

    #[test]
    fn test_create_request_golden_values() {
        let request = Task::create_request(
            WORKSPACE_SID,
            &CreateTaskParams {
                workflow_sid: "WW0000000000000000000000000000000a".to_string(),
                attributes: Some(r#"{"type":"support","language":"en"}"#.to_string()),
                timeout: Some(3600),
                priority: Some(10),
            },
        )
        .unwrap();

        assert_eq!(request.resource, "Workspaces/{WorkspaceSid}/Tasks");

        let body: Vec<(&str, &str)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            body,
            vec![
                ("WorkflowSid", "WW0000000000000000000000000000000a"),
                ("Attributes", r#"{"type":"support","language":"en"}"#),
                ("Timeout", "3600"),
                ("Priority", "10"),
            ]
        );
    }

    #[test]
    fn test_create_request_requires_workflow_sid() {
        let result = Task::create_request(WORKSPACE_SID, &CreateTaskParams::default());

        assert!(matches!(
            result,
            Err(ResourceError::EmptyArgument { argument }) if argument == "WorkflowSid"
        ));
    }

    #[test]
    fn test_update_request_completes_task_with_reason() {
        let request = Task::update_request(
            WORKSPACE_SID,
            "WT0000000000000000000000000000000a",
            &UpdateTaskParams {
                assignment_status: Some("completed".to_string()),
                reason: Some("resolved by agent".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let body: Vec<(&str, &str)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            body,
            vec![
                ("AssignmentStatus", "completed"),
                ("Reason", "resolved by agent"),
            ]
        );
    }

    #[test]
    fn test_list_request_renders_priority_filter() {
        let request = Task::list_request(
            WORKSPACE_SID,
            &ListTaskParams {
                priority: Some(5),
                assignment_status: Some("pending".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let query: Vec<(&str, &str)> = request
            .params_of(ParamKind::QueryString)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            query,
            vec![("Priority", "5"), ("AssignmentStatus", "pending")]
        );
    }

    #[test]
    fn test_task_deserialization() {
        let json = r#"{
            "sid": "WT0000000000000000000000000000000a",
            "workspace_sid": "WS0000000000000000000000000000000a",
            "workflow_friendly_name": "Sales Routing",
            "attributes": "{\"type\":\"support\"}",
            "assignment_status": "pending",
            "priority": 0,
            "age": 25,
            "timeout": 86400,
            "date_created": "2014-05-14T10:50:02Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.assignment_status.as_deref(), Some("pending"));
        assert_eq!(task.priority, Some(0));
        assert_eq!(task.age, Some(25));
        assert!(task.reason.is_none());
    }
}
