//! Workflow resource implementation.
//!
//! Workflows route tasks into task queues. The routing rules live in the
//! `configuration` field, a JSON document the API stores verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A workflow in a TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Workflow {
    /// The unique identifier of the workflow.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The SID of the containing workspace.
    pub workspace_sid: Option<String>,
    /// A human-readable description of the workflow.
    pub friendly_name: Option<String>,
    /// A URL TaskRouter posts assignment callbacks to.
    pub assignment_callback_url: Option<String>,
    /// A fallback URL for assignment callbacks.
    pub fallback_assignment_callback_url: Option<String>,
    /// The routing configuration as a JSON document.
    pub configuration: Option<String>,
    /// Seconds a reservation may stay pending before timing out.
    pub task_reservation_timeout: Option<u32>,
    /// The content type of assignment callback documents.
    pub document_content_type: Option<String>,
    /// The absolute URL of this resource.
    pub url: Option<String>,
    /// When the workflow was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the workflow was last updated.
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating a workflow.
///
/// `friendly_name` and `configuration` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWorkflowParams {
    /// A human-readable description of the workflow.
    pub friendly_name: String,
    /// The routing configuration as a JSON document.
    pub configuration: String,
    /// A URL TaskRouter posts assignment callbacks to.
    pub assignment_callback_url: Option<String>,
    /// A fallback URL for assignment callbacks.
    pub fallback_assignment_callback_url: Option<String>,
    /// Seconds a reservation may stay pending before timing out.
    pub task_reservation_timeout: Option<u32>,
}

/// Parameters for listing workflows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWorkflowParams {
    /// Only include workflows with this friendly name.
    pub friendly_name: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a workflow. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWorkflowParams {
    /// A new friendly name.
    pub friendly_name: Option<String>,
    /// A new assignment callback URL.
    pub assignment_callback_url: Option<String>,
    /// A new fallback assignment callback URL.
    pub fallback_assignment_callback_url: Option<String>,
    /// A replacement routing configuration JSON document.
    pub configuration: Option<String>,
    /// A new reservation timeout in seconds.
    pub task_reservation_timeout: Option<u32>,
}

impl Workflow {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid`,
    /// `friendly_name`, or `configuration` is empty.
    pub fn create_request(
        workspace_sid: &str,
        params: &CreateWorkflowParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("FriendlyName", &params.friendly_name)?;
        require("Configuration", &params.configuration)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Workflows",
        )
        .segment("WorkspaceSid", workspace_sid)
        .param("FriendlyName", &params.friendly_name)
        .param("Configuration", &params.configuration)
        .param_opt(
            "AssignmentCallbackUrl",
            params.assignment_callback_url.as_deref(),
        )
        .param_opt(
            "FallbackAssignmentCallbackUrl",
            params.fallback_assignment_callback_url.as_deref(),
        )
        .param_opt(
            "TaskReservationTimeout",
            params.task_reservation_timeout.map(|v| v.to_string()),
        )
        .build()?)
    }

    /// Creates a new workflow in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        workspace_sid: &str,
        params: &CreateWorkflowParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::create_request(workspace_sid, params)?,
            "Workflow",
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
            "Workspaces/{WorkspaceSid}/Workflows/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single workflow by SID.
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
        fetch_resource(client, Self::fetch_request(workspace_sid, sid)?, "Workflow").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `workspace_sid` is empty.
    pub fn list_request(
        workspace_sid: &str,
        params: &ListWorkflowParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Workflows",
        )
        .segment("WorkspaceSid", workspace_sid)
        .query_opt("FriendlyName", params.friendly_name.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists workflows in a workspace, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn list(
        client: &RestClient,
        workspace_sid: &str,
        params: &ListWorkflowParams,
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
        params: &UpdateWorkflowParams,
    ) -> Result<RestRequest, ResourceError> {
        require("WorkspaceSid", workspace_sid)?;
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::TaskRouter,
            "Workspaces/{WorkspaceSid}/Workflows/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .param_opt(
            "AssignmentCallbackUrl",
            params.assignment_callback_url.as_deref(),
        )
        .param_opt(
            "FallbackAssignmentCallbackUrl",
            params.fallback_assignment_callback_url.as_deref(),
        )
        .param_opt("Configuration", params.configuration.as_deref())
        .param_opt(
            "TaskReservationTimeout",
            params.task_reservation_timeout.map(|v| v.to_string()),
        )
        .build()?)
    }

    /// Updates a workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        workspace_sid: &str,
        sid: &str,
        params: &UpdateWorkflowParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(
            client,
            Self::update_request(workspace_sid, sid, params)?,
            "Workflow",
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
            "Workspaces/{WorkspaceSid}/Workflows/{Sid}",
        )
        .segment("WorkspaceSid", workspace_sid)
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a workflow. Succeeds only on 204 No Content.
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

    fn routing_config() -> String {
        r#"{"task_routing":{"default_filter":{"queue":"WQ00000000000000000000000000000000"}}}"#
            .to_string()
    }

    #[test]
    fn test_create_request_golden_values() {
        let request = Workflow::create_request(
            WORKSPACE_SID,
            &CreateWorkflowParams {
                friendly_name: "Sales Routing".to_string(),
                configuration: routing_config(),
                assignment_callback_url: Some("https://example.com/assign".to_string()),
                fallback_assignment_callback_url: None,
                task_reservation_timeout: Some(120),
            },
        )
        .unwrap();

        assert_eq!(request.resource, "Workspaces/{WorkspaceSid}/Workflows");

        let body: Vec<(&str, &str)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(body.len(), 4);
        assert_eq!(body[0].0, "FriendlyName");
        assert_eq!(body[1].0, "Configuration");
        assert_eq!(body[2], ("AssignmentCallbackUrl", "https://example.com/assign"));
        assert_eq!(body[3], ("TaskReservationTimeout", "120"));
    }

    #[test]
    fn test_create_request_requires_configuration() {
        let result = Workflow::create_request(
            WORKSPACE_SID,
            &CreateWorkflowParams {
                friendly_name: "Sales Routing".to_string(),
                ..Default::default()
            },
        );

        assert!(matches!(
            result,
            Err(ResourceError::EmptyArgument { argument }) if argument == "Configuration"
        ));
    }

    #[test]
    fn test_workflow_deserialization() {
        let json = r#"{
            "sid": "WW0000000000000000000000000000000a",
            "workspace_sid": "WS0000000000000000000000000000000a",
            "friendly_name": "Sales Routing",
            "task_reservation_timeout": 120,
            "document_content_type": "application/json",
            "date_created": "2014-05-14T10:50:02Z"
        }"#;

        let workflow: Workflow = serde_json::from_str(json).unwrap();

        assert_eq!(workflow.task_reservation_timeout, Some(120));
        assert_eq!(
            workflow.document_content_type.as_deref(),
            Some("application/json")
        );
        assert!(workflow.configuration.is_none());
    }
}
