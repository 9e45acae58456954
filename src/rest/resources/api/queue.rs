//! Queue resource implementation.
//!
//! Call queues hold callers (enqueued by TwiML `<Enqueue>`) until they are
//! dequeued by another call leg.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::dates;
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A call queue in a Twilio account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Queue {
    /// The unique identifier of the queue.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// A human-readable description of the queue.
    pub friendly_name: Option<String>,
    /// The number of calls currently waiting in the queue.
    pub current_size: Option<u32>,
    /// The maximum number of calls the queue can hold.
    pub max_size: Option<u32>,
    /// The average wait time in seconds of current queue members.
    pub average_wait_time: Option<u32>,
    /// The URI of this resource, relative to the API base.
    pub uri: Option<String>,
    /// When the queue was created.
    #[serde(default, with = "dates::rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the queue was last updated.
    #[serde(default, with = "dates::rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating a queue. `friendly_name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateQueueParams {
    /// A human-readable description of the queue.
    pub friendly_name: String,
    /// The maximum number of calls the queue can hold (default 100, max 5000).
    pub max_size: Option<u32>,
}

/// Parameters for listing queues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQueueParams {
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a queue. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateQueueParams {
    /// A new friendly name.
    pub friendly_name: Option<String>,
    /// A new maximum size.
    pub max_size: Option<u32>,
}

impl Queue {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `friendly_name` is empty.
    pub fn create_request(params: &CreateQueueParams) -> Result<RestRequest, ResourceError> {
        require("FriendlyName", &params.friendly_name)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Queues.json",
        )
        .param("FriendlyName", &params.friendly_name)
        .param_opt("MaxSize", params.max_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Creates a new queue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        params: &CreateQueueParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(params)?, "Queue").await
    }

    /// Builds the request for [`fetch`](Self::fetch).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `sid` is empty.
    pub fn fetch_request(sid: &str) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::Api,
            "Accounts/{AccountSid}/Queues/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single queue by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(client: &RestClient, sid: &str) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(sid)?, "Queue").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails validation.
    pub fn list_request(params: &ListQueueParams) -> Result<RestRequest, ResourceError> {
        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::Api,
            "Accounts/{AccountSid}/Queues.json",
        )
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists queues, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures.
    pub async fn list(
        client: &RestClient,
        params: &ListQueueParams,
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
        params: &UpdateQueueParams,
    ) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Queues/{Sid}.json",
        )
        .segment("Sid", sid)
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .param_opt("MaxSize", params.max_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Updates a queue.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        sid: &str,
        params: &UpdateQueueParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::update_request(sid, params)?, "Queue").await
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
            SubDomain::Api,
            "Accounts/{AccountSid}/Queues/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes an empty queue. Succeeds only on 204 No Content.
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
    fn test_create_request_golden_values() {
        let request = Queue::create_request(&CreateQueueParams {
            friendly_name: "support".to_string(),
            max_size: Some(200),
        })
        .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.resource, "Accounts/{AccountSid}/Queues.json");

        let body: Vec<(&str, &str)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(body, vec![("FriendlyName", "support"), ("MaxSize", "200")]);
    }

    #[test]
    fn test_create_request_requires_friendly_name() {
        let result = Queue::create_request(&CreateQueueParams::default());
        assert!(matches!(
            result,
            Err(ResourceError::EmptyArgument { argument }) if argument == "FriendlyName"
        ));
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let request = Queue::update_request(
            "QU0000000000000000000000000000000a",
            &UpdateQueueParams {
                max_size: Some(50),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(request.params_of(ParamKind::Body).count(), 1);
    }

    #[test]
    fn test_queue_deserialization() {
        let json = r#"{
            "sid": "QU0000000000000000000000000000000a",
            "friendly_name": "support",
            "current_size": 3,
            "max_size": 100,
            "average_wait_time": 42
        }"#;

        let queue: Queue = serde_json::from_str(json).unwrap();

        assert_eq!(queue.current_size, Some(3));
        assert_eq!(queue.average_wait_time, Some(42));
        assert!(queue.date_created.is_none());
    }
}
