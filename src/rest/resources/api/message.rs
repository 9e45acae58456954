//! Message resource implementation.
//!
//! Messages represent inbound and outbound SMS/MMS. Creating a message sends
//! it; updating with an empty `Body` redacts the stored message text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::dates;
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// An SMS or MMS message in a Twilio account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Message {
    /// The unique identifier of the message.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The destination phone number.
    pub to: Option<String>,
    /// The sending phone number.
    pub from: Option<String>,
    /// The text of the message.
    pub body: Option<String>,
    /// The delivery status (`queued`, `sending`, `sent`, `delivered`,
    /// `undelivered`, `failed`, ...).
    pub status: Option<String>,
    /// The direction of the message (`inbound`, `outbound-api`, ...).
    pub direction: Option<String>,
    /// The number of SMS segments, as reported by the API.
    pub num_segments: Option<String>,
    /// The charge for the message, as a decimal string.
    pub price: Option<String>,
    /// The currency of `price`.
    pub price_unit: Option<String>,
    /// The URI of this resource, relative to the API base.
    pub uri: Option<String>,
    /// When the message was sent.
    #[serde(default, with = "dates::rfc2822")]
    pub date_sent: Option<DateTime<Utc>>,
    /// When the message resource was created.
    #[serde(default, with = "dates::rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the message resource was last updated.
    #[serde(default, with = "dates::rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating (sending) a message.
///
/// `to`, `from`, and `body` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMessageParams {
    /// The destination phone number.
    pub to: String,
    /// The Twilio number or messaging-service sender to send from.
    pub from: String,
    /// The text of the message.
    pub body: String,
    /// A media URL to attach (makes the message an MMS).
    pub media_url: Option<String>,
    /// A URL Twilio sends delivery status changes to.
    pub status_callback: Option<String>,
}

/// Parameters for listing messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMessageParams {
    /// Only include messages to this number.
    pub to: Option<String>,
    /// Only include messages from this number.
    pub from: Option<String>,
    /// Only include messages sent on this date (`YYYY-MM-DD`).
    pub date_sent: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a message.
///
/// The only writable field is `body`; setting it to an empty string redacts
/// the message text while keeping the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMessageParams {
    /// The replacement body. An empty string redacts the message.
    pub body: Option<String>,
}

impl Message {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `to`, `from`, or `body`
    /// is empty.
    pub fn create_request(params: &CreateMessageParams) -> Result<RestRequest, ResourceError> {
        require("To", &params.to)?;
        require("From", &params.from)?;
        require("Body", &params.body)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Messages.json",
        )
        .param("To", &params.to)
        .param("From", &params.from)
        .param("Body", &params.body)
        .param_opt("MediaUrl", params.media_url.as_deref())
        .param_opt("StatusCallback", params.status_callback.as_deref())
        .build()?)
    }

    /// Sends a new message.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        params: &CreateMessageParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(params)?, "Message").await
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
            "Accounts/{AccountSid}/Messages/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single message by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(client: &RestClient, sid: &str) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(sid)?, "Message").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails validation.
    pub fn list_request(params: &ListMessageParams) -> Result<RestRequest, ResourceError> {
        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::Api,
            "Accounts/{AccountSid}/Messages.json",
        )
        .query_opt("To", params.to.as_deref())
        .query_opt("From", params.from.as_deref())
        .query_opt("DateSent", params.date_sent.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists messages, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures.
    pub async fn list(
        client: &RestClient,
        params: &ListMessageParams,
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
        params: &UpdateMessageParams,
    ) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Messages/{Sid}.json",
        )
        .segment("Sid", sid)
        .param_opt("Body", params.body.as_deref())
        .build()?)
    }

    /// Updates a message (body redaction).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        sid: &str,
        params: &UpdateMessageParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::update_request(sid, params)?, "Message").await
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
            "Accounts/{AccountSid}/Messages/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a message record. Succeeds only on 204 No Content.
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
