//! Call resource implementation.
//!
//! Calls represent voice connections between Twilio and a phone number,
//! SIP endpoint, or client. Creating a call dials the `To` number and hands
//! control to the TwiML document at `Url`; updating a live call can redirect
//! it to new TwiML or end it.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::api::{Call, CreateCallParams, UpdateCallParams};
//!
//! let call = Call::create(&client, &CreateCallParams {
//!     to: "+14155551234".to_string(),
//!     from: "+14155556789".to_string(),
//!     url: "https://example.com/voice.xml".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! // Hang up
//! Call::update(&client, call.sid.as_deref().unwrap(), &UpdateCallParams {
//!     status: Some("completed".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::dates;
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// The lifecycle status of a call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    /// The call is queued and waiting to be dialed.
    Queued,
    /// The destination is ringing.
    Ringing,
    /// The call is connected.
    InProgress,
    /// The call ended normally.
    Completed,
    /// The destination was busy.
    Busy,
    /// The call could not be completed.
    Failed,
    /// The destination did not answer.
    NoAnswer,
    /// The call was canceled before it was answered.
    Canceled,
}

/// A voice call in a Twilio account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Call {
    /// The unique identifier of the call.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The phone number, SIP address, or client identifier that was called.
    pub to: Option<String>,
    /// The phone number, SIP address, or client identifier that made the call.
    pub from: Option<String>,
    /// The current status of the call.
    pub status: Option<CallStatus>,
    /// When the call started.
    #[serde(default, with = "dates::rfc2822")]
    pub start_time: Option<DateTime<Utc>>,
    /// When the call ended.
    #[serde(default, with = "dates::rfc2822")]
    pub end_time: Option<DateTime<Utc>>,
    /// The length of the call in seconds, as reported by the API.
    pub duration: Option<String>,
    /// The charge for the call, as a decimal string.
    pub price: Option<String>,
    /// The currency of `price`.
    pub price_unit: Option<String>,
    /// The direction of the call (`inbound`, `outbound-api`, `outbound-dial`).
    pub direction: Option<String>,
    /// Who answered the call (`human` or `machine`), when answering machine
    /// detection was requested.
    pub answered_by: Option<String>,
    /// The URI of this resource, relative to the API base.
    pub uri: Option<String>,
    /// When the call resource was created.
    #[serde(default, with = "dates::rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the call resource was last updated.
    #[serde(default, with = "dates::rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating (placing) a call.
///
/// `to`, `from`, and `url` are required by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCallParams {
    /// The phone number, SIP address, or client identifier to call.
    pub to: String,
    /// The Twilio number or verified caller ID to call from.
    pub from: String,
    /// The URL of the TwiML document that controls the call.
    pub url: String,
    /// The HTTP method used to request `url` (`GET` or `POST`).
    pub method: Option<String>,
    /// A URL Twilio sends call status changes to.
    pub status_callback: Option<String>,
    /// The HTTP method used for `status_callback`.
    pub status_callback_method: Option<String>,
    /// DTMF digits to send when the call is answered.
    pub send_digits: Option<String>,
    /// Seconds to let the call ring before giving up.
    pub timeout: Option<u32>,
    /// Whether to record the call.
    pub record: Option<bool>,
}

/// Parameters for listing calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCallParams {
    /// Only include calls to this number.
    pub to: Option<String>,
    /// Only include calls from this number.
    pub from: Option<String>,
    /// Only include calls with this status.
    pub status: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a live call. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCallParams {
    /// A new TwiML URL to redirect the call to.
    pub url: Option<String>,
    /// The HTTP method used to request `url`.
    pub method: Option<String>,
    /// A new status for the call: `completed` hangs up, `canceled` cancels a
    /// queued or ringing call.
    pub status: Option<String>,
}

impl Call {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if `to`, `from`, or `url`
    /// is empty.
    pub fn create_request(params: &CreateCallParams) -> Result<RestRequest, ResourceError> {
        require("To", &params.to)?;
        require("From", &params.from)?;
        require("Url", &params.url)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Calls.json",
        )
        .param("To", &params.to)
        .param("From", &params.from)
        .param("Url", &params.url)
        .param_opt("Method", params.method.as_deref())
        .param_opt("StatusCallback", params.status_callback.as_deref())
        .param_opt(
            "StatusCallbackMethod",
            params.status_callback_method.as_deref(),
        )
        .param_opt("SendDigits", params.send_digits.as_deref())
        .param_opt("Timeout", params.timeout.map(|v| v.to_string()))
        .param_opt("Record", params.record.map(|v| v.to_string()))
        .build()?)
    }

    /// Places a new call.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        params: &CreateCallParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(params)?, "Call").await
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
            "Accounts/{AccountSid}/Calls/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single call by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(client: &RestClient, sid: &str) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(sid)?, "Call").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails validation.
    pub fn list_request(params: &ListCallParams) -> Result<RestRequest, ResourceError> {
        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::Api,
            "Accounts/{AccountSid}/Calls.json",
        )
        .query_opt("To", params.to.as_deref())
        .query_opt("From", params.from.as_deref())
        .query_opt("Status", params.status.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists calls, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures.
    pub async fn list(
        client: &RestClient,
        params: &ListCallParams,
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
        params: &UpdateCallParams,
    ) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Calls/{Sid}.json",
        )
        .segment("Sid", sid)
        .param_opt("Url", params.url.as_deref())
        .param_opt("Method", params.method.as_deref())
        .param_opt("Status", params.status.as_deref())
        .build()?)
    }

    /// Updates a live call: redirect it to new TwiML or end it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        sid: &str,
        params: &UpdateCallParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::update_request(sid, params)?, "Call").await
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
            "Accounts/{AccountSid}/Calls/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes a call record. Succeeds only on 204 No Content.
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
