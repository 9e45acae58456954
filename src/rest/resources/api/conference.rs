//! Conference resource implementation.
//!
//! Conferences are created by TwiML when callers dial into a `<Conference>`
//! noun; the API offers no create or delete operation for them. Fetching and
//! listing are read-only, and updating with `Status=completed` ends a
//! conference and disconnects every participant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::dates;
use crate::rest::resource::{fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// A conference in a Twilio account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Conference {
    /// The unique identifier of the conference.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The name of the conference, from the TwiML that created it.
    pub friendly_name: Option<String>,
    /// The status of the conference (`init`, `in-progress`, `completed`).
    pub status: Option<String>,
    /// The region where the conference audio is mixed.
    pub region: Option<String>,
    /// The URI of this resource, relative to the API base.
    pub uri: Option<String>,
    /// When the conference was created.
    #[serde(default, with = "dates::rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the conference was last updated.
    #[serde(default, with = "dates::rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for listing conferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConferenceParams {
    /// Only include conferences with this friendly name.
    pub friendly_name: Option<String>,
    /// Only include conferences with this status.
    pub status: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating a conference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateConferenceParams {
    /// Set to `completed` to end the conference.
    pub status: Option<String>,
}

impl Conference {
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
            "Accounts/{AccountSid}/Conferences/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single conference by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(client: &RestClient, sid: &str) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(sid)?, "Conference").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails validation.
    pub fn list_request(params: &ListConferenceParams) -> Result<RestRequest, ResourceError> {
        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::Api,
            "Accounts/{AccountSid}/Conferences.json",
        )
        .query_opt("FriendlyName", params.friendly_name.as_deref())
        .query_opt("Status", params.status.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists conferences, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures.
    pub async fn list(
        client: &RestClient,
        params: &ListConferenceParams,
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
        params: &UpdateConferenceParams,
    ) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Conferences/{Sid}.json",
        )
        .segment("Sid", sid)
        .param_opt("Status", params.status.as_deref())
        .build()?)
    }

    /// Updates a conference; `Status=completed` ends it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        sid: &str,
        params: &UpdateConferenceParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::update_request(sid, params)?, "Conference").await
    }
}
