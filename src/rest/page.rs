//! Paginated list responses.
//!
//! List-shaped Twilio responses carry the items under a collection key plus a
//! reserved `meta` object with pagination metadata:
//!
//! ```json
//! {
//!   "addresses": [ { "sid": "AD..." } ],
//!   "meta": {
//!     "page": 0,
//!     "page_size": 50,
//!     "key": "addresses",
//!     "first_page_url": "https://api.twilio.com/2010-04-01/...",
//!     "previous_page_url": null,
//!     "url": "https://api.twilio.com/2010-04-01/...",
//!     "next_page_url": null
//!   }
//! }
//! ```
//!
//! [`ResourcePage<T>`] splits the two apart: the typed items, and a
//! [`PageMeta`] sub-object. The page implements `Deref<Target = Vec<T>>`
//! for ergonomic access to the items.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::errors::{ApiError, ResourceError};

/// Pagination metadata from a list-shaped response.
///
/// The navigation URLs are absolute; absent ones deserialize to `None`.
/// `key` names the collection the items live under in the body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    /// The zero-based page number.
    pub page: u32,
    /// The number of items per page.
    pub page_size: u32,
    /// The body key the item collection lives under (e.g. `"addresses"`).
    pub key: String,
    /// Absolute URL of the first page, if present.
    #[serde(default)]
    pub first_page_url: Option<String>,
    /// Absolute URL of the previous page, if present.
    #[serde(default)]
    pub previous_page_url: Option<String>,
    /// Absolute URL of the current page, if present.
    #[serde(default)]
    pub url: Option<String>,
    /// Absolute URL of the next page, if present.
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// One page of a list operation.
///
/// # Example
///
/// ```rust,ignore
/// let page = Address::list(&client, &ListAddressParams::default()).await?;
/// for address in page.iter() {
///     println!("{:?}", address.friendly_name);
/// }
/// if page.has_next_page() {
///     let next = page.next_page(&client).await?.unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResourcePage<T> {
    items: Vec<T>,
    meta: PageMeta,
}

impl<T> ResourcePage<T> {
    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the pagination metadata.
    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.meta.next_page_url.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.meta.previous_page_url.is_some()
    }

    /// Returns the absolute URL of the next page, if available.
    #[must_use]
    pub fn next_page_url(&self) -> Option<&str> {
        self.meta.next_page_url.as_deref()
    }

    /// Returns the absolute URL of the previous page, if available.
    #[must_use]
    pub fn previous_page_url(&self) -> Option<&str> {
        self.meta.previous_page_url.as_deref()
    }
}

impl<T: DeserializeOwned> ResourcePage<T> {
    /// Creates a `ResourcePage` from a list-shaped HTTP response.
    ///
    /// Reads the `meta` object first, then the item collection under the key
    /// `meta` announces.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Deserialization`] if the body, the `meta`
    /// object, or the items fail to parse, and
    /// [`ResourceError::MissingCollection`] if the announced collection key
    /// is absent from the body.
    pub fn from_http_response(response: &HttpResponse) -> Result<Self, ResourceError> {
        let body: serde_json::Value =
            response
                .json()
                .map_err(|source| ResourceError::Deserialization {
                    context: "list response body".to_string(),
                    source,
                })?;

        let meta: PageMeta = serde_json::from_value(
            body.get("meta").cloned().unwrap_or(serde_json::Value::Null),
        )
        .map_err(|source| ResourceError::Deserialization {
            context: "page metadata".to_string(),
            source,
        })?;

        let items_value = body
            .get(&meta.key)
            .cloned()
            .ok_or_else(|| ResourceError::MissingCollection {
                key: meta.key.clone(),
            })?;

        let items: Vec<T> =
            serde_json::from_value(items_value).map_err(|source| ResourceError::Deserialization {
                context: format!("'{}' collection", meta.key),
                source,
            })?;

        Ok(Self { items, meta })
    }

    /// Fetches the next page, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures while fetching the next page.
    pub async fn next_page(
        &self,
        client: &RestClient,
    ) -> Result<Option<ResourcePage<T>>, ResourceError> {
        match self.next_page_url() {
            Some(url) => Ok(Some(fetch_page(client, url).await?)),
            None => Ok(None),
        }
    }
}

/// Provides transparent access to the items on the page.
impl<T> Deref for ResourcePage<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Fetches a page by its absolute URL with the client's stored credentials.
///
/// Used to follow the `next_page_url`/`previous_page_url` navigation URLs.
///
/// # Errors
///
/// Returns [`ResourceError`] for transport failures, non-2xx responses, and
/// deserialization failures.
pub async fn fetch_page<T: DeserializeOwned>(
    client: &RestClient,
    url: &str,
) -> Result<ResourcePage<T>, ResourceError> {
    let response = client.get_url(url).await?;

    if !response.is_ok() {
        return Err(ApiError::from_response(&response).into());
    }

    ResourcePage::from_http_response(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct TestItem {
        sid: String,
    }

    fn response(body: &str) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_page_splits_items_from_meta() {
        let body = r#"{
            "things": [
                {"sid": "XX0000000000000000000000000000000a"},
                {"sid": "XX0000000000000000000000000000000b"}
            ],
            "meta": {
                "page": 0,
                "page_size": 50,
                "key": "things",
                "first_page_url": "https://api.twilio.com/first",
                "previous_page_url": null,
                "url": "https://api.twilio.com/current",
                "next_page_url": null
            }
        }"#;

        let page: ResourcePage<TestItem> =
            ResourcePage::from_http_response(&response(body)).unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].sid, "XX0000000000000000000000000000000a");
        assert_eq!(page.meta().page, 0);
        assert_eq!(page.meta().page_size, 50);
        assert_eq!(page.meta().key, "things");
    }

    #[test]
    fn test_absent_urls_are_none_and_present_urls_populate() {
        // page=2 with previous/current present and next absent
        let body = r#"{
            "things": [],
            "meta": {
                "page": 2,
                "page_size": 50,
                "key": "things",
                "first_page_url": "https://api.twilio.com/first",
                "previous_page_url": "https://api.twilio.com/prev",
                "url": "https://api.twilio.com/current"
            }
        }"#;

        let page: ResourcePage<TestItem> =
            ResourcePage::from_http_response(&response(body)).unwrap();

        assert_eq!(page.meta().page, 2);
        assert_eq!(page.meta().page_size, 50);
        assert_eq!(
            page.previous_page_url(),
            Some("https://api.twilio.com/prev")
        );
        assert_eq!(
            page.meta().url.as_deref(),
            Some("https://api.twilio.com/current")
        );
        assert_eq!(page.next_page_url(), None);
        assert!(!page.has_next_page());
        assert!(page.has_previous_page());
    }

    #[test]
    fn test_missing_meta_is_a_deserialization_error() {
        let body = r#"{"things": []}"#;

        let result: Result<ResourcePage<TestItem>, _> =
            ResourcePage::from_http_response(&response(body));

        assert!(matches!(
            result,
            Err(ResourceError::Deserialization { context, .. }) if context == "page metadata"
        ));
    }

    #[test]
    fn test_missing_collection_names_the_key() {
        let body = r#"{
            "meta": {"page": 0, "page_size": 50, "key": "things"}
        }"#;

        let result: Result<ResourcePage<TestItem>, _> =
            ResourcePage::from_http_response(&response(body));

        assert!(matches!(
            result,
            Err(ResourceError::MissingCollection { key }) if key == "things"
        ));
    }

    #[test]
    fn test_item_type_mismatch_is_a_deserialization_error() {
        let body = r#"{
            "things": [{"sid": 12345}],
            "meta": {"page": 0, "page_size": 50, "key": "things"}
        }"#;

        let result: Result<ResourcePage<TestItem>, _> =
            ResourcePage::from_http_response(&response(body));

        assert!(matches!(
            result,
            Err(ResourceError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_a_deserialization_error() {
        let result: Result<ResourcePage<TestItem>, _> =
            ResourcePage::from_http_response(&response("<html></html>"));

        assert!(matches!(
            result,
            Err(ResourceError::Deserialization { context, .. }) if context == "list response body"
        ));
    }

    #[test]
    fn test_deref_gives_vec_access() {
        let body = r#"{
            "things": [{"sid": "XX0000000000000000000000000000000a"}],
            "meta": {"page": 0, "page_size": 50, "key": "things"}
        }"#;

        let page: ResourcePage<TestItem> =
            ResourcePage::from_http_response(&response(body)).unwrap();

        assert!(!page.is_empty());
        assert_eq!(page.iter().count(), 1);
        assert_eq!(page.first().map(|i| i.sid.as_str()), Some("XX0000000000000000000000000000000a"));
    }
}
