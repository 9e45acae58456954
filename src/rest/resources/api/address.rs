//! Address resource implementation.
//!
//! Addresses represent a customer's physical location and are required to
//! provision phone numbers in some countries.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::api::{Address, CreateAddressParams};
//!
//! let address = Address::create(&client, &CreateAddressParams {
//!     customer_name: "Ada Lovelace".to_string(),
//!     street: "10 Crinoline Court".to_string(),
//!     city: "London".to_string(),
//!     region: "LDN".to_string(),
//!     postal_code: "SW1A 1AA".to_string(),
//!     iso_country: "GB".to_string(),
//!     friendly_name: Some("Registered office".to_string()),
//! }).await?;
//!
//! // List addresses for one country
//! let page = Address::list(&client, &ListAddressParams {
//!     iso_country: Some("GB".to_string()),
//!     ..Default::default()
//! }).await?;
//!
//! // Remove an address once no numbers depend on it
//! Address::delete(&client, address.sid.as_deref().unwrap()).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient, RestRequest, SubDomain};
use crate::rest::dates;
use crate::rest::resource::{execute_delete, fetch_resource, read_page, require};
use crate::rest::{ResourceError, ResourcePage};

/// An address in a Twilio account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// The unique identifier of the address.
    pub sid: Option<String>,
    /// The SID of the owning account.
    pub account_sid: Option<String>,
    /// The name of the customer or business.
    pub customer_name: Option<String>,
    /// The number and street of the address.
    pub street: Option<String>,
    /// The city of the address.
    pub city: Option<String>,
    /// The state or region of the address.
    pub region: Option<String>,
    /// The postal code of the address.
    pub postal_code: Option<String>,
    /// The ISO country code of the address.
    pub iso_country: Option<String>,
    /// A human-readable description of the address.
    pub friendly_name: Option<String>,
    /// Whether the address has been validated against the country's dataset.
    pub validated: Option<bool>,
    /// The URI of this resource, relative to the API base.
    pub uri: Option<String>,
    /// When the address was created.
    #[serde(default, with = "dates::rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the address was last updated.
    #[serde(default, with = "dates::rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating an address.
///
/// All fields except `friendly_name` are required by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAddressParams {
    /// The name of the customer or business.
    pub customer_name: String,
    /// The number and street of the address.
    pub street: String,
    /// The city of the address.
    pub city: String,
    /// The state or region of the address.
    pub region: String,
    /// The postal code of the address.
    pub postal_code: String,
    /// The ISO country code of the address.
    pub iso_country: String,
    /// A human-readable description of the address.
    pub friendly_name: Option<String>,
}

/// Parameters for listing addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAddressParams {
    /// Only include addresses with this customer or business name.
    pub customer_name: Option<String>,
    /// Only include addresses with this friendly name.
    pub friendly_name: Option<String>,
    /// Only include addresses in this ISO country.
    pub iso_country: Option<String>,
    /// Number of results per page (default 50, max 1000).
    pub page_size: Option<u32>,
}

/// Parameters for updating an address. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAddressParams {
    /// The name of the customer or business.
    pub customer_name: Option<String>,
    /// The number and street of the address.
    pub street: Option<String>,
    /// The city of the address.
    pub city: Option<String>,
    /// The state or region of the address.
    pub region: Option<String>,
    /// The postal code of the address.
    pub postal_code: Option<String>,
    /// A human-readable description of the address.
    pub friendly_name: Option<String>,
}

impl Address {
    /// Builds the request for [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyArgument`] if a required field is empty.
    pub fn create_request(params: &CreateAddressParams) -> Result<RestRequest, ResourceError> {
        require("CustomerName", &params.customer_name)?;
        require("Street", &params.street)?;
        require("City", &params.city)?;
        require("Region", &params.region)?;
        require("PostalCode", &params.postal_code)?;
        require("IsoCountry", &params.iso_country)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Addresses.json",
        )
        .param("CustomerName", &params.customer_name)
        .param("Street", &params.street)
        .param("City", &params.city)
        .param("Region", &params.region)
        .param("PostalCode", &params.postal_code)
        .param("IsoCountry", &params.iso_country)
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .build()?)
    }

    /// Creates a new address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn create(
        client: &RestClient,
        params: &CreateAddressParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::create_request(params)?, "Address").await
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
            "Accounts/{AccountSid}/Addresses/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Fetches a single address by SID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn fetch(client: &RestClient, sid: &str) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::fetch_request(sid)?, "Address").await
    }

    /// Builds the request for [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails validation.
    pub fn list_request(params: &ListAddressParams) -> Result<RestRequest, ResourceError> {
        Ok(RestRequest::builder(
            HttpMethod::Get,
            SubDomain::Api,
            "Accounts/{AccountSid}/Addresses.json",
        )
        .query_opt("CustomerName", params.customer_name.as_deref())
        .query_opt("FriendlyName", params.friendly_name.as_deref())
        .query_opt("IsoCountry", params.iso_country.as_deref())
        .query_opt("PageSize", params.page_size.map(|v| v.to_string()))
        .build()?)
    }

    /// Lists addresses, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API, or deserialization
    /// failures.
    pub async fn list(
        client: &RestClient,
        params: &ListAddressParams,
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
        params: &UpdateAddressParams,
    ) -> Result<RestRequest, ResourceError> {
        require("Sid", sid)?;

        Ok(RestRequest::builder(
            HttpMethod::Post,
            SubDomain::Api,
            "Accounts/{AccountSid}/Addresses/{Sid}.json",
        )
        .segment("Sid", sid)
        .param_opt("CustomerName", params.customer_name.as_deref())
        .param_opt("Street", params.street.as_deref())
        .param_opt("City", params.city.as_deref())
        .param_opt("Region", params.region.as_deref())
        .param_opt("PostalCode", params.postal_code.as_deref())
        .param_opt("FriendlyName", params.friendly_name.as_deref())
        .build()?)
    }

    /// Updates an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for validation, transport, API, or
    /// deserialization failures.
    pub async fn update(
        client: &RestClient,
        sid: &str,
        params: &UpdateAddressParams,
    ) -> Result<Self, ResourceError> {
        fetch_resource(client, Self::update_request(sid, params)?, "Address").await
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
            "Accounts/{AccountSid}/Addresses/{Sid}.json",
        )
        .segment("Sid", sid)
        .build()?)
    }

    /// Deletes an address. Succeeds only on 204 No Content.
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

    fn create_params() -> CreateAddressParams {
        CreateAddressParams {
            customer_name: "Ada Lovelace".to_string(),
            street: "10 Crinoline Court".to_string(),
            city: "London".to_string(),
            region: "LDN".to_string(),
            postal_code: "SW1A 1AA".to_string(),
            iso_country: "GB".to_string(),
            friendly_name: Some("Registered office".to_string()),
        }
    }

    #[test]
    fn test_create_request_carries_all_seven_parameters() {
        let request = Address::create_request(&create_params()).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.resource, "Accounts/{AccountSid}/Addresses.json");

        let body: Vec<(&str, &str)> = request
            .params_of(ParamKind::Body)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            body,
            vec![
                ("CustomerName", "Ada Lovelace"),
                ("Street", "10 Crinoline Court"),
                ("City", "London"),
                ("Region", "LDN"),
                ("PostalCode", "SW1A 1AA"),
                ("IsoCountry", "GB"),
                ("FriendlyName", "Registered office"),
            ]
        );
    }

    #[test]
    fn test_create_request_omits_absent_friendly_name() {
        let params = CreateAddressParams {
            friendly_name: None,
            ..create_params()
        };
        let request = Address::create_request(&params).unwrap();

        assert_eq!(request.params_of(ParamKind::Body).count(), 6);
    }

    #[test]
    fn test_create_request_validates_required_fields() {
        let params = CreateAddressParams {
            customer_name: String::new(),
            ..create_params()
        };

        let result = Address::create_request(&params);
        assert!(matches!(
            result,
            Err(ResourceError::EmptyArgument { argument }) if argument == "CustomerName"
        ));
    }

    #[test]
    fn test_fetch_request_uses_sid_segment() {
        let request =
            Address::fetch_request("AD0000000000000000000000000000000a").unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.resource,
            "Accounts/{AccountSid}/Addresses/{Sid}.json"
        );
        assert_eq!(
            request.segment_value("Sid"),
            Some("AD0000000000000000000000000000000a")
        );
    }

    #[test]
    fn test_list_request_carries_only_set_filters() {
        let request = Address::list_request(&ListAddressParams {
            iso_country: Some("GB".to_string()),
            page_size: Some(20),
            ..Default::default()
        })
        .unwrap();

        let query: Vec<(&str, &str)> = request
            .params_of(ParamKind::QueryString)
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(query, vec![("IsoCountry", "GB"), ("PageSize", "20")]);
    }

    #[test]
    fn test_delete_request_template_and_method() {
        let request =
            Address::delete_request("AD0000000000000000000000000000000a").unwrap();

        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.resource,
            "Accounts/{AccountSid}/Addresses/{Sid}.json"
        );
        assert!(request.params_of(ParamKind::Body).next().is_none());
    }

    #[test]
    fn test_delete_request_rejects_empty_sid() {
        assert!(matches!(
            Address::delete_request(""),
            Err(ResourceError::EmptyArgument { argument }) if argument == "Sid"
        ));
    }

    #[test]
    fn test_address_deserialization_from_api_response() {
        let json = r#"{
            "sid": "AD0000000000000000000000000000000a",
            "account_sid": "ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6",
            "customer_name": "Ada Lovelace",
            "street": "10 Crinoline Court",
            "city": "London",
            "region": "LDN",
            "postal_code": "SW1A 1AA",
            "iso_country": "GB",
            "friendly_name": "Registered office",
            "validated": true,
            "uri": "/2010-04-01/Accounts/ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6/Addresses/AD0000000000000000000000000000000a.json",
            "date_created": "Mon, 16 Aug 2010 23:00:23 +0000",
            "date_updated": "Tue, 17 Aug 2010 03:45:01 +0000"
        }"#;

        let address: Address = serde_json::from_str(json).unwrap();

        assert_eq!(
            address.sid.as_deref(),
            Some("AD0000000000000000000000000000000a")
        );
        assert_eq!(address.customer_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(address.validated, Some(true));
        assert!(address.date_created.is_some());
        assert!(address.date_updated.is_some());
    }

    #[test]
    fn test_unknown_keys_are_ignored_and_missing_keys_default() {
        let json = r#"{
            "sid": "AD0000000000000000000000000000000a",
            "emergency_enabled": false
        }"#;

        let address: Address = serde_json::from_str(json).unwrap();

        assert!(address.sid.is_some());
        assert!(address.customer_name.is_none());
        assert!(address.date_created.is_none());
    }
}
