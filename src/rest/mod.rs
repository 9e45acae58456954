//! REST resource layer for the Twilio API.
//!
//! This module contains the shared substrate every resource builds on:
//!
//! - **[`ResourcePage<T>`]**: list responses split into typed items and a
//!   [`PageMeta`] pagination sub-object
//! - **[`ApiError`] / [`ResourceError`]**: structured API errors and the
//!   unified resource-operation error type
//! - **[`dates`]**: serde support for the RFC 2822 timestamps used by the
//!   core API
//! - **[`resources`]**: the per-resource operation modules
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
//! let page = Address::list(&client, &Default::default()).await?;
//! for address in page.iter() {
//!     println!("{:?}", address.sid);
//! }
//! ```

pub mod dates;
pub mod errors;
pub mod page;
pub mod resources;

pub(crate) mod resource;

pub use errors::{ApiError, ResourceError};
pub use page::{fetch_page, PageMeta, ResourcePage};
