//! # Twilio API Rust SDK
//!
//! A Rust SDK for the Twilio REST API, providing type-safe configuration,
//! request construction, and typed resource operations for voice calls, SMS
//! messages, addresses, conferences, queues, and TaskRouter.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TwilioConfig`] and validated newtypes
//!   ([`AccountSid`], [`AuthToken`])
//! - A kinded request model ([`RestRequest`]) with form-body, query-string,
//!   and URL-segment parameters and `{Name}` template substitution
//! - A REST executor ([`RestClient`]) that applies basic authentication and
//!   resolves account-scoped paths, over a pluggable
//!   [`HttpTransport`](clients::HttpTransport)
//! - Typed resource operations with paginated list responses
//!   ([`ResourcePage`]) and structured API errors ([`ApiError`])
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, TwilioConfig};
//!
//! // Create configuration using the builder pattern
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use twilio_api::RestClient;
//! use twilio_api::rest::resources::api::{Message, CreateMessageParams};
//!
//! let client = RestClient::new(&config);
//!
//! // Send an SMS
//! let message = Message::create(&client, &CreateMessageParams {
//!     to: "+14155551234".to_string(),
//!     from: "+14155556789".to_string(),
//!     body: "Hello from Rust".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! // List messages, following pagination
//! let mut page = Message::list(&client, &Default::default()).await?;
//! loop {
//!     for message in page.iter() {
//!         println!("{:?}: {:?}", message.sid, message.body);
//!     }
//!     match page.next_page(&client).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## TaskRouter
//!
//! TaskRouter resources live on their own subdomain and are nested under a
//! workspace:
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::taskrouter::{Workspace, Worker, CreateWorkspaceParams, CreateWorkerParams};
//!
//! let workspace = Workspace::create(&client, &CreateWorkspaceParams {
//!     friendly_name: "Customer Support".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let worker = Worker::create(&client, workspace.sid.as_deref().unwrap(), &CreateWorkerParams {
//!     friendly_name: "Alice".to_string(),
//!     attributes: Some(r#"{"languages":["en"]}"#.to_string()),
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! ## Testing
//!
//! The executor dispatches through the [`clients::HttpTransport`] trait.
//! Tests inject a double via [`RestClient::with_transport`], or point the
//! client at a local mock server with the host overrides on
//! [`TwilioConfig`].

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use clients::{
    HttpError, HttpMethod, HttpResponse, InvalidRequestError, ParamKind, Parameter, RestClient,
    RestRequest, RestRequestBuilder, SubDomain,
};
pub use config::{AccountSid, AuthToken, HostOverride, TwilioConfig, TwilioConfigBuilder};
pub use error::ConfigError;
pub use rest::{ApiError, PageMeta, ResourceError, ResourcePage};
