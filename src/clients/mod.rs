//! HTTP execution layer for the Twilio API SDK.
//!
//! This module contains the request/response model, the pluggable transport,
//! and the REST executor that turns a [`RestRequest`] plus stored credentials
//! into an [`HttpResponse`].

pub mod errors;
pub mod http_request;
pub mod http_response;
pub mod rest;
pub mod transport;

pub use errors::{HttpError, InvalidRequestError};
pub use http_request::{HttpMethod, ParamKind, Parameter, RestRequest, RestRequestBuilder, SubDomain};
pub use http_response::HttpResponse;
pub use rest::{RestClient, SDK_VERSION};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
