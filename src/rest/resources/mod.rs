//! Typed resource modules, one per API resource family.
//!
//! Resources are grouped by the subdomain they live on: [`api`] for the core
//! voice/messaging API (`api.twilio.com/2010-04-01`) and [`taskrouter`] for
//! TaskRouter (`taskrouter.twilio.com/v1`).
//!
//! Every operation follows the same pattern: validate required arguments,
//! build a [`RestRequest`](crate::clients::RestRequest), execute it through
//! the client, and deserialize the response. The request-building step is
//! exposed separately (`create_request`, `fetch_request`, ...) so the exact
//! method, template, and parameter set of each operation can be asserted
//! without I/O.

pub mod api;
pub mod taskrouter;
