//! Resources on the core API subdomain (`api.twilio.com`, version `2010-04-01`).
//!
//! Paths on this subdomain are account-scoped
//! (`Accounts/{AccountSid}/<Resource>[/{Sid}].json`) and timestamps are
//! RFC 2822.

mod address;
mod call;
mod conference;
mod message;
mod queue;

pub use address::{Address, CreateAddressParams, ListAddressParams, UpdateAddressParams};
pub use call::{Call, CallStatus, CreateCallParams, ListCallParams, UpdateCallParams};
pub use conference::{Conference, ListConferenceParams, UpdateConferenceParams};
pub use message::{CreateMessageParams, ListMessageParams, Message, UpdateMessageParams};
pub use queue::{CreateQueueParams, ListQueueParams, Queue, UpdateQueueParams};
