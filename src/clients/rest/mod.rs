//! REST executor for the Twilio API.

mod client;

pub use client::{RestClient, SDK_VERSION};
