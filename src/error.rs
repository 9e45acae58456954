//! Error types for the Twilio API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID does not have the expected shape.
    #[error("Invalid account SID '{sid}'. Expected a 34-character identifier starting with 'AC'.")]
    InvalidAccountSid {
        /// The invalid SID that was provided.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// Host override is not an absolute HTTP(S) URL.
    #[error("Invalid host override '{url}'. Expected an absolute http:// or https:// URL.")]
    InvalidHostOverride {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The configuration builder was missing the account SID.
    #[error("Account SID is required. Call account_sid() on the builder before build().")]
    MissingAccountSid,

    /// The configuration builder was missing the auth token.
    #[error("Auth token is required. Call auth_token() on the builder before build().")]
    MissingAuthToken,
}
