//! Configuration types for the Twilio API SDK.
//!
//! This module provides [`TwilioConfig`] and its builder for supplying the
//! account credentials and optional host overrides used by every client.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6").unwrap())
//!     .auth_token(AuthToken::new("my-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.account_sid().as_ref(), "ACa1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6");
//! ```

mod newtypes;

pub use newtypes::{AccountSid, AuthToken, HostOverride};

use crate::error::ConfigError;

/// Configuration for Twilio API clients.
///
/// Holds the account SID and auth token supplied once at construction time
/// and implicitly applied to every subsequent request, plus optional host
/// overrides for redirecting API subdomains (test servers, regional proxies)
/// and an optional User-Agent prefix.
///
/// Use [`TwilioConfig::builder`] to construct instances.
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    api_host: Option<HostOverride>,
    taskrouter_host: Option<HostOverride>,
    user_agent_prefix: Option<String>,
}

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub const fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the base-URL override for `api.twilio.com`, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostOverride> {
        self.api_host.as_ref()
    }

    /// Returns the base-URL override for `taskrouter.twilio.com`, if configured.
    #[must_use]
    pub const fn taskrouter_host(&self) -> Option<&HostOverride> {
        self.taskrouter_host.as_ref()
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`TwilioConfig`] instances.
///
/// The account SID and auth token are required; everything else is optional.
#[derive(Debug, Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    api_host: Option<HostOverride>,
    taskrouter_host: Option<HostOverride>,
    user_agent_prefix: Option<String>,
}

impl TwilioConfigBuilder {
    const fn new() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            api_host: None,
            taskrouter_host: None,
            user_agent_prefix: None,
        }
    }

    /// Sets the account SID.
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Overrides the base URL used in place of `https://api.twilio.com`.
    #[must_use]
    pub fn api_host(mut self, host: HostOverride) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the base URL used in place of `https://taskrouter.twilio.com`.
    #[must_use]
    pub fn taskrouter_host(mut self, host: HostOverride) -> Self {
        self.taskrouter_host = Some(host);
        self
    }

    /// Sets a prefix prepended to the SDK's User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TwilioConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccountSid`] or
    /// [`ConfigError::MissingAuthToken`] if a required credential was not set.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingAccountSid)?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingAuthToken)?;

        Ok(TwilioConfig {
            account_sid,
            auth_token,
            api_host: self.api_host,
            taskrouter_host: self.taskrouter_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
