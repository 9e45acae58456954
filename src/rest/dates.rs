//! Serde support for Twilio timestamp formats.
//!
//! The core `2010-04-01` API serializes timestamps in RFC 2822
//! (`Mon, 16 Aug 2010 23:00:23 +0000`); TaskRouter uses ISO 8601, which
//! chrono's serde integration handles natively. This module provides the
//! RFC 2822 form for use with `#[serde(with = "...")]`.

/// Serde adapter for `Option<DateTime<Utc>>` fields in RFC 2822 format.
///
/// Use with `#[serde(default, with = "crate::rest::dates::rfc2822")]`; the
/// `default` is what lets missing keys fall back to `None`.
pub mod rfc2822 {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional timestamp as an RFC 2822 string.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&value.to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional RFC 2822 string into a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the string is not valid RFC 2822.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        value
            .map(|s| {
                DateTime::parse_from_rfc2822(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(D::Error::custom)
            })
            .transpose()
    }
}
