//! Validated service identifiers.
//!
//! A service name is whatever text arrives in the `{service}` path segment.
//! The router already refuses an empty segment; this type additionally
//! rejects names that are blank after trimming or longer than the configured
//! byte limit. The name is stored verbatim (no trimming, no case folding).

use std::fmt;

use crate::error::{Result, SvcTrackError};

/// Default upper bound for a service name, in bytes.
pub const DEFAULT_MAX_NAME_BYTES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validate `raw` against `max_bytes`.
    pub fn parse(raw: impl Into<String>, max_bytes: usize) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SvcTrackError::BadRequest(
                "service name must not be empty or whitespace".into(),
            ));
        }
        if raw.len() > max_bytes {
            return Err(SvcTrackError::BadRequest(format!(
                "service name exceeds {max_bytes} bytes"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn keeps_name_verbatim() {
        let n = ServiceName::parse(" billing ", DEFAULT_MAX_NAME_BYTES).unwrap();
        assert_eq!(n.as_str(), " billing ");
    }

    #[test]
    fn rejects_blank() {
        for raw in ["", " ", "\t\n"] {
            let err = ServiceName::parse(raw, DEFAULT_MAX_NAME_BYTES).unwrap_err();
            assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
        }
    }

    #[test]
    fn length_limit_is_in_bytes() {
        assert!(ServiceName::parse("abcd", 4).is_ok());
        assert!(ServiceName::parse("abcde", 4).is_err());
        // two 2-byte chars
        assert!(ServiceName::parse("éé", 3).is_err());
    }
}
