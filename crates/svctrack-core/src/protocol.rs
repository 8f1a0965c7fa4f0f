//! Response bodies served over HTTP.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// `GET /count/{service}` body: `{"count":N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBody {
    pub count: u64,
}

impl CountBody {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn compact_encoding() {
        let bytes = CountBody::new(3).to_json().unwrap();
        assert_eq!(bytes, br#"{"count":3}"#);
    }
}
