//! Session identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single storefront session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a random session ID, e.g. `sess-3f9a0c1d2b4e5f60`.
    pub fn generate() -> Self {
        use rand::Rng;

        let bits: u64 = rand::thread_rng().gen();
        Self(format!("sess-{:016x}", bits))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
