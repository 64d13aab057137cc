use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier of a todo record.
///
/// Identifiers are assigned once at creation and never change. The
/// underlying value is a v7 UUID, a millisecond timestamp combined with
/// random bits, so two ids generated in the same instant still differ and
/// collisions within a collection are negligible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid todo identifier.
#[derive(Debug, thiserror::Error)]
#[error("invalid todo id '{input}'")]
pub struct ParseIdError {
    input: String,
    source: uuid::Error,
}

impl FromStr for TodoId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(|source| ParseIdError {
            input: s.to_string(),
            source,
        })?;
        Ok(Self(uuid))
    }
}
