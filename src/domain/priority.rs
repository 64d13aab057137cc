use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Priority of a todo.
///
/// Set at creation; changing it means rebuilding the record. The serialized
/// names are the lowercase variant names.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The everyday default.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Sort rank of this priority.
    ///
    /// Lower rank orders earlier: high = 0, medium = 1, low = 2.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// Error returned when a string names no known priority.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown priority '{0}': expected 'low', 'medium' or 'high'")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn high_ranks_before_medium_before_low() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test_case(Priority::Low, "low" ; "low")]
    #[test_case(Priority::Medium, "medium" ; "medium")]
    #[test_case(Priority::High, "high" ; "high")]
    fn display_parse_roundtrip(priority: Priority, name: &str) {
        assert_eq!(priority.to_string(), name);
        assert_eq!(name.parse::<Priority>().unwrap(), priority);
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let error = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(
            format!("{error}"),
            "unknown priority 'urgent': expected 'low', 'medium' or 'high'"
        );
    }

    #[test]
    fn serializes_to_lowercase_name() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }
}
