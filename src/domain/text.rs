//! Validation gate for todo text.
//!
//! Validation is deliberately separate from construction:
//! [`Todo`](crate::Todo) stores whatever text it is given, and callers run
//! [`validate`] before constructing or updating a record when they want the
//! length policy enforced. A record holding out-of-policy text is the
//! caller's choice, not an engine error.

/// Minimum accepted text length, in characters, after trimming.
pub const MIN_LENGTH: usize = 3;

/// Maximum accepted text length, in characters, after trimming.
pub const MAX_LENGTH: usize = 200;

/// Reason a todo text failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTextError {
    /// The text is empty, or whitespace only.
    #[error("Todo text cannot be empty")]
    Empty,
    /// The trimmed text is shorter than [`MIN_LENGTH`].
    #[error("Todo text must be at least {MIN_LENGTH} characters long")]
    TooShort,
    /// The trimmed text is longer than [`MAX_LENGTH`].
    #[error("Todo text cannot exceed {MAX_LENGTH} characters")]
    TooLong,
}

/// Checks todo text against the length policy.
///
/// The input is trimmed first; rules are checked in order and the first
/// failure wins. Lengths are counted in characters, not bytes.
///
/// # Errors
///
/// Returns the first rule the text violates.
///
/// # Examples
///
/// ```
/// use agenda::domain::text;
///
/// assert!(text::validate("Kup mleko").is_ok());
/// assert!(text::validate("ab").is_err());
/// ```
pub fn validate(text: &str) -> Result<(), InvalidTextError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidTextError::Empty);
    }
    let length = trimmed.chars().count();
    if length < MIN_LENGTH {
        return Err(InvalidTextError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(InvalidTextError::TooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    #[test_case("\t\n" ; "tabs and newlines")]
    fn empty_text_is_rejected(text: &str) {
        assert_eq!(validate(text), Err(InvalidTextError::Empty));
    }

    #[test_case("ab" ; "two characters")]
    #[test_case("a" ; "one character")]
    #[test_case("  ab  " ; "two characters padded")]
    fn short_text_is_rejected(text: &str) {
        assert_eq!(validate(text), Err(InvalidTextError::TooShort));
    }

    #[test]
    fn overlong_text_is_rejected() {
        let text = "a".repeat(MAX_LENGTH + 1);
        assert_eq!(validate(&text), Err(InvalidTextError::TooLong));
    }

    #[test_case("abc" ; "at minimum")]
    #[test_case("Kup mleko" ; "ordinary text")]
    #[test_case("  ok text  " ; "padded text")]
    fn acceptable_text_passes(text: &str) {
        assert_eq!(validate(text), Ok(()));
    }

    #[test]
    fn text_at_maximum_passes() {
        let text = "a".repeat(MAX_LENGTH);
        assert_eq!(validate(&text), Ok(()));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Three characters, six bytes.
        assert_eq!(validate("żół"), Ok(()));
    }

    #[test]
    fn error_messages_are_user_readable() {
        assert_eq!(
            format!("{}", InvalidTextError::Empty),
            "Todo text cannot be empty"
        );
        assert_eq!(
            format!("{}", InvalidTextError::TooShort),
            "Todo text must be at least 3 characters long"
        );
        assert_eq!(
            format!("{}", InvalidTextError::TooLong),
            "Todo text cannot exceed 200 characters"
        );
    }
}
