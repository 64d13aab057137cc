//! Polish display conventions.
//!
//! The engine renders dates, priority labels and alphabetical order the way
//! the application's Polish UI expects them. Label text is fixed; there is
//! no general internationalization layer.

use chrono::{DateTime, Locale, Utc};

use crate::domain::Priority;

/// The Polish alphabet in collation order, lowercase.
///
/// q, v and x are included so loanwords order sensibly.
const ALPHABET: [char; 35] = [
    'a', 'ą', 'b', 'c', 'ć', 'd', 'e', 'ę', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'ł', 'm', 'n', 'ń',
    'o', 'ó', 'p', 'q', 'r', 's', 'ś', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ź', 'ż',
];

/// Formats a timestamp as a short Polish date: numeric day, abbreviated
/// month, numeric year.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
/// assert_eq!(agenda::locale::format_date(date), "1 lut 2026");
/// ```
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format_localized("%-d %b %Y", Locale::pl_PL).to_string()
}

/// The fixed Polish label for a priority.
#[must_use]
pub const fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Niski",
        Priority::Medium => "Średni",
        Priority::High => "Wysoki",
    }
}

/// Case-insensitive Polish collation key for a string.
///
/// Keys compare the way Polish dictionaries order words: each diacritic
/// letter sorts directly after its base letter (ą after a, ł after l, ż
/// after ź after z). Input is case-folded first. Characters outside the
/// alphabet order by code point ahead of letters, which keeps digits and
/// punctuation first. Compare keys with the ordinary `Ord` on the returned
/// vector.
#[must_use]
pub fn collation_key(text: &str) -> Vec<(u8, u32)> {
    text.to_lowercase()
        .chars()
        .map(|c| letter_rank(c).map_or_else(|| (0, u32::from(c)), |rank| (1, rank)))
        .collect()
}

fn letter_rank(c: char) -> Option<u32> {
    ALPHABET
        .iter()
        .position(|&letter| letter == c)
        .and_then(|index| u32::try_from(index).ok())
}
