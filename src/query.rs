//! Pure transformations over todo collections.
//!
//! Every operation borrows a sequence and returns a fresh one (or an
//! aggregate); the input and its elements are never mutated. The caller
//! treats each returned collection as its new canonical snapshot and
//! discards the previous one.

use std::{cmp::Reverse, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::Priority, locale, Todo};

/// Completion-status selection predicate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Keep every todo.
    #[default]
    All,
    /// Keep todos that are not completed.
    Active,
    /// Keep completed todos.
    Completed,
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Error returned when a string names no known filter.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown filter '{0}': expected 'all', 'active' or 'completed'")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Ordering key for [`sort_todos`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    /// Highest priority first.
    Priority,
    /// Case-insensitive Polish alphabetical order of the text.
    Alphabetical,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Date => "date",
            Self::Priority => "priority",
            Self::Alphabetical => "alphabetical",
        };
        f.write_str(name)
    }
}

/// Error returned when a string names no known sort key.
///
/// The presentation layer keeps its current ordering when it sees this.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sort key '{0}': expected 'date', 'priority' or 'alphabetical'")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "priority" => Ok(Self::Priority),
            "alphabetical" => Ok(Self::Alphabetical),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Completion tallies for a collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Number of todos in the collection.
    pub total: usize,
    /// Todos not yet completed.
    pub active: usize,
    /// Completed todos.
    pub completed: usize,
}

/// Selects todos by completion status.
///
/// [`Filter::All`] is an identity pass: the same elements in the same
/// order, as a fresh sequence.
#[must_use]
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    match filter {
        Filter::All => todos.to_vec(),
        Filter::Active => todos
            .iter()
            .filter(|todo| !todo.is_completed())
            .cloned()
            .collect(),
        Filter::Completed => todos
            .iter()
            .filter(|todo| todo.is_completed())
            .cloned()
            .collect(),
    }
}

/// Returns the todos reordered by the given key.
///
/// The sort is stable, so equal-keyed todos keep their prior relative
/// order. The input sequence is never reordered in place.
#[must_use]
pub fn sort_todos(todos: &[Todo], key: SortKey) -> Vec<Todo> {
    tracing::trace!(total = todos.len(), %key, "sorting todos");
    let mut sorted = todos.to_vec();
    match key {
        SortKey::Date => sorted.sort_by_key(|todo| Reverse(todo.created_at())),
        SortKey::Priority => sorted.sort_by_key(|todo| todo.priority().rank()),
        SortKey::Alphabetical => {
            sorted.sort_by_cached_key(|todo| locale::collation_key(todo.text()));
        }
    }
    sorted
}

/// Selects todos whose text contains the search term, case-insensitively.
///
/// The match is a plain substring match. A term that trims to empty matches
/// everything.
#[must_use]
pub fn search_todos(todos: &[Todo], search_term: &str) -> Vec<Todo> {
    let term = search_term.trim();
    if term.is_empty() {
        return todos.to_vec();
    }
    let term = term.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.text().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Tallies the collection by completion status.
#[must_use]
pub fn count_todos(todos: &[Todo]) -> Counts {
    let completed = todos.iter().filter(|todo| todo.is_completed()).count();
    Counts {
        total: todos.len(),
        active: todos.len() - completed,
        completed,
    }
}

/// Returns only the todos that are not completed.
#[must_use]
pub fn clear_completed(todos: &[Todo]) -> Vec<Todo> {
    filter_todos(todos, Filter::Active)
}

/// Returns every todo with `completed` forced to the given state.
///
/// All other fields are unchanged.
#[must_use]
pub fn toggle_all(todos: &[Todo], completed: bool) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| todo.with_completed(completed))
        .collect()
}

/// Selects todos with exactly the given priority.
#[must_use]
pub fn with_priority(todos: &[Todo], priority: Priority) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.priority() == priority)
        .cloned()
        .collect()
}

/// Share of completed todos, as a whole percentage.
///
/// An empty collection is 0% complete. The ratio rounds half-up (1 of 8 is
/// 13), computed in exact integer arithmetic.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn completion_percentage(todos: &[Todo]) -> u8 {
    let counts = count_todos(todos);
    if counts.total == 0 {
        return 0;
    }
    ((200 * counts.completed + counts.total) / (2 * counts.total)) as u8
}
