use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Priority, TodoId};

/// Days after which an uncompleted todo counts as overdue, unless the caller
/// supplies a threshold of its own.
pub const DEFAULT_OVERDUE_DAYS: f64 = 7.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A single task record.
///
/// Records are plain immutable data. The "mutating" operations
/// ([`toggled`](Self::toggled), [`with_text`](Self::with_text),
/// [`with_completed`](Self::with_completed)) return a sibling record and
/// leave the original untouched.
///
/// Construction does not validate the text length; that gate is
/// [`text::validate`](crate::domain::text::validate), invoked separately by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned at creation.
    id: TodoId,
    /// Task description. Stored trimmed by [`Todo::new`] and
    /// [`Todo::with_text`]; stored verbatim by [`Todo::from_parts`].
    text: String,
    /// Completion flag.
    completed: bool,
    /// Creation timestamp.
    created_at: DateTime<Utc>,
    /// Task priority.
    priority: Priority,
}

impl Todo {
    /// Creates a todo with a fresh id and the current time.
    ///
    /// The text is trimmed but not validated; `completed` starts `false`.
    /// [`Priority::default`] gives callers the medium default.
    #[must_use]
    pub fn new(text: &str, priority: Priority) -> Self {
        let todo = Self::from_parts(TodoId::generate(), text.trim(), false, Utc::now(), priority);
        tracing::debug!(id = %todo.id, %priority, "created todo");
        todo
    }

    /// Builds a todo from explicit parts.
    ///
    /// The deterministic counterpart of [`new`](Self::new): the caller
    /// controls the id and timestamp (fixtures, migrations, tests). The
    /// text is stored exactly as given, untrimmed and unvalidated.
    #[must_use]
    pub fn from_parts(
        id: TodoId,
        text: &str,
        completed: bool,
        created_at: DateTime<Utc>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            text: text.to_string(),
            completed,
            created_at,
            priority,
        }
    }

    /// The unique, stable identifier of this todo.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// The task description.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the todo was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns a copy of this todo with `completed` flipped.
    ///
    /// All other fields are unchanged; applying it twice restores the
    /// original completion state.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy of this todo with the text replaced.
    ///
    /// The new text is trimmed but not validated; all other fields are
    /// unchanged.
    #[must_use]
    pub fn with_text(&self, new_text: &str) -> Self {
        Self {
            text: new_text.trim().to_string(),
            ..self.clone()
        }
    }

    /// Returns a copy of this todo with `completed` forced to the given
    /// state.
    #[must_use]
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    /// Whether the task has been waiting longer than
    /// [`DEFAULT_OVERDUE_DAYS`].
    ///
    /// Completed todos are never overdue.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now(), DEFAULT_OVERDUE_DAYS)
    }

    /// Whether the task was older than `days_threshold` days at `now`.
    ///
    /// Completed todos are never overdue. Age is the exact fractional
    /// elapsed time in days, not a calendar-day count; a todo exactly at
    /// the threshold is not overdue.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>, days_threshold: f64) -> bool {
        if self.completed {
            return false;
        }
        let elapsed = now.signed_duration_since(self.created_at);
        #[allow(clippy::cast_precision_loss)]
        let days = elapsed.num_milliseconds() as f64 / MILLIS_PER_DAY;
        days > days_threshold
    }
}
