//! In-memory todo-list transformation and query engine.
//!
//! Pure operations over todo records: construction, non-destructive
//! mutation, validation, filtering, sorting, searching and aggregation. The
//! caller owns the collection; every operation returns a fresh value and
//! never touches its input, so observers can rely on a changed reference
//! signalling a changed value.

pub mod domain;
pub use domain::{Priority, Todo, TodoId};

/// Polish display conventions for dates, labels and sort order.
pub mod locale;

/// Pure transformations over todo collections.
pub mod query;
pub use query::{Counts, Filter, SortKey};
