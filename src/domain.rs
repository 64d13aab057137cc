//! Domain model for the todo engine.
//!
//! This module contains the core domain types: the todo record, its
//! identifier and priority, and the text validation gate.

/// Todo record: construction and non-destructive mutation.
pub mod todo;
pub use todo::Todo;

/// Unique todo identifiers.
pub mod id;
pub use id::TodoId;

/// Task priority levels.
pub mod priority;
pub use priority::Priority;

/// Validation gate for todo text.
pub mod text;
pub use text::InvalidTextError;
