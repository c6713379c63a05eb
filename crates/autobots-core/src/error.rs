//! # Error Types
//!
//! Core error type for autobots. Derived with `thiserror`; higher crates
//! wrap it or define their own error enums for their concerns.

use thiserror::Error;

/// Top-level error type for the core model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutobotsError {
    /// A kind literal is not part of the closed set for its field.
    #[error("unknown {field} kind: {value:?}")]
    UnknownKind {
        /// Which field the literal came from (e.g. `"surface"`, `"test"`).
        field: &'static str,
        /// The rejected literal, verbatim.
        value: String,
    },
}
