//! # Contract Errors
//!
//! `InvalidContract` is the single error kind for every schema and
//! consistency finding; callers branch on it to tell "the document is
//! wrong" apart from "the document could not be read".

use thiserror::Error;

use crate::validate::ValidationViolations;

#[derive(Error, Debug)]
pub enum ContractError {
    /// The document parsed but violates one or more contract rules.
    #[error("invalid contract: {0}")]
    InvalidContract(ValidationViolations),

    /// The document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path (or `<string>` for in-memory input) of the document.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },
}

impl ContractError {
    /// Returns true if this is a structural validation failure.
    pub fn is_invalid_contract(&self) -> bool {
        matches!(self, Self::InvalidContract(_))
    }

    /// Returns the findings when this is a validation failure.
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            Self::InvalidContract(v) => Some(v),
            Self::DocumentLoad { .. } => None,
        }
    }
}
