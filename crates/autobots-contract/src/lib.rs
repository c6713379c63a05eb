//! # autobots-contract: Contract Validation
//!
//! Decides whether a parsed [`Contract`](autobots_core::Contract) is
//! well-formed and internally consistent, and reports every violation by
//! its dotted/indexed path (e.g. `spec.bindings.tests[1].covers[0]`).
//!
//! ## Validation (`validate`)
//!
//! - [`ContractValidator::validate`]: returns `Ok(())` or
//!   [`ContractError::InvalidContract`] carrying every finding.
//! - [`ContractValidator::check`]: the raw findings list, tolerating an
//!   absent contract.
//!
//! Validation is a pure pass over borrowed data: no I/O, no shared state,
//! no early exit on the first finding.
//!
//! ## Loading (`load`)
//!
//! The [`load`] module turns YAML/JSON files or strings into a `Contract`.
//! It is kept apart from validation so the engine never touches the
//! filesystem.
//!
//! ## Crate Policy
//!
//! - Depends only on `autobots-core` internally.
//! - Finding paths and messages are a stable interface; CI output and
//!   downstream tooling match on them.

pub mod error;
pub mod load;
pub mod validate;

pub use error::ContractError;
pub use load::{is_contract_file, load_and_validate, load_contract, parse_json, parse_yaml};
pub use validate::{
    validate_contract, ContractValidator, ValidationViolations, Violation, ViolationKind,
};
