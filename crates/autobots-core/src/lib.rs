//! # autobots-core: Foundational Contract Types
//!
//! Defines the in-memory shape of an autobots `Contract` document: the
//! agreement between a consumer and a provider component describing an HTTP
//! surface, the behavioral assertions the provider commits to, and the test
//! bindings that exercise those assertions.
//!
//! ## Key Design Principles
//!
//! 1. **The model carries what the document says.** Every string field is
//!    kept exactly as deserialized, including empty values and unsupported
//!    kind literals. Rejecting them is the validator's job, so that every
//!    defect is reported by path instead of failing at parse time.
//!
//! 2. **Closed kind enumerations.** `SurfaceKind` and `TestKind` enumerate
//!    the literals this schema revision accepts. Consumers `match` on them
//!    exhaustively; adding a kind forces every consumer to handle it.
//!
//! 3. **Tri-state draft flag.** `metadata.is_draft` is `Option<bool>` so an
//!    absent flag is distinguishable from an explicit `false`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `autobots-*` crates (this is the leaf of the DAG).
//! - No I/O, no `unsafe`, no `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod model;

pub use error::AutobotsError;
pub use kind::{SurfaceKind, TestKind};
pub use model::{
    Assertion, Contract, ContractBindings, ContractMetadata, ContractParty, ContractSpec,
    HttpAuth, HttpSurface, Surface, TestBinding,
};

/// The `apiVersion` this schema revision documents.
pub const SCHEMA_API_VERSION: &str = "autobots/v1alpha1";

/// The only accepted value of the top-level `kind` field.
pub const CONTRACT_KIND: &str = "Contract";

/// Human-readable schema revision, used in "unsupported kind" messages.
pub const SCHEMA_REVISION: &str = "v0.0.1";
