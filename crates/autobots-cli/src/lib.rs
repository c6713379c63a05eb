//! # autobots-cli: Contract Tooling
//!
//! Provides the `autobots` command-line interface.
//!
//! ## Subcommands
//!
//! - `autobots validate [PATH...] [--all] [--json]`: validate contract
//!   documents (files or directories) and report every finding.
//! - `autobots version`: print tool and schema versions.
//!
//! ```bash
//! autobots validate contracts/invoices.yaml
//! autobots validate --all --json
//! autobots -v --config ci/autobots.yaml validate --all
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: every contract is valid.
//! - `1`: at least one contract is invalid or could not be loaded.
//! - `2`: usage or configuration error.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation rules live in `autobots-contract`.
//! - Handlers return `anyhow::Result<u8>` where the `u8` is the exit code.

pub mod config;
pub mod validate;

/// Exit code for a fully valid run.
pub const EXIT_OK: u8 = 0;
/// Exit code when any contract fails validation or loading.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for usage or configuration errors.
pub const EXIT_USAGE: u8 = 2;
