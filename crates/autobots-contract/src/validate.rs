//! # Contract Validation
//!
//! Structural and referential validation of a parsed [`Contract`].
//!
//! ## Rule Groups
//!
//! Evaluated in a fixed order so output is deterministic:
//!
//! 1. **Top-level**: `apiVersion`, `kind`, presence of `spec`.
//! 2. **Parties**: consumer and provider component names.
//! 3. **Surface**: `kind`, then the HTTP sub-object for `kind=http`.
//! 4. **Assertions**: non-empty sequence, ids present and unique, text present.
//! 5. **Bindings**: non-empty test sequence, ids unique, kinds supported,
//!    paths present, `covers` resolving against the assertion ids of step 4.
//!
//! Every group appends to the same collector and none aborts the pass.
//! The only skips are local: an empty surface kind skips surface subfields,
//! an assertion without an id skips its text check, and an absent or empty
//! test sequence skips per-test checks.
//!
//! ## Paths
//!
//! Findings are addressed with dotted field names and zero-based indexes,
//! e.g. `spec.assertions[1].id` or `spec.bindings.tests[0].covers[2]`.
//! An empty path means the finding concerns the document as a whole.

use std::collections::HashSet;
use std::fmt;

use autobots_core::{
    Assertion, Contract, ContractBindings, ContractSpec, HttpSurface, Surface, SurfaceKind,
    TestKind, CONTRACT_KIND, SCHEMA_REVISION,
};
use serde::Serialize;

use crate::error::ContractError;

/// Header line of the rendered findings block.
pub const VALIDATION_FAILED_HEADER: &str = "contract validation failed:";

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is empty or absent.
    MissingField,
    /// A literal outside its accepted set.
    InvalidValue,
    /// A value present but badly shaped (leading slash, whitespace).
    MalformedValue,
    /// An identifier repeated within its sequence.
    DuplicateId,
    /// A reference to an assertion id that does not exist.
    DanglingReference,
    /// Fields that are individually fine but contradict each other.
    Inconsistent,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidValue => "invalid_value",
            Self::MalformedValue => "malformed_value",
            Self::DuplicateId => "duplicate_id",
            Self::DanglingReference => "dangling_reference",
            Self::Inconsistent => "inconsistent",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dotted/indexed path to the offending field. Empty for document-level findings.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Ordered collection of findings from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Returns true if any finding sits exactly at `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// `Ok(())` when empty, otherwise [`ContractError::InvalidContract`].
    pub fn into_result(self) -> Result<(), ContractError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ContractError::InvalidContract(self))
        }
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation {
            path: path.into(),
            message: message.into(),
            kind,
        });
    }

    fn required(&mut self, path: impl Into<String>) {
        self.push(path, "required", ViolationKind::MissingField);
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return Ok(());
        }
        writeln!(f, "{VALIDATION_FAILED_HEADER}")?;
        for v in &self.violations {
            writeln!(f, " - {v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Validates contracts against the `v0.0.1` rules.
///
/// Stateless: every call allocates its own collector and id sets, so one
/// validator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractValidator;

impl ContractValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a contract, returning every finding on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidContract`] if at least one rule is
    /// violated. Never returns any other variant.
    pub fn validate(&self, contract: &Contract) -> Result<(), ContractError> {
        self.check(Some(contract)).into_result()
    }

    /// Run every rule group and return the findings.
    ///
    /// An absent contract yields a single document-level finding.
    pub fn check(&self, contract: Option<&Contract>) -> ValidationViolations {
        let mut errs = ValidationViolations::new();

        let Some(contract) = contract else {
            errs.push("", "contract is missing", ViolationKind::MissingField);
            return errs;
        };

        tracing::debug!(api_version = %contract.api_version, "validating contract");

        validate_top_level(contract, &mut errs);
        match &contract.spec {
            Some(spec) => validate_spec(spec, &mut errs),
            None => errs.required("spec"),
        }

        tracing::debug!(violations = errs.len(), "contract validation complete");
        errs
    }
}

/// Validate a contract with a default [`ContractValidator`].
pub fn validate_contract(contract: &Contract) -> Result<(), ContractError> {
    ContractValidator::new().validate(contract)
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ── Top level ─────────────────────────────────────────────

fn validate_top_level(c: &Contract, errs: &mut ValidationViolations) {
    if is_blank(&c.api_version) {
        errs.required("apiVersion");
    }
    if is_blank(&c.kind) {
        errs.required("kind");
    } else if c.kind != CONTRACT_KIND {
        errs.push(
            "kind",
            format!("must be '{CONTRACT_KIND}'"),
            ViolationKind::InvalidValue,
        );
    }
    // metadata: is_draft absent/true/false and labels are all accepted.
}

fn validate_spec(spec: &ContractSpec, errs: &mut ValidationViolations) {
    validate_parties(spec, errs);
    validate_surface(&spec.surface, errs);

    let assertion_ids = validate_assertions(&spec.assertions, errs);
    match &spec.bindings {
        Some(bindings) => validate_bindings(bindings, &assertion_ids, errs),
        None => errs.required("spec.bindings"),
    }
}

fn validate_parties(spec: &ContractSpec, errs: &mut ValidationViolations) {
    tracing::trace!("checking parties");
    if is_blank(&spec.consumer.component) {
        errs.required("spec.consumer.component");
    }
    if is_blank(&spec.provider.component) {
        errs.required("spec.provider.component");
    }
}

// ── Surface ───────────────────────────────────────────────

fn validate_surface(surface: &Surface, errs: &mut ValidationViolations) {
    tracing::trace!(kind = %surface.kind, "checking surface");
    if is_blank(&surface.kind) {
        errs.required("spec.surface.kind");
        return;
    }

    match surface.kind.parse::<SurfaceKind>() {
        Ok(SurfaceKind::Http) => validate_http(surface.http.as_ref(), errs),
        Err(_) => errs.push(
            "spec.surface.kind",
            format!(
                "unsupported kind ({SCHEMA_REVISION} supports only {})",
                SurfaceKind::all()
                    .iter()
                    .map(|k| format!("'{k}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ViolationKind::InvalidValue,
        ),
    }
}

fn validate_http(http: Option<&HttpSurface>, errs: &mut ValidationViolations) {
    let Some(http) = http else {
        errs.push(
            "spec.surface.http",
            format!("required for kind={}", SurfaceKind::Http),
            ViolationKind::MissingField,
        );
        return;
    };

    if is_blank(&http.method) {
        errs.required("spec.surface.http.method");
    }
    if is_blank(&http.path) {
        errs.required("spec.surface.http.path");
    } else if !http.path.starts_with('/') {
        errs.push(
            "spec.surface.http.path",
            "must start with '/'",
            ViolationKind::MalformedValue,
        );
    }

    // Scopes are unconstrained.
    if let Some(auth) = &http.auth {
        if auth.scheme.contains([' ', '\t', '\n']) {
            errs.push(
                "spec.surface.http.auth.scheme",
                "must not contain whitespace",
                ViolationKind::MalformedValue,
            );
        }
    }
}

// ── Assertions ────────────────────────────────────────────

/// Returns the set of assertion ids seen, for `covers` resolution.
fn validate_assertions<'a>(
    assertions: &'a [Assertion],
    errs: &mut ValidationViolations,
) -> HashSet<&'a str> {
    tracing::trace!(count = assertions.len(), "checking assertions");
    if assertions.is_empty() {
        errs.push(
            "spec.assertions",
            "must have at least one assertion",
            ViolationKind::MissingField,
        );
        return HashSet::new();
    }

    let mut ids = HashSet::with_capacity(assertions.len());
    for (i, a) in assertions.iter().enumerate() {
        let prefix = format!("spec.assertions[{i}]");

        if is_blank(&a.id) {
            errs.required(format!("{prefix}.id"));
            continue;
        }
        if !ids.insert(a.id.as_str()) {
            errs.push(
                format!("{prefix}.id"),
                "duplicate assertion id",
                ViolationKind::DuplicateId,
            );
        }
        if is_blank(&a.text) {
            errs.required(format!("{prefix}.text"));
        }
    }
    ids
}

// ── Bindings ──────────────────────────────────────────────

fn validate_bindings(
    bindings: &ContractBindings,
    assertion_ids: &HashSet<&str>,
    errs: &mut ValidationViolations,
) {
    tracing::trace!(count = bindings.tests.len(), "checking test bindings");
    if bindings.tests.is_empty() {
        errs.push(
            "spec.bindings.tests",
            "must have at least one test binding",
            ViolationKind::MissingField,
        );
        return;
    }

    let mut test_ids: HashSet<&str> = HashSet::with_capacity(bindings.tests.len());
    for (i, t) in bindings.tests.iter().enumerate() {
        let prefix = format!("spec.bindings.tests[{i}]");

        if is_blank(&t.id) {
            errs.required(format!("{prefix}.id"));
        } else if !test_ids.insert(t.id.as_str()) {
            errs.push(
                format!("{prefix}.id"),
                "duplicate test id",
                ViolationKind::DuplicateId,
            );
        }

        if is_blank(&t.kind) {
            errs.required(format!("{prefix}.kind"));
        } else {
            match t.kind.parse::<TestKind>() {
                Ok(TestKind::Postman | TestKind::Sql) => {}
                Err(_) => errs.push(
                    format!("{prefix}.kind"),
                    format!(
                        "unsupported kind ({SCHEMA_REVISION} supports {})",
                        TestKind::all()
                            .iter()
                            .map(TestKind::as_str)
                            .collect::<Vec<_>>()
                            .join("|")
                    ),
                    ViolationKind::InvalidValue,
                ),
            }
        }

        if is_blank(&t.path) {
            errs.required(format!("{prefix}.path"));
        }

        for (j, aid) in t.covers.iter().enumerate() {
            if !assertion_ids.contains(aid.as_str()) {
                errs.push(
                    format!("{prefix}.covers[{j}]"),
                    format!("unknown assertion id '{aid}'"),
                    ViolationKind::DanglingReference,
                );
            }
        }

        if t.required && t.covers.is_empty() {
            errs.push(
                format!("{prefix}.covers"),
                "required tests should cover at least one assertion",
                ViolationKind::Inconsistent,
            );
        }
    }
}
