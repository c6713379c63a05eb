//! # Contract Document Model
//!
//! Serde types for the `autobots/v1alpha1` Contract document:
//!
//! ```yaml
//! apiVersion: autobots/v1alpha1
//! kind: Contract
//! metadata:
//!   is_draft: true
//!   labels: { team: billing }
//! spec:
//!   consumer: { component: web-ui }
//!   provider: { component: billing-api }
//!   surface:
//!     kind: http
//!     http:
//!       method: POST
//!       path: /v1/invoices
//!       auth: { scheme: Bearer, scopes: [invoices:write] }
//!   assertions:
//!     - { id: a1, text: Status is 200 }
//!   bindings:
//!     tests:
//!       - { id: t1, kind: postman, path: ./tests/t1.json, required: true, covers: [a1] }
//! ```
//!
//! Every field defaults when absent so that a partial document still
//! deserializes and the validator can report each missing piece by path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of a contract document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Schema identifier, e.g. `autobots/v1alpha1`.
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    /// Document kind; must be `Contract`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ContractMetadata,
    /// Absent when the document has no `spec` key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<ContractSpec>,
}

impl Contract {
    /// Whether the document is explicitly marked as a draft.
    ///
    /// An absent flag counts as not-draft.
    pub fn is_draft(&self) -> bool {
        self.metadata.is_draft.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    /// `None` when the key is absent, distinct from an explicit `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSpec {
    #[serde(default)]
    pub consumer: ContractParty,
    #[serde(default)]
    pub provider: ContractParty,
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub assertions: Vec<Assertion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<ContractBindings>,
}

/// One side of the agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractParty {
    #[serde(default)]
    pub component: String,
}

impl ContractParty {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

/// The technical interface the contract describes.
///
/// `kind` stays a raw string; see [`crate::SurfaceKind`] for the accepted set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    #[serde(default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpSurface>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSurface {
    /// Free text, e.g. `POST`.
    #[serde(default)]
    pub method: String,
    /// e.g. `/v1/invoices/{invoiceId}/mark-paid`
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<HttpAuth>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpAuth {
    /// e.g. `Bearer`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

/// A named, textual claim about required provider behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

impl Assertion {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractBindings {
    #[serde(default)]
    pub tests: Vec<TestBinding>,
}

/// Reference to an external test artifact that exercises assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBinding {
    #[serde(default)]
    pub id: String,
    /// Raw literal; see [`crate::TestKind`] for the accepted set.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub required: bool,
    /// Assertion ids this test exercises.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub covers: Vec<String>,
}
