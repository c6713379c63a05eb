//! # Document Loading
//!
//! Parses YAML or JSON contract documents into [`Contract`] values.
//!
//! Format is chosen by file extension: `.json` is parsed as JSON, anything
//! else (`.yaml`, `.yml`, no extension) as YAML. Absent fields deserialize
//! to empty defaults so that the validator reports them by path; only
//! syntactically broken or wrongly typed documents fail here.

use std::path::Path;

use autobots_core::Contract;

use crate::error::ContractError;
use crate::validate::validate_contract;

/// Label used as the document path for in-memory input.
const STRING_SOURCE: &str = "<string>";

/// Parse a contract from YAML text.
pub fn parse_yaml(content: &str) -> Result<Contract, ContractError> {
    parse_yaml_from(content, STRING_SOURCE)
}

/// Parse a contract from JSON text.
pub fn parse_json(content: &str) -> Result<Contract, ContractError> {
    parse_json_from(content, STRING_SOURCE)
}

/// Read and parse a contract document from disk.
///
/// # Errors
///
/// Returns [`ContractError::DocumentLoad`] if the file cannot be read or
/// is not a well-typed YAML/JSON contract document.
pub fn load_contract(path: &Path) -> Result<Contract, ContractError> {
    let source = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ContractError::DocumentLoad {
        path: source.clone(),
        reason: format!("cannot read file: {e}"),
    })?;

    tracing::debug!(path = %source, bytes = content.len(), "loaded contract document");

    if is_json_path(path) {
        parse_json_from(&content, &source)
    } else {
        parse_yaml_from(&content, &source)
    }
}

/// Load a contract and validate it, returning the contract on success.
pub fn load_and_validate(path: &Path) -> Result<Contract, ContractError> {
    let contract = load_contract(path)?;
    validate_contract(&contract)?;
    Ok(contract)
}

/// Returns true if `path` looks like a contract document this module can load.
pub fn is_contract_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml" | "json")
    )
}

fn is_json_path(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

fn parse_yaml_from(content: &str, source: &str) -> Result<Contract, ContractError> {
    // An empty YAML document is `null`; treat it as an empty mapping so the
    // validator reports the missing fields.
    if content.trim().is_empty() {
        return Ok(Contract::default());
    }
    serde_yaml::from_str(content).map_err(|e| ContractError::DocumentLoad {
        path: source.to_string(),
        reason: format!("invalid YAML: {e}"),
    })
}

fn parse_json_from(content: &str, source: &str) -> Result<Contract, ContractError> {
    serde_json::from_str(content).map_err(|e| ContractError::DocumentLoad {
        path: source.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_YAML: &str = r#"
apiVersion: autobots/v1alpha1
kind: Contract
metadata:
  is_draft: true
spec:
  consumer: { component: web-ui }
  provider: { component: billing-api }
  surface:
    kind: http
    http: { method: POST, path: /v1/invoices, auth: { scheme: Bearer } }
  assertions:
    - { id: a1, text: Status is 200 }
  bindings:
    tests:
      - { id: t1, kind: postman, path: ./tests/t1.json, required: true, covers: [a1] }
"#;

    #[test]
    fn parse_yaml_valid_document() {
        let c = parse_yaml(VALID_YAML).unwrap();
        assert_eq!(c.kind, "Contract");
        assert!(c.is_draft());
        validate_contract(&c).unwrap();
    }

    #[test]
    fn parse_json_valid_document() {
        let json = r#"{
            "apiVersion": "autobots/v1alpha1",
            "kind": "Contract",
            "metadata": {},
            "spec": {
                "consumer": {"component": "web-ui"},
                "provider": {"component": "billing-api"},
                "surface": {"kind": "http", "http": {"method": "GET", "path": "/v1/invoices"}},
                "assertions": [{"id": "a1", "text": "Lists invoices"}],
                "bindings": {"tests": [{"id": "t1", "kind": "sql", "path": "q.sql", "required": false}]}
            }
        }"#;
        let c = parse_json(json).unwrap();
        assert_eq!(c.metadata.is_draft, None);
        validate_contract(&c).unwrap();
    }

    #[test]
    fn parse_yaml_syntax_error_is_document_load() {
        let err = parse_yaml("apiVersion: [unclosed").unwrap_err();
        assert!(matches!(err, ContractError::DocumentLoad { .. }));
        assert!(!err.is_invalid_contract());
        assert!(err.to_string().contains("<string>"));
    }

    #[test]
    fn parse_yaml_wrong_type_is_document_load() {
        let err = parse_yaml("spec:\n  assertions: not-a-list\n").unwrap_err();
        assert!(matches!(err, ContractError::DocumentLoad { .. }));
    }

    #[test]
    fn empty_yaml_parses_to_empty_contract() {
        let c = parse_yaml("  \n").unwrap();
        assert_eq!(c, Contract::default());
        let err = validate_contract(&c).unwrap_err();
        assert!(err.is_invalid_contract());
    }

    #[test]
    fn unsupported_kinds_survive_parsing() {
        let c = parse_yaml(
            "spec:\n  surface: { kind: grpc }\n  bindings:\n    tests: [{ id: t1, kind: curl }]\n",
        )
        .unwrap();
        let spec = c.spec.unwrap();
        assert_eq!(spec.surface.kind, "grpc");
        assert_eq!(spec.bindings.unwrap().tests[0].kind, "curl");
    }

    #[test]
    fn load_contract_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("invoices.yaml");
        std::fs::write(&yaml, VALID_YAML).unwrap();
        let c = load_contract(&yaml).unwrap();
        assert_eq!(c.api_version, "autobots/v1alpha1");

        let json = dir.path().join("invoices.json");
        std::fs::write(&json, serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(load_contract(&json).unwrap(), c);
    }

    #[test]
    fn load_missing_file_is_document_load() {
        let err = load_contract(Path::new("/tmp/autobots-no-such-contract.yaml")).unwrap_err();
        match err {
            ContractError::DocumentLoad { path, reason } => {
                assert!(path.ends_with("autobots-no-such-contract.yaml"));
                assert!(reason.starts_with("cannot read file"));
            }
            other => panic!("Expected DocumentLoad, got: {other}"),
        }
    }

    #[test]
    fn load_and_validate_reports_invalid_contract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        std::fs::write(&path, VALID_YAML.replace("kind: Contract", "kind: Policy")).unwrap();
        let err = load_and_validate(&path).unwrap_err();
        assert!(err.is_invalid_contract());
        assert!(err.to_string().contains("kind: must be 'Contract'"));
    }

    #[test]
    fn is_contract_file_matches_extensions() {
        assert!(is_contract_file(Path::new("a.yaml")));
        assert!(is_contract_file(Path::new("a.yml")));
        assert!(is_contract_file(Path::new("a.json")));
        assert!(!is_contract_file(Path::new("a.sql")));
        assert!(!is_contract_file(Path::new("README")));
    }
}
