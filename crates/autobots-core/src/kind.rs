//! # Surface and Test Kinds
//!
//! The closed sets of literals accepted for `spec.surface.kind` and
//! `spec.bindings.tests[].kind`. Parsing is case-sensitive: `"HTTP"` and
//! `"Postman"` are not accepted.
//!
//! The document model stores these fields as raw strings; validation parses
//! them through [`FromStr`] and matches on the result, so an unsupported
//! literal is an ordinary finding rather than a deserialization failure.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AutobotsError;

/// Interface shape a contract describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// An HTTP endpoint: method, path, optional auth.
    Http,
}

impl SurfaceKind {
    /// Returns every supported surface kind.
    pub fn all() -> &'static [SurfaceKind] {
        &[Self::Http]
    }

    /// Returns the document literal for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
        }
    }
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurfaceKind {
    type Err = AutobotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            other => Err(AutobotsError::UnknownKind {
                field: "surface",
                value: other.to_string(),
            }),
        }
    }
}

/// Kind of external test artifact a binding points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    /// A Postman collection.
    Postman,
    /// A SQL check script.
    Sql,
}

impl TestKind {
    /// Returns every supported test kind.
    pub fn all() -> &'static [TestKind] {
        &[Self::Postman, Self::Sql]
    }

    /// Returns the document literal for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postman => "postman",
            Self::Sql => "sql",
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestKind {
    type Err = AutobotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postman" => Ok(Self::Postman),
            "sql" => Ok(Self::Sql),
            other => Err(AutobotsError::UnknownKind {
                field: "test",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_kind_as_str_parses_back() {
        for kind in SurfaceKind::all() {
            let parsed: SurfaceKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_kind_as_str_parses_back() {
        for kind in TestKind::all() {
            let parsed: TestKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn surface_kind_rejects_other_literals() {
        assert!("grpc".parse::<SurfaceKind>().is_err());
        assert!("HTTP".parse::<SurfaceKind>().is_err()); // case-sensitive
        assert!(" http".parse::<SurfaceKind>().is_err());
        assert!("".parse::<SurfaceKind>().is_err());
    }

    #[test]
    fn test_kind_rejects_other_literals() {
        assert!("curl".parse::<TestKind>().is_err());
        assert!("Postman".parse::<TestKind>().is_err());
        assert!("".parse::<TestKind>().is_err());
    }

    #[test]
    fn unknown_kind_error_names_field_and_value() {
        let err = "curl".parse::<TestKind>().unwrap_err();
        assert_eq!(
            err,
            AutobotsError::UnknownKind {
                field: "test",
                value: "curl".to_string(),
            }
        );
        assert_eq!(err.to_string(), r#"unknown test kind: "curl""#);
    }

    #[test]
    fn serde_format_matches_as_str() {
        for kind in TestKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        let json = serde_json::to_string(&SurfaceKind::Http).unwrap();
        assert_eq!(json, "\"http\"");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(SurfaceKind::Http.to_string(), "http");
        assert_eq!(TestKind::Sql.to_string(), "sql");
    }
}
