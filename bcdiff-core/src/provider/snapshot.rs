//! JSON API snapshot format.
//!
//! A snapshot is what a source-parsing front end hands over to the
//! comparison core: the class-like declarations of one codebase version with
//! their raw doc comments. Loading a snapshot resolves each declaration into
//! a [`Symbol`], evaluating the internal marker once per symbol and per case.
//!
//! ```json
//! {
//!   "version": 1,
//!   "symbols": [
//!     { "name": "App\\Month", "kind": "enum",
//!       "cases": [ { "name": "March" },
//!                  { "name": "FakeMonth", "doc_comment": "/** @internal */" } ] },
//!     { "name": "App\\Service", "kind": "interface" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::table::SymbolTable;
use crate::annotations::is_internal_doc_comment;
use crate::error::ProviderError;
use crate::types::{EnumCase, Symbol, SymbolKind};

/// Snapshot format version this build reads and writes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Declared kind of a snapshot entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Class,
    Interface,
    Trait,
    Enum,
}

/// A single enum case declaration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CaseDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    /// Explicit internal flag, OR-ed with the doc comment marker.
    #[serde(default)]
    pub internal: bool,
}

/// A class-like declaration as produced by a source front end.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymbolDecl {
    pub name: String,
    pub kind: DeclKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<CaseDecl>,
}

impl SymbolDecl {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            doc_comment: None,
            internal: false,
            anonymous: false,
            cases: Vec::new(),
        }
    }

    /// Resolve into a [`Symbol`], validating the declaration.
    pub fn resolve(&self) -> Result<Symbol, ProviderError> {
        if self.name.trim().is_empty() {
            return Err(ProviderError::malformed("symbol with an empty name"));
        }

        if self.kind != DeclKind::Enum && !self.cases.is_empty() {
            return Err(ProviderError::malformed(format!(
                "{} declares cases but is not an enum",
                self.name
            )));
        }

        let kind = match self.kind {
            DeclKind::Class => SymbolKind::Class,
            DeclKind::Interface => SymbolKind::Interface,
            DeclKind::Trait => SymbolKind::Trait,
            DeclKind::Enum => SymbolKind::Enum {
                cases: self.resolve_cases()?,
            },
        };

        Ok(Symbol {
            name: self.name.clone(),
            kind,
            internal: self.internal || is_internal_doc_comment(self.doc_comment.as_deref()),
            anonymous: self.anonymous,
        })
    }

    fn resolve_cases(&self) -> Result<Vec<EnumCase>, ProviderError> {
        let mut seen = HashSet::with_capacity(self.cases.len());

        self.cases
            .iter()
            .map(|case| {
                if !seen.insert(case.name.as_str()) {
                    return Err(ProviderError::malformed(format!(
                        "duplicate case {}::{}",
                        self.name, case.name
                    )));
                }

                Ok(EnumCase {
                    name: case.name.clone(),
                    internal: case.internal
                        || is_internal_doc_comment(case.doc_comment.as_deref()),
                })
            })
            .collect()
    }
}

/// A versioned list of declarations for one codebase version.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiSnapshot {
    pub version: u32,
    #[serde(default)]
    pub symbols: Vec<SymbolDecl>,
}

impl Default for ApiSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            symbols: Vec::new(),
        }
    }
}

impl ApiSnapshot {
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let snapshot: ApiSnapshot = serde_json::from_str(json)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ProviderError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        Ok(snapshot)
    }

    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded snapshot {:?} ({} bytes)", path, content.len());
        Self::from_json(&content)
    }

    /// Resolve every declaration into a [`SymbolTable`].
    pub fn into_table(self) -> Result<SymbolTable, ProviderError> {
        let symbols = self
            .symbols
            .iter()
            .map(SymbolDecl::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        SymbolTable::from_symbols(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SymbolProvider;
    use std::io::Write;

    const MONTHS: &str = r#"{
        "version": 1,
        "symbols": [
            {
                "name": "RoaveTestAsset\\EnumWithCasesBeingChanged",
                "kind": "enum",
                "cases": [
                    { "name": "March" },
                    { "name": "December" },
                    {
                        "name": "FakeMonth",
                        "doc_comment": "/**\n * @internal - may be removed without notice\n */"
                    }
                ]
            },
            { "name": "App\\Hidden", "kind": "class", "doc_comment": "/** @internal */" },
            { "name": "App\\Flagged", "kind": "trait", "internal": true },
            { "name": "class@anonymous", "kind": "class", "anonymous": true }
        ]
    }"#;

    #[test]
    fn test_internal_marker_resolved_on_load() {
        let table = SymbolTable::from_json(MONTHS).unwrap();

        let months = table
            .resolve_symbol("RoaveTestAsset\\EnumWithCasesBeingChanged")
            .unwrap();
        let cases = months.cases().unwrap();
        assert_eq!(cases.len(), 3);
        assert!(!cases[0].internal);
        assert!(cases[2].internal);

        assert!(table.resolve_symbol("App\\Hidden").unwrap().internal);
        assert!(table.resolve_symbol("App\\Flagged").unwrap().internal);
        assert!(table.resolve_symbol("class@anonymous").unwrap().anonymous);
    }

    #[test]
    fn test_unsupported_version() {
        let err = ApiSnapshot::from_json(r#"{ "version": 9, "symbols": [] }"#).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::UnsupportedVersion { found: 9, .. }
        ));
    }

    #[test]
    fn test_cases_on_class_rejected() {
        let json = r#"{ "version": 1, "symbols": [
            { "name": "Foo", "kind": "class", "cases": [ { "name": "A" } ] }
        ] }"#;
        let err = SymbolTable::from_json(json).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { .. }));
    }

    #[test]
    fn test_duplicate_case_rejected() {
        let mut decl = SymbolDecl::new("Suit", DeclKind::Enum);
        decl.cases = vec![
            CaseDecl {
                name: "Hearts".to_string(),
                ..Default::default()
            },
            CaseDecl {
                name: "Hearts".to_string(),
                ..Default::default()
            },
        ];
        assert!(decl.resolve().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(SymbolDecl::new("  ", DeclKind::Class).resolve().is_err());
    }

    #[test]
    fn test_invalid_json() {
        let err = ApiSnapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MONTHS.as_bytes()).unwrap();

        let table = SymbolTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SymbolTable::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
    }
}
