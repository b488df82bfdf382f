//! Data model for resolved API symbols.
//!
//! A [`Symbol`] is an immutable view of one user-declared type within a single
//! version of a codebase. The same logical type resolved from two providers
//! yields two independent `Symbol`s that are compared as a pair.

use serde::{Deserialize, Serialize};

/// A single case of an enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    pub name: String,
    /// Excluded from compatibility guarantees.
    #[serde(default)]
    pub internal: bool,
}

impl EnumCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: false,
        }
    }

    /// Create a case flagged as internal.
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: true,
        }
    }
}

/// Kind of a class-like declaration.
///
/// Only enums carry extra structure (their ordered cases).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Interface,
    Trait,
    Enum { cases: Vec<EnumCase> },
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Interface => "interface",
            SymbolKind::Trait => "trait",
            SymbolKind::Enum { .. } => "enum",
        }
    }

    /// Kind name with its indefinite article, e.g. "an interface".
    pub fn article_name(&self) -> &'static str {
        match self {
            SymbolKind::Class => "a class",
            SymbolKind::Interface => "an interface",
            SymbolKind::Trait => "a trait",
            SymbolKind::Enum { .. } => "an enum",
        }
    }

    /// Capitalized kind name used as a message prefix, e.g. "Interface".
    pub fn title(&self) -> &'static str {
        match self {
            SymbolKind::Class => "Class",
            SymbolKind::Interface => "Interface",
            SymbolKind::Trait => "Trait",
            SymbolKind::Enum { .. } => "Enum",
        }
    }

    /// Whether both kinds are the same variant, ignoring enum cases.
    pub fn same_kind(&self, other: &SymbolKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A resolved class-like declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(flatten)]
    pub kind: SymbolKind,
    /// Excluded from compatibility guarantees.
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub anonymous: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            internal: false,
            anonymous: false,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Interface)
    }

    pub fn trait_decl(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Trait)
    }

    pub fn enumeration(name: impl Into<String>, cases: Vec<EnumCase>) -> Self {
        Self::new(name, SymbolKind::Enum { cases })
    }

    /// Set the internal flag.
    pub fn with_internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }

    /// Mark as anonymous.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, SymbolKind::Interface)
    }

    pub fn is_trait(&self) -> bool {
        matches!(self.kind, SymbolKind::Trait)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, SymbolKind::Enum { .. })
    }

    /// Enum cases in declaration order, `None` for non-enums.
    pub fn cases(&self) -> Option<&[EnumCase]> {
        match &self.kind {
            SymbolKind::Enum { cases } => Some(cases),
            _ => None,
        }
    }

    /// Whether an enum declares a case with exactly this name.
    pub fn has_case(&self, name: &str) -> bool {
        self.cases()
            .is_some_and(|cases| cases.iter().any(|c| c.name == name))
    }

    /// Anonymous and internal symbols never take part in a comparison.
    pub fn is_excluded_from_api(&self) -> bool {
        self.anonymous || self.internal
    }
}
