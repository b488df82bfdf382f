//! In-memory symbol provider.

use std::collections::HashMap;
use std::path::Path;

use super::snapshot::ApiSnapshot;
use super::SymbolProvider;
use crate::error::ProviderError;
use crate::types::Symbol;

/// Resolved symbols of one codebase version, kept in declaration order.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, usize>,
}

impl SymbolTable {
    /// Build a table, rejecting duplicate names.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, ProviderError> {
        let mut by_name = HashMap::with_capacity(symbols.len());

        for (idx, symbol) in symbols.iter().enumerate() {
            if by_name.insert(symbol.name.clone(), idx).is_some() {
                return Err(ProviderError::malformed(format!(
                    "duplicate symbol {}",
                    symbol.name
                )));
            }
        }

        Ok(Self { symbols, by_name })
    }

    /// Load a JSON API snapshot from disk.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        ApiSnapshot::load(path)?.into_table()
    }

    /// Parse a JSON API snapshot from a string.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        ApiSnapshot::from_json(json)?.into_table()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.by_name.get(name).map(|&idx| &self.symbols[idx])
    }
}

impl SymbolProvider for SymbolTable {
    fn list_class_like_symbols(&self) -> Result<Vec<Symbol>, ProviderError> {
        Ok(self.symbols.clone())
    }

    fn resolve_symbol(&self, name: &str) -> Result<Symbol, ProviderError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnumCase;

    #[test]
    fn test_resolve_and_list_preserve_order() {
        let table = SymbolTable::from_symbols(vec![
            Symbol::class("B"),
            Symbol::interface("A"),
            Symbol::enumeration("C", vec![EnumCase::new("X")]),
        ])
        .unwrap();

        let names: Vec<_> = table
            .list_class_like_symbols()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["B", "A", "C"]);

        assert!(table.resolve_symbol("A").unwrap().is_interface());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_resolve_missing_is_not_found() {
        let table = SymbolTable::default();
        assert!(table.is_empty());

        let err = table.resolve_symbol("Nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = SymbolTable::from_symbols(vec![Symbol::class("A"), Symbol::trait_decl("A")])
            .unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { .. }));
    }
}
