//! Dispatch of defined API symbols to kind-specific comparators.

use rayon::prelude::*;
use std::time::Instant;

use crate::differ::changes::{Change, Changes};
use crate::differ::comparator::{Comparator, MultipleChecks};
use crate::differ::enum_based::CasesChanged;
use crate::differ::kind_changed::KindChanged;
use crate::error::{CompareError, Result};
use crate::provider::SymbolProvider;
use crate::types::{Symbol, SymbolKind};

/// Compares every defined API symbol between a past and a new codebase.
///
/// Each symbol is resolved by name in both versions and routed by the kind
/// of its *past* declaration to one of four comparators. A symbol missing
/// from the new sources yields a single removal and nothing else.
pub struct CompareClasses {
    class_based: Box<dyn Comparator>,
    interface_based: Box<dyn Comparator>,
    trait_based: Box<dyn Comparator>,
    enum_based: Box<dyn Comparator>,
}

impl CompareClasses {
    pub fn new(
        class_based: impl Comparator + 'static,
        interface_based: impl Comparator + 'static,
        trait_based: impl Comparator + 'static,
        enum_based: impl Comparator + 'static,
    ) -> Self {
        Self {
            class_based: Box::new(class_based),
            interface_based: Box::new(interface_based),
            trait_based: Box::new(trait_based),
            enum_based: Box::new(enum_based),
        }
    }

    /// Defined API symbols that take part in the comparison, in listing order.
    ///
    /// Anonymous and internal symbols are dropped here and never resolved.
    pub fn defined_api_symbols(defined: &dyn SymbolProvider) -> Result<Vec<Symbol>> {
        let symbols = defined
            .list_class_like_symbols()
            .map_err(CompareError::Enumeration)?;

        Ok(symbols
            .into_iter()
            .filter(|symbol| !symbol.is_excluded_from_api())
            .collect())
    }

    /// Compare sequentially.
    pub fn compare(
        &self,
        defined: &dyn SymbolProvider,
        past: &dyn SymbolProvider,
        new: &dyn SymbolProvider,
    ) -> Result<Changes> {
        let start = Instant::now();
        let names = Self::defined_api_names(defined)?;

        let changes = names
            .iter()
            .map(|name| self.examine_symbol(name, past, new))
            .collect::<Result<Changes>>()?;

        Self::log_finished(names.len(), &changes, start);
        Ok(changes)
    }

    /// Compare symbols in parallel.
    ///
    /// Output order matches [`CompareClasses::compare`].
    pub fn compare_parallel(
        &self,
        defined: &dyn SymbolProvider,
        past: &dyn SymbolProvider,
        new: &dyn SymbolProvider,
    ) -> Result<Changes> {
        let start = Instant::now();
        let names = Self::defined_api_names(defined)?;

        let per_symbol: Vec<Changes> = names
            .par_iter()
            .map(|name| self.examine_symbol(name, past, new))
            .collect::<Result<Vec<Changes>>>()?;

        let changes: Changes = per_symbol.into_iter().collect();

        Self::log_finished(names.len(), &changes, start);
        Ok(changes)
    }

    fn defined_api_names(defined: &dyn SymbolProvider) -> Result<Vec<String>> {
        Ok(Self::defined_api_symbols(defined)?
            .into_iter()
            .map(|symbol| symbol.name)
            .collect())
    }

    fn examine_symbol(
        &self,
        name: &str,
        past: &dyn SymbolProvider,
        new: &dyn SymbolProvider,
    ) -> Result<Changes> {
        let old_symbol = past.resolve_symbol(name).map_err(|err| {
            if err.is_not_found() {
                CompareError::MissingFromBaseline {
                    name: name.to_string(),
                }
            } else {
                CompareError::Provider {
                    name: name.to_string(),
                    source: err,
                }
            }
        })?;

        let new_symbol = match new.resolve_symbol(&old_symbol.name) {
            Ok(symbol) => symbol,
            Err(err) if err.is_not_found() => {
                tracing::debug!("{} was deleted", old_symbol.name);
                return Ok(Changes::from_list([Change::removed(format!(
                    "Class {} has been deleted",
                    old_symbol.name
                ))]));
            }
            Err(err) => {
                return Err(CompareError::Provider {
                    name: old_symbol.name,
                    source: err,
                })
            }
        };

        let comparator: &dyn Comparator = match old_symbol.kind() {
            SymbolKind::Interface => self.interface_based.as_ref(),
            SymbolKind::Trait => self.trait_based.as_ref(),
            SymbolKind::Enum { .. } => self.enum_based.as_ref(),
            SymbolKind::Class => self.class_based.as_ref(),
        };

        tracing::debug!(
            "Comparing {} {}",
            old_symbol.kind().as_str(),
            old_symbol.name
        );

        Ok(comparator.compare(&old_symbol, &new_symbol))
    }

    fn log_finished(symbol_count: usize, changes: &Changes, start: Instant) {
        tracing::info!(
            "Compared {} symbols in {:.1}ms: {}",
            symbol_count,
            start.elapsed().as_secs_f64() * 1000.0,
            changes.summary().text()
        );
    }
}

impl Default for CompareClasses {
    /// Kind-change detection for every kind, plus case changes for enums.
    fn default() -> Self {
        Self::new(
            KindChanged,
            KindChanged,
            KindChanged,
            MultipleChecks::new().with(KindChanged).with(CasesChanged),
        )
    }
}
