//! bcdiff core - backward-compatibility diffing of public type surfaces.
//!
//! Given the symbols that make up a library's public API and two independent
//! resolutions of them (the past and the new version of the same codebase),
//! this crate produces an ordered list of typed change records describing
//! every backwards-incompatible and additive difference.
//!
//! # Layout
//!
//! - [`types`]: resolved symbols (classes, interfaces, traits, enums)
//! - [`provider`]: the [`SymbolProvider`] capability and the JSON snapshot
//!   format front ends hand over
//! - [`differ`]: change sets, the comparator family and the
//!   [`CompareClasses`] orchestrator
//! - [`annotations`]: internal-marker detection used while resolving symbols
//!
//! The crate never parses source code and never renders output; both live on
//! the other side of the provider and change-set boundaries.

pub mod annotations;
pub mod differ;
pub mod error;
pub mod provider;
pub mod types;

pub use differ::{Change, ChangeKind, Changes, CompareClasses, Comparator};
pub use error::{CompareError, ProviderError, Result};
pub use provider::{SymbolProvider, SymbolTable};
pub use types::{EnumCase, Symbol, SymbolKind};

/// Get the version of bcdiff-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
