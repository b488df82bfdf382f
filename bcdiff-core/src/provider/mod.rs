//! Symbol providers.
//!
//! A provider answers structural queries against one version of a codebase.
//! Three providers take part in a comparison run: the defined API symbols,
//! the past sources and the new sources.

pub mod snapshot;
pub mod table;

pub use snapshot::{ApiSnapshot, CaseDecl, DeclKind, SymbolDecl, SNAPSHOT_VERSION};
pub use table::SymbolTable;

use crate::error::ProviderError;
use crate::types::Symbol;

/// Lists and resolves class-like symbols of a codebase snapshot.
///
/// Implementations must be safe for concurrent reads; comparisons may resolve
/// symbols from several threads at once.
pub trait SymbolProvider: Send + Sync {
    /// All class-like symbols, in a stable order.
    fn list_class_like_symbols(&self) -> Result<Vec<Symbol>, ProviderError>;

    /// Resolve one symbol by name.
    ///
    /// Fails with [`ProviderError::NotFound`] when the name is absent.
    fn resolve_symbol(&self, name: &str) -> Result<Symbol, ProviderError>;
}

impl<P: SymbolProvider + ?Sized> SymbolProvider for &P {
    fn list_class_like_symbols(&self) -> Result<Vec<Symbol>, ProviderError> {
        (**self).list_class_like_symbols()
    }

    fn resolve_symbol(&self, name: &str) -> Result<Symbol, ProviderError> {
        (**self).resolve_symbol(name)
    }
}
