//! Backward-compatibility diff engine.
//!
//! This module compares two resolutions of the same public API and produces an
//! ordered [`Changes`] set describing what was added and what was removed.
//!
//! # Features
//!
//! - **Kind dispatch**: every defined API symbol is routed to the comparator
//!   registered for the kind of its past declaration
//! - **Deletion detection**: symbols missing from the new sources become a
//!   single removal
//! - **Enum cases**: added and removed cases, ignoring internal ones
//! - **Parallel processing**: symbols can be compared concurrently via Rayon
//!   with output identical to the sequential run
//!
//! # Example
//!
//! ```
//! use bcdiff_core::differ::CompareClasses;
//! use bcdiff_core::provider::SymbolTable;
//! use bcdiff_core::types::{EnumCase, Symbol};
//!
//! let past = SymbolTable::from_symbols(vec![
//!     Symbol::enumeration("Suit", vec![EnumCase::new("Hearts")]),
//! ])?;
//! let new = SymbolTable::from_symbols(vec![
//!     Symbol::enumeration("Suit", vec![EnumCase::new("Hearts"), EnumCase::new("Clubs")]),
//! ])?;
//!
//! let changes = CompareClasses::default().compare(&past, &past, &new)?;
//! assert_eq!(changes.as_slice()[0].to_string(), "ADDED: Case Suit::Clubs was added");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod changes;
pub mod compare_classes;
pub mod comparator;
pub mod enum_based;
pub mod kind_changed;

pub use changes::{Change, ChangeKind, ChangeSummary, Changes};
pub use compare_classes::CompareClasses;
pub use comparator::{Comparator, MultipleChecks};
pub use enum_based::CasesChanged;
pub use kind_changed::KindChanged;
