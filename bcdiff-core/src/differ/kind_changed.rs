//! Detection of a symbol changing its kind between versions.

use crate::differ::changes::{Change, Changes};
use crate::differ::comparator::Comparator;
use crate::types::Symbol;

/// Reports a class becoming an interface, an interface becoming a trait, and
/// so on. Every such transition breaks existing consumers.
#[derive(Clone, Copy, Debug, Default)]
pub struct KindChanged;

impl Comparator for KindChanged {
    fn compare(&self, from: &Symbol, to: &Symbol) -> Changes {
        if from.kind().same_kind(to.kind()) {
            return Changes::empty();
        }

        Changes::from_list([Change::removed(format!(
            "{} {} became {}",
            from.kind().title(),
            from.name,
            to.kind().article_name()
        ))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnumCase;

    #[test]
    fn test_same_kind_no_changes() {
        assert!(KindChanged
            .compare(&Symbol::class("Foo"), &Symbol::class("Foo"))
            .is_empty());
    }

    #[test]
    fn test_enum_case_changes_are_not_kind_changes() {
        let from = Symbol::enumeration("E", vec![EnumCase::new("A")]);
        let to = Symbol::enumeration("E", vec![EnumCase::new("B")]);
        assert!(KindChanged.compare(&from, &to).is_empty());
    }

    #[test]
    fn test_class_became_interface() {
        let changes = KindChanged.compare(&Symbol::class("Foo"), &Symbol::interface("Foo"));
        assert_eq!(
            changes.as_slice(),
            [Change::removed("Class Foo became an interface")]
        );
    }

    #[test]
    fn test_interface_became_class() {
        let changes = KindChanged.compare(&Symbol::interface("Foo"), &Symbol::class("Foo"));
        assert_eq!(
            changes.as_slice(),
            [Change::removed("Interface Foo became a class")]
        );
    }

    #[test]
    fn test_trait_and_enum_transitions() {
        let changes = KindChanged.compare(&Symbol::trait_decl("T"), &Symbol::interface("T"));
        assert_eq!(
            changes.as_slice(),
            [Change::removed("Trait T became an interface")]
        );

        let changes = KindChanged.compare(
            &Symbol::enumeration("E", vec![]),
            &Symbol::class("E"),
        );
        assert_eq!(changes.as_slice(), [Change::removed("Enum E became a class")]);

        let changes = KindChanged.compare(&Symbol::class("C"), &Symbol::enumeration("C", vec![]));
        assert_eq!(changes.as_slice(), [Change::removed("Class C became an enum")]);
    }
}
