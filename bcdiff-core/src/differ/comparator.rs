//! Comparator contract shared by every symbol kind.

use crate::differ::changes::Changes;
use crate::types::Symbol;

/// Computes the changes between an old and a new version of one symbol.
///
/// One comparator is wired per symbol kind. Implementations must tolerate
/// being handed a pair whose kinds differ and should return an empty set for
/// input they do not understand.
pub trait Comparator: Send + Sync {
    fn compare(&self, from: &Symbol, to: &Symbol) -> Changes;
}

impl<F> Comparator for F
where
    F: Fn(&Symbol, &Symbol) -> Changes + Send + Sync,
{
    fn compare(&self, from: &Symbol, to: &Symbol) -> Changes {
        self(from, to)
    }
}

/// Runs several comparators in order and concatenates their results.
#[derive(Default)]
pub struct MultipleChecks {
    checks: Vec<Box<dyn Comparator>>,
}

impl MultipleChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check.
    pub fn with(mut self, check: impl Comparator + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Comparator for MultipleChecks {
    fn compare(&self, from: &Symbol, to: &Symbol) -> Changes {
        self.checks
            .iter()
            .map(|check| check.compare(from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::changes::Change;

    fn removed_check(message: &'static str) -> impl Comparator {
        move |_: &Symbol, _: &Symbol| Changes::from_list([Change::removed(message)])
    }

    #[test]
    fn test_closure_comparator() {
        let check = |from: &Symbol, to: &Symbol| {
            Changes::from_list([Change::added(format!("{} -> {}", from.name, to.name))])
        };
        let changes = check.compare(&Symbol::class("A"), &Symbol::class("B"));
        assert_eq!(changes.as_slice()[0].message(), "A -> B");
    }

    #[test]
    fn test_multiple_checks_in_order() {
        let checks = MultipleChecks::new()
            .with(removed_check("first"))
            .with(removed_check("second"));
        assert_eq!(checks.len(), 2);

        let changes = checks.compare(&Symbol::class("A"), &Symbol::class("A"));
        let messages: Vec<_> = changes.iter().map(Change::message).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_no_checks_is_empty() {
        let checks = MultipleChecks::new();
        assert!(checks.is_empty());
        assert!(checks
            .compare(&Symbol::class("A"), &Symbol::class("A"))
            .is_empty());
    }
}
