//! Enum-specific comparisons.

use crate::differ::changes::{Change, Changes};
use crate::differ::comparator::Comparator;
use crate::types::{EnumCase, Symbol};

/// Detects enum cases being added or removed.
///
/// Cases are matched by name only. Internal cases are ignored on the side
/// where they are internal, so dropping an internal case is not reported.
/// Removals are emitted before additions, each in its enum's declaration
/// order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CasesChanged;

impl Comparator for CasesChanged {
    fn compare(&self, from: &Symbol, to: &Symbol) -> Changes {
        let (Some(from_cases), Some(to_cases)) = (from.cases(), to.cases()) else {
            return Changes::empty();
        };

        let enum_name = &from.name;

        let removed = missing_public_cases(from_cases, to).map(|case| {
            Change::removed(format!("Case {}::{} was removed", enum_name, case.name))
        });

        let added = missing_public_cases(to_cases, from).map(|case| {
            Change::added(format!("Case {}::{} was added", enum_name, case.name))
        });

        removed.chain(added).collect()
    }
}

/// Non-internal cases of `cases` that `other` does not declare.
fn missing_public_cases<'a>(
    cases: &'a [EnumCase],
    other: &'a Symbol,
) -> impl Iterator<Item = &'a EnumCase> + 'a {
    cases
        .iter()
        .filter(move |case| !case.internal && !other.has_case(&case.name))
}
