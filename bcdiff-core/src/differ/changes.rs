//! Change records and ordered change sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
        }
    }
}

/// A single detected difference between two versions of a symbol.
///
/// All context is baked into the message when the change is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    kind: ChangeKind,
    message: String,
}

impl Change {
    pub fn added(message: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Added,
            message: message.into(),
        }
    }

    pub fn removed(message: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Removed,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    pub fn is_removed(&self) -> bool {
        self.kind == ChangeKind::Removed
    }

    /// Removals break consumers; additions are additive.
    pub fn is_bc_break(&self) -> bool {
        self.is_removed()
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_bc_break() { "[BC] " } else { "" };
        write!(
            f,
            "{}{}: {}",
            prefix,
            self.kind.as_str().to_uppercase(),
            self.message
        )
    }
}

/// An ordered collection of changes.
///
/// Concatenation via [`Changes::merged_with`] is associative and
/// [`Changes::empty`] is its identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Changes(Vec<Change>);

impl Changes {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list(changes: impl IntoIterator<Item = Change>) -> Self {
        Self(changes.into_iter().collect())
    }

    /// Append `other` after the changes of `self`.
    pub fn merged_with(mut self, other: Changes) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Change] {
        &self.0
    }

    pub fn has_bc_breaks(&self) -> bool {
        self.0.iter().any(Change::is_bc_break)
    }

    /// Backwards-incompatible changes only, in order.
    pub fn bc_breaks(&self) -> Changes {
        self.0.iter().filter(|c| c.is_bc_break()).cloned().collect()
    }

    pub fn summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for change in &self.0 {
            summary.record(change);
        }
        summary
    }
}

impl FromIterator<Change> for Changes {
    fn from_iter<I: IntoIterator<Item = Change>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Changes> for Changes {
    fn from_iter<I: IntoIterator<Item = Changes>>(iter: I) -> Self {
        iter.into_iter().fold(Changes::empty(), Changes::merged_with)
    }
}

impl Extend<Change> for Changes {
    fn extend<I: IntoIterator<Item = Change>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Changes {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Changes {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Summary statistics for a change set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: u32,
    pub removed: u32,
    pub bc_breaks: u32,
}

impl ChangeSummary {
    pub fn record(&mut self, change: &Change) {
        match change.kind() {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Removed => self.removed += 1,
        }

        if change.is_bc_break() {
            self.bc_breaks += 1;
        }
    }

    /// Generate human-readable summary string.
    pub fn text(&self) -> String {
        let mut parts = Vec::new();
        if self.removed > 0 {
            parts.push(format!("{} removed", self.removed));
        }
        if self.added > 0 {
            parts.push(format!("{} added", self.added));
        }

        if parts.is_empty() {
            "No changes".to_string()
        } else {
            parts.join(", ")
        }
    }
}
