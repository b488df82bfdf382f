//! Baseline of tolerated changes.
//!
//! A baseline is a list of regular expressions. Any change whose rendered
//! form (`[BC] REMOVED: ...` / `ADDED: ...`) matches one of them is dropped
//! before reporting.

use bcdiff_core::differ::{Change, Changes};
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaselineError {
    #[error("Invalid baseline pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Default)]
pub struct Baseline {
    patterns: Vec<Regex>,
}

impl Baseline {
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, BaselineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(pattern).map_err(|source| BaselineError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn ignores(&self, change: &Change) -> bool {
        let rendered = change.to_string();
        self.patterns.iter().any(|p| p.is_match(&rendered))
    }

    /// Split `changes` into reported and ignored, keeping order.
    pub fn apply(&self, changes: Changes) -> (Changes, Changes) {
        if self.is_empty() {
            return (changes, Changes::empty());
        }

        let (ignored, kept): (Vec<Change>, Vec<Change>) =
            changes.into_iter().partition(|c| self.ignores(c));

        for change in &ignored {
            tracing::debug!("Baseline ignores: {}", change);
        }

        (Changes::from_list(kept), Changes::from_list(ignored))
    }
}
