//! Doc comment annotation detection.
//!
//! Declarations documented with an `@internal` tag are excluded from
//! compatibility guarantees. Providers evaluate the marker once while
//! resolving a symbol and store the result as a plain flag.

use once_cell::sync::Lazy;
use regex::Regex;

// Standalone, case-sensitive token surrounded by whitespace.
static INTERNAL_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s@internal\s").unwrap());

/// Check whether a doc comment carries the internal marker.
pub fn is_internal_doc_comment(comment: Option<&str>) -> bool {
    comment.is_some_and(|c| INTERNAL_MARKER.is_match(c))
}
