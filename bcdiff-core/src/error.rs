//! Error types for bcdiff-core.

use thiserror::Error;

/// Result type alias for comparison runs.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors raised by a symbol provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The requested name does not exist in this snapshot.
    #[error("Symbol not found: {name}")]
    NotFound {
        /// Name that was looked up.
        name: String,
    },

    /// Snapshot content is structurally invalid.
    #[error("Malformed snapshot: {message}")]
    Malformed {
        /// Description of the problem.
        message: String,
    },

    /// Snapshot was written by an incompatible format version.
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the document.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// IO error reading a snapshot file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error for snapshot files.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn not_found(name: impl Into<String>) -> Self {
        ProviderError::NotFound { name: name.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ProviderError::Malformed {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }
}

/// Fatal errors that abort a whole comparison run.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Listing the defined API symbols failed.
    #[error("Failed to enumerate defined API symbols: {0}")]
    Enumeration(#[source] ProviderError),

    /// A defined API symbol is unknown to the past sources.
    ///
    /// The defined symbols and the past sources must describe the same
    /// baseline, so this is a configuration error rather than a break.
    #[error("Symbol {name} is part of the defined API but missing from the past sources")]
    MissingFromBaseline {
        /// Name of the symbol.
        name: String,
    },

    /// A provider failed for a reason other than a missing symbol.
    #[error("Failed to resolve {name}: {source}")]
    Provider {
        /// Name being resolved when the failure happened.
        name: String,
        /// Underlying provider failure.
        #[source]
        source: ProviderError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::not_found("App\\Foo");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("App\\Foo"));

        let err = ProviderError::UnsupportedVersion {
            found: 7,
            expected: 1,
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_compare_error_keeps_source() {
        let err = CompareError::Provider {
            name: "Foo".to_string(),
            source: ProviderError::malformed("bad cases"),
        };
        assert!(err.to_string().contains("Foo"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
