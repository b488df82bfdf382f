//! bcdiff configuration loading from `.bcdiff.toml`.
//!
//! Configuration is optional - bcdiff uses sensible defaults if no config
//! file exists. Command-line flags always win over file settings.
//!
//! # Example Configuration
//!
//! ```toml
//! [output]
//! format = "markdown"
//! color = false
//!
//! [compare]
//! parallel = true
//!
//! [baseline]
//! ignore = ["^\\[BC\\] REMOVED: Class Legacy\\\\.* has been deleted$"]
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::constants::CONFIG_FILE_NAME;

/// Root configuration structure loaded from `.bcdiff.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct BcdiffConfig {
    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Comparison run settings.
    #[serde(default)]
    pub compare: CompareSettings,

    /// Tolerated changes.
    #[serde(default)]
    pub baseline: BaselineSettings,
}

/// Output formatting preferences.
///
/// `--format` overrides `format`.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `text`, `json`, `markdown`, `github`
    #[serde(default)]
    pub format: Option<String>,

    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CompareSettings {
    /// Compare symbols on all cores.
    #[serde(default)]
    pub parallel: bool,
}

/// Allow-list of changes that should not be reported.
#[derive(Debug, Deserialize, Default)]
pub struct BaselineSettings {
    /// Regular expressions matched against the rendered change, e.g.
    /// `[BC] REMOVED: Class Foo has been deleted`.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl BcdiffConfig {
    /// Load configuration from `.bcdiff.toml` in the given directory.
    ///
    /// Missing or unparsable files fall back to defaults; problems are
    /// logged as warnings.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            match Self::load_file(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("{:#}", e);
                }
            }
        }
        Self::default()
    }

    /// Load an explicitly requested configuration file.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn parallel(&self) -> bool {
        self.compare.parallel
    }

    pub fn baseline_patterns(&self) -> &[String] {
        &self.baseline.ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = BcdiffConfig::load(dir.path());

        assert!(config.default_format().is_none());
        assert!(config.use_color().is_none());
        assert!(!config.parallel());
        assert!(config.baseline_patterns().is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[output]
format = "json"
color = false

[compare]
parallel = true

[baseline]
ignore = ["Class Legacy"]
"#,
        )
        .unwrap();

        let config = BcdiffConfig::load(dir.path());
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
        assert!(config.parallel());
        assert_eq!(config.baseline_patterns(), ["Class Legacy".to_string()]);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[output\nformat = ").unwrap();

        let config = BcdiffConfig::load(dir.path());
        assert!(config.default_format().is_none());
    }

    #[test]
    fn test_explicit_file_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[compare]\nparallel = \"yes\"").unwrap();

        assert!(BcdiffConfig::load_file(&path).is_err());
        assert!(BcdiffConfig::load_file(&dir.path().join("absent.toml")).is_err());
    }
}
