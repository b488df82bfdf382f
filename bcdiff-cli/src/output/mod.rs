//! Output formatting module for the bcdiff CLI
//!
//! Provides unified output formatting across commands with support for
//! multiple formats: text (human-readable), json (machine-readable),
//! markdown (pull request comments) and github (workflow annotations).

use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

mod github;
mod json;
mod markdown;

pub use self::github::GithubOutput;
pub use self::json::JsonOutput;
pub use self::markdown::MarkdownOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored text (default)
    #[default]
    Text,
    /// JSON format for machine consumption
    Json,
    /// Markdown, suitable for pull request comments
    Markdown,
    /// GitHub Actions workflow commands
    Github,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "github" => Ok(OutputFormat::Github),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub no_color: bool,
    /// Minified JSON
    pub compact: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            compact: false,
        }
    }

    /// Create an OutputConfig with TTY detection and optional color override.
    ///
    /// Colors are disabled when stdout is not a terminal unless
    /// `color_override` is `Some(true)`.
    pub fn auto_detect(format: OutputFormat, color_override: Option<bool>) -> Self {
        let use_color = color_override.unwrap_or_else(|| std::io::stdout().is_terminal());
        Self {
            format,
            no_color: !use_color,
            compact: false,
        }
    }

    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    /// Builder: disable colors
    pub fn without_colors(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

/// Trait for types that can be formatted as output
pub trait Outputter: Serialize + Sized {
    /// Render as plain text
    fn to_text(&self, config: &OutputConfig) -> String;

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render as Markdown
    fn to_markdown(&self, config: &OutputConfig) -> String {
        // Default implementation falls back to text
        self.to_text(config)
    }

    /// Render as GitHub Actions workflow commands
    fn to_github(&self, config: &OutputConfig) -> String {
        self.to_text(config)
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Text => self.to_text(config),
            OutputFormat::Json => self.to_json(config),
            OutputFormat::Markdown => self.to_markdown(config),
            OutputFormat::Github => self.to_github(config),
        }
    }
}

/// Result wrapper for formatted output
pub struct Output<T> {
    data: T,
    config: OutputConfig,
}

impl<T: Outputter> Output<T> {
    pub fn with_config(data: T, config: OutputConfig) -> Self {
        Self { data, config }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Plain {
        value: u32,
    }

    impl Outputter for Plain {
        fn to_text(&self, _config: &OutputConfig) -> String {
            format!("value = {}", self.value)
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("MD".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new(OutputFormat::Json)
            .without_colors()
            .compact();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.use_colors());
        assert!(config.compact);
    }

    #[test]
    fn test_color_override() {
        assert!(OutputConfig::auto_detect(OutputFormat::Text, Some(true)).use_colors());
        assert!(!OutputConfig::auto_detect(OutputFormat::Text, Some(false)).use_colors());
    }

    #[test]
    fn test_render_dispatch_falls_back_to_text() {
        let data = Plain { value: 7 };
        let md = OutputConfig::new(OutputFormat::Markdown);
        assert_eq!(data.render(&md), "value = 7");

        let json = OutputConfig::new(OutputFormat::Json).compact();
        assert_eq!(data.render(&json), r#"{"value":7}"#);
    }
}
