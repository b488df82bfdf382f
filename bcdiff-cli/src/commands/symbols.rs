//! Symbols command - list the public API a snapshot defines

use std::path::Path;

use anyhow::Context;
use bcdiff_core::differ::CompareClasses;
use bcdiff_core::provider::{SymbolProvider, SymbolTable};
use colored::Colorize;
use serde::Serialize;

use crate::output::{MarkdownOutput, Output, OutputConfig, Outputter};

#[derive(Debug, Clone, Serialize)]
pub struct ListedSymbol {
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<String>,
}

/// Defined API of a snapshot
#[derive(Debug, Serialize)]
pub struct SymbolList {
    pub snapshot: String,
    pub symbols: Vec<ListedSymbol>,
    /// Anonymous or internal symbols left out of the API.
    pub excluded: usize,
}

impl Outputter for SymbolList {
    fn to_text(&self, config: &OutputConfig) -> String {
        let mut output = String::new();

        for symbol in &self.symbols {
            let kind = format!("{:<9}", symbol.kind);
            if config.use_colors() {
                output.push_str(&format!("{} {}", kind.cyan(), symbol.name.bold()));
            } else {
                output.push_str(&format!("{} {}", kind, symbol.name));
            }
            if !symbol.cases.is_empty() {
                output.push_str(&format!(" ({})", symbol.cases.join(", ")));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "{} public symbols, {} excluded",
            self.symbols.len(),
            self.excluded
        ));
        output
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        MarkdownOutput::section(
            "Symbols",
            self.symbols
                .iter()
                .map(|s| format!("{} {}", s.kind, s.name)),
        )
    }
}

pub fn execute(snapshot: &Path) -> anyhow::Result<SymbolList> {
    let table = SymbolTable::load(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;

    let total = table.list_class_like_symbols()?.len();
    let symbols: Vec<ListedSymbol> = CompareClasses::defined_api_symbols(&table)?
        .into_iter()
        .map(|symbol| ListedSymbol {
            kind: symbol.kind().as_str().to_string(),
            cases: symbol
                .cases()
                .map(|cases| {
                    cases
                        .iter()
                        .filter(|case| !case.internal)
                        .map(|case| case.name.clone())
                        .collect()
                })
                .unwrap_or_default(),
            name: symbol.name,
        })
        .collect();

    Ok(SymbolList {
        snapshot: snapshot.display().to_string(),
        excluded: total - symbols.len(),
        symbols,
    })
}

pub fn run(snapshot: &Path, config: OutputConfig) -> anyhow::Result<()> {
    let list = execute(snapshot)?;
    Output::with_config(list, config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn make_snapshot(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("api.json");
        fs::write(
            &path,
            r#"{
  "version": 1,
  "symbols": [
    {"name": "App\\Foo", "kind": "class"},
    {"name": "App\\Hidden", "kind": "class", "doc_comment": "/** @internal */"},
    {"name": "class@anonymous", "kind": "class", "anonymous": true},
    {"name": "App\\Suit", "kind": "enum", "cases": [
      {"name": "Hearts"},
      {"name": "Joker", "internal": true}
    ]}
  ]
}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_lists_only_public_symbols() {
        let dir = TempDir::new().unwrap();
        let list = execute(&make_snapshot(&dir)).unwrap();

        let names: Vec<_> = list.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["App\\Foo", "App\\Suit"]);
        assert_eq!(list.excluded, 2);
        assert_eq!(list.symbols[1].cases, ["Hearts"]);
    }

    #[test]
    fn test_text_rendering() {
        let dir = TempDir::new().unwrap();
        let list = execute(&make_snapshot(&dir)).unwrap();
        let text = list.to_text(&OutputConfig::new(OutputFormat::Text).without_colors());

        assert!(text.contains("enum      App\\Suit (Hearts)"));
        assert!(text.ends_with("2 public symbols, 2 excluded"));
    }
}
