//! Compare command - backward-compatibility check between two API snapshots
//!
//! Loads the defined API, past and new snapshots, runs the comparison and
//! reports every change the baseline does not tolerate.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use bcdiff_core::differ::{Change, ChangeSummary, Changes, CompareClasses};
use bcdiff_core::provider::SymbolTable;
use colored::Colorize;
use serde::Serialize;

use crate::baseline::Baseline;
use crate::output::{GithubOutput, MarkdownOutput, Output, OutputConfig, Outputter};

/// Inputs of a compare run.
#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub past: PathBuf,
    pub new: PathBuf,
    /// Defaults to `past`.
    pub defined: Option<PathBuf>,
    pub parallel: bool,
}

/// A reported change.
#[derive(Debug, Clone, Serialize)]
pub struct ReportedChange {
    pub kind: String,
    pub message: String,
    pub bc_break: bool,
}

impl From<&Change> for ReportedChange {
    fn from(change: &Change) -> Self {
        Self {
            kind: change.kind().as_str().to_string(),
            message: change.message().to_string(),
            bc_break: change.is_bc_break(),
        }
    }
}

/// Compare result collection
#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub past: String,
    pub new: String,
    pub changes: Vec<ReportedChange>,
    pub summary: ChangeSummary,
    /// Changes dropped by the baseline.
    pub ignored: usize,
    pub duration_ms: u64,
    #[serde(skip)]
    rendered: Vec<String>,
}

impl CompareReport {
    pub fn new(past: &Path, new: &Path, changes: &Changes, ignored: usize, duration_ms: u64) -> Self {
        Self {
            past: past.display().to_string(),
            new: new.display().to_string(),
            changes: changes.iter().map(ReportedChange::from).collect(),
            summary: changes.summary(),
            ignored,
            duration_ms,
            rendered: changes.iter().map(Change::to_string).collect(),
        }
    }

    pub fn bc_break_count(&self) -> usize {
        self.summary.bc_breaks as usize
    }

    fn messages_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.changes
            .iter()
            .filter(move |c| c.kind == kind)
            .map(|c| c.message.as_str())
    }
}

impl Outputter for CompareReport {
    fn to_text(&self, config: &OutputConfig) -> String {
        let mut output = String::new();

        for (change, line) in self.changes.iter().zip(&self.rendered) {
            let line = if !config.use_colors() {
                line.normal()
            } else if change.bc_break {
                line.red()
            } else {
                line.green()
            };
            output.push_str(&format!("{}\n", line));
        }

        if !self.changes.is_empty() {
            output.push('\n');
        }

        let breaks = self.bc_break_count();
        let verdict = if breaks == 0 {
            "No backwards-incompatible changes detected".to_string()
        } else {
            format!("{} backwards-incompatible changes detected", breaks)
        };

        if config.use_colors() {
            let verdict = if breaks == 0 {
                verdict.green().bold()
            } else {
                verdict.red().bold()
            };
            output.push_str(&format!("{}", verdict));
        } else {
            output.push_str(&verdict);
        }

        output.push_str(&format!(
            " ({}; {} ignored by baseline; {}ms)",
            self.summary.text(),
            self.ignored,
            self.duration_ms
        ));

        output
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        let mut output = MarkdownOutput::section("Added", self.messages_of("added"));
        output.push('\n');
        output.push_str(&MarkdownOutput::section(
            "Removed",
            self.messages_of("removed"),
        ));
        output
    }

    fn to_github(&self, _config: &OutputConfig) -> String {
        self.changes
            .iter()
            .map(|c| {
                if c.bc_break {
                    GithubOutput::error(&c.message)
                } else {
                    GithubOutput::notice(&c.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn load_snapshot(path: &Path, role: &str) -> anyhow::Result<SymbolTable> {
    SymbolTable::load(path)
        .with_context(|| format!("Failed to load {} snapshot {}", role, path.display()))
}

/// Run the comparison and compute the report.
pub fn execute(args: &CompareArgs, baseline: &Baseline) -> anyhow::Result<CompareReport> {
    let start = Instant::now();

    let past = load_snapshot(&args.past, "past")?;
    let new = load_snapshot(&args.new, "new")?;
    let defined = match &args.defined {
        Some(path) => Some(load_snapshot(path, "defined API")?),
        None => None,
    };
    let defined_ref = defined.as_ref().unwrap_or(&past);

    tracing::debug!(
        "Loaded {} defined, {} past, {} new symbols",
        defined_ref.len(),
        past.len(),
        new.len()
    );

    let comparer = CompareClasses::default();
    let changes = if args.parallel {
        comparer.compare_parallel(defined_ref, &past, &new)
    } else {
        comparer.compare(defined_ref, &past, &new)
    }
    .context("Compatibility check failed")?;

    let (reported, ignored) = baseline.apply(changes);

    Ok(CompareReport::new(
        &args.past,
        &args.new,
        &reported,
        ignored.len(),
        start.elapsed().as_millis() as u64,
    ))
}

/// Run the compare command, returning the number of reported BC breaks.
pub fn run(args: &CompareArgs, baseline: &Baseline, config: OutputConfig) -> anyhow::Result<usize> {
    let report = execute(args, baseline)?;
    let breaks = report.bc_break_count();

    Output::with_config(report, config).render()?;
    Ok(breaks)
}
