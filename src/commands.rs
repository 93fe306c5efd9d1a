use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codec::{self, Document};
use crate::selector::{self, Recovery};

/// Line printed after each processed document in text mode
pub const SEPARATOR: &str = "-------------------------";

/// Line printed in text mode when no secret could be recovered
pub const NOT_FOUND: &str = "Failed to find a valid positive integer secret.";

/// How recovery results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per document
    Json,
}

/// Output options chosen on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Include the vote tally and suspected decoys in text output
    pub verbose: bool,
}

/// One candidate in a serialized report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub secret: String,
    pub votes: u64,
    pub first_combination: u64,
}

/// Serializable summary of a recovery
///
/// Big integers are rendered as decimal strings so no JSON consumer
/// truncates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
    pub secret: Option<String>,
    pub threshold: usize,
    pub share_count: usize,
    pub declared_count: Option<usize>,
    pub combinations_tried: u64,
    pub valid_combinations: u64,
    pub candidates: Vec<CandidateReport>,
    pub suspected_decoys: Vec<String>,
}

impl Report {
    fn new(document: &Document, recovery: &Recovery) -> Self {
        Self {
            source: None,
            secret: recovery.secret().map(ToString::to_string),
            threshold: recovery.threshold(),
            share_count: recovery.share_count(),
            declared_count: document.declared_count,
            combinations_tried: recovery.combinations_tried(),
            valid_combinations: recovery.valid_combinations(),
            candidates: recovery
                .tally()
                .candidates()
                .iter()
                .map(|c| CandidateReport {
                    secret: c.secret.to_string(),
                    votes: c.votes,
                    first_combination: c.first_rank,
                })
                .collect(),
            suspected_decoys: recovery
                .suspected_decoys()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Decode a share document and recover its secret
///
/// A document that decodes but yields no secret is not an error; the
/// report's `secret` is `None`.
///
/// # Errors
/// Returns an error if the document cannot be decoded
pub fn recover_document(text: &str) -> Result<Report> {
    let document = codec::decode_document(text)?;
    let recovery = selector::analyze(&document.shares, document.threshold);
    Ok(Report::new(&document, &recovery))
}

/// Read a share document from `path` and recover its secret
///
/// # Errors
/// Returns an error if the file cannot be read or decoded
pub fn recover_file(path: &Path) -> Result<Report> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let mut report =
        recover_document(&text).with_context(|| format!("Could not decode {}", path.display()))?;
    report.source = Some(path.display().to_string());
    Ok(report)
}

/// Render a report in the requested format
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn render_report(report: &Report, options: ReportOptions) -> Result<String> {
    if options.format == OutputFormat::Json {
        return serde_json::to_string(report).context("Failed to serialize report");
    }

    let mut lines = Vec::new();
    match &report.secret {
        Some(secret) => lines.push(format!("Recovered Secret: {secret}")),
        None => lines.push(NOT_FOUND.to_string()),
    }

    if options.verbose {
        lines.push(format!(
            "Threshold {} over {} shares: {} combinations, {} valid",
            report.threshold,
            report.share_count,
            report.combinations_tried,
            report.valid_combinations
        ));
        for candidate in &report.candidates {
            lines.push(format!(
                "  candidate {} : {} vote(s), first at combination #{}",
                candidate.secret, candidate.votes, candidate.first_combination
            ));
        }
        if report.secret.is_some() {
            if report.suspected_decoys.is_empty() {
                lines.push("Suspected decoys: none".to_string());
            } else {
                lines.push(format!(
                    "Suspected decoys at x = {}",
                    report.suspected_decoys.join(", ")
                ));
            }
        }
    }

    Ok(lines.join("\n"))
}

/// Warning for a document whose `keys.n` disagrees with its share count
///
/// Only produced in text mode; a JSON report already carries both counts.
#[must_use]
pub fn count_mismatch_warning(report: &Report, options: ReportOptions) -> Option<String> {
    if options.format != OutputFormat::Text {
        return None;
    }
    let declared = report
        .declared_count
        .filter(|&n| n != report.share_count)?;
    Some(format!(
        "warning: {} declares n = {declared} but holds {} shares",
        report.source.as_deref().unwrap_or("document"),
        report.share_count
    ))
}

/// Outcome of processing several documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub recovered: usize,
    /// Documents that could not be read or decoded
    pub failed: usize,
}

/// Recover the secret of every file in `paths`, in order
///
/// A file that fails is reported on `err` and the batch carries on.
///
/// # Errors
/// Returns an error only if writing to `out` or `err` fails
pub fn recover_files<O: Write, E: Write>(
    paths: &[PathBuf],
    options: ReportOptions,
    out: &mut O,
    err: &mut E,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let text_mode = options.format == OutputFormat::Text;

    for path in paths {
        summary.processed += 1;
        if text_mode {
            writeln!(out, "Processing {}...", path.display())?;
        }

        match recover_file(path) {
            Ok(report) => {
                if report.secret.is_some() {
                    summary.recovered += 1;
                }
                if let Some(warning) = count_mismatch_warning(&report, options) {
                    writeln!(err, "{warning}")?;
                }
                writeln!(out, "{}", render_report(&report, options)?)?;
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(err, "error: {e:#}")?;
            }
        }

        if text_mode {
            writeln!(out, "{SEPARATOR}")?;
        }
    }

    Ok(summary)
}
