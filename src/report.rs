//! Progress and summary output for the operator.
//!
//! Each function renders one block of text; `main` prints it to stdout (or,
//! for failures, stderr). Diagnostics go through `tracing` to stderr.

use crate::error::Error;
use folio_extract::Extraction;
use folio_manifest::{Grouping, Manifest, WriteOutcome, Written};
use std::path::Path;

const RULE: &str = "============================================================";

pub fn start(input: &Path) -> String {
    format!("{RULE}\nProcessing {}\n{RULE}\n", input.display())
}

pub fn step(number: u8, description: &str) -> String {
    format!("\n[{number}/4] {description}...\n")
}

pub fn extracted(extraction: &Extraction) -> String {
    format!(
        "Found {} image filenames (via {} extraction)\n",
        extraction.len(),
        extraction.strategy
    )
}

pub fn grouped(grouping: &Grouping) -> String {
    let mut lines = vec![format!("Grouped into {} days", grouping.day_count())];
    lines.extend(grouping.days.iter().map(|(day, filenames)| format!("  {day}: {} files", filenames.len())));
    if grouping.skipped > 0 {
        lines.push(format!("Skipped {} filenames without a date", grouping.skipped));
    }
    lines.extend(grouping.warnings.iter().map(|warning| format!("Warning: {warning}")));
    if let Some(year_month) = &grouping.year_month {
        lines.push(format!("Detected month: {year_month}"));
    }
    lines.join("\n") + "\n"
}

pub fn written(written: &Written, manifest: &Manifest) -> String {
    let path = written.path.display();
    let mut lines = vec![
        match written.outcome {
            WriteOutcome::Created => format!("Saved manifest to {path}"),
            WriteOutcome::Overwritten => format!("Replaced existing manifest {path}"),
        },
        String::new(),
        "Summary:".to_string(),
        format!("  Month:  {}", manifest.year_month()),
        format!("  Days:   {}", manifest.day_count()),
        format!("  Photos: {}", manifest.photo_count()),
    ];
    match manifest.example_url() {
        Ok(Some(url)) => lines.extend([String::new(), "Example URL:".to_string(), format!("  {url}")]),
        Ok(None) => {},
        Err(e) => {
            let reason = (*e).to_string();
            tracing::warn!(error = %reason, "could not resolve an example URL");
        },
    }
    lines.extend([
        String::new(),
        RULE.to_string(),
        "Done. Next steps:".to_string(),
        format!("  1. Upload {path} to the gallery's data/ directory"),
        format!("  2. Select {} in the gallery to view the photos", manifest.year_month()),
        RULE.to_string(),
    ]);
    lines.join("\n") + "\n"
}

pub fn failure(err: &Error, verbose: bool) -> String {
    let mut lines = vec![format!("error: {}", **err)];
    lines.extend(err.hints().iter().map(|hint| format!("  hint: {hint}")));
    if verbose {
        lines.push(format!("\n{err:?}"));
    }
    lines.join("\n") + "\n"
}
