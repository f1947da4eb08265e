//! CLI report for a conversion run.
//!
//! # Output Format
//!
//! One block per entry in discovery order, then the aggregate summary:
//!
//! ```text
//! 001 IMG_001.jpg
//!     1953 KB → 1172 KB (40.0% smaller)
//! 002 banner.png
//!     488 KB → 293 KB (40.0% smaller)
//! 003 torn.jpg
//!     failed: Processing failed: Failed to decode torn.jpg: ...
//!
//! Found 3 images
//! Converted 2, 1 failed
//! Original: 2.38 MB
//! WebP: 1.43 MB
//! Savings: 40.0%
//! ```
//!
//! Per-file sizes are shown in kilobytes, aggregate totals in megabytes;
//! both are 1024-based. Failed entries are listed with their cause and
//! excluded from the byte totals.
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and are pure — no I/O, no
//! side effects — with [`print_report`] as the stdout wrapper.

use crate::convert::ConversionResult;
use crate::scan::ImageEntry;

/// Running totals across a conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Inputs considered, including failures.
    pub found: usize,
    pub converted: usize,
    pub failed: usize,
    /// Source bytes of successful conversions only.
    pub original_bytes: u64,
    /// Artifact bytes of successful conversions only.
    pub output_bytes: u64,
}

impl RunSummary {
    /// Fold per-entry results into totals. Failures count toward
    /// `found` and `failed` but never the byte totals.
    pub fn accumulate<'a>(results: impl IntoIterator<Item = &'a ConversionResult>) -> Self {
        let mut summary = RunSummary::default();
        for result in results {
            summary.found += 1;
            match result {
                Ok(encoded) => {
                    summary.converted += 1;
                    summary.original_bytes += encoded.original_bytes;
                    summary.output_bytes += encoded.output_bytes;
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    /// Overall savings across the run.
    pub fn savings(&self) -> f64 {
        savings_percent(self.original_bytes, self.output_bytes)
    }
}

/// Space savings as `(original − output) / original × 100`.
///
/// A zero-byte original reports 0% rather than dividing by zero. An
/// output larger than its original yields a negative percentage.
pub fn savings_percent(original_bytes: u64, output_bytes: u64) -> f64 {
    if original_bytes == 0 {
        return 0.0;
    }
    (original_bytes as f64 - output_bytes as f64) / original_bytes as f64 * 100.0
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Kilobyte display for per-file sizes.
fn format_kib(bytes: u64) -> String {
    format!("{:.0} KB", bytes as f64 / 1024.0)
}

/// Megabyte display for aggregate totals.
fn format_mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Format one entry's outcome as display lines.
pub fn format_entry(index: usize, entry: &ImageEntry, result: &ConversionResult) -> Vec<String> {
    let mut lines = vec![format!("{} {}", format_index(index), entry.file_name())];
    match result {
        Ok(encoded) => lines.push(format!(
            "    {} \u{2192} {} ({:.1}% smaller)",
            format_kib(encoded.original_bytes),
            format_kib(encoded.output_bytes),
            savings_percent(encoded.original_bytes, encoded.output_bytes)
        )),
        Err(cause) => lines.push(format!("    failed: {cause}")),
    }
    lines
}

/// Format the aggregate summary printed after the last entry.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![format!("Found {} images", summary.found)];
    if summary.failed > 0 {
        lines.push(format!(
            "Converted {}, {} failed",
            summary.converted, summary.failed
        ));
    }
    lines.push(format!("Original: {}", format_mib(summary.original_bytes)));
    lines.push(format!("WebP: {}", format_mib(summary.output_bytes)));
    lines.push(format!("Savings: {:.1}%", summary.savings()));
    lines
}

/// Format the full report for an ordered sequence of results.
pub fn format_report(pairs: &[(ImageEntry, ConversionResult)]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, (entry, result)) in pairs.iter().enumerate() {
        lines.extend(format_entry(i + 1, entry, result));
    }
    lines.push(String::new());

    let summary = RunSummary::accumulate(pairs.iter().map(|(_, result)| result));
    lines.extend(format_summary(&summary));
    lines
}

/// Print the report to stdout.
pub fn print_report(pairs: &[(ImageEntry, ConversionResult)]) {
    for line in format_report(pairs) {
        println!("{}", line);
    }
}
