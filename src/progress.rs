//! Progress reporting for batch conversion
//!
//! Provides the per-file progress bar plus the header and summary printed
//! around a run.

use console::style;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Label shown in front of the conversion bar
pub const PROGRESS_LABEL: &str = "Parquet -> Arrow";

/// Progress bar over the files of a run
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a visible bar for `total` files
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold} {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .progress_chars("##-"),
        );
        bar.set_prefix(PROGRESS_LABEL);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show which table is being converted
    pub fn start_file(&self, table: &str) {
        self.bar.set_message(table.to_string());
    }

    /// Show rows written so far for the current table
    pub fn set_rows(&self, table: &str, rows: u64) {
        self.bar
            .set_message(format!("{} ({} rows)", table, format_number(rows)));
    }

    /// Mark one file done
    pub fn file_done(&self) {
        self.bar.inc(1);
    }

    /// Files completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the progress display with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a summary of the run
pub fn print_summary(
    tables: usize,
    rows: u64,
    bytes: u64,
    rejected: usize,
    duration: Duration,
    catalog_path: &str,
) {
    let bytes_str = format_size(bytes, BINARY);
    let duration_secs = duration.as_secs_f64();
    let rate = if duration_secs > 0.0 {
        rows as f64 / duration_secs
    } else {
        0.0
    };

    println!();
    println!("{}", style("Conversion Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Tables:").bold(), format_number(tables as u64));
    println!("  {} {}", style("Rows:").bold(), format_number(rows));
    println!("  {} {}", style("Arrow Size:").bold(), bytes_str);
    println!(
        "  {} {:.1}s ({:.0} rows/sec)",
        style("Duration:").bold(),
        duration_secs,
        rate
    );
    if rejected > 0 {
        println!(
            "  {} {}",
            style("Skipped:").yellow().bold(),
            format_number(rejected as u64)
        );
    }
    println!("  {} {}", style("Catalog:").bold(), catalog_path);
    println!();
}

/// Print a header at the start of the run
pub fn print_header(input: &str, output: &str, files: usize) {
    println!();
    println!(
        "{} {}",
        style("lingofy").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Input:").bold(), input);
    println!("  {} {}", style("Files:").bold(), files);
    println!("  {} {}", style("Output:").bold(), output);
    println!();
}
