//! Batch processing command for multiple statement files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use saldo_core::{read_document, PeriodRecord, SaldoConfig, StatementParser, StatementScanner};

use super::config::load_config;
use super::extract::{format_records, record_row, OutputFormat, ScanOverrides, REPORT_HEADER};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also write a combined CSV of all periods to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    #[command(flatten)]
    scan: ScanOverrides,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    records: Vec<PeriodRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = args.scan.apply(load_config(config_path)?)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let scanner = StatementScanner::from_config(&config.scan);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = process_single_file(&path, &scanner, &config);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(records) => results.push(ProcessResult {
                path,
                records,
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        records: Vec::new(),
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if let Some(ref output_dir) = args.output_dir {
        for result in results.iter().filter(|r| r.error.is_none()) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("statement");
            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));

            fs::write(&output_path, format_records(&result.records, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if let Some(ref summary_path) = args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    for result in &results {
        match &result.error {
            None => println!(
                "  {} {}: {} periods ({}ms)",
                style("✓").green(),
                result.path.display(),
                result.records.len(),
                result.processing_time_ms
            ),
            Some(err) => println!(
                "  {} {}: {}",
                style("✗").red(),
                result.path.display(),
                err
            ),
        }
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let periods: usize = results.iter().map(|r| r.records.len()).sum();

    println!();
    println!(
        "{} Processed {} files ({} failed), {} periods in {:?}",
        style("✓").green(),
        results.len(),
        failed,
        periods,
        start.elapsed()
    );

    Ok(())
}

fn process_single_file(
    path: &Path,
    scanner: &StatementScanner,
    config: &SaldoConfig,
) -> anyhow::Result<Vec<PeriodRecord>> {
    let document = read_document(path, &config.source)?;
    let result = scanner.parse_lines(&document.lines);
    debug!(
        "{}: scanned {} lines in {}ms",
        path.display(),
        document.lines.len(),
        result.processing_time_ms
    );

    for warning in &result.warnings {
        debug!("{}: skipped {}", path.display(), warning);
    }

    Ok(result.records)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    let mut header = vec!["File"];
    header.extend(REPORT_HEADER);
    wtr.write_record(&header)?;

    for result in results.iter().filter(|r| r.error.is_none()) {
        let file = result.path.display().to_string();
        for record in &result.records {
            let row = record_row(record);
            wtr.write_record(std::iter::once(file.as_str()).chain(row.iter().map(String::as_str)))?;
        }
    }

    wtr.flush()?;
    Ok(())
}
