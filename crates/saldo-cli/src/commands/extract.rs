//! Extract command - report the billing periods of a single statement.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use saldo_core::{
    format_amount, read_document, PeriodRecord, SaldoConfig, SourceMode, StatementParser,
    StatementScanner,
};

use super::config::load_config;

/// Header row of the period report.
pub const REPORT_HEADER: [&str; 4] = ["Period", "Expected (EUR)", "Paid (EUR)", "Total Credit (EUR)"];

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Statement file (raw text rendering or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(flatten)]
    scan: ScanOverrides,

    /// Print anchors that produced no period to stderr
    #[arg(long)]
    show_warnings: bool,
}

/// Flags overriding the scan and source sections of the config file.
#[derive(Args, Clone)]
pub struct ScanOverrides {
    /// Lines searched after each period anchor
    #[arg(short, long)]
    window: Option<usize>,

    /// How the statement file is turned into text
    #[arg(short, long, value_enum)]
    source: Option<SourceArg>,

    /// Encoding label for raw text decoding (e.g. "latin1", "utf-8")
    #[arg(long)]
    encoding: Option<String>,
}

impl ScanOverrides {
    /// Apply the flags on top of `config` and validate the result.
    pub fn apply(&self, mut config: SaldoConfig) -> anyhow::Result<SaldoConfig> {
        if let Some(window) = self.window {
            config.scan.window_size = window;
        }
        if let Some(source) = self.source {
            config.source.mode = source.into();
        }
        if let Some(encoding) = &self.encoding {
            config.source.encoding = encoding.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SourceArg {
    /// Decode raw bytes
    Text,
    /// Extract the PDF text layer
    Pdf,
    /// PDF extraction for PDF files, raw decoding otherwise
    Auto,
}

impl From<SourceArg> for SourceMode {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Text => SourceMode::Text,
            SourceArg::Pdf => SourceMode::Pdf,
            SourceArg::Auto => SourceMode::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Record count followed by the CSV table
    Text,
    /// CSV table only
    Csv,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = args.scan.apply(load_config(config_path)?)?;

    info!("Processing file: {}", args.input.display());

    let document = read_document(&args.input, &config.source)?;
    debug!("Loaded {} lines via {:?} source", document.lines.len(), document.kind);

    let scanner = StatementScanner::from_config(&config.scan);
    let result = scanner.parse_lines(&document.lines);
    info!(
        "Found {} periods ({} anchors) in {}ms",
        result.records.len(),
        result.anchors,
        result.processing_time_ms
    );

    for warning in &result.warnings {
        if args.show_warnings {
            eprintln!("{} Skipped {}", style("!").yellow(), warning);
        } else {
            debug!("Skipped {}", warning);
        }
    }
    if result.records.is_empty() && result.anchors == 0 {
        warn!("No period anchors found in {}", args.input.display());
    }

    let output = format_records(&result.records, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_records(records: &[PeriodRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => format_text(records),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(records)?)),
    }
}

/// One report row: period and the three amounts with two decimals.
pub fn record_row(record: &PeriodRecord) -> [String; 4] {
    [
        record.period.clone(),
        format_amount(record.expected),
        format_amount(record.paid),
        format_amount(record.balance),
    ]
}

fn format_csv(records: &[PeriodRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    wtr.write_record(REPORT_HEADER)?;
    for record in records {
        wtr.write_record(record_row(record))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[PeriodRecord]) -> anyhow::Result<String> {
    let mut output = format!("Extracted {} periods\n\n", records.len());
    output.push_str(&format_csv(records)?);
    Ok(output)
}
