//! Generate command implementation

use crate::settings::{self, LoggingOverride};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use routegen_core::{FileSink, Generator, GeneratorConfig, OutputSink};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flags of `routegen generate` besides the config path
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub date: Option<NaiveDate>,
    pub deny_collisions: bool,
}

/// Writes the document to standard output, ignoring the destination
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_document(&mut self, _destination: &Path, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

pub fn run(
    config_path: Option<PathBuf>,
    options: GenerateOptions,
    logging: LoggingOverride,
) -> Result<()> {
    let (_, config) = settings::load(config_path, logging)?;

    let generator = Generator::from_config(&config)
        .context("Invalid config")?
        .with_fail_on_collision(config.fail_on_collision || options.deny_collisions);
    let destination = resolve_destination(options.output, &config);
    let date = options
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    if options.stdout {
        generator
            .write(&mut StdoutSink, &destination, date)
            .context("Failed to generate routes")?;
        return Ok(());
    }

    println!("Result file path: {}", destination.display());
    println!("Used methods:");
    for method in generator.model().methods() {
        println!("\t{}", method);
    }
    println!("Function parameters:");
    for param in generator.model().params() {
        println!("\t{}", param);
    }

    let document = generator
        .write(&mut FileSink, &destination, date)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    if document.dropped_count > 0 {
        println!("Dropped duplicate overloads: {}", document.dropped_count);
    }
    println!("Generated functions count: {}", document.function_count);
    println!("Done");

    Ok(())
}

/// `-o` wins, then the config's `output`, then the header file name
fn resolve_destination(cli_output: Option<PathBuf>, config: &GeneratorConfig) -> PathBuf {
    cli_output
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(&config.header.file_name))
}

/// Parse a `--date` value
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}
