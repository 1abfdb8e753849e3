//! routegen CLI - Swift route overload generator
//!
//! Commands:
//! - `routegen generate` - Write the route registration file
//! - `routegen check` - Validate a routegen.toml config
//! - `routegen list` - Show what a run would generate
//! - `routegen init` - Write the built-in config as a starting point

use clap::{Parser, Subcommand};
use routegen_core::LogLevel;
use std::path::PathBuf;

mod generate;
mod init;
mod list;
mod settings;

#[derive(Parser)]
#[command(name = "routegen")]
#[command(author, version, about = "Generate Swift route registration overloads", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the route registration file
    Generate {
        /// Path to routegen.toml (default: ./routegen.toml if present, else built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (overrides the config's `output`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Date stamped into the header (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = generate::parse_date)]
        date: Option<chrono::NaiveDate>,

        /// Fail instead of dropping overloads with identical signatures
        #[arg(long)]
        deny_collisions: bool,
    },

    /// Validate a routegen.toml config
    Check {
        /// Path to routegen.toml (default: ./routegen.toml if present, else built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List methods, parameters and the routes a run would generate
    List {
        /// Path to routegen.toml (default: ./routegen.toml if present, else built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit a JSON summary
        #[arg(long)]
        json: bool,
    },

    /// Write the built-in config as TOML
    Init {
        /// Destination (default: ./routegen.toml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .or_else(|| (cli.verbose > 0).then(|| LogLevel::from_verbosity(cli.verbose)));
    routegen_logging::init_logging(level);
    let logging = settings::LoggingOverride::new(level.is_some());

    match cli.command {
        Commands::Generate {
            config,
            output,
            stdout,
            date,
            deny_collisions,
        } => {
            let options = generate::GenerateOptions {
                output,
                stdout,
                date,
                deny_collisions,
            };
            generate::run(config, options, logging)?;
        }
        Commands::Check { config } => {
            settings::check(config, logging)?;
        }
        Commands::List { config, json } => {
            list::run(config, json, logging)?;
        }
        Commands::Init { path, force } => {
            init::run(path, force)?;
        }
    }

    Ok(())
}
