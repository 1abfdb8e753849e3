//! Config discovery and the `check` command

use anyhow::{Context, Result};
use routegen_core::{CONFIG_FILE_NAME, GeneratorConfig, LogLevel};
use routegen_logging::ReloadHandle;
use std::path::{Path, PathBuf};

/// Whether the command line already fixed the log level
#[derive(Debug, Clone, Copy)]
pub struct LoggingOverride {
    cli_level_set: bool,
}

impl LoggingOverride {
    pub fn new(cli_level_set: bool) -> Self {
        Self { cli_level_set }
    }

    /// Apply the config's level unless `-v`/`--log-level` was given
    fn apply(&self, level: Option<LogLevel>) {
        if self.cli_level_set {
            return;
        }
        if let Some(level) = level
            && let Err(e) = ReloadHandle::global().reload_level(level)
        {
            tracing::warn!(error = %e, "could not apply configured log level");
        }
    }
}

/// Where a config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => write!(f, "built-in"),
        }
    }
}

/// Pick the config file: an explicit path, else `routegen.toml` in `dir` if present
pub fn locate(explicit: Option<PathBuf>, dir: &Path) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::File(path);
    }

    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        ConfigSource::File(candidate)
    } else {
        ConfigSource::BuiltIn
    }
}

/// Read the config from `source`
pub fn read(source: &ConfigSource) -> Result<GeneratorConfig> {
    match source {
        ConfigSource::File(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        ConfigSource::BuiltIn => Ok(GeneratorConfig::default()),
    }
}

/// Locate and read the config for a command, then apply its log level
pub fn load(
    explicit: Option<PathBuf>,
    logging: LoggingOverride,
) -> Result<(ConfigSource, GeneratorConfig)> {
    let source = locate(explicit, Path::new("."));
    let config = read(&source)?;
    logging.apply(config.log_level);

    tracing::debug!(source = %source, "loaded configuration");
    Ok((source, config))
}

pub fn check(config_path: Option<PathBuf>, logging: LoggingOverride) -> Result<()> {
    let (source, config) = load(config_path, logging)?;

    println!("Checking config: {}", source);

    let model = config.build_model().context("Invalid config")?;

    println!("✓ Methods: {}", model.methods().len());
    println!("✓ Parameters: {}", model.params().len());
    println!("✓ Candidate routes: {}", model.route_count());
    println!("\nConfig is valid!");

    Ok(())
}

#[cfg(test)]
#[path = "settings/settings_tests.rs"]
mod settings_tests;
