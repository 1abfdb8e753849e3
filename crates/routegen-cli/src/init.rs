//! Init command implementation

use anyhow::{Context, Result, bail};
use routegen_core::{CONFIG_FILE_NAME, GeneratorConfig};
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    write_default_config(&path, force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  Edit the methods and [[params]] tables to match your handlers");
    println!("  routegen check -c {}", path.display());
    println!("  routegen generate -c {}", path.display());

    Ok(())
}

/// Serialize the built-in config to `path`, refusing to clobber unless `force`
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let text = GeneratorConfig::default()
        .to_toml_string()
        .context("Failed to serialize default config")?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
