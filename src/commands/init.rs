use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::io;
use crate::output::OutputFormat;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Write the default configuration into `dir`
pub fn init_config(
    dir: &Path,
    force: bool,
    format: OutputFormat,
    mut out: impl Write,
) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TOML)?;
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "created": config_path.display().to_string() })
        )?,
        OutputFormat::Terminal => writeln!(out, "Created {}", config_path.display())?,
    }

    Ok(())
}
