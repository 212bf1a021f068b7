use anyhow::{Context, Result};
use std::io::Write;

use super::CommandContext;
use crate::output::{OutputFormat, SavedReport};
use crate::scoring::ProfileReport;

/// Print the saved assessment; a missing one is not an error
pub fn show_saved(ctx: &CommandContext, mut out: impl Write) -> Result<()> {
    let repository = ctx.repository()?;
    let Some(stored) = repository.load().context("Failed to read saved assessment")? else {
        match ctx.format {
            OutputFormat::Json => writeln!(out, "null")?,
            OutputFormat::Terminal => writeln!(
                out,
                "No saved assessment. Run `tbap score --save` or `tbap manual --save`."
            )?,
        }
        return Ok(());
    };

    let engine = ctx.engine()?;
    let report = ProfileReport::build(&stored.scores, &engine);
    ctx.writer(out).write_saved(&SavedReport {
        stored: &stored,
        report: &report,
    })
}

pub fn clear_saved(ctx: &CommandContext, mut out: impl Write) -> Result<()> {
    ctx.repository()?
        .clear()
        .context("Failed to clear saved assessment")?;
    tracing::info!("Cleared saved assessment");
    match ctx.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "cleared": true }))?,
        OutputFormat::Terminal => writeln!(out, "Saved assessment cleared")?,
    }
    Ok(())
}
