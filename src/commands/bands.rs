use anyhow::{Context, Result};
use std::io::Write;

use super::CommandContext;
use crate::core::Measure;

/// Print one measure's table, or every table including strength and engagement
pub fn show_bands(ctx: &CommandContext, measure: Option<Measure>, out: impl Write) -> Result<()> {
    let engine = ctx.engine()?;
    let content = engine.content();

    let tables = match measure {
        Some(Measure::Tree) => vec![&content.tree],
        Some(measure) => vec![content
            .measure_table(measure)
            .with_context(|| format!("No band table for {}", measure))?],
        None => std::iter::once(&content.tree)
            .chain(Measure::LINEAR.iter().filter_map(|&m| content.measure_table(m)))
            .chain([&content.strength, &content.engagement])
            .collect(),
    };

    ctx.writer(out).write_bands(&tables)
}
