use anyhow::{Context, Result};
use colored::*;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::{load_question_bank, CommandContext};
use crate::io::{self, StoredAssessment};
use crate::output::OutputFormat;
use crate::scoring::{AssessmentScores, ManualScores, ProfileReport, ScoreEngine};

/// Read a `{"question_id": value, ...}` response file
pub fn read_responses(path: &Path) -> Result<BTreeMap<String, i32>> {
    let contents = io::read_file(path)
        .with_context(|| format!("Failed to read responses {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| {
        format!(
            "Responses in {} are not a JSON object of integers",
            path.display()
        )
    })
}

pub fn score_questions(
    ctx: &CommandContext,
    responses_path: &Path,
    questions: Option<&Path>,
    save: bool,
    out: impl Write,
) -> Result<()> {
    let engine = ctx.engine()?;
    let bank = load_question_bank(questions)?;
    let responses = read_responses(responses_path)?;
    info!(
        "Scoring {} response(s) against {} question(s)",
        responses.len(),
        bank.len()
    );

    let scores = engine.score_responses(&responses, &bank);
    let stored = save.then(|| StoredAssessment::from_questions(scores.clone(), responses));
    finish(ctx, &engine, &scores, stored, out)
}

pub fn score_manual(
    ctx: &CommandContext,
    manual: &ManualScores,
    save: bool,
    out: impl Write,
) -> Result<()> {
    let engine = ctx.engine()?;
    let scores = engine.score_manual(manual);
    let stored = save.then(|| StoredAssessment::from_manual(scores.clone()));
    finish(ctx, &engine, &scores, stored, out)
}

fn finish(
    ctx: &CommandContext,
    engine: &ScoreEngine,
    scores: &AssessmentScores,
    stored: Option<StoredAssessment>,
    mut out: impl Write,
) -> Result<()> {
    let report = ProfileReport::build(scores, engine);
    ctx.writer(&mut out).write_report(&report)?;

    if let Some(stored) = stored {
        let repository = ctx.repository()?;
        repository
            .save(&stored, &report.archetype)
            .context("Failed to save assessment")?;
        info!("Saved assessment to {}", repository.store().root().display());
        if ctx.format == OutputFormat::Terminal {
            writeln!(out)?;
            writeln!(out, "{}", "Saved as the current assessment".green())?;
        }
    }
    Ok(())
}
