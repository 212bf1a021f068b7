use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::{load_question_bank, CommandContext};
use crate::content::QuestionBank;
use crate::core::Measure;

pub fn list_questions(
    ctx: &CommandContext,
    measure: Option<Measure>,
    questions: Option<&Path>,
    out: impl Write,
) -> Result<()> {
    let bank = load_question_bank(questions)?;
    let bank = match measure {
        Some(measure) => QuestionBank::new(bank.for_measure(measure).cloned().collect())?,
        None => bank,
    };
    ctx.writer(out).write_questions(&bank)
}
