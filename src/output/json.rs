use serde::Serialize;
use std::io::Write;

use super::{OutputWriter, SavedReport};
use crate::content::{BandTable, ContentIssue, QuestionBank};
use crate::scoring::ProfileReport;

#[derive(Serialize)]
struct ValidationSummary<'a> {
    valid: bool,
    issues: &'a [ContentIssue],
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        self.emit(report)
    }

    fn write_saved(&mut self, saved: &SavedReport<'_>) -> anyhow::Result<()> {
        self.emit(saved)
    }

    fn write_bands(&mut self, tables: &[&BandTable]) -> anyhow::Result<()> {
        self.emit(tables)
    }

    fn write_questions(&mut self, bank: &QuestionBank) -> anyhow::Result<()> {
        self.emit(bank.questions())
    }

    fn write_issues(&mut self, issues: &[ContentIssue]) -> anyhow::Result<()> {
        self.emit(&ValidationSummary {
            valid: issues.is_empty(),
            issues,
        })
    }
}
