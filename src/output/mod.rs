//! Rendering of reports, band tables and content checks.
mod json;
mod terminal;

pub use json::JsonWriter;
pub use terminal::TerminalWriter;

use serde::{Deserialize, Serialize};
use std::env;
use std::io::{IsTerminal, Write};

use crate::content::{BandTable, ContentIssue, QuestionBank};
use crate::io::StoredAssessment;
use crate::scoring::ProfileReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Explicit config wins over `Auto`; `Always`/`Never` win over config
    pub fn resolve(self, configured: Option<bool>) -> Self {
        match (self, configured) {
            (Self::Auto, Some(true)) => Self::Always,
            (Self::Auto, Some(false)) => Self::Never,
            (mode, _) => mode,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// Set the process-wide `colored` override
    pub fn apply(&self) {
        colored::control::set_override(self.should_use_color());
    }
}

fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// A saved assessment together with the report derived from it
#[derive(Debug, Serialize)]
pub struct SavedReport<'a> {
    #[serde(flatten)]
    pub stored: &'a StoredAssessment,
    pub report: &'a ProfileReport,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()>;
    fn write_saved(&mut self, saved: &SavedReport<'_>) -> anyhow::Result<()>;
    fn write_bands(&mut self, tables: &[&BandTable]) -> anyhow::Result<()>;
    fn write_questions(&mut self, bank: &QuestionBank) -> anyhow::Result<()>;
    fn write_issues(&mut self, issues: &[ContentIssue]) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip_through_serde() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let parsed: OutputFormat = serde_json::from_str("\"terminal\"").unwrap();
        assert_eq!(parsed, OutputFormat::Terminal);
    }

    #[test]
    fn test_color_mode_resolution() {
        assert_eq!(ColorMode::Auto.resolve(Some(false)), ColorMode::Never);
        assert_eq!(ColorMode::Auto.resolve(Some(true)), ColorMode::Always);
        assert_eq!(ColorMode::Always.resolve(Some(false)), ColorMode::Always);
        assert_eq!(ColorMode::Auto.resolve(None), ColorMode::Auto);
        assert!(!ColorMode::Never.should_use_color());
    }
}
