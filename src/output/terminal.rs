use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

use super::{OutputWriter, SavedReport};
use crate::content::{BandTable, ContentIssue, QuestionBank};
use crate::core::Measure;
use crate::io::ScoreSource;
use crate::scoring::ProfileReport;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn heading(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "  {}", title.bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", title.bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;
        Ok(())
    }

    fn write_tree(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        let tree = &report.tree;
        self.section(&format!("🌳 Tree: {}", Measure::Tree.tagline()))?;
        writeln!(
            self.writer,
            "{} {}",
            tree.name.bold().green(),
            format!("({})", tree.score).dimmed()
        )?;
        writeln!(self.writer, "{}", tree.description)?;
        let facets = match &tree.secondary {
            Some(secondary) => format!("{} with {}", tree.primary, secondary),
            None => tree.primary.clone(),
        };
        writeln!(self.writer, "Primary facet: {facets}")?;
        writeln!(
            self.writer,
            "Strength: {} {}",
            tree.strength.to_string().bold(),
            strength_colored(tree.strength, &tree.strength_label)
        )?;
        if !tree.strength_description.is_empty() {
            writeln!(self.writer, "  {}", tree.strength_description.dimmed())?;
        }
        Ok(())
    }

    fn write_interaction(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        let engagement = &report.engagement;
        let archetype = &report.archetype;
        self.section("🤝 Interaction")?;
        writeln!(
            self.writer,
            "Engagement: {} {}",
            engagement.score.to_string().bold(),
            engagement.label.yellow()
        )?;
        writeln!(self.writer, "  {}", engagement.description.dimmed())?;
        writeln!(
            self.writer,
            "Archetype: {} ({} / {})",
            archetype.archetype_name.bold().magenta(),
            archetype.orientation,
            archetype.expression
        )?;
        writeln!(self.writer, "  {}", archetype.description.dimmed())?;
        Ok(())
    }

    fn write_measures(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        self.section("📊 Measures")?;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Measure", "Focus", "Score", "Band", "Meaning"]);
        for reading in &report.measures {
            table.add_row(vec![
                reading.name.clone(),
                reading.tagline.clone(),
                reading.value.to_string(),
                reading.label.clone(),
                reading.description.clone(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer, "Decisions: {}", report.decision.trust)?;
        writeln!(self.writer, "           {}", report.decision.resilience)?;
        writeln!(self.writer, "Pipes:     {}", report.pipes.input)?;
        writeln!(self.writer, "           {}", report.pipes.output)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        self.heading("TREES, BUCKETS & PIPES PROFILE")?;
        self.write_tree(report)?;
        self.write_interaction(report)?;
        self.write_measures(report)?;
        Ok(())
    }

    fn write_saved(&mut self, saved: &SavedReport<'_>) -> anyhow::Result<()> {
        let source = match saved.stored.source {
            ScoreSource::Questions => "question responses",
            ScoreSource::Manual => "manual scores",
        };
        writeln!(
            self.writer,
            "{}",
            format!(
                "Saved {} from {}",
                saved.stored.saved_at.format("%Y-%m-%d %H:%M:%S UTC"),
                source
            )
            .dimmed()
        )?;
        self.write_report(saved.report)
    }

    fn write_bands(&mut self, tables: &[&BandTable]) -> anyhow::Result<()> {
        for band_table in tables {
            self.section(&band_table.name)?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Range", "Key", "Label", "Description"]);
            for band in &band_table.bands {
                table.add_row(vec![
                    band.range_label(),
                    band.key.clone(),
                    band.label.clone(),
                    band.description.clone(),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        Ok(())
    }

    fn write_questions(&mut self, bank: &QuestionBank) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Id", "Measure", "Prompt", "Low", "High"]);
        for question in bank.questions() {
            let measure = match question.facet {
                Some(facet) => format!("{} ({})", question.measure.display_name(), facet),
                None => question.measure.display_name().to_string(),
            };
            table.add_row(vec![
                question.id.clone(),
                measure,
                question.prompt.clone(),
                question.low_label.clone().unwrap_or_default(),
                question.high_label.clone().unwrap_or_default(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer, "{} questions", bank.len())?;
        Ok(())
    }

    fn write_issues(&mut self, issues: &[ContentIssue]) -> anyhow::Result<()> {
        if issues.is_empty() {
            writeln!(self.writer, "{} reference content is complete", "✓".green())?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "{} {} content issue(s):",
            "✗".red(),
            issues.len()
        )?;
        for issue in issues {
            writeln!(self.writer, "  - {issue}")?;
        }
        Ok(())
    }
}

fn strength_colored(strength: u8, label: &str) -> ColoredString {
    match strength {
        0..=39 => label.normal(),
        40..=69 => label.yellow(),
        _ => label.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ReferenceContent;
    use crate::core::Scale;
    use crate::scoring::{ManualScores, ScoreEngine};

    fn render<F: FnOnce(&mut TerminalWriter<&mut Vec<u8>>) -> anyhow::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut TerminalWriter::new(&mut buffer)).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_mentions_subtype_and_archetype() {
        let engine = ScoreEngine::default();
        let scores = engine.score_manual(&ManualScores {
            tree: 80,
            tree_strength: None,
            bucket: 50,
            thickness: 50,
            input: 50,
            output: 20,
        });
        let report = ProfileReport::build(&scores, &engine);
        let text = render(|w| w.write_report(&report));

        assert!(text.contains(&report.tree.name), "{text}");
        assert!(text.contains(&report.archetype.archetype_name), "{text}");
        assert!(text.contains("Bucket"), "{text}");
        assert!(text.contains("Tree: Motivation for Change"), "{text}");
        assert!(text.contains("Sharing Style"), "{text}");
    }

    #[test]
    fn test_bands_render_every_range() {
        let content = ReferenceContent::builtin(&Scale::default());
        let text = render(|w| w.write_bands(&[&content.tree]));
        assert!(text.contains("1-12"), "{text}");
        assert!(text.contains("88-99"), "{text}");
    }

    #[test]
    fn test_clean_content_message() {
        let text = render(|w| w.write_issues(&[]));
        assert!(text.contains("complete"));
    }
}
