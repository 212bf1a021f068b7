use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::CommandContext;
use crate::content::{ContentIssue, QuestionBank, ReferenceContent};
use crate::core::Error;

/// Report every gap, overlap and missing record; fails when any are found
pub fn validate_content(
    ctx: &CommandContext,
    content: Option<&Path>,
    questions: Option<&Path>,
    out: impl Write,
) -> Result<()> {
    let scale = ctx.config.scale();

    let reference = match content {
        Some(path) => ReferenceContent::load(path)
            .with_context(|| format!("Failed to load content {}", path.display()))?,
        None => ReferenceContent::builtin(&scale),
    };
    let mut issues = reference.issues(&scale);

    let bank = match questions {
        Some(path) => QuestionBank::load(path),
        None => QuestionBank::bundled(),
    };
    match bank {
        Ok(_) => {}
        Err(Error::Content(question_issues)) => issues.extend(question_issues),
        Err(e) => return Err(e).context("Failed to load questions"),
    }

    tracing::debug!("Content check found {} issue(s)", issues.len());
    ctx.writer(out).write_issues(&issues)?;
    ensure_clean(&issues)
}

fn ensure_clean(issues: &[ContentIssue]) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} content issue(s) found", issues.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TbapConfig;
    use crate::core::Scale;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    fn json_context() -> CommandContext {
        CommandContext {
            config: TbapConfig::default(),
            format: OutputFormat::Json,
            store_dir: None,
        }
    }

    #[test]
    fn test_builtin_content_is_clean() {
        let mut buffer = Vec::new();
        validate_content(&json_context(), None, None, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn test_gap_in_custom_content_fails() {
        let temp = TempDir::new().unwrap();
        let mut content = ReferenceContent::builtin(&Scale::default());
        content.tree.bands.retain(|band| band.key != "trunk");
        let path = temp.path().join("content.json");
        std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let mut buffer = Vec::new();
        let result = validate_content(&json_context(), Some(&path), None, &mut buffer);

        assert!(result.is_err());
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["issues"]
            .as_array()
            .unwrap()
            .iter()
            .any(|issue| issue["kind"] == "gap"));
    }

    #[test]
    fn test_malformed_content_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = validate_content(&json_context(), Some(&path), None, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to load content"), "{err}");
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Json(_))), "{err:?}");
    }

    #[test]
    fn test_duplicate_question_ids_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("questions.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "q", "measure": "bucket", "prompt": "One"},
                {"id": "q", "measure": "bucket", "prompt": "Two"}
            ]"#,
        )
        .unwrap();

        let mut buffer = Vec::new();
        assert!(validate_content(&json_context(), None, Some(&path), &mut buffer).is_err());
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["issues"][0]["kind"], "duplicate_question");
    }
}
