use serde::{Deserialize, Serialize};
use std::path::Path;

use super::validation;
use crate::core::{Error, Measure, Result, TreeFacet};

const BUNDLED_QUESTIONS: &str = include_str!("../../content/questions.json");

/// A question from the bundled dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    pub id: String,
    pub measure: Measure,
    /// Tree sub-dimension; present exactly when `measure` is `tree`
    #[serde(default, alias = "subtype", skip_serializing_if = "Option::is_none")]
    pub facet: Option<TreeFacet>,
    pub prompt: String,
    /// Statement at the low end of the slider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_label: Option<String>,
    /// Statement at the high end of the slider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<QuestionDescriptor>,
}

impl QuestionBank {
    /// Validated bank; rejects duplicate ids and facet mismatches
    pub fn new(questions: Vec<QuestionDescriptor>) -> Result<Self> {
        let bank = Self { questions };
        let issues = validation::question_issues(&bank);
        if issues.is_empty() {
            Ok(bank)
        } else {
            Err(Error::Content(issues))
        }
    }

    /// The question set compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_QUESTIONS)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let questions: Vec<QuestionDescriptor> = serde_json::from_str(contents)?;
        Self::new(questions)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system_io("Failed to read question file", path, e))?;
        Self::from_json_str(&contents)
    }

    pub fn questions(&self) -> &[QuestionDescriptor] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&QuestionDescriptor> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn for_measure(&self, measure: Measure) -> impl Iterator<Item = &QuestionDescriptor> {
        self.questions.iter().filter(move |q| q.measure == measure)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentIssue;
    use indoc::indoc;

    #[test]
    fn test_bundled_bank_covers_every_measure_and_facet() {
        let bank = QuestionBank::bundled().unwrap();
        for measure in Measure::ALL {
            assert!(
                bank.for_measure(measure).count() > 0,
                "no questions for {}",
                measure
            );
        }
        for facet in TreeFacet::ALL {
            assert!(bank.questions().iter().any(|q| q.facet == Some(facet)));
        }
    }

    #[test]
    fn test_subtype_alias_is_accepted() {
        let json = indoc! {r#"
            [
              {"id": "t1", "measure": "tree", "subtype": "leaf", "prompt": "I chase new ideas."},
              {"id": "o1", "measure": "output", "prompt": "I share what I learn."}
            ]
        "#};
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.get("t1").unwrap().facet, Some(TreeFacet::Leaf));
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_tree_question_without_facet_is_rejected() {
        let json = indoc! {r#"
            [
              {"id": "t1", "measure": "tree", "prompt": "I like roots."},
              {"id": "t1", "measure": "bucket", "facet": "root", "prompt": "Duplicate."}
            ]
        "#};
        let err = QuestionBank::from_json_str(json).unwrap_err();
        match err {
            Error::Content(issues) => {
                assert!(issues.contains(&ContentIssue::MissingFacet("t1".into())));
                assert!(issues.contains(&ContentIssue::DuplicateQuestion("t1".into())));
                assert!(issues.contains(&ContentIssue::UnexpectedFacet("t1".into())));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
