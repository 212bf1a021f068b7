//! Persisted assessment state on top of a [`KeyValueStore`].
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::traits::KeyValueStore;
use crate::core::{Result, ResultExt};
use crate::scoring::{AssessmentScores, InteractionArchetype};

/// Key holding the latest [`StoredAssessment`]
pub const SCORES_KEY: &str = "tbap_scores";
/// Key holding the last computed [`InteractionArchetype`]
pub const ARCHETYPE_KEY: &str = "tbap_archetype";

/// How the stored scores were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Questions,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub source: ScoreSource,
    pub scores: AssessmentScores,
    /// Raw answers by question id, kept for question-based runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<BTreeMap<String, i32>>,
    pub saved_at: DateTime<Utc>,
}

impl StoredAssessment {
    pub fn from_questions(scores: AssessmentScores, responses: BTreeMap<String, i32>) -> Self {
        Self {
            source: ScoreSource::Questions,
            scores,
            responses: Some(responses),
            saved_at: Utc::now(),
        }
    }

    pub fn from_manual(scores: AssessmentScores) -> Self {
        Self {
            source: ScoreSource::Manual,
            scores,
            responses: None,
            saved_at: Utc::now(),
        }
    }
}

pub struct AssessmentRepository<S> {
    store: S,
}

impl<S: KeyValueStore> AssessmentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the stored assessment and archetype
    pub fn save(
        &self,
        assessment: &StoredAssessment,
        archetype: &InteractionArchetype,
    ) -> Result<()> {
        let scores = serde_json::to_string_pretty(assessment)?;
        let archetype_json = serde_json::to_string_pretty(archetype)?;
        self.store
            .set(SCORES_KEY, &scores)
            .context("saving assessment scores")?;
        self.store
            .set(ARCHETYPE_KEY, &archetype_json)
            .context("saving interaction archetype")?;
        debug!(source = ?assessment.source, "Saved assessment");
        Ok(())
    }

    pub fn load(&self) -> Result<Option<StoredAssessment>> {
        self.store
            .get(SCORES_KEY)?
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Into::into)
    }

    pub fn load_archetype(&self) -> Result<Option<InteractionArchetype>> {
        self.store
            .get(ARCHETYPE_KEY)?
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Into::into)
    }

    /// Forget the stored assessment and archetype
    pub fn clear(&self) -> Result<()> {
        self.store.remove(SCORES_KEY)?;
        self.store.remove(ARCHETYPE_KEY)?;
        Ok(())
    }
}
