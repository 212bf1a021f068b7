//! Pure scoring pass over question responses or manually set values.
//!
//! The engine holds only immutable reference data. Every call recomputes from
//! its arguments, so repeated calls are idempotent and need no coordination.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::aggregate::{calculate_measure_score, count_out_of_range};
use super::archetype::{calculate_interaction_archetype, InteractionArchetype};
use super::bands::locate_band;
use super::engagement::{calculate_engagement_axis, EngagementAxis};
use super::tree::{calculate_tree_score, StrengthNormalization, TreeResult, TreeSubScores};
use crate::config::TbapConfig;
use crate::content::{Band, QuestionBank, ReferenceContent};
use crate::core::{Error, Measure, Result, Scale, TreeFacet};

/// Aggregate result of one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub tree: TreeResult,
    pub bucket: u8,
    pub thickness: u8,
    pub input: u8,
    pub output: u8,
}

impl AssessmentScores {
    /// Scalar value of a measure; the Tree contributes its circular position
    pub fn value(&self, measure: Measure) -> u8 {
        match measure {
            Measure::Tree => self.tree.score,
            Measure::Bucket => self.bucket,
            Measure::Thickness => self.thickness,
            Measure::Input => self.input,
            Measure::Output => self.output,
        }
    }
}

/// Directly set values that bypass aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualScores {
    pub tree: u8,
    /// Strength recorded for a manually placed Tree position (default 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_strength: Option<u8>,
    pub bucket: u8,
    pub thickness: u8,
    pub input: u8,
    pub output: u8,
}

impl ManualScores {
    /// Every slider at its starting position
    pub fn neutral(scale: &Scale) -> Self {
        let mid = scale.midpoint();
        Self {
            tree: mid,
            tree_strength: None,
            bucket: mid,
            thickness: mid,
            input: mid,
            output: mid,
        }
    }
}

const MANUAL_TREE_STRENGTH: u8 = 100;

#[derive(Debug, Clone)]
pub struct ScoreEngine {
    content: ReferenceContent,
    scale: Scale,
    normalization: StrengthNormalization,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        let scale = Scale::default();
        Self {
            content: ReferenceContent::builtin(&scale),
            scale,
            normalization: StrengthNormalization::default(),
        }
    }
}

impl ScoreEngine {
    /// Engine over validated content; rejects scales and tables with defects
    pub fn new(
        content: ReferenceContent,
        scale: Scale,
        normalization: StrengthNormalization,
    ) -> Result<Self> {
        scale.validate().map_err(Error::Configuration)?;
        content.validate(&scale)?;
        Ok(Self {
            content,
            scale,
            normalization,
        })
    }

    /// Built-in content sized for the configured scale
    pub fn from_config(config: &TbapConfig) -> Result<Self> {
        let scale = config.scale();
        scale.validate().map_err(Error::Configuration)?;
        Self::new(
            ReferenceContent::builtin(&scale),
            scale,
            config.strength_normalization(),
        )
    }

    pub fn content(&self) -> &ReferenceContent {
        &self.content
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn normalization(&self) -> StrengthNormalization {
        self.normalization
    }

    pub fn measure_score(&self, responses: &[i32]) -> u8 {
        calculate_measure_score(responses, &self.scale)
    }

    pub fn tree(&self, sub_scores: &TreeSubScores) -> TreeResult {
        calculate_tree_score(sub_scores, &self.content, &self.scale, self.normalization)
    }

    pub fn engagement(&self, tree_score: u8) -> EngagementAxis {
        calculate_engagement_axis(tree_score, &self.content)
    }

    pub fn archetype(&self, tree_score: u8, output_score: u8) -> InteractionArchetype {
        calculate_interaction_archetype(tree_score, output_score, &self.content, &self.scale)
    }

    pub fn band(&self, measure: Measure, score: u8) -> Option<&Band> {
        locate_band(&self.content, measure, score)
    }

    /// Score answered questions. Responses for ids missing from the bank are ignored.
    pub fn score_responses(
        &self,
        responses: &BTreeMap<String, i32>,
        bank: &QuestionBank,
    ) -> AssessmentScores {
        let mut facets: BTreeMap<TreeFacet, Vec<i32>> = BTreeMap::new();
        let mut measures: BTreeMap<Measure, Vec<i32>> = BTreeMap::new();

        for question in bank.questions() {
            let Some(&response) = responses.get(&question.id) else {
                continue;
            };
            match (question.measure, question.facet) {
                (Measure::Tree, Some(facet)) => facets.entry(facet).or_default().push(response),
                (Measure::Tree, None) => {}
                (measure, _) => measures.entry(measure).or_default().push(response),
            }
        }

        let unknown = responses.keys().filter(|id| bank.get(id).is_none()).count();
        if unknown > 0 {
            debug!("Ignoring {} response(s) with no matching question", unknown);
        }

        let clamped: usize = facets
            .values()
            .chain(measures.values())
            .map(|values| count_out_of_range(values, &self.scale))
            .sum();
        if clamped > 0 {
            warn!(
                "Clamped {} response(s) outside the {} scale",
                clamped, self.scale
            );
        }

        let sub_scores = TreeSubScores::from_responses(&facets, &self.scale);
        debug!(?sub_scores, "Aggregated tree facets");

        let measure = |m: Measure| {
            measures
                .get(&m)
                .map(|values| self.measure_score(values))
                .unwrap_or_else(|| self.scale.midpoint())
        };

        AssessmentScores {
            tree: self.tree(&sub_scores),
            bucket: measure(Measure::Bucket),
            thickness: measure(Measure::Thickness),
            input: measure(Measure::Input),
            output: measure(Measure::Output),
        }
    }

    /// Turn manually set values into scores, clamping each to its scale
    pub fn score_manual(&self, manual: &ManualScores) -> AssessmentScores {
        let clamp = |value: u8| self.scale.clamp(i64::from(value));
        AssessmentScores {
            tree: TreeResult::at_position(
                manual.tree,
                manual.tree_strength.unwrap_or(MANUAL_TREE_STRENGTH),
                &self.content,
            ),
            bucket: clamp(manual.bucket),
            thickness: clamp(manual.thickness),
            input: clamp(manual.input),
            output: clamp(manual.output),
        }
    }
}
