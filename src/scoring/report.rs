//! Everything the results view shows, derived from one `AssessmentScores`.
use serde::{Deserialize, Serialize};

use super::archetype::InteractionArchetype;
use super::bands::{
    decision_profile, pipe_profile, strength_description, DecisionProfile, PipeProfile,
};
use super::engagement::EngagementAxis;
use super::engine::{AssessmentScores, ScoreEngine};
use crate::core::{Measure, TREE_SCALE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSummary {
    pub score: u8,
    pub subtype: String,
    pub name: String,
    pub description: String,
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub strength: u8,
    pub strength_label: String,
    pub strength_description: String,
}

/// Band placement of one measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureReading {
    pub measure: Measure,
    pub name: String,
    pub tagline: String,
    pub value: u8,
    pub label: String,
    pub description: String,
}

/// One spoke of the radar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub measure: String,
    pub value: u8,
    pub full_mark: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub scores: AssessmentScores,
    pub tree: TreeSummary,
    pub engagement: EngagementAxis,
    pub archetype: InteractionArchetype,
    pub decision: DecisionProfile,
    pub pipes: PipeProfile,
    pub measures: Vec<MeasureReading>,
    pub radar: Vec<RadarPoint>,
}

impl ProfileReport {
    pub fn build(scores: &AssessmentScores, engine: &ScoreEngine) -> Self {
        let content = engine.content();
        let tree = &scores.tree;

        let description = content
            .tree
            .get(tree.subtype.key())
            .map(|band| band.description.clone())
            .unwrap_or_default();
        let (strength_label, strength_text) = strength_description(content, tree.strength)
            .map(|band| (band.label.clone(), band.description.clone()))
            .unwrap_or_default();

        let tree_summary = TreeSummary {
            score: tree.score,
            subtype: tree.subtype.key().to_string(),
            name: tree.subtype_name.clone(),
            description,
            primary: tree.subtype.primary().to_string(),
            secondary: tree.subtype.secondary().map(|facet| facet.to_string()),
            strength: tree.strength,
            strength_label,
            strength_description: strength_text,
        };

        let measures = Measure::LINEAR
            .iter()
            .map(|&measure| {
                let value = scores.value(measure);
                let band = engine.band(measure, value);
                MeasureReading {
                    measure,
                    name: measure.display_name().to_string(),
                    tagline: measure.tagline().to_string(),
                    value,
                    label: band.map(|b| b.label.clone()).unwrap_or_default(),
                    description: band.map(|b| b.description.clone()).unwrap_or_default(),
                }
            })
            .collect();

        let radar = Measure::ALL
            .iter()
            .map(|&measure| RadarPoint {
                measure: measure.display_name().to_string(),
                value: scores.value(measure),
                full_mark: if measure == Measure::Tree {
                    TREE_SCALE.max
                } else {
                    engine.scale().max
                },
            })
            .collect();

        Self {
            scores: scores.clone(),
            tree: tree_summary,
            engagement: engine.engagement(tree.score),
            archetype: engine.archetype(tree.score, scores.output),
            decision: decision_profile(content, scores.bucket, scores.thickness),
            pipes: pipe_profile(content, scores.input, scores.output),
            measures,
            radar,
        }
    }
}
