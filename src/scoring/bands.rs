//! Band lookups for the linear measures and the Tree strength.
use serde::{Deserialize, Serialize};

use crate::content::{Band, ReferenceContent};
use crate::core::Measure;

/// Band of a linear measure containing `score`.
///
/// `Measure::Tree` has no linear table and always yields `None`; Tree zones
/// are located through [`crate::scoring::tree::TreeSubtype::locate`].
pub fn locate_band(content: &ReferenceContent, measure: Measure, score: u8) -> Option<&Band> {
    content.measure_table(measure)?.locate(score)
}

/// Description text for a measure value, empty when no band matches
pub fn measure_description(content: &ReferenceContent, measure: Measure, score: u8) -> &str {
    locate_band(content, measure, score)
        .map(|band| band.description.as_str())
        .unwrap_or("")
}

pub fn measure_label(content: &ReferenceContent, measure: Measure, score: u8) -> &str {
    locate_band(content, measure, score)
        .map(|band| band.label.as_str())
        .unwrap_or("")
}

pub fn strength_description(content: &ReferenceContent, strength: u8) -> Option<&Band> {
    content.strength.locate(strength.min(100))
}

/// How decisions get made: trust in gut and resilience of that trust
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionProfile {
    pub trust: String,
    pub resilience: String,
}

pub fn decision_profile(content: &ReferenceContent, bucket: u8, thickness: u8) -> DecisionProfile {
    DecisionProfile {
        trust: measure_label(content, Measure::Bucket, bucket).to_string(),
        resilience: measure_label(content, Measure::Thickness, thickness).to_string(),
    }
}

/// Width of the input and output pipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeProfile {
    pub input: String,
    pub output: String,
}

pub fn pipe_profile(content: &ReferenceContent, input: u8, output: u8) -> PipeProfile {
    PipeProfile {
        input: measure_label(content, Measure::Input, input).to_string(),
        output: measure_label(content, Measure::Output, output).to_string(),
    }
}
