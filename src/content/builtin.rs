//! Built-in reference tables shipped with the crate.

use std::collections::BTreeMap;

use super::{ArchetypeRecord, Band, BandTable, ReferenceContent};
use crate::core::{Measure, Scale};
use crate::scoring::archetype::ArchetypeKind;

pub fn reference_content(scale: &Scale) -> ReferenceContent {
    let measures = Measure::LINEAR
        .iter()
        .map(|&measure| (measure, measure_table(measure, scale)))
        .collect::<BTreeMap<_, _>>();

    ReferenceContent {
        tree: tree_table(),
        measures,
        strength: strength_table(),
        engagement: engagement_table(),
        archetypes: archetype_records(),
    }
}

/// Eight Tree subtype zones over the circular 1-99 scale
pub fn tree_table() -> BandTable {
    BandTable::new(
        "tree",
        vec![
            Band::new(
                "root",
                "Root",
                1,
                12,
                "You are motivated by belonging, harmony, and creating deep connections with others.",
            ),
            Band::new(
                "root_trunk",
                "Root-Trunk",
                13,
                24,
                "You blend relationship-building with systematic reliability and process improvement.",
            ),
            Band::new(
                "trunk",
                "Trunk",
                25,
                37,
                "You are driven by mastery, growth, and building reliable systems that stand the test of time.",
            ),
            Band::new(
                "trunk_branch",
                "Trunk-Branch",
                38,
                49,
                "You combine systematic thinking with outcome-focused action and measurable impact.",
            ),
            Band::new(
                "branch",
                "Branch",
                50,
                62,
                "You are motivated by achieving tangible results, driving impact, and leaving a lasting legacy.",
            ),
            Band::new(
                "branch_leaf",
                "Branch-Leaf",
                63,
                74,
                "You blend results-orientation with creative innovation and exploratory thinking.",
            ),
            Band::new(
                "leaf",
                "Leaf",
                75,
                87,
                "You thrive on novelty, discovery, and creative exploration of new possibilities.",
            ),
            Band::new(
                "leaf_root",
                "Leaf-Root",
                88,
                99,
                "You bridge innovation with community, bringing creative solutions to human connections and exploring new ways to build harmony.",
            ),
        ],
    )
}

/// Tertile cut points: the last value of the low and medium bands
fn tertile_cuts(scale: &Scale) -> (u8, u8) {
    let min = u16::from(scale.min);
    let span = (u16::from(scale.max) + 1).saturating_sub(min);
    let low_hi = (min + span / 3).saturating_sub(1);
    let medium_hi = (min + (2 * span) / 3).saturating_sub(1);
    (low_hi.min(254) as u8, medium_hi.min(254) as u8)
}

pub fn measure_table(measure: Measure, scale: &Scale) -> BandTable {
    let (low_hi, medium_hi) = tertile_cuts(scale);
    let [low, medium, high] = measure_levels(measure);

    BandTable::new(
        measure.as_str(),
        vec![
            Band::new("low", low.0, scale.min, low_hi, low.1),
            Band::new("medium", medium.0, low_hi + 1, medium_hi, medium.1),
            Band::new("high", high.0, medium_hi + 1, scale.max, high.1),
        ],
    )
}

type Level = (&'static str, &'static str);

fn measure_levels(measure: Measure) -> [Level; 3] {
    match measure {
        Measure::Bucket => [
            (
                "External",
                "You rely heavily on external data and validation before making decisions.",
            ),
            (
                "Balanced",
                "You balance intuitive insights with external information in your decision-making.",
            ),
            (
                "Internal",
                "You have strong trust in your gut feelings and internal compass.",
            ),
        ],
        Measure::Thickness => [
            (
                "Fragile",
                "Your confidence can be easily influenced by challenges or opposing viewpoints.",
            ),
            (
                "Moderate",
                "You maintain reasonable flexibility while holding your ground when it matters.",
            ),
            (
                "Durable",
                "Your convictions remain steady even under significant pressure or criticism.",
            ),
        ],
        Measure::Input => [
            (
                "Narrow",
                "You prefer to act quickly with minimal information, trusting your instincts.",
            ),
            (
                "Moderate",
                "You gather a reasonable amount of information before making decisions.",
            ),
            (
                "Wide",
                "You conduct extensive research and seek comprehensive data before taking action.",
            ),
        ],
        Measure::Output | Measure::Tree => [
            (
                "Narrow",
                "You process internally and share selectively, preferring quiet influence.",
            ),
            (
                "Moderate",
                "You communicate when appropriate, balancing listening with sharing.",
            ),
            (
                "Wide",
                "You actively share ideas and insights, naturally teaching and evangelizing.",
            ),
        ],
    }
}

/// Clarity of the Tree type, keyed by strength 0-100
pub fn strength_table() -> BandTable {
    BandTable::new(
        "strength",
        vec![
            Band::new(
                "low",
                "Balanced",
                0,
                39,
                "Your motivational pattern is balanced across types.",
            ),
            Band::new(
                "medium",
                "Moderate Clarity",
                40,
                69,
                "Your motivation leans in one direction while drawing on neighbouring types.",
            ),
            Band::new(
                "high",
                "Clear Type",
                70,
                100,
                "Your motivation points strongly in a single direction.",
            ),
        ],
    )
}

pub fn engagement_table() -> BandTable {
    BandTable::new(
        "engagement",
        vec![
            Band::new(
                "highly_relational",
                "Highly Relational",
                1,
                20,
                "You thrive in collaborative environments and prioritize group harmony and connection.",
            ),
            Band::new(
                "group_leaning",
                "Group-Leaning",
                21,
                40,
                "You prefer working with others while maintaining some independence.",
            ),
            Band::new(
                "balanced",
                "Balanced",
                41,
                60,
                "You flexibly engage both independently and collaboratively as needed.",
            ),
            Band::new(
                "task_focused",
                "Task-Focused",
                61,
                80,
                "You prefer independent work while occasionally collaborating when necessary.",
            ),
            Band::new(
                "highly_independent",
                "Highly Independent",
                81,
                99,
                "You excel at solo work and prefer minimal collaborative requirements.",
            ),
        ],
    )
}

pub fn archetype_records() -> Vec<ArchetypeRecord> {
    let record = |kind: ArchetypeKind, name: &str, description: &str| ArchetypeRecord {
        kind,
        name: name.to_string(),
        description: description.to_string(),
    };

    vec![
        record(
            ArchetypeKind::HarmoniousNurturer,
            "Harmonious Nurturer",
            "Supportive and empathetic, working behind the scenes.",
        ),
        record(
            ArchetypeKind::InspiringConnector,
            "Inspiring Connector",
            "Charismatic motivator and community builder.",
        ),
        record(
            ArchetypeKind::GroundedAnalyst,
            "Grounded Analyst",
            "Data-driven and methodical problem solver.",
        ),
        record(
            ArchetypeKind::ImpactfulDriver,
            "Impactful Driver",
            "Results-oriented strategic change agent.",
        ),
    ]
}
