//! Interaction archetype from Tree orientation and Output pipe width.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::tree::TreeSubtype;
use crate::content::ReferenceContent;
use crate::core::{Scale, TreeFacet};

/// Whether motivation centres on people or on facts and outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    People,
    Fact,
}

impl Orientation {
    /// Root- and Leaf-led zones are people oriented; Trunk- and Branch-led are fact oriented
    pub fn for_subtype(subtype: TreeSubtype) -> Self {
        match subtype.primary() {
            TreeFacet::Root | TreeFacet::Leaf => Orientation::People,
            TreeFacet::Trunk | TreeFacet::Branch => Orientation::Fact,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::People => "people",
            Orientation::Fact => "fact",
        })
    }
}

/// How widely someone shares what they think
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Narrow,
    Wide,
}

impl Expression {
    pub fn for_output(output: u8, scale: &Scale) -> Self {
        if output < scale.midpoint() {
            Expression::Narrow
        } else {
            Expression::Wide
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expression::Narrow => "narrow",
            Expression::Wide => "wide",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeKind {
    HarmoniousNurturer,
    InspiringConnector,
    GroundedAnalyst,
    ImpactfulDriver,
}

impl ArchetypeKind {
    pub const ALL: [ArchetypeKind; 4] = [
        ArchetypeKind::HarmoniousNurturer,
        ArchetypeKind::InspiringConnector,
        ArchetypeKind::GroundedAnalyst,
        ArchetypeKind::ImpactfulDriver,
    ];

    pub fn for_quadrant(orientation: Orientation, expression: Expression) -> Self {
        match (orientation, expression) {
            (Orientation::People, Expression::Narrow) => ArchetypeKind::HarmoniousNurturer,
            (Orientation::People, Expression::Wide) => ArchetypeKind::InspiringConnector,
            (Orientation::Fact, Expression::Narrow) => ArchetypeKind::GroundedAnalyst,
            (Orientation::Fact, Expression::Wide) => ArchetypeKind::ImpactfulDriver,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ArchetypeKind::HarmoniousNurturer => "harmonious_nurturer",
            ArchetypeKind::InspiringConnector => "inspiring_connector",
            ArchetypeKind::GroundedAnalyst => "grounded_analyst",
            ArchetypeKind::ImpactfulDriver => "impactful_driver",
        }
    }
}

impl fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionArchetype {
    pub orientation: Orientation,
    pub expression: Expression,
    pub archetype: ArchetypeKind,
    pub archetype_name: String,
    pub description: String,
}

pub fn calculate_interaction_archetype(
    tree_score: u8,
    output_score: u8,
    content: &ReferenceContent,
    scale: &Scale,
) -> InteractionArchetype {
    let orientation = Orientation::for_subtype(TreeSubtype::locate(tree_score, content));
    let expression = Expression::for_output(output_score, scale);
    let archetype = ArchetypeKind::for_quadrant(orientation, expression);

    let (archetype_name, description) = content
        .archetype(archetype)
        .map(|record| (record.name.clone(), record.description.clone()))
        .unwrap_or_default();

    InteractionArchetype {
        orientation,
        expression,
        archetype,
        archetype_name,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archetype(tree: u8, output: u8) -> InteractionArchetype {
        let scale = Scale::default();
        calculate_interaction_archetype(tree, output, &ReferenceContent::builtin(&scale), &scale)
    }

    #[test]
    fn test_orientation_follows_primary_facet() {
        assert_eq!(Orientation::for_subtype(TreeSubtype::Root), Orientation::People);
        assert_eq!(Orientation::for_subtype(TreeSubtype::RootTrunk), Orientation::People);
        assert_eq!(Orientation::for_subtype(TreeSubtype::LeafRoot), Orientation::People);
        assert_eq!(Orientation::for_subtype(TreeSubtype::Trunk), Orientation::Fact);
        assert_eq!(Orientation::for_subtype(TreeSubtype::BranchLeaf), Orientation::Fact);
    }

    #[test]
    fn test_people_zone_boundaries() {
        assert_eq!(archetype(24, 10).orientation, Orientation::People);
        assert_eq!(archetype(25, 10).orientation, Orientation::Fact);
        assert_eq!(archetype(74, 10).orientation, Orientation::Fact);
        assert_eq!(archetype(75, 10).orientation, Orientation::People);
    }

    #[test]
    fn test_expression_splits_at_midpoint() {
        assert_eq!(archetype(50, 49).expression, Expression::Narrow);
        assert_eq!(archetype(50, 50).expression, Expression::Wide);
    }

    #[test]
    fn test_each_quadrant_maps_to_one_archetype() {
        assert_eq!(archetype(5, 20).archetype_name, "Harmonious Nurturer");
        assert_eq!(archetype(90, 80).archetype_name, "Inspiring Connector");
        assert_eq!(archetype(30, 20).archetype_name, "Grounded Analyst");
        assert_eq!(archetype(55, 80).archetype_name, "Impactful Driver");
    }
}
