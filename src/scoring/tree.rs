//! Vector model of the Tree measure.
//!
//! Each facet pulls the resultant toward its compass angle: root east, trunk
//! north, branch west, leaf south. Opposite facets cancel, so the vector sum
//! reduces to `x = root - branch` and `y = trunk - leaf`. The resultant angle
//! becomes a position on the circular 1-99 scale and its magnitude becomes the
//! 0-100 strength (purity of type).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::aggregate::calculate_measure_score;
use crate::content::ReferenceContent;
use crate::core::{Scale, TreeFacet, TREE_SCALE};

/// Number of steps between the first and last Tree position
const TREE_STEPS: f64 = (TREE_SCALE.max - TREE_SCALE.min) as f64;

/// One of the eight Tree zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeSubtype {
    Root,
    RootTrunk,
    Trunk,
    TrunkBranch,
    Branch,
    BranchLeaf,
    Leaf,
    LeafRoot,
}

impl TreeSubtype {
    pub const ALL: [TreeSubtype; 8] = [
        TreeSubtype::Root,
        TreeSubtype::RootTrunk,
        TreeSubtype::Trunk,
        TreeSubtype::TrunkBranch,
        TreeSubtype::Branch,
        TreeSubtype::BranchLeaf,
        TreeSubtype::Leaf,
        TreeSubtype::LeafRoot,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TreeSubtype::Root => "root",
            TreeSubtype::RootTrunk => "root_trunk",
            TreeSubtype::Trunk => "trunk",
            TreeSubtype::TrunkBranch => "trunk_branch",
            TreeSubtype::Branch => "branch",
            TreeSubtype::BranchLeaf => "branch_leaf",
            TreeSubtype::Leaf => "leaf",
            TreeSubtype::LeafRoot => "leaf_root",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TreeSubtype::Root => "Root",
            TreeSubtype::RootTrunk => "Root-Trunk",
            TreeSubtype::Trunk => "Trunk",
            TreeSubtype::TrunkBranch => "Trunk-Branch",
            TreeSubtype::Branch => "Branch",
            TreeSubtype::BranchLeaf => "Branch-Leaf",
            TreeSubtype::Leaf => "Leaf",
            TreeSubtype::LeafRoot => "Leaf-Root",
        }
    }

    /// The facet the zone is named after first
    pub fn primary(&self) -> TreeFacet {
        match self {
            TreeSubtype::Root | TreeSubtype::RootTrunk => TreeFacet::Root,
            TreeSubtype::Trunk | TreeSubtype::TrunkBranch => TreeFacet::Trunk,
            TreeSubtype::Branch | TreeSubtype::BranchLeaf => TreeFacet::Branch,
            TreeSubtype::Leaf | TreeSubtype::LeafRoot => TreeFacet::Leaf,
        }
    }

    /// Blended zones lean toward a second facet
    pub fn secondary(&self) -> Option<TreeFacet> {
        match self {
            TreeSubtype::RootTrunk => Some(TreeFacet::Trunk),
            TreeSubtype::TrunkBranch => Some(TreeFacet::Branch),
            TreeSubtype::BranchLeaf => Some(TreeFacet::Leaf),
            TreeSubtype::LeafRoot => Some(TreeFacet::Root),
            _ => None,
        }
    }

    /// Zone containing a Tree position; falls back to `Root` when the table
    /// has no matching band
    pub fn locate(score: u8, content: &ReferenceContent) -> TreeSubtype {
        content
            .tree
            .locate(score)
            .and_then(|band| band.key.parse().ok())
            .unwrap_or(TreeSubtype::Root)
    }
}

impl fmt::Display for TreeSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TreeSubtype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TreeSubtype::ALL
            .iter()
            .copied()
            .find(|subtype| subtype.key() == s)
            .ok_or_else(|| format!("unknown tree subtype '{}'", s))
    }
}

/// How the resultant magnitude is turned into a 0-100 strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthNormalization {
    /// One facet at the scale maximum against its opposite at the minimum
    #[default]
    AxisSpan,
    /// Two adjacent facets both at the scale maximum
    AdjacentPeak,
}

impl StrengthNormalization {
    /// Magnitude that maps to a strength of 100
    pub fn reference_magnitude(&self, scale: &Scale) -> f64 {
        match self {
            StrengthNormalization::AxisSpan => f64::from(scale.span()),
            StrengthNormalization::AdjacentPeak => f64::from(scale.max) * std::f64::consts::SQRT_2,
        }
    }
}

/// Per-facet means feeding the vector model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSubScores {
    pub root: u8,
    pub trunk: u8,
    pub branch: u8,
    pub leaf: u8,
}

impl TreeSubScores {
    pub fn new(root: u8, trunk: u8, branch: u8, leaf: u8) -> Self {
        Self {
            root,
            trunk,
            branch,
            leaf,
        }
    }

    /// Aggregate raw responses per facet; facets without responses sit at the midpoint
    pub fn from_responses(responses: &BTreeMap<TreeFacet, Vec<i32>>, scale: &Scale) -> Self {
        let score = |facet: TreeFacet| {
            responses
                .get(&facet)
                .map(|values| calculate_measure_score(values, scale))
                .unwrap_or_else(|| scale.midpoint())
        };
        Self::new(
            score(TreeFacet::Root),
            score(TreeFacet::Trunk),
            score(TreeFacet::Branch),
            score(TreeFacet::Leaf),
        )
    }

    pub fn get(&self, facet: TreeFacet) -> u8 {
        match facet {
            TreeFacet::Root => self.root,
            TreeFacet::Trunk => self.trunk,
            TreeFacet::Branch => self.branch,
            TreeFacet::Leaf => self.leaf,
        }
    }

    /// Resultant `(x, y)` of the four facet pulls, each along its compass angle
    pub fn vector(&self) -> (f64, f64) {
        TreeFacet::ALL.iter().fold((0.0, 0.0), |(x, y), &facet| {
            let (sin, cos) = facet.angle_degrees().to_radians().sin_cos();
            // Facets sit on the axes; rounding drops the float residue of cos 90 and sin 180
            let pull = f64::from(self.get(facet));
            (x + pull * cos.round(), y + pull * sin.round())
        })
    }
}

/// Classified Tree measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeResult {
    /// Position on the circular 1-99 scale
    pub score: u8,
    /// Purity of type, 0-100
    pub strength: u8,
    pub subtype: TreeSubtype,
    pub subtype_name: String,
}

impl TreeResult {
    /// Build a result for a known position, e.g. a manually set slider
    pub fn at_position(score: u8, strength: u8, content: &ReferenceContent) -> Self {
        let score = TREE_SCALE.clamp(i64::from(score));
        let subtype = TreeSubtype::locate(score, content);
        Self {
            score,
            strength: strength.min(100),
            subtype,
            subtype_name: subtype_name(subtype, score, content),
        }
    }

    /// No facet dominates; the position carries no information
    pub fn is_balanced(&self) -> bool {
        self.strength == 0
    }
}

fn subtype_name(subtype: TreeSubtype, score: u8, content: &ReferenceContent) -> String {
    content
        .tree
        .locate(score)
        .map(|band| band.label.clone())
        .unwrap_or_else(|| subtype.display_name().to_string())
}

/// Map an angle in degrees onto the circular 1-99 scale
pub fn position_from_degrees(degrees: f64) -> u8 {
    let normalized = degrees.rem_euclid(360.0);
    let step = (normalized / 360.0 * TREE_STEPS).round();
    (step as u8).saturating_add(TREE_SCALE.min).min(TREE_SCALE.max)
}

/// Classify four facet means into a Tree position, strength and subtype.
///
/// When all facets cancel out the angle is taken as 0, which lands in the
/// `root` zone with a strength of 0.
pub fn calculate_tree_score(
    sub_scores: &TreeSubScores,
    content: &ReferenceContent,
    scale: &Scale,
    normalization: StrengthNormalization,
) -> TreeResult {
    let (x, y) = sub_scores.vector();
    let magnitude = x.hypot(y);

    let score = position_from_degrees(y.atan2(x).to_degrees());

    let reference = normalization.reference_magnitude(scale);
    let strength = if reference > 0.0 {
        (magnitude / reference * 100.0).min(100.0).round() as u8
    } else {
        0
    };

    TreeResult::at_position(score, strength, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> ReferenceContent {
        ReferenceContent::builtin(&Scale::default())
    }

    fn classify(root: u8, trunk: u8, branch: u8, leaf: u8) -> TreeResult {
        calculate_tree_score(
            &TreeSubScores::new(root, trunk, branch, leaf),
            &content(),
            &Scale::default(),
            StrengthNormalization::AxisSpan,
        )
    }

    #[test]
    fn test_compass_points_land_in_their_zones() {
        assert_eq!(position_from_degrees(0.0), 1);
        assert_eq!(position_from_degrees(90.0), 26);
        assert_eq!(position_from_degrees(180.0), 50);
        assert_eq!(position_from_degrees(270.0), 75);
        assert_eq!(position_from_degrees(359.9), 99);
        assert_eq!(position_from_degrees(-90.0), 75);
    }

    #[test]
    fn test_pure_facets_classify_to_their_own_subtype() {
        assert_eq!(classify(99, 1, 1, 1).subtype, TreeSubtype::Root);
        assert_eq!(classify(1, 99, 1, 1).subtype, TreeSubtype::Trunk);
        assert_eq!(classify(1, 1, 99, 1).subtype, TreeSubtype::Branch);
        assert_eq!(classify(1, 1, 1, 99).subtype, TreeSubtype::Leaf);
    }

    #[test]
    fn test_adjacent_facets_classify_to_blended_subtype() {
        let result = classify(99, 99, 1, 1);
        assert_eq!(result.subtype, TreeSubtype::RootTrunk);
        assert_eq!(result.subtype_name, "Root-Trunk");
        assert_eq!(result.strength, 100);

        assert_eq!(classify(1, 99, 99, 1).subtype, TreeSubtype::TrunkBranch);
        assert_eq!(classify(1, 1, 80, 99).subtype, TreeSubtype::BranchLeaf);
        assert_eq!(classify(99, 1, 1, 70).subtype, TreeSubtype::LeafRoot);
    }

    #[test]
    fn test_diagonals_follow_zone_boundaries() {
        // 225 degrees maps to 62, the last branch position
        assert_eq!(classify(1, 1, 99, 99).score, 62);
        assert_eq!(classify(1, 1, 99, 99).subtype, TreeSubtype::Branch);
        // 315 degrees maps to 87, the last leaf position
        assert_eq!(classify(99, 1, 1, 99).score, 87);
        assert_eq!(classify(99, 1, 1, 99).subtype, TreeSubtype::Leaf);
    }

    #[test]
    fn test_equal_facets_are_balanced() {
        for value in [1, 37, 50, 99] {
            let result = classify(value, value, value, value);
            assert_eq!(result.strength, 0);
            assert_eq!(result.score, 1);
            assert_eq!(result.subtype, TreeSubtype::Root);
            assert!(result.is_balanced());
        }
    }

    #[test]
    fn test_single_dominant_facet_has_full_axis_strength() {
        let result = classify(99, 1, 1, 1);
        assert_eq!(result.score, 1);
        assert_eq!(result.strength, 100);
    }

    #[test]
    fn test_adjacent_peak_normalization_matches_legacy_divisor() {
        let scale = Scale::default();
        let reference = StrengthNormalization::AdjacentPeak.reference_magnitude(&scale);
        assert!((reference - 140.0).abs() < 0.01);

        let result = calculate_tree_score(
            &TreeSubScores::new(99, 1, 1, 1),
            &content(),
            &scale,
            StrengthNormalization::AdjacentPeak,
        );
        assert_eq!(result.strength, 70);
    }

    #[test]
    fn test_sub_scores_default_to_midpoint() {
        let mut responses = BTreeMap::new();
        responses.insert(TreeFacet::Root, vec![80, 90]);
        let sub = TreeSubScores::from_responses(&responses, &Scale::default());
        assert_eq!(sub, TreeSubScores::new(85, 50, 50, 50));
    }

    #[test]
    fn test_vector_sums_facet_pulls_along_compass_angles() {
        assert_eq!(TreeSubScores::new(80, 30, 20, 10).vector(), (60.0, 20.0));
        assert_eq!(TreeSubScores::new(5, 5, 5, 5).vector(), (0.0, 0.0));
        let sub = TreeSubScores::new(1, 2, 3, 4);
        for facet in TreeFacet::ALL {
            assert_eq!(sub.get(facet), (facet.angle_degrees() / 90.0) as u8 + 1);
        }
    }

    #[test]
    fn test_inverted_scale_yields_zero_strength() {
        let inverted = Scale::new(80, 20);
        let result = calculate_tree_score(
            &TreeSubScores::new(99, 1, 1, 1),
            &content(),
            &inverted,
            StrengthNormalization::AxisSpan,
        );
        assert_eq!(result.score, 1);
        assert_eq!(result.strength, 0);
    }

    #[test]
    fn test_subtype_keys_round_trip_through_from_str() {
        for subtype in TreeSubtype::ALL {
            assert_eq!(subtype.key().parse::<TreeSubtype>(), Ok(subtype));
        }
        assert!("roots".parse::<TreeSubtype>().is_err());
    }

    #[test]
    fn test_at_position_clamps_manual_values() {
        let result = TreeResult::at_position(0, 150, &content());
        assert_eq!(result.score, 1);
        assert_eq!(result.strength, 100);
        assert_eq!(TreeResult::at_position(120, 10, &content()).score, 99);
    }
}
