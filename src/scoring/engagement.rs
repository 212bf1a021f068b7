//! Engagement axis: group-oriented versus goal-oriented.
//!
//! Both ends of the Tree circle (root and leaf-root) read as relational, the
//! middle (branch) reads as independent. A cosine over one full turn of the
//! Tree circle produces that shape.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::content::ReferenceContent;
use crate::core::TREE_SCALE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementAxis {
    /// 1 is most group-oriented, 99 most solo-oriented
    pub score: u8,
    pub key: String,
    pub label: String,
    pub description: String,
}

/// Raw axis score for a Tree position
pub fn engagement_score(tree_score: u8) -> u8 {
    let position = TREE_SCALE.clamp(i64::from(tree_score));
    let lo = f64::from(TREE_SCALE.min);
    let steps = f64::from(TREE_SCALE.span());

    let normalized = (f64::from(position) - lo) / steps * TAU;
    let scaled = (1.0 - normalized.cos()) / 2.0 * steps + lo;

    TREE_SCALE.clamp(scaled.round() as i64)
}

pub fn calculate_engagement_axis(tree_score: u8, content: &ReferenceContent) -> EngagementAxis {
    let score = engagement_score(tree_score);
    let (key, label, description) = content
        .engagement
        .locate(score)
        .map(|band| (band.key.clone(), band.label.clone(), band.description.clone()))
        .unwrap_or_default();

    EngagementAxis {
        score,
        key,
        label,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scale;

    #[test]
    fn test_tree_extremes_are_relational() {
        assert_eq!(engagement_score(1), 1);
        assert_eq!(engagement_score(99), 1);
    }

    #[test]
    fn test_tree_midpoint_is_independent() {
        assert_eq!(engagement_score(50), 99);
    }

    #[test]
    fn test_axis_is_symmetric_around_midpoint() {
        for offset in 0..49u8 {
            assert_eq!(engagement_score(1 + offset), engagement_score(99 - offset));
        }
    }

    #[test]
    fn test_out_of_range_positions_are_clamped() {
        assert_eq!(engagement_score(0), engagement_score(1));
        assert_eq!(engagement_score(200), engagement_score(99));
    }

    #[test]
    fn test_axis_picks_band_label() {
        let content = ReferenceContent::builtin(&Scale::default());
        let axis = calculate_engagement_axis(1, &content);
        assert_eq!(axis.label, "Highly Relational");
        assert_eq!(axis.key, "highly_relational");
    }

    #[test]
    fn test_band_boundaries_split_at_each_twenty() {
        let content = ReferenceContent::builtin(&Scale::default());
        let key = |score: u8| content.engagement.locate(score).map(|band| band.key.as_str());

        assert_eq!(key(20), Some("highly_relational"));
        assert_eq!(key(21), Some("group_leaning"));
        assert_eq!(key(40), Some("group_leaning"));
        assert_eq!(key(41), Some("balanced"));
        assert_eq!(key(60), Some("balanced"));
        assert_eq!(key(61), Some("task_focused"));
        assert_eq!(key(80), Some("task_focused"));
        assert_eq!(key(81), Some("highly_independent"));
    }

    #[test]
    fn test_tree_positions_cross_engagement_bands() {
        let content = ReferenceContent::builtin(&Scale::default());
        for (tree, score, key) in [
            (16, 22, "group_leaning"),
            (23, 42, "balanced"),
            (29, 61, "task_focused"),
            (36, 81, "highly_independent"),
        ] {
            let axis = calculate_engagement_axis(tree, &content);
            assert_eq!((axis.score, axis.key.as_str()), (score, key), "tree {tree}");
        }
        assert_eq!(engagement_score(25), 48);
        assert_eq!(engagement_score(75), 48);
    }
}
