pub mod aggregate;
pub mod archetype;
pub mod bands;
pub mod engagement;
pub mod engine;
pub mod report;
pub mod tree;

pub use aggregate::calculate_measure_score;
pub use archetype::{
    calculate_interaction_archetype, ArchetypeKind, Expression, InteractionArchetype, Orientation,
};
pub use bands::{
    decision_profile, locate_band, measure_description, pipe_profile, strength_description,
    DecisionProfile, PipeProfile,
};
pub use engagement::{calculate_engagement_axis, EngagementAxis};
pub use engine::{AssessmentScores, ManualScores, ScoreEngine};
pub use report::ProfileReport;
pub use tree::{
    calculate_tree_score, StrengthNormalization, TreeResult, TreeSubScores, TreeSubtype,
};
