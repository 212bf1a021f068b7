//! Scoring engine for the Trees, Buckets and Pipes personality model.
//!
//! Raw slider responses become five scores: a circular Tree position with
//! a strength, and four linear measures (Bucket level, Bucket thickness,
//! Input pipe, Output pipe). From those the engine derives an Engagement
//! axis, an Interaction archetype and descriptive bands.
//!
//! ```
//! use tbap::{ManualScores, ProfileReport, ScoreEngine};
//!
//! let engine = ScoreEngine::default();
//! let scores = engine.score_manual(&ManualScores {
//!     tree: 20,
//!     tree_strength: None,
//!     bucket: 70,
//!     thickness: 30,
//!     input: 50,
//!     output: 40,
//! });
//! let report = ProfileReport::build(&scores, &engine);
//! assert_eq!(report.tree.subtype, "root_trunk");
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod core;
pub mod io;
pub mod observability;
pub mod output;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Error, Measure, Result, Scale, TreeFacet, TREE_SCALE};

pub use crate::content::{Band, BandTable, ContentIssue, QuestionBank, ReferenceContent};

pub use crate::scoring::{
    calculate_engagement_axis, calculate_interaction_archetype, calculate_measure_score,
    calculate_tree_score, locate_band, AssessmentScores, EngagementAxis, InteractionArchetype,
    ManualScores, ProfileReport, ScoreEngine, StrengthNormalization, TreeResult, TreeSubScores,
    TreeSubtype,
};

pub use crate::io::{AssessmentRepository, FileStore, KeyValueStore, MemoryStore};

pub use crate::output::{create_writer, OutputFormat, OutputWriter};
