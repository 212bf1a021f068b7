//! Static reference content: band tables, archetype records and the question bank.
//!
//! Every band is a boundary-inclusive integer range. The engine only ever
//! locates a value inside a table; completeness of the tables is checked by
//! [`ReferenceContent::validate`] and by the test suite, never at scoring time.

pub mod builtin;
pub mod questions;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{Error, Measure, Result, Scale};
use crate::scoring::archetype::ArchetypeKind;

pub use questions::{QuestionBank, QuestionDescriptor};
pub use validation::ContentIssue;

/// One labelled, inclusive range of a band table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub key: String,
    pub label: String,
    pub range: [u8; 2],
    pub description: String,
}

impl Band {
    pub fn new(key: &str, label: &str, lo: u8, hi: u8, description: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            range: [lo, hi],
            description: description.to_string(),
        }
    }

    pub fn lo(&self) -> u8 {
        self.range[0]
    }

    pub fn hi(&self) -> u8 {
        self.range[1]
    }

    pub fn contains(&self, value: u8) -> bool {
        value >= self.lo() && value <= self.hi()
    }

    /// "34-66" style label used in listings
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.lo(), self.hi())
    }
}

/// Ordered bands covering one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTable {
    pub name: String,
    pub bands: Vec<Band>,
}

impl BandTable {
    pub fn new(name: &str, bands: Vec<Band>) -> Self {
        Self {
            name: name.to_string(),
            bands,
        }
    }

    /// First band whose range contains `value`
    pub fn locate(&self, value: u8) -> Option<&Band> {
        self.bands.iter().find(|band| band.contains(value))
    }

    pub fn get(&self, key: &str) -> Option<&Band> {
        self.bands.iter().find(|band| band.key == key)
    }
}

/// Name and description attached to an interaction archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeRecord {
    pub kind: ArchetypeKind,
    pub name: String,
    pub description: String,
}

/// All static tables consulted by the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceContent {
    /// Tree subtype zones over the circular 1-99 scale
    pub tree: BandTable,
    /// Tertile tables for the four linear measures
    pub measures: BTreeMap<Measure, BandTable>,
    /// Strength (type clarity) table over 0-100
    pub strength: BandTable,
    /// Engagement axis quintiles over 1-99
    pub engagement: BandTable,
    pub archetypes: Vec<ArchetypeRecord>,
}

impl ReferenceContent {
    /// Built-in content with measure tables sized for `scale`
    pub fn builtin(scale: &Scale) -> Self {
        builtin::reference_content(scale)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load content from a JSON file. Tables are not checked; see [`Self::issues`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::file_system_io("Failed to read content file", path, e)
        })?;
        let content = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded reference content from {}", path.display());
        Ok(content)
    }

    pub fn measure_table(&self, measure: Measure) -> Option<&BandTable> {
        self.measures.get(&measure)
    }

    pub fn archetype(&self, kind: ArchetypeKind) -> Option<&ArchetypeRecord> {
        self.archetypes.iter().find(|record| record.kind == kind)
    }

    /// Every defect found in the tables, empty when the content is sound
    pub fn issues(&self, scale: &Scale) -> Vec<ContentIssue> {
        validation::reference_issues(self, scale)
    }

    pub fn validate(&self, scale: &Scale) -> Result<()> {
        let issues = self.issues(scale);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Content(issues))
        }
    }
}
