pub mod real;
pub mod repository;
pub mod traits;

pub use real::{FileStore, MemoryStore};
pub use repository::{
    AssessmentRepository, ScoreSource, StoredAssessment, ARCHETYPE_KEY, SCORES_KEY,
};
pub use traits::KeyValueStore;

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
