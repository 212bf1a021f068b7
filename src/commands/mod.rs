//! CLI command implementations.
//!
//! Every command receives a [`CommandContext`] resolved once from the
//! global flags and the discovered configuration:
//! - **init**: write a default `.tbap.toml`
//! - **questions**: list the question bank
//! - **score** / **manual**: compute a profile, optionally saving it
//! - **show** / **clear**: read or forget the saved assessment
//! - **bands**: print band tables
//! - **validate-content**: check tables and questions for defects

pub mod bands;
pub mod init;
pub mod questions;
pub mod score;
pub mod show;
pub mod validate;

pub use bands::show_bands;
pub use init::init_config;
pub use questions::list_questions;
pub use score::{score_manual, score_questions};
pub use show::{clear_saved, show_saved};
pub use validate::validate_content;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;
use crate::config::{load_config, load_config_file, TbapConfig};
use crate::content::QuestionBank;
use crate::io::{AssessmentRepository, FileStore};
use crate::output::{create_writer, OutputFormat, OutputWriter};
use crate::scoring::ScoreEngine;

/// Settings shared by all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: TbapConfig,
    pub format: OutputFormat,
    pub store_dir: Option<PathBuf>,
}

impl CommandContext {
    pub fn from_args(global: &GlobalArgs) -> Result<Self> {
        let config = match &global.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => load_config(),
        };
        let format = global.format.unwrap_or_else(|| config.default_format());
        let store_dir = global.store_dir.clone().or_else(|| config.storage_dir());
        Ok(Self {
            config,
            format,
            store_dir,
        })
    }

    pub fn engine(&self) -> Result<ScoreEngine> {
        ScoreEngine::from_config(&self.config).context("Failed to set up scoring engine")
    }

    /// Saved-results repository under `--store-dir`, the config, or the data dir
    pub fn repository(&self) -> Result<AssessmentRepository<FileStore>> {
        let store = match &self.store_dir {
            Some(dir) => FileStore::new(dir),
            None => FileStore::default_location()
                .context("No data directory available; pass --store-dir")?,
        };
        tracing::debug!("Using result store at {}", store.root().display());
        Ok(AssessmentRepository::new(store))
    }

    pub fn writer<'a, W: Write + 'a>(&self, out: W) -> Box<dyn OutputWriter + 'a> {
        create_writer(self.format, out)
    }
}

/// Question bank from a file, or the bundled one
pub fn load_question_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load questions from {}", path.display())),
        None => QuestionBank::bundled().context("Bundled question set is invalid"),
    }
}
