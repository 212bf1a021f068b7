//! Completeness checks for reference content.
//!
//! All issues are collected rather than stopping at the first one so a
//! content author sees the full list in a single pass.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use super::questions::QuestionBank;
use super::{BandTable, ReferenceContent};
use crate::core::{Measure, Scale, TREE_SCALE};
use crate::scoring::archetype::ArchetypeKind;
use crate::scoring::tree::TreeSubtype;

/// A single defect in the reference content
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ContentIssue {
    #[error("table '{table}' has no band for {value}")]
    Gap { table: String, value: u8 },

    #[error("table '{table}' matches {value} in more than one band ({keys})")]
    Overlap {
        table: String,
        value: u8,
        keys: String,
    },

    #[error("band '{key}' in table '{table}' has inverted range {lo}-{hi}")]
    InvertedRange {
        table: String,
        key: String,
        lo: u8,
        hi: u8,
    },

    #[error("band '{key}' in table '{table}' reaches outside {domain}")]
    OutOfDomain {
        table: String,
        key: String,
        domain: String,
    },

    #[error("no band table for measure '{0}'")]
    MissingTable(Measure),

    #[error("tree band '{0}' is not a known subtype")]
    UnknownSubtype(String),

    #[error("no record for archetype '{0}'")]
    MissingArchetype(ArchetypeKind),

    #[error("question id '{0}' appears more than once")]
    DuplicateQuestion(String),

    #[error("question '{0}' has an empty id or prompt")]
    BlankQuestion(String),

    #[error("tree question '{0}' has no facet")]
    MissingFacet(String),

    #[error("question '{0}' is not a tree question but carries a facet")]
    UnexpectedFacet(String),
}

/// Check that exactly one band matches every integer in `lo..=hi`.
pub fn table_issues(table: &BandTable, lo: u8, hi: u8) -> Vec<ContentIssue> {
    let domain = format!("{}-{}", lo, hi);

    let range_issues = table.bands.iter().filter_map(|band| {
        if band.lo() > band.hi() {
            Some(ContentIssue::InvertedRange {
                table: table.name.clone(),
                key: band.key.clone(),
                lo: band.lo(),
                hi: band.hi(),
            })
        } else if band.lo() < lo || band.hi() > hi {
            Some(ContentIssue::OutOfDomain {
                table: table.name.clone(),
                key: band.key.clone(),
                domain: domain.clone(),
            })
        } else {
            None
        }
    });

    let coverage_issues = (lo..=hi).filter_map(|value| {
        let matching: Vec<&str> = table
            .bands
            .iter()
            .filter(|band| band.contains(value))
            .map(|band| band.key.as_str())
            .collect();
        match matching.len() {
            0 => Some(ContentIssue::Gap {
                table: table.name.clone(),
                value,
            }),
            1 => None,
            _ => Some(ContentIssue::Overlap {
                table: table.name.clone(),
                value,
                keys: matching.join(", "),
            }),
        }
    });

    range_issues.chain(coverage_issues).collect()
}

pub fn reference_issues(content: &ReferenceContent, scale: &Scale) -> Vec<ContentIssue> {
    let mut issues = table_issues(&content.tree, TREE_SCALE.min, TREE_SCALE.max);

    issues.extend(
        content
            .tree
            .bands
            .iter()
            .filter(|band| band.key.parse::<TreeSubtype>().is_err())
            .map(|band| ContentIssue::UnknownSubtype(band.key.clone())),
    );

    for measure in Measure::LINEAR {
        match content.measure_table(measure) {
            Some(table) => issues.extend(table_issues(table, scale.min, scale.max)),
            None => issues.push(ContentIssue::MissingTable(measure)),
        }
    }

    issues.extend(table_issues(&content.strength, 0, 100));
    issues.extend(table_issues(
        &content.engagement,
        TREE_SCALE.min,
        TREE_SCALE.max,
    ));

    issues.extend(
        ArchetypeKind::ALL
            .iter()
            .filter(|kind| content.archetype(**kind).is_none())
            .map(|kind| ContentIssue::MissingArchetype(*kind)),
    );

    issues
}

pub fn question_issues(bank: &QuestionBank) -> Vec<ContentIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for question in bank.questions() {
        if question.id.trim().is_empty() || question.prompt.trim().is_empty() {
            issues.push(ContentIssue::BlankQuestion(question.id.clone()));
        }
        if !seen.insert(question.id.as_str()) {
            issues.push(ContentIssue::DuplicateQuestion(question.id.clone()));
        }
        match (question.measure, question.facet) {
            (Measure::Tree, None) => issues.push(ContentIssue::MissingFacet(question.id.clone())),
            (Measure::Tree, Some(_)) => {}
            (_, Some(_)) => issues.push(ContentIssue::UnexpectedFacet(question.id.clone())),
            (_, None) => {}
        }
    }

    issues
}
