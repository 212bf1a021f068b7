//! Persistence of assessments through the file-backed store.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use tbap::io::{ScoreSource, StoredAssessment, ARCHETYPE_KEY, SCORES_KEY};
use tbap::{
    AssessmentRepository, AssessmentScores, FileStore, KeyValueStore, ManualScores, QuestionBank,
    ScoreEngine,
};
use tempfile::TempDir;

#[test]
fn test_scores_json_round_trip() {
    let engine = ScoreEngine::default();
    let scores = engine.score_manual(&ManualScores {
        tree: 63,
        tree_strength: Some(42),
        bucket: 12,
        thickness: 88,
        input: 34,
        output: 66,
    });

    let json = serde_json::to_string(&scores).unwrap();
    let decoded: AssessmentScores = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, scores);
}

#[test]
fn test_question_assessment_survives_a_new_store_instance() {
    let temp = TempDir::new().unwrap();
    let engine = ScoreEngine::default();
    let bank = QuestionBank::bundled().unwrap();
    let responses: BTreeMap<String, i32> = bank
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| (q.id.clone(), (i as i32 * 7) % 99 + 1))
        .collect();
    let scores = engine.score_responses(&responses, &bank);
    let archetype = engine.archetype(scores.tree.score, scores.output);
    let stored = StoredAssessment::from_questions(scores, responses.clone());

    AssessmentRepository::new(FileStore::new(temp.path()))
        .save(&stored, &archetype)
        .unwrap();

    let reopened = AssessmentRepository::new(FileStore::new(temp.path()));
    let loaded = reopened.load().unwrap().unwrap();
    assert_eq!(loaded, stored);
    assert_eq!(loaded.source, ScoreSource::Questions);
    assert_eq!(loaded.responses, Some(responses));
    assert_eq!(reopened.load_archetype().unwrap(), Some(archetype));
}

#[test]
fn test_store_layout_uses_fixed_keys() {
    let temp = TempDir::new().unwrap();
    let engine = ScoreEngine::default();
    let scores = engine.score_manual(&ManualScores::neutral(engine.scale()));
    let archetype = engine.archetype(scores.tree.score, scores.output);

    AssessmentRepository::new(FileStore::new(temp.path()))
        .save(&StoredAssessment::from_manual(scores), &archetype)
        .unwrap();

    let raw = fs::read_to_string(temp.path().join(format!("{SCORES_KEY}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["source"], "manual");
    assert!(value.get("responses").is_none());
    assert!(temp.path().join(format!("{ARCHETYPE_KEY}.json")).exists());
}

#[test]
fn test_clear_leaves_unrelated_files() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store.set(SCORES_KEY, "{}").unwrap();
    fs::write(temp.path().join("notes.txt"), "keep me").unwrap();

    store.clear().unwrap();

    assert!(store.get(SCORES_KEY).unwrap().is_none());
    assert!(temp.path().join("notes.txt").exists());
}
