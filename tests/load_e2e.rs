// tests/load_e2e.rs
use std::fs;
use std::path::Path;
use std::sync::Arc;

use pocket_objections::config::options::LoadOptions;
use pocket_objections::error::Error;
use pocket_objections::query::{query, Filter};
use pocket_objections::store::{self, DatasetCache};

const REBUTTALS: &str = "Objection/Question,Rebuttal/Answer,Category\n\
\"Too expensive\",\"It pays for itself in 2 closings.\",\"Pricing\"\n";

fn opts(dir: &Path) -> LoadOptions {
    LoadOptions::default().with_base_dir(dir)
}

#[test]
fn scenario_a_term_search_finds_the_row() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rebuttals.csv"), REBUTTALS).unwrap();

    let ds = store::load_objections(&mut DatasetCache::new(), &opts(dir.path())).unwrap();
    let hits = query(&ds.entries, &Filter { term: "expensive".into(), ..Filter::default() });

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question, "Too expensive");
    assert_eq!(hits[0].category, "Pricing");
    assert_eq!(hits[0].id.len(), 16);
}

#[test]
fn scenario_b_no_filters_returns_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let text = format!("{REBUTTALS}Need to think,What would you need to see?,Stall\nSend info,Happy to. What matters most?,Stall\n");
    fs::write(dir.path().join("rebuttals.csv"), text).unwrap();

    let ds = store::load_objections(&mut DatasetCache::new(), &opts(dir.path())).unwrap();
    let f = Filter {
        term: String::new(),
        topics: Vec::new(),
        category: Filter::choice("All"),
        tag: Filter::choice("All"),
        ..Filter::default()
    };
    let qs: Vec<&str> = query(&ds.entries, &f).iter().map(|e| e.question.as_str()).collect();
    assert_eq!(qs, ["Too expensive", "Need to think", "Send info"]);
}

#[test]
fn scenario_d_nothing_found_lists_every_candidate() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("unrelated.csv"), REBUTTALS).unwrap();
    let load = opts(dir.path());

    let err = store::load_objections(&mut DatasetCache::new(), &load).unwrap_err();
    match &err {
        Error::DatasetNotFound { candidates, base_dir } => {
            assert_eq!(candidates, &load.candidates);
            assert_eq!(base_dir, dir.path());
        }
        other => panic!("unexpected error: {other}"),
    }
    let msg = err.user_message(&load.candidates);
    assert!(msg.contains("rebuttals.csv"));
}

#[test]
fn preferred_file_beats_later_candidates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rebuttals.csv"), REBUTTALS).unwrap();
    fs::write(dir.path().join("mine.csv"), "question,answer\nMine?,Yes.\n").unwrap();

    let mut load = opts(dir.path());
    load.prefer(&["mine.csv".to_string()]);
    let ds = store::load_objections(&mut DatasetCache::new(), &load).unwrap();
    assert_eq!(ds.source_name(), "mine.csv");
}

#[test]
fn header_only_and_all_dropped_files_are_empty() {
    let dir = tempfile::tempdir().unwrap();
    let header_only = dir.path().join("a.csv");
    fs::write(&header_only, "question,answer\n").unwrap();
    let blanks = dir.path().join("b.csv");
    fs::write(&blanks, "question,answer,category\n  ,x,Pricing\ny,,Pricing\n").unwrap();

    let mut cache = DatasetCache::new();
    for path in [&header_only, &blanks] {
        let err = store::load_from_path(&mut cache, path, false).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset { .. }), "{err}");
        assert!(err.is_missing_data());
    }
}

#[test]
fn missing_columns_name_fields_and_show_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Prompt Text,Category\nhello,Pricing\n").unwrap();

    let err = store::load_from_path(&mut DatasetCache::new(), &path, false).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, Error::MissingRequiredColumn { ref fields, .. } if fields == &["answer"]));
    assert!(msg.contains("answer"));
    assert!(msg.contains("Prompt Text, Category"));
}

#[test]
fn dedupe_collapses_repeated_questions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("d.csv");
    fs::write(&path, "question,answer\nToo  expensive,First\ntoo expensive,Second\nOther,Third\n").unwrap();

    let mut cache = DatasetCache::new();
    let plain = store::load_from_path(&mut cache, &path, false).unwrap();
    let deduped = store::load_from_path(&mut cache, &path, true).unwrap();
    assert_eq!(plain.entries.len(), 3);
    assert_eq!(deduped.entries.len(), 2);
    assert_eq!(deduped.entries[0].answer, "First");
    assert_eq!(deduped.report.rows_after_clean, 3);
    assert_eq!(deduped.report.rows_after_dedupe, 2);
}

#[test]
fn cache_hits_until_invalidated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rebuttals.csv");
    fs::write(&path, REBUTTALS).unwrap();

    let mut cache = DatasetCache::new();
    let first = cache.table(&path).unwrap();
    let again = cache.table(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    fs::write(&path, "question,answer\nNew?,Yes.\nTwo?,Yes.\n").unwrap();
    assert!(cache.invalidate(&path));
    let ds = store::load_from_path(&mut cache, &path, false).unwrap();
    assert_eq!(ds.entries.len(), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn tsv_and_empty_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    fs::write(&path, "Question\tNotes\tAnswer\tTags\nToo expensive\t\tIt pays.\tpricing;roi\n").unwrap();

    let ds = store::load_from_path(&mut DatasetCache::new(), &path, false).unwrap();
    assert_eq!(ds.report.columns, ["Question", "Answer", "Tags"]);
    assert_eq!(ds.entries[0].tags, ["pricing", "roi"]);
    assert_eq!(ds.topics, ["pricing", "roi"]);
}
