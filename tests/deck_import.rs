// tests/deck_import.rs
use std::fs;

use pocket_objections::config::options::{ExportFormat, ExportOptions};
use pocket_objections::dataset::Entry;
use pocket_objections::error::Error;
use pocket_objections::file;
use pocket_objections::session::Session;
use pocket_objections::store;

fn fav(q: &str, a: &str) -> Entry {
    Entry::new(q, a, "Pricing", vec!["roi".into()])
}

#[test]
fn scenario_c_matching_deck_row_merges() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.csv");
    fs::write(&deck, "question,answer\nToo expensive,It pays for itself in 2 closings.\n").unwrap();

    let mut session = Session::new();
    session.add_favorite(&fav("Too expensive", "It pays for itself in 2 closings."));

    let added = session.import_favorites(&store::read_deck(&deck).unwrap()).unwrap();
    assert_eq!(added, 0);
    assert_eq!(session.favorites.len(), 1);
    // the stored copy is replaced by the imported row
    assert_eq!(session.favorites.iter().next().unwrap().category, "");
}

#[test]
fn malformed_deck_keeps_existing_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.csv");
    fs::write(&deck, "Objection,Rebuttal\nx,y\n").unwrap();

    let mut session = Session::new();
    session.add_favorite(&fav("a", "b"));
    session.add_favorite(&fav("c", "d"));

    let err = session.import_favorites(&store::read_deck(&deck).unwrap()).unwrap_err();
    assert!(matches!(err, Error::MalformedUpload { .. }));
    assert_eq!(session.favorites.len(), 2);

    let unreadable = store::read_deck(&dir.path().join("deck.xlsx")).unwrap_err();
    assert!(matches!(unreadable, Error::MalformedUpload { .. }));
}

#[test]
fn adding_twice_keeps_one() {
    let mut session = Session::new();
    let e = fav("Too expensive", "It pays.");
    session.add_favorite(&e);
    session.add_favorite(&e);
    assert_eq!(session.favorites.len(), 1);
    assert!(session.is_favorite(&e.id));
}

#[test]
fn exported_deck_imports_back_into_a_fresh_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(&dir.path().join("friday.tsv").to_string_lossy());
    assert_eq!(export.format, ExportFormat::Tsv);

    let mut session = Session::new();
    session.add_favorite(&fav("Too expensive", "It pays, honestly."));
    session.add_favorite(&Entry::new("Not now", "When, then?", "", vec![]));
    let path = file::write_deck(&export, &session).unwrap();

    let mut fresh = Session::new();
    let added = fresh.import_favorites(&store::read_deck(&path).unwrap()).unwrap();
    assert_eq!(added, 2);
    let ids: Vec<&str> = fresh.favorites.iter().map(|e| e.id.as_str()).collect();
    let expected: Vec<&str> = session.favorites.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, expected);
    assert_eq!(fresh.favorites.iter().next().unwrap().tags, ["roi"]);
}
