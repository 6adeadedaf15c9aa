// tests/brokerage.rs
use std::fs;

use pocket_objections::config::options::{ExportFormat, LoadOptions};
use pocket_objections::dataset::brokerage::{pack_filename, pack_text, positioning_script};
use pocket_objections::error::Error;
use pocket_objections::file;
use pocket_objections::session::Session;
use pocket_objections::store::{self, DatasetCache};
use rust_xlsxwriter::Workbook;

const CSV_SHEET: &str = "brokerages.csv";
const WORKBOOK: &str = "Top_25_Brokerage_Rebuttals_FunnelPilot.xlsx";

const SHEET: &str = "Brokerage,Funnel Pilot Rebuttal,One-Liner,SMS,Notes\n\
Keller Williams,\"KW trains you, we fill your calendar.\",Training is not leads.,Quick q about your pipeline?,\n\
Funnel Pilot,We build and run the funnel.,Own your funnel.,Want the 60-day plan?,\n\
,orphan row,,,\n\
Compass,Brand does not book appointments.,,,luxury\n";

#[test]
fn brokerage_sheet_loads_and_builds_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CSV_SHEET), SHEET).unwrap();
    let load = LoadOptions::default().with_base_dir(dir.path());

    let set = store::load_brokerage(&mut DatasetCache::new(), &load).unwrap();
    assert_eq!(set.sheet.len(), 3);
    assert_eq!(set.sheet.brokerages(), ["Compass", "Funnel Pilot", "Keller Williams"]);

    let kw = set.sheet.find("Keller Williams").unwrap();
    assert_eq!(kw.rebuttal, "KW trains you, we fill your calendar.");
    assert_eq!(kw.one_liner, "Training is not leads.");
    assert_eq!(set.sheet.funnel_pilot().unwrap().sms, "Want the 60-day plan?");
    assert_eq!(set.sheet.find("Compass").unwrap().notes, "luxury");

    let pack = pack_text(kw);
    assert!(pack.starts_with("Brokerage: Keller Williams\n\nRebuttal:\nKW trains you"));
    assert!(pack.ends_with("SMS:\nQuick q about your pipeline?\n"));
    assert_eq!(pack_filename(&kw.brokerage), "Keller_Williams_pack.txt");

    let saved = file::write_text(dir.path(), &pack_filename(&kw.brokerage), &pack).unwrap();
    assert_eq!(fs::read_to_string(saved).unwrap(), pack);

    assert!(positioning_script("Keller Williams").contains("appeal of Keller Williams"));

    let out = file::write_brokerage_export(&dir.path().join("out"), &set.sheet, ExportFormat::Tsv).unwrap();
    let text = fs::read_to_string(out).unwrap();
    assert!(text.starts_with("brokerage\trebuttal\tsms\tone_liner\tnotes\n"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn sheet_without_rebuttal_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CSV_SHEET), "Brokerage,Website\nCompass,compass.com\n").unwrap();
    let load = LoadOptions::default().with_base_dir(dir.path());

    let err = store::load_brokerage(&mut DatasetCache::new(), &load).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredColumn { ref fields, .. } if fields == &["rebuttal"]));
}

#[test]
fn missing_sheet_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let load = LoadOptions::default().with_base_dir(dir.path());
    let err = store::load_brokerage(&mut DatasetCache::new(), &load).unwrap_err();
    assert!(matches!(err, Error::DatasetNotFound { ref candidates, .. } if candidates == &load.brokerage_candidates));
}

fn write_sheet(wb: &mut Workbook, name: &str, rows: &[&[&str]]) {
    let ws = wb.add_worksheet();
    ws.set_name(name).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            ws.write_string(r as u32, c as u16, *cell).unwrap();
        }
    }
}

#[test]
fn workbook_sheets_are_stacked_and_preferred_over_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CSV_SHEET), SHEET).unwrap();

    let mut wb = Workbook::new();
    write_sheet(&mut wb, "National", &[
        &["Brokerage", "Rebuttal", "SMS", "Empty"],
        &["eXp Realty", "Rev share is not a lead plan.", "Quick q?", ""],
        &["Funnel Pilot", "We run the funnel.", "60-day plan?", ""],
    ]);
    write_sheet(&mut wb, "Regional", &[
        &["Brokerage", "One-Liner", "Rebuttal"],
        &["Local Hero Realty", "Local is not a system.", "We add the system."],
    ]);
    wb.save(dir.path().join(WORKBOOK)).unwrap();

    let load = LoadOptions::default().with_base_dir(dir.path());
    let set = store::load_brokerage(&mut DatasetCache::new(), &load).unwrap();
    assert_eq!(set.source_name(), WORKBOOK);
    assert_eq!(set.sheet.brokerages(), ["Funnel Pilot", "Local Hero Realty", "eXp Realty"]);

    let local = set.sheet.find("Local Hero Realty").unwrap();
    assert_eq!(local.rebuttal, "We add the system.");
    assert_eq!(local.one_liner, "Local is not a system.");
    assert_eq!(local.sms, "");
    assert_eq!(set.sheet.funnel_pilot().unwrap().sms, "60-day plan?");
}

#[test]
fn brokerage_favorites_export_and_merge_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CSV_SHEET), SHEET).unwrap();
    let load = LoadOptions::default().with_base_dir(dir.path());
    let set = store::load_brokerage(&mut DatasetCache::new(), &load).unwrap();

    let mut session = Session::new();
    let kw = set.sheet.find("Keller Williams").unwrap();
    session.add_brokerage_favorite(kw);
    session.add_brokerage_favorite(kw);
    session.add_brokerage_favorite(set.sheet.find("Compass").unwrap());
    assert_eq!(session.brokerage_favorites.len(), 2);

    for format in ExportFormat::ALL {
        let mut export = pocket_objections::config::options::ExportOptions::default();
        export.set_dir(dir.path().join("out"));
        export.format = format;
        let path = file::write_brokerage_deck(&export, &session).unwrap();

        let mut fresh = Session::new();
        let added = fresh.import_brokerage_favorites(&store::read_deck(&path).unwrap()).unwrap();
        assert_eq!(added, 2, "{format:?}");
        let ids: Vec<&str> = fresh.brokerage_favorites.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, [kw.id.as_str(), set.sheet.find("Compass").unwrap().id.as_str()]);
        assert_eq!(fresh.brokerage_deck_rows(), session.brokerage_deck_rows());
    }
}
