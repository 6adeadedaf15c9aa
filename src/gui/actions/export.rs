// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{
    dataset::{brokerage::{pack_filename, pack_text}, BrokerageEntry},
    error::Result,
    file,
    gui::app::App,
};

fn report(app: &mut App, what: &str, res: Result<PathBuf>) {
    match res {
        Ok(path) => {
            logf!("Export: {what} OK -> {}", path.display());
            app.status(format!("Saved {what}: {}", path.display()));
        }
        Err(e) => {
            loge!("Export: {what} error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Selected rebuttal as rebuttal.txt in the output directory.
pub fn download_answer(app: &mut App, answer: &str) {
    let dir = app.state.options.export.out_dir().to_path_buf();
    let res = file::write_answer(&dir, answer);
    report(app, "rebuttal", res);
}

/// Favorites deck to the path in the output box.
pub fn download_deck(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }

    if app.session.favorites.is_empty() {
        logd!("Export: Clicked, but there are no favorites");
        app.status("Nothing to export (no favorites yet)");
        return;
    }
    let res = file::write_deck(&app.state.options.export, &app.session);
    report(app, "deck", res);
}

/// Brokerage favorites as `brokerage_favorites.<ext>` in the output directory.
pub fn download_brokerage_deck(app: &mut App) {
    if app.session.brokerage_favorites.is_empty() {
        app.status("Nothing to export (no brokerage favorites yet)");
        return;
    }
    let res = file::write_brokerage_deck(&app.state.options.export, &app.session);
    report(app, "brokerage favorites", res);
}

pub fn download_pack(app: &mut App, row: &BrokerageEntry) {
    let dir = app.state.options.export.out_dir().to_path_buf();
    let res = file::write_text(&dir, &pack_filename(&row.brokerage), &pack_text(row));
    report(app, "pack", res);
}

/// Whole brokerage sheet in the chosen format.
pub fn export_brokerage(app: &mut App) {
    let Some(set) = app.brokerage.as_ref() else {
        app.status("Nothing to export (no brokerage sheet)");
        return;
    };
    let dir = app.state.options.export.out_dir().to_path_buf();
    let res = file::write_brokerage_export(&dir, &set.sheet, app.state.options.export.format);
    report(app, "brokerage sheet", res);
}
