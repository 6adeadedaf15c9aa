// src/gui/components/deck_panel.rs
//
// Favorites deck: export format + path, download/copy, import, and the
// session summaries (favorites, most used).

use eframe::egui;

use crate::config::consts::{MOST_USED_SUMMARY, QUESTION_PREVIEW_CHARS};
use crate::config::options::ExportFormat;
use crate::core::sanitize::preview;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Deck");
    ui.label(format!("Favorites: {}", app.session.favorites.len()));

    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            for f in ExportFormat::ALL {
                ui.selectable_value(&mut export.format, f, f.label());
            }
        });
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(170.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    let ctx = ui.ctx().clone();
    ui.horizontal(|ui| {
        if ui.button("Download deck").clicked() {
            actions::download_deck(app);
        }
        if ui.button("Copy deck").clicked() {
            let text = app.session.deck_to_string(app.state.options.export.format.text_delim());
            if app.session.favorites.is_empty() {
                app.status("Nothing to copy (no favorites yet)");
            } else {
                actions::copy(app, &ctx, "deck", &text);
            }
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Import:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.import_path_text)
            .hint_text("my_deck.csv / brokerage_favorites.xlsx")
            .desired_width(140.0));
        if ui.button("Merge").clicked() {
            actions::import_deck(app);
        }
    });

    egui::CollapsingHeader::new("⭐ Favorites & 🔥 Most Used (this session)")
        .id_salt("session_summary")
        .show(ui, |ui| summary(ui, app));
}

fn summary(ui: &mut egui::Ui, app: &App) {
    if app.session.favorites.is_empty() {
        ui.weak("No favorites yet.");
    }
    for e in app.session.favorites.iter() {
        let cat = if e.category.is_empty() { s!() } else { format!(" [{}]", e.category) };
        ui.label(format!("★ {}{cat}", preview(&e.question, QUESTION_PREVIEW_CHARS / 2)));
    }

    if app.session.usage.is_empty() {
        return;
    }
    ui.separator();
    ui.label("Most Used:");
    let entries = app.entries();
    for (id, views) in app.session.most_used(MOST_USED_SUMMARY, entries) {
        let Some(e) = entries.iter().find(|e| e.id == id) else { continue };
        ui.label(format!("{views}× {}", preview(&e.question, QUESTION_PREVIEW_CHARS / 2)));
    }
}
