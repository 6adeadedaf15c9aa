// src/gui/components/entry_view.rs
//
// Detail pane for the selected entry: text, favorite toggle, copy,
// download and voice controls.

use eframe::egui::{self, RichText};

use crate::gui::{actions, app::App};

use super::voice;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Own the entry so action handlers can take &mut App.
    let Some(entry) = app.selected_entry().cloned() else {
        ui.label("Pick an objection from the list.");
        return;
    };

    if !entry.category.is_empty() {
        ui.label(RichText::new(format!("Category: {}", entry.category)).strong());
    }
    if !entry.tags.is_empty() {
        ui.weak(format!("Tags: {}", entry.tags.join(", ")));
    }

    ui.heading("Objection");
    ui.label(&entry.question);
    ui.add_space(6.0);
    ui.heading("Rebuttal");
    ui.label(RichText::new(&entry.answer).size(15.0));
    ui.add_space(6.0);
    ui.separator();

    let ctx = ui.ctx().clone();
    ui.horizontal(|ui| {
        let is_fav = app.session.is_favorite(&entry.id);
        let label = if is_fav { "★ Remove Favorite" } else { "⭐ Add to Favorites" };
        if ui.button(label).clicked() {
            let now = app.session.toggle_favorite(&entry);
            app.status(if now { "Added to favorites" } else { "Removed from favorites" });
            app.rebuild_view();
        }
        if ui.button("Copy Rebuttal").clicked() {
            actions::copy(app, &ctx, "rebuttal", &entry.answer);
        }
        if ui.button("Download rebuttal.txt").clicked() {
            actions::download_answer(app, &entry.answer);
        }
    });

    ui.add_space(4.0);
    voice::draw(ui, app, &entry.answer);

    ui.add_space(8.0);
    ui.weak("Empathy → short frame → value → tie-down → next step.");
}
