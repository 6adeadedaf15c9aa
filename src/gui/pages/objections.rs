// src/gui/pages/objections.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::gui::components::{dataset_panel, deck_panel, entry_table, entry_view, filter_panel};

use super::Page;

pub struct ObjectionsPage;
pub static PAGE: ObjectionsPage = ObjectionsPage;

impl Page for ObjectionsPage {
    fn label(&self) -> &'static str { "Objections" }
    fn kind(&self) -> PageKind { PageKind::Objections }

    fn draw_side(&self, ui: &mut egui::Ui, app: &mut App) {
        dataset_panel::draw(ui, app);
        ui.separator();
        filter_panel::draw(ui, app);
        ui.separator();
        deck_panel::draw(ui, app);
    }

    fn draw_main(&self, ui: &mut egui::Ui, app: &mut App) {
        if let Some(err) = &app.load_error {
            ui.colored_label(ui.visuals().error_fg_color, err);
            return;
        }

        ui.label(format!("Matches: {}", app.row_ix.len()));
        if app.row_ix.is_empty() {
            ui.label("No results. Try clearing filters or a different view.");
            return;
        }

        let table_h = (ui.available_height() * 0.45).max(120.0);
        ui.allocate_ui(egui::vec2(ui.available_width(), table_h), |ui| {
            entry_table::draw(ui, app);
        });
        ui.separator();
        egui::ScrollArea::vertical().id_salt("detail_scroll").show(ui, |ui| {
            entry_view::draw(ui, app);
        });
    }

    fn on_enter(&self, app: &mut App) {
        if app.dataset.is_none() {
            app.reload();
        }
    }
}
