// src/gui/pages/brokerage.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::{actions, app::App};
use crate::gui::components::brokerage_view;

use super::Page;

pub struct BrokeragePage;
pub static PAGE: BrokeragePage = BrokeragePage;

impl Page for BrokeragePage {
    fn label(&self) -> &'static str { "Brokerage Compare" }
    fn kind(&self) -> PageKind { PageKind::Brokerage }

    fn draw_side(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Brokerage sheet");

        let names = match &app.brokerage {
            Some(set) => {
                ui.label(format!("Using: {}", set.source_name()));
                ui.label(format!("Rows: {} of {}", set.report.rows_after_clean, set.report.rows_before));
                set.sheet.brokerages()
            }
            None => {
                ui.label("Brokerage compare not available.");
                return;
            }
        };

        let picked = &mut app.state.gui.picked_brokerage;
        let before = picked.clone();
        egui::ComboBox::from_id_salt("brokerage_pick")
            .selected_text(picked.as_deref().unwrap_or("—"))
            .width(200.0)
            .show_ui(ui, |ui| {
                for n in &names {
                    ui.selectable_value(picked, Some(n.clone()), n.as_str());
                }
            });
        if *picked != before {
            logf!("UI: Brokerage → {:?}", picked);
            app.speaker.stop();
        }

        ui.checkbox(&mut app.state.gui.compare_funnel_pilot, "Compare to Funnel Pilot");

        ui.separator();
        ui.label(format!("Favorites: {}", app.session.brokerage_favorites.len()));
        for row in app.session.brokerage_favorites.iter() {
            ui.label(format!("★ {}", row.brokerage));
        }
        ui.horizontal(|ui| {
            if ui.button("Download favorites").clicked() {
                actions::download_brokerage_deck(app);
            }
            if ui.button("Export sheet").clicked() {
                actions::export_brokerage(app);
            }
        });
        ui.weak(format!("Format: {} (set on the Objections tab)", app.state.options.export.format.label()));
    }

    fn draw_main(&self, ui: &mut egui::Ui, app: &mut App) {
        brokerage_view::draw(ui, app);
    }

    fn on_enter(&self, app: &mut App) {
        if app.brokerage.is_none() {
            app.reload_brokerage();
        }
    }
}
