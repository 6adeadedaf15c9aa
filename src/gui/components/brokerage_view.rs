// src/gui/components/brokerage_view.rs
//
// Picked brokerage: rebuttal, one-liner, SMS with favorite and copy
// buttons, pack download, and the optional side-by-side with the Funnel
// Pilot row.

use eframe::egui::{self, RichText};

use crate::dataset::brokerage::positioning_script;
use crate::dataset::BrokerageEntry;
use crate::gui::{actions, app::App};

use super::voice;

fn or_none(s: &str) -> &str {
    if s.trim().is_empty() { "(none)" } else { s }
}

fn fields(ui: &mut egui::Ui, row: &BrokerageEntry) {
    ui.label(RichText::new("Rebuttal").strong());
    ui.label(or_none(&row.rebuttal));
    ui.label(RichText::new("One-liner").strong());
    ui.label(or_none(&row.one_liner));
    ui.label(RichText::new("SMS").strong());
    ui.code(or_none(&row.sms));
    if !row.notes.trim().is_empty() {
        ui.weak(&row.notes);
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = &app.brokerage_error {
        ui.colored_label(ui.visuals().error_fg_color, err);
        return;
    }

    // Owned copies so the handlers below can take &mut App.
    let (main, fp) = {
        let Some(set) = app.brokerage.as_ref() else { return };
        let picked = app.state.gui.picked_brokerage.as_deref().unwrap_or("");
        (set.sheet.find(picked).cloned(), set.sheet.funnel_pilot().cloned())
    };
    let Some(main) = main else {
        ui.label("Pick a brokerage.");
        return;
    };

    let ctx = ui.ctx().clone();
    egui::ScrollArea::vertical().id_salt("brokerage_scroll").show(ui, |ui| {
        ui.heading("Primary");
        ui.label(RichText::new(format!("Brokerage: {}", main.brokerage)).strong());
        fields(ui, &main);

        ui.horizontal(|ui| {
            let is_fav = app.session.is_brokerage_favorite(&main.id);
            let label = if is_fav { "★ Remove Favorite" } else { "⭐ Add to Favorites" };
            if ui.button(label).clicked() {
                let now = app.session.toggle_brokerage_favorite(&main);
                app.status(if now { "Added brokerage to favorites" } else { "Removed brokerage from favorites" });
            }
            if ui.button("Copy Rebuttal").clicked() {
                actions::copy(app, &ctx, "rebuttal", &main.rebuttal);
            }
            if ui.button("Copy SMS").clicked() {
                actions::copy(app, &ctx, "SMS", &main.sms);
            }
            if ui.button("Copy One-liner").clicked() {
                actions::copy(app, &ctx, "one-liner", &main.one_liner);
            }
            if ui.button("Download All (TXT)").clicked() {
                actions::download_pack(app, &main);
            }
        });

        ui.separator();
        ui.label("Listen");
        voice::draw(ui, app, &main.rebuttal);

        if !app.state.gui.compare_funnel_pilot {
            return;
        }
        ui.separator();
        ui.heading("Compare to Funnel Pilot");
        let Some(fp) = fp else {
            ui.label("No 'Funnel Pilot' row in the sheet.");
            return;
        };

        ui.columns(2, |cols| {
            cols[0].label(RichText::new("Your Pick").strong());
            cols[0].label(format!("Brokerage: {}", main.brokerage));
            fields(&mut cols[0], &main);
            cols[1].label(RichText::new("Funnel Pilot").strong());
            cols[1].label(format!("Brokerage: {}", fp.brokerage));
            fields(&mut cols[1], &fp);
        });

        let script = positioning_script(&main.brokerage);
        ui.add_space(6.0);
        ui.label(RichText::new("Positioning Script").strong());
        ui.label(&script);
        if ui.button("Copy Positioning Script").clicked() {
            actions::copy(app, &ctx, "positioning script", &script);
        }
    });
}
