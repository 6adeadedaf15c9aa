// src/gui/components/dataset_panel.rs
//
// Source file info, load report, dedupe toggle and manual file pick.

use std::path::PathBuf;

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Dataset");

    match &app.dataset {
        Some(ds) => {
            ui.label(format!("Using: {}", ds.source_name()));
            let r = &ds.report;
            ui.label(format!(
                "Rows: {} before, {} after cleaning{}",
                r.rows_before,
                r.rows_after_clean,
                if app.state.options.load.dedupe { format!(", {} after dedupe", r.rows_after_dedupe) } else { s!() },
            ));
            egui::CollapsingHeader::new("Detected columns")
                .id_salt("detected_columns")
                .show(ui, |ui| {
                    for (field, column) in &r.mapping {
                        ui.label(format!("{field} ← {column}"));
                    }
                    ui.weak(format!("All headers: {}", r.columns.join(", ")));
                });
        }
        None => {
            ui.label("No dataset loaded.");
        }
    }

    let dedupe_before = app.state.options.load.dedupe;
    ui.checkbox(&mut app.state.options.load.dedupe, "Dedupe similar questions");
    if app.state.options.load.dedupe != dedupe_before {
        logf!("UI: Dedupe → {}", app.state.options.load.dedupe);
        app.reclean();
    }

    ui.horizontal(|ui| {
        ui.label("File:");
        ui.add(egui::TextEdit::singleline(&mut app.dataset_path_text)
            .hint_text("path/to/rebuttals.csv")
            .desired_width(160.0));
    });
    ui.horizontal(|ui| {
        let has_path = !app.dataset_path_text.trim().is_empty();
        if ui.add_enabled(has_path, egui::Button::new("Load file")).clicked() {
            let path = PathBuf::from(app.dataset_path_text.trim());
            logf!("UI: Load file {}", path.display());
            app.load_path(&path);
        }
        if ui.button("Reload").clicked() {
            logf!("UI: Reload (cache cleared)");
            app.cache.clear();
            app.reload();
            app.reload_brokerage();
        }
    });
}
