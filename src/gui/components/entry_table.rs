// src/gui/components/entry_table.rs
//
// Result list. Rows are read into a local buffer first; clicks are applied
// to `app` after the table is drawn.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::QUESTION_PREVIEW_CHARS;
use crate::core::sanitize::preview;
use crate::gui::app::App;

struct RowData {
    id: String,
    favorite: bool,
    selected: bool,
    category: String,
    question: String,
    views: u64,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows: Vec<RowData> = {
        let selected = app.state.gui.selected_id.as_deref();
        app.view()
            .iter()
            .map(|e| RowData {
                id: e.id.clone(),
                favorite: app.session.is_favorite(&e.id),
                selected: selected == Some(e.id.as_str()),
                category: e.category.clone(),
                question: preview(&e.question, QUESTION_PREVIEW_CHARS),
                views: app.session.usage.get(&e.id),
            })
            .collect()
    };

    // Scroll bars reserve their own space instead of covering the last column
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut clicked: Option<String> = None;
    let avail_h = ui.available_height();

    TableBuilder::new(ui)
        .id_salt("entry_table")
        .striped(true)
        .sense(egui::Sense::click())
        .max_scroll_height(avail_h)
        .column(Column::exact(24.0))
        .column(Column::initial(140.0).resizable(true).clip(true).at_least(40.0))
        .column(Column::remainder().clip(true))
        .column(Column::exact(48.0))
        .header(22.0, |mut header| {
            for title in ["★", "Category", "Objection", "Views"] {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(title).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(22.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.set_selected(r.selected);

                row.col(|ui| {
                    ui.label(if r.favorite { "★" } else { "" });
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(&r.category);
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(&r.question);
                });
                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(r.views.to_string());
                    });
                });

                if row.response().clicked() {
                    clicked = Some(r.id.clone());
                }
            });
        });

    if let Some(id) = clicked {
        logd!("UI: Row clicked {id}");
        app.select(&id);
    }
}
