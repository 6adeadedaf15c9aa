// src/gui/components/filter_panel.rs
//
// View switch and every filter widget. Any change rebuilds the view once
// at the end of the frame's panel pass.

use eframe::egui;

use crate::config::consts::ALL;
use crate::data::topic_options;
use crate::gui::app::App;
use crate::query::{self, MatchMode, ViewKind};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    let mut changed = false;

    ui.horizontal(|ui| {
        for v in ViewKind::ALL_VIEWS {
            changed |= ui.selectable_value(&mut app.state.gui.view, v, v.label()).changed();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Search:");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.search_term)
                .hint_text("price, spouse, timing…")
                .desired_width(180.0))
            .changed();
    });

    // Option lists come from the dataset; clone the small ones so the
    // widgets can borrow app.state mutably.
    let (topics, categories, tags) = match &app.dataset {
        Some(d) => (topic_options(&d.topics).to_vec(), d.categories.clone(), d.tags.clone()),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    let g = &mut app.state.gui;

    egui::CollapsingHeader::new(format!("Topics ({} selected)", g.selected_topics.len()))
        .id_salt("topics")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Match:");
                for m in [MatchMode::Any, MatchMode::All] {
                    changed |= ui.selectable_value(&mut g.match_mode, m, m.label()).changed();
                }
            });
            egui::ScrollArea::vertical()
                .id_salt("topics_scroll")
                .max_height(180.0)
                .show(ui, |ui| {
                    for t in &topics {
                        let mut on = g.selected_topics.contains(t);
                        if ui.checkbox(&mut on, t.as_str()).changed() {
                            if on { g.selected_topics.push(t.clone()); } else { g.selected_topics.retain(|x| x != t); }
                            changed = true;
                        }
                    }
                });
        });

    changed |= choice_combo(ui, "category", "Category", &mut g.category, &categories);
    changed |= choice_combo(ui, "tag", "Tag", &mut g.tag, &tags);

    let mut pick_random = false;
    ui.horizontal(|ui| {
        if ui.button("Clear filters").clicked() {
            g.clear_filters();
            logf!("UI: Filters cleared");
            changed = true;
        }
        pick_random = ui.button("🎲 Random").clicked();
    });

    if changed {
        app.rebuild_view();
    }
    if pick_random {
        random(app);
    }
}

/// Single-select with an "All" entry standing for `None`.
fn choice_combo(ui: &mut egui::Ui, id: &str, label: &str, value: &mut Option<String>, options: &[String]) -> bool {
    let before = value.clone();
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        egui::ComboBox::from_id_salt(id)
            .selected_text(value.as_deref().unwrap_or(ALL))
            .width(160.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(value, None, ALL);
                for o in options {
                    ui.selectable_value(value, Some(o.clone()), o.as_str());
                }
            });
    });
    if *value != before {
        logd!("UI: {label} → {:?}", value);
        true
    } else {
        false
    }
}

fn random(app: &mut App) {
    let pick = {
        let view = app.view();
        let refs = view.to_refs();
        query::random_pick(&refs, &mut rand::thread_rng()).map(|e| e.id.clone())
    };
    match pick {
        Some(id) => {
            logf!("UI: Random pick {id}");
            app.select(&id);
        }
        None => app.status("Nothing to pick from"),
    }
}
