// src/gui/actions/copy.rs
use eframe::egui;

use crate::capability::Clipboard;
use crate::gui::{app::App, clipboard::EguiClipboard};

/// Copy `text` and report it as `what` in the status line.
pub fn copy(app: &mut App, ui_ctx: &egui::Context, what: &str, text: &str) {
    if text.trim().is_empty() {
        app.status(format!("Nothing to copy ({what} is empty)"));
        logd!("Copy: Clicked, but {what} is empty");
        return;
    }
    EguiClipboard(ui_ctx).copy_text(text);
    logf!("Copy: {what} ({} chars)", text.chars().count());
    app.status(format!("Copied {what} to clipboard"));
}
