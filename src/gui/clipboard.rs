// src/gui/clipboard.rs
use eframe::egui;

use crate::capability::Clipboard;

/// System clipboard through the egui context (applied at end of frame).
pub struct EguiClipboard<'a>(pub &'a egui::Context);

impl Clipboard for EguiClipboard<'_> {
    fn copy_text(&mut self, text: &str) {
        self.0.copy_text(s!(text));
    }
}
