// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;

pub mod brokerage;
pub mod objections;

/// One top-level tab. Pages are stateless; everything lives in `App`.
pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Left panel contents. Default: nothing.
    fn draw_side(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// Central panel contents below the tabs.
    fn draw_main(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
