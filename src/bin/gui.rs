// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use pocket_objections::{gui, log};

fn main() {
    log::init(log::Sink::File);

    let state = pocket_objections::config::state::GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: window size via viewport builder
        viewport: ViewportBuilder::default()
            .with_title("Pocket Objections")
            .with_inner_size([state.window_w as f32, state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        pocket_objections::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
