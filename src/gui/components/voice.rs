// src/gui/components/voice.rs
//
// Rate/pitch sliders plus Play/Stop, shared by both pages.

use eframe::egui;

use crate::config::consts::{PITCH_MAX, PITCH_MIN, RATE_MAX, RATE_MIN, VOICE_STEP};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App, text: &str) {
    let voice = &mut app.state.options.voice;
    let mut rate = voice.rate();
    let mut pitch = voice.pitch();

    ui.horizontal(|ui| {
        ui.label("Rate");
        ui.add(egui::Slider::new(&mut rate, RATE_MIN..=RATE_MAX).step_by(VOICE_STEP as f64));
        ui.label("Pitch");
        ui.add(egui::Slider::new(&mut pitch, PITCH_MIN..=PITCH_MAX).step_by(VOICE_STEP as f64));
    });
    voice.set_rate(rate);
    voice.set_pitch(pitch);
    let voice = *voice;

    ui.horizontal(|ui| {
        if ui.button("▶ Play").clicked() {
            match app.speaker.speak(text, voice) {
                Ok(()) => app.status("Speaking…"),
                Err(e) => {
                    loge!("Speech: {}", e);
                    app.status(format!("Speech unavailable: {e}"));
                }
            }
        }
        if ui.button("⏹ Stop").clicked() {
            app.speaker.stop();
            app.status("Stopped");
        }
    });
}
