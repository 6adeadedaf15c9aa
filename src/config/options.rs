// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::csv::Delim;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub load: LoadOptions,
    pub export: ExportOptions,
    pub voice: VoiceSettings,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            export: ExportOptions::default(),
            voice: VoiceSettings::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Objections,
    Brokerage,
}

/* ---------------- Loading ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Directory the candidate names are resolved against.
    pub base_dir: PathBuf,
    pub candidates: Vec<String>,
    pub brokerage_candidates: Vec<String>,
    /// Collapse rows whose normalized question text repeats.
    pub dedupe: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            candidates: CANDIDATE_DATASETS.iter().map(|s| s!(*s)).collect(),
            brokerage_candidates: BROKERAGE_FILES.iter().map(|s| s!(*s)).collect(),
            dedupe: false,
        }
    }
}

impl LoadOptions {
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Put user-supplied names ahead of the built-in list.
    pub fn prefer(&mut self, names: &[String]) {
        let mut merged: Vec<String> = names.to_vec();
        merged.extend(self.candidates.iter().filter(|c| !names.contains(c)).cloned());
        self.candidates = merged;
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Xlsx];

    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv", ExportFormat::Xlsx => "xlsx" }
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Csv => "CSV", ExportFormat::Tsv => "TSV", ExportFormat::Xlsx => "XLSX" }
    }
    /// Separator for text formats; `None` for workbooks.
    pub fn delim(&self) -> Option<Delim> {
        match self {
            ExportFormat::Csv => Some(Delim::Csv),
            ExportFormat::Tsv => Some(Delim::Tsv),
            ExportFormat::Xlsx => None,
        }
    }
    /// Separator for clipboard text; workbooks copy as CSV.
    pub fn text_delim(&self) -> Delim {
        self.delim().unwrap_or(Delim::Csv)
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Deck file path: "<dir>/<stem>.<ext>", extension follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(&*stem, ".", self.format.ext()))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse text-box input into dir + stem. A pasted extension picks the
    /// format when it is one we write; anything else is dropped.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        if let Some(fmt) = p.extension().and_then(|e| e.to_str()).and_then(ExportFormat::parse) {
            self.format = fmt;
        }
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_path.dir = dir.into();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DECK_STEM),
        }
    }
}

/* ---------------- Voice ---------------- */

/// Playback parameters handed to a `Speaker`. Always within range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoiceSettings {
    rate: f32,
    pitch: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self { rate: 1.0, pitch: 1.0 }
    }
}

impl VoiceSettings {
    pub fn new(rate: f32, pitch: f32) -> Self {
        let mut v = Self::default();
        v.set_rate(rate);
        v.set_pitch(pitch);
        v
    }
    pub fn rate(&self) -> f32 { self.rate }
    pub fn pitch(&self) -> f32 { self.pitch }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = clamp_step(rate, RATE_MIN, RATE_MAX);
    }
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = clamp_step(pitch, PITCH_MIN, PITCH_MAX);
    }
}

fn clamp_step(v: f32, lo: f32, hi: f32) -> f32 {
    if !v.is_finite() { return 1.0; }
    let snapped = (v / VOICE_STEP).round() * VOICE_STEP;
    snapped.clamp(lo, hi)
}
