// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::consts::{BROKERAGE_DECK_STEM, BROKERAGE_EXPORT_STEM, REBUTTAL_FILE};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::dataset::entry::{BROKERAGE_HEADERS, DECK_HEADERS};
use crate::dataset::BrokerageSheet;
use crate::error::Result;
use crate::session::Session;
use crate::xlsx::write_workbook;

/// Header + rows to `path` as CSV, TSV or a one-sheet workbook.
pub fn write_rows(path: &Path, headers: &[&str], rows: &[Vec<String>], format: ExportFormat) -> Result<()> {
    ensure_parent(path)?;
    match format.delim() {
        Some(delim) => fs::write(path, to_export_string(headers, rows, delim))?,
        None => write_workbook(path, headers, rows)?,
    }
    Ok(())
}

/// Write the favorites deck to `export.out_path()`. Returns the final path.
pub fn write_deck(export: &ExportOptions, session: &Session) -> Result<PathBuf> {
    let path = export.out_path();
    write_rows(&path, &DECK_HEADERS, &session.deck_rows(), export.format)?;
    logf!("Deck: {} favorites -> {}", session.favorites.len(), path.display());
    Ok(path)
}

/// Brokerage favorites next to the objection deck, as
/// `brokerage_favorites.<ext>`.
pub fn write_brokerage_deck(export: &ExportOptions, session: &Session) -> Result<PathBuf> {
    let path = export.out_dir().join(join!(BROKERAGE_DECK_STEM, ".", export.format.ext()));
    write_rows(&path, &BROKERAGE_HEADERS, &session.brokerage_deck_rows(), export.format)?;
    logf!("Brokerage deck: {} favorites -> {}", session.brokerage_favorites.len(), path.display());
    Ok(path)
}

/// Write raw text under `dir` (answer download, brokerage pack).
pub fn write_text(dir: &Path, file_name: &str, text: &str) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, text)?;
    logf!("Saved {}", path.display());
    Ok(path)
}

/// Answer text as `rebuttal.txt`.
pub fn write_answer(dir: &Path, answer: &str) -> Result<PathBuf> {
    write_text(dir, REBUTTAL_FILE, answer)
}

pub fn write_brokerage_export(dir: &Path, sheet: &BrokerageSheet, format: ExportFormat) -> Result<PathBuf> {
    let path = dir.join(format!("{BROKERAGE_EXPORT_STEM}.{}", format.ext()));
    write_rows(&path, &BROKERAGE_HEADERS, &sheet.export_rows(), format)?;
    logf!("Brokerage sheet: {} rows -> {}", sheet.len(), path.display());
    Ok(path)
}

/// `-o`-style path: empty → default file in cwd; trailing separator or an
/// existing directory → default file inside it; otherwise the path itself.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        let msg = format!("Path exists but is not a directory: {}", dir.display());
        return Err(io::Error::new(io::ErrorKind::AlreadyExists, msg).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => ensure_directory(parent),
        None => Ok(()),
    }
}
