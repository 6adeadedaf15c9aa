// src/error.rs
//! Error taxonomy for loading, uploads and speech.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// None of the candidate files exist under the base directory.
    #[error("Dataset not found in {}: expected one of {}", .base_dir.display(), .candidates.join(", "))]
    DatasetNotFound {
        candidates: Vec<String>,
        base_dir: PathBuf,
    },

    /// The resolved file could not be read (permissions, invalid UTF-8, ...).
    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File extension we have no parser for (e.g. `.pdf`).
    #[error("Unsupported file format: {} (use .csv, .tsv or .xlsx)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Workbook could not be opened or a worksheet could not be read.
    #[error("Could not read workbook {}: {source}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Could not write workbook: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    /// The file parsed but produced no usable rows.
    #[error("Dataset '{name}' is empty")]
    EmptyDataset { name: String },

    /// Required canonical fields could not be matched to any column.
    #[error("Missing required column(s) {}; columns found: {}", .fields.join(", "), .found.join(", "))]
    MissingRequiredColumn {
        fields: Vec<&'static str>,
        found: Vec<String>,
    },

    /// A deck/dataset upload lacks required columns or could not be parsed.
    /// Read failures keep the underlying error as `source`.
    #[error("Upload rejected: {reason}")]
    MalformedUpload {
        reason: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// Speech program failed to start.
    #[error("Speech failed ({program}): {source}")]
    Speech {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedUpload { reason: reason.into(), source: None }
    }

    /// Wrap a read failure of an uploaded file, keeping it as the cause.
    pub fn upload(source: Error) -> Self {
        Error::MalformedUpload { reason: source.to_string(), source: Some(Box::new(source)) }
    }

    /// Load failures that the user fixes by supplying a (different) file.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            Error::DatasetNotFound { .. }
                | Error::Unreadable { .. }
                | Error::UnsupportedFormat { .. }
                | Error::Spreadsheet { .. }
                | Error::EmptyDataset { .. }
        )
    }

    /// Text for the status line / CLI. Missing-data failures get the
    /// "place one of these files" hint when a candidate list is known.
    pub fn user_message(&self, candidates: &[String]) -> String {
        if self.is_missing_data() && !candidates.is_empty() {
            format!("{self}. Place one of these files next to the app: {}", candidates.join(", "))
        } else {
            self.to_string()
        }
    }
}
