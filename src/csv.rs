// src/csv.rs
use std::io::{self, Write};
use std::mem::take;
use std::path::Path;

/// Field separator for delimited text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn char(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }

    /// Pick a separator from the file extension. `None` for formats we
    /// cannot parse (spreadsheets, binaries).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Some(Delim::Csv),
            "tsv" | "tab" => Some(Delim::Tsv),
            _ => None,
        }
    }
}

/// Untyped table as read from a file: one header row, then data rows.
/// Rows are padded/truncated to the header width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Cell by (row, column); missing cells read as "".
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str()).unwrap_or("")
    }

    /// Remove columns whose every data cell is blank.
    pub fn drop_empty_columns(&mut self) {
        let keep: Vec<bool> = (0..self.headers.len())
            .map(|ci| self.rows.iter().any(|r| r.get(ci).is_some_and(|c| !c.trim().is_empty())))
            .collect();
        if keep.iter().all(|k| *k) { return; }

        let retain = |cells: &mut Vec<String>| {
            let mut ix = 0;
            cells.retain(|_| { let k = keep[ix]; ix += 1; k });
        };
        retain(&mut self.headers);
        for r in &mut self.rows { retain(r); }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). A quote only opens a
/// quoted field at the start of the field; anywhere else it is literal text.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.char();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut at_start = true;
    let mut chars = text.chars().peekable();

    let is_blank = |row: &Vec<String>| row.is_empty() || (row.len() == 1 && row[0].is_empty());

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }
        match ch {
            '"' if at_start => {
                in_quotes = true;
                at_start = false;
            }
            c if c == sep => {
                row.push(take(&mut field));
                at_start = true;
            }
            '\n' | '\r' => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                at_start = true;
                if is_blank(&row) {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => {
                field.push(ch);
                at_start = false;
            }
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !is_blank(&row) {
        rows.push(row);
    }

    rows
}

/// First row is the header; data rows are normalized to header width.
pub fn parse_table(text: &str, delim: Delim) -> RawTable {
    let mut rows = parse_rows(text, delim).into_iter();
    let Some(headers) = rows.next() else { return RawTable::default(); };
    let headers: Vec<String> = headers.into_iter().map(|h| s!(h.trim())).collect();
    let width = headers.len();

    let rows = rows
        .map(|mut r| { r.resize(width, s!()); r })
        .collect();

    RawTable { headers, rows }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let sep = delim.char();
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line + rows as one string (Copy/Export/Download).
pub fn to_export_string<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, headers, delim);
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
