// src/xlsx.rs
//! Spreadsheet workbooks. Reading goes through calamine and yields the same
//! `RawTable` the CSV parser produces; writing goes through rust_xlsxwriter.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::Workbook;

use crate::csv::RawTable;
use crate::error::{Error, Result};

/// Which worksheets a read takes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SheetScope {
    #[default]
    First,
    /// Every worksheet stacked; columns line up by header name.
    All,
}

pub fn is_workbook(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_ascii_lowercase().as_str(), "xlsx" | "xlsm" | "xls" | "xlsb" | "ods")
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read one or all worksheets. Each sheet's first row is its header row;
/// empty sheets are skipped.
pub fn read_workbook(path: &Path, scope: SheetScope) -> Result<RawTable> {
    let sheet_err = |source| Error::Spreadsheet { path: path.to_path_buf(), source };
    let mut workbook = open_workbook_auto(path).map_err(sheet_err)?;

    let mut names = workbook.sheet_names();
    if scope == SheetScope::First {
        names.truncate(1);
    }

    let mut table = RawTable::default();
    for name in names {
        let range = workbook.worksheet_range(&name).map_err(sheet_err)?;
        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            logd!("Sheet '{name}' is empty");
            continue;
        };

        // Column index of each sheet column in the combined table.
        let slots: Vec<usize> = header_row
            .iter()
            .map(|h| {
                let h = cell_text(h).trim().to_string();
                match table.headers.iter().position(|x| *x == h) {
                    Some(ix) => ix,
                    None => {
                        table.headers.push(h);
                        table.headers.len() - 1
                    }
                }
            })
            .collect();

        let before = table.rows.len();
        for row in rows {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            let mut out = vec![s!(); table.headers.len()];
            for (cell, &slot) in cells.into_iter().zip(&slots) {
                out[slot] = cell;
            }
            table.rows.push(out);
        }
        logd!("Sheet '{name}': {} rows", table.rows.len() - before);
    }

    // Rows from earlier sheets are short when later sheets added columns.
    let width = table.headers.len();
    for r in &mut table.rows {
        r.resize(width, s!());
    }
    Ok(table)
}

/// Single-sheet workbook: header row in row 0, then `rows`.
pub fn write_workbook<S: AsRef<str>>(path: &Path, headers: &[&str], rows: &[Vec<S>]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (c, h) in headers.iter().enumerate() {
        sheet.write_string(0, c as u16, *h)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            sheet.write_string(r as u32 + 1, c as u16, cell.as_ref())?;
        }
    }
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sheet_book(path: &Path) {
        let mut wb = Workbook::new();
        let first = wb.add_worksheet();
        first.set_name("Top 10").unwrap();
        for (c, h) in ["Brokerage", "Rebuttal"].iter().enumerate() {
            first.write_string(0, c as u16, *h).unwrap();
        }
        first.write_string(1, 0, "Compass").unwrap();
        first.write_string(1, 1, "Brand is not a pipeline.").unwrap();

        let second = wb.add_worksheet();
        second.set_name("Next 15").unwrap();
        for (c, h) in ["Rebuttal", "Brokerage", "SMS"].iter().enumerate() {
            second.write_string(0, c as u16, *h).unwrap();
        }
        second.write_string(1, 0, "We fill the calendar.").unwrap();
        second.write_string(1, 1, "Keller Williams").unwrap();
        second.write_string(1, 2, "Got 5 min?").unwrap();
        second.write_number(2, 1, 21.0).unwrap();
        wb.save(path).unwrap();
    }

    #[test]
    fn all_sheets_stack_by_header_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        two_sheet_book(&path);

        let t = read_workbook(&path, SheetScope::All).unwrap();
        assert_eq!(t.headers, strings!["Brokerage", "Rebuttal", "SMS"]);
        assert_eq!(t.rows, vec![
            strings!["Compass", "Brand is not a pipeline.", ""],
            strings!["Keller Williams", "We fill the calendar.", "Got 5 min?"],
            strings!["21", "", ""],
        ]);

        let first = read_workbook(&path, SheetScope::First).unwrap();
        assert_eq!(first.headers, strings!["Brokerage", "Rebuttal"]);
        assert_eq!(first.row_count(), 1);
    }

    #[test]
    fn written_workbook_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.xlsx");
        write_workbook(&path, &["question", "answer"], &[strings!["Too expensive", "It pays, \"really\"."]]).unwrap();

        let t = read_workbook(&path, SheetScope::First).unwrap();
        assert_eq!(t.headers, strings!["question", "answer"]);
        assert_eq!(t.rows, vec![strings!["Too expensive", "It pays, \"really\"."]]);
    }

    #[test]
    fn garbage_is_a_spreadsheet_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.xlsx");
        std::fs::write(&path, "not a zip").unwrap();
        let err = read_workbook(&path, SheetScope::First).unwrap_err();
        assert!(matches!(err, Error::Spreadsheet { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn workbook_extensions() {
        assert!(is_workbook(Path::new("a.XLSX")));
        assert!(is_workbook(Path::new("a.ods")));
        assert!(!is_workbook(Path::new("a.csv")));
    }
}
