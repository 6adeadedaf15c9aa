// src/store.rs
//
// File-backed loading. Parsed tables are cached per resolved path and
// re-read only when the file's modification time changes or the entry is
// invalidated explicitly (e.g. a re-upload under the same name).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::config::options::LoadOptions;
use crate::csv::{parse_table, Delim, RawTable};
use crate::dataset::clean::{clean_brokerage, clean_objections};
use crate::dataset::vocab::{category_options, tag_options, topic_vocabulary};
use crate::dataset::{resolve, AliasTable, BrokerageSheet, CleanReport, Entry};
use crate::error::{Error, Result};
use crate::xlsx::{is_workbook, read_workbook, SheetScope};

#[derive(Clone, Debug)]
struct CachedTable {
    modified: Option<SystemTime>,
    table: Arc<RawTable>,
}

/// Parsed tables keyed by path (and sheet scope for workbooks), valid for
/// the process lifetime.
#[derive(Clone, Debug, Default)]
pub struct DatasetCache {
    tables: HashMap<(PathBuf, SheetScope), CachedTable>,
}

impl DatasetCache {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.tables.len() }
    pub fn is_empty(&self) -> bool { self.tables.is_empty() }
    pub fn contains(&self, path: &Path) -> bool {
        self.tables.keys().any(|(p, _)| p == path)
    }

    /// Cached table for `path`, parsing on miss or when the file changed.
    /// Workbooks contribute their first sheet.
    pub fn table(&mut self, path: &Path) -> Result<Arc<RawTable>> {
        self.table_with(path, SheetScope::First)
    }

    pub fn table_with(&mut self, path: &Path, scope: SheetScope) -> Result<Arc<RawTable>> {
        let key = (path.to_path_buf(), scope);
        let modified = fs::metadata(path).ok().and_then(|m| m.modified().ok());
        if let Some(hit) = self.tables.get(&key) {
            if hit.modified == modified {
                logd!("Cache hit: {}", path.display());
                return Ok(Arc::clone(&hit.table));
            }
            logd!("Cache stale: {}", path.display());
        }

        let table = Arc::new(read_table_with(path, scope)?);
        self.tables.insert(key, CachedTable { modified, table: Arc::clone(&table) });
        logd!("Cache miss: parsed {} ({} rows)", path.display(), table.row_count());
        Ok(table)
    }

    /// Drop every cached scope of `path`.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let before = self.tables.len();
        self.tables.retain(|(p, _), _| p != path);
        self.tables.len() != before
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

/// Read and parse a delimited file or a workbook's first sheet. Columns
/// with no data are dropped.
pub fn read_table(path: &Path) -> Result<RawTable> {
    read_table_with(path, SheetScope::First)
}

pub fn read_table_with(path: &Path, scope: SheetScope) -> Result<RawTable> {
    let mut table = match Delim::from_path(path) {
        Some(delim) => {
            let text = fs::read_to_string(path)
                .map_err(|source| Error::Unreadable { path: path.to_path_buf(), source })?;
            parse_table(&text, delim)
        }
        None if is_workbook(path) => read_workbook(path, scope)?,
        None => return Err(Error::UnsupportedFormat { path: path.to_path_buf() }),
    };
    table.drop_empty_columns();
    Ok(table)
}

/// Loaded objection dataset plus everything derived from it.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub source: PathBuf,
    pub entries: Vec<Entry>,
    /// Ranked topic vocabulary
    pub topics: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub report: CleanReport,
}

impl Dataset {
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}

/// Resolve the first candidate under `opts.base_dir` and load it.
pub fn load_objections(cache: &mut DatasetCache, opts: &LoadOptions) -> Result<Dataset> {
    let path = resolve(&opts.candidates, &opts.base_dir)?;
    load_from_path(cache, &path, opts.dedupe)
}

/// Load a specific file (user pick or upload).
pub fn load_from_path(cache: &mut DatasetCache, path: &Path, dedupe: bool) -> Result<Dataset> {
    let table = cache.table(path)?;
    let name = file_name(path);
    if table.row_count() == 0 {
        return Err(Error::EmptyDataset { name });
    }

    let (entries, report) = clean_objections(&table, &AliasTable::objections(), dedupe)?;
    if entries.is_empty() {
        return Err(Error::EmptyDataset { name });
    }

    let ds = Dataset {
        source: path.to_path_buf(),
        topics: topic_vocabulary(&entries),
        categories: category_options(&entries),
        tags: tag_options(&entries),
        entries,
        report,
    };
    logf!("Loaded {}: {} entries ({} rows before cleaning), {} topics",
        ds.source_name(), ds.entries.len(), ds.report.rows_before, ds.topics.len());
    Ok(ds)
}

/// Loaded brokerage comparison sheet.
#[derive(Clone, Debug)]
pub struct BrokerageSet {
    pub source: PathBuf,
    pub sheet: BrokerageSheet,
    pub report: CleanReport,
}

impl BrokerageSet {
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }
}

/// Brokerage workbooks are split across sheets; all of them are read.
pub fn load_brokerage(cache: &mut DatasetCache, opts: &LoadOptions) -> Result<BrokerageSet> {
    let path = resolve(&opts.brokerage_candidates, &opts.base_dir)?;
    let table = cache.table_with(&path, SheetScope::All)?;
    let (rows, report) = clean_brokerage(&table, &AliasTable::brokerage())?;
    if rows.is_empty() {
        return Err(Error::EmptyDataset { name: file_name(&path) });
    }
    logf!("Loaded brokerage sheet {}: {} rows", file_name(&path), rows.len());
    Ok(BrokerageSet { source: path, sheet: BrokerageSheet::new(rows), report })
}

/// Parse a deck file for favorites import. Any read/parse failure is an
/// upload problem, not a dataset problem; the read error stays as its cause.
pub fn read_deck(path: &Path) -> Result<RawTable> {
    read_table(path).map_err(Error::upload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = read_table(Path::new("deck.pdf")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
        assert!(err.is_missing_data());
    }

    #[test]
    fn missing_workbook_is_missing_data() {
        let err = read_table(Path::new("no_such_book.xlsx")).unwrap_err();
        assert!(matches!(err, Error::Spreadsheet { .. }));
        assert!(err.is_missing_data());
    }

    #[test]
    fn unreadable_file_keeps_its_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table(&dir.path().join("missing.csv")).unwrap_err();
        match err {
            Error::Unreadable { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn deck_errors_become_upload_errors_with_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_deck(&dir.path().join("nope.csv")).unwrap_err();
        let Error::MalformedUpload { source: Some(cause), .. } = &err else {
            panic!("unexpected error: {err}");
        };
        assert!(matches!(**cause, Error::Unreadable { .. }));

        // The io::Error is still reachable through the source chain.
        let cause = std::error::Error::source(&err).unwrap();
        let io = std::error::Error::source(cause).unwrap().downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);

        let err = read_deck(Path::new("nope.pdf")).unwrap_err();
        assert!(matches!(err, Error::MalformedUpload { source: Some(_), .. }));
    }

    #[test]
    fn scopes_are_cached_separately_and_invalidated_together() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        crate::xlsx::write_workbook(&path, &["brokerage", "rebuttal"], &[strings!["Compass", "Brand."]]).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.table(&path).unwrap();
        let all = cache.table_with(&path, SheetScope::All).unwrap();
        assert_eq!(first.rows, all.rows);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&path));
        assert!(cache.invalidate(&path));
        assert!(cache.is_empty());
    }
}
