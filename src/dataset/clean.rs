// src/dataset/clean.rs
//
// Raw rows → canonical entries. Trims every field, drops rows missing a
// question or answer, derives ids and tag tokens, optionally collapses
// repeated questions. Original row order is kept throughout.

use std::collections::HashSet;

use crate::core::sanitize::fold_key;
use crate::csv::RawTable;
use crate::error::Result;

use super::entry::{brokerage_id, split_tokens, BrokerageEntry, Entry};
use super::schema::{normalize_headers, AliasTable, BrokerageField, ColumnMap, ObjectionField};

/// Row counts and detected headers from one normalization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub columns: Vec<String>,
    /// (field name, matched header) for every field that resolved
    pub mapping: Vec<(&'static str, String)>,
    pub rows_before: usize,
    pub rows_after_clean: usize,
    pub rows_after_dedupe: usize,
}

fn cell<'a, F: super::schema::Field>(table: &'a RawTable, map: &ColumnMap<F>, row: usize, field: F) -> &'a str {
    map.get(field).map(|c| table.cell(row, c).trim()).unwrap_or("")
}

fn mapping_of<F: super::schema::Field>(map: &ColumnMap<F>, columns: &[String]) -> Vec<(&'static str, String)> {
    map.iter()
        .filter_map(|(f, c)| c.and_then(|ix| columns.get(ix)).map(|name| (f.name(), name.clone())))
        .collect()
}

/// Normalize an objection table. Fails only on unresolved required columns.
pub fn clean_objections(
    table: &RawTable,
    aliases: &AliasTable<ObjectionField>,
    dedupe: bool,
) -> Result<(Vec<Entry>, CleanReport)> {
    use ObjectionField::*;

    let map = normalize_headers(&table.headers, aliases);
    map.require(&table.headers)?;

    let mut entries = Vec::with_capacity(table.row_count());
    for r in 0..table.row_count() {
        let question = cell(table, &map, r, Question);
        let answer = cell(table, &map, r, Answer);
        if question.is_empty() || answer.is_empty() {
            continue;
        }
        let category = cell(table, &map, r, Category);
        let tags = split_tokens(cell(table, &map, r, Tags));
        entries.push(Entry::new(question, answer, category, tags));
    }
    let rows_after_clean = entries.len();

    if dedupe {
        entries = dedupe_questions(entries);
    }

    let report = CleanReport {
        columns: table.headers.clone(),
        mapping: mapping_of(&map, &table.headers),
        rows_before: table.row_count(),
        rows_after_clean,
        rows_after_dedupe: entries.len(),
    };
    logd!("Clean: before={} after={} dedupe={} kept={}",
        report.rows_before, rows_after_clean, dedupe, report.rows_after_dedupe);

    Ok((entries, report))
}

/// Keep the first entry per whitespace-normalized, case-folded question.
pub fn dedupe_questions(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(fold_key(&e.question)))
        .collect()
}

/// Run the cleaning rules again over canonical entries. A no-op on
/// anything `clean_objections` produced.
pub fn reclean(entries: &[Entry], dedupe: bool) -> Vec<Entry> {
    let cleaned: Vec<Entry> = entries
        .iter()
        .filter_map(|e| {
            let (q, a) = (e.question.trim(), e.answer.trim());
            if q.is_empty() || a.is_empty() { return None; }
            let tags = e.tags.iter().flat_map(|t| split_tokens(t)).collect();
            Some(Entry::new(q, a, e.category.trim(), tags))
        })
        .collect();
    if dedupe { dedupe_questions(cleaned) } else { cleaned }
}

/// Normalize a brokerage sheet. Rows without a brokerage name are dropped;
/// an empty rebuttal is allowed.
pub fn clean_brokerage(
    table: &RawTable,
    aliases: &AliasTable<BrokerageField>,
) -> Result<(Vec<BrokerageEntry>, CleanReport)> {
    use BrokerageField::*;

    let map = normalize_headers(&table.headers, aliases);
    map.require(&table.headers)?;

    let rows: Vec<BrokerageEntry> = (0..table.row_count())
        .filter_map(|r| {
            let brokerage = cell(table, &map, r, Brokerage);
            if brokerage.is_empty() { return None; }
            let rebuttal = cell(table, &map, r, Rebuttal);
            Some(BrokerageEntry {
                id: brokerage_id(brokerage, rebuttal),
                brokerage: s!(brokerage),
                rebuttal: s!(rebuttal),
                sms: s!(cell(table, &map, r, Sms)),
                one_liner: s!(cell(table, &map, r, OneLiner)),
                notes: s!(cell(table, &map, r, Notes)),
            })
        })
        .collect();

    let report = CleanReport {
        columns: table.headers.clone(),
        mapping: mapping_of(&map, &table.headers),
        rows_before: table.row_count(),
        rows_after_clean: rows.len(),
        rows_after_dedupe: rows.len(),
    };
    Ok((rows, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{parse_table, Delim};

    const SAMPLE: &str = "Objection,Rebuttal,Category,Tags\n\
        \"  Too expensive \",It pays for itself.,Pricing,pricing|roi\n\
        ,No question here,Misc,\n\
        Need to ask my spouse,   ,Spouse,\n\
        too   EXPENSIVE,Different answer,Pricing,\n\
        Send me info,Happy to - what matters most?,,info;email\n";

    fn table() -> RawTable {
        parse_table(SAMPLE, Delim::Csv)
    }

    #[test]
    fn rows_without_question_or_answer_are_dropped() {
        let (entries, report) = clean_objections(&table(), &AliasTable::objections(), false).unwrap();
        assert_eq!(report.rows_before, 5);
        assert_eq!(report.rows_after_clean, 3);
        assert_eq!(entries[0].question, "Too expensive");
        assert_eq!(entries[0].tags, strings!["pricing", "roi"]);
        assert_eq!(entries[2].category, "");
        assert_eq!(entries[2].tags, strings!["info", "email"]);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let (entries, report) = clean_objections(&table(), &AliasTable::objections(), true).unwrap();
        assert_eq!(report.rows_after_clean, 3);
        assert_eq!(report.rows_after_dedupe, 2);
        assert_eq!(entries[0].answer, "It pays for itself.");
        assert_eq!(entries[1].question, "Send me info");
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let (entries, _) = clean_objections(&table(), &AliasTable::objections(), false).unwrap();
        assert_eq!(reclean(&entries, false), entries);
        let deduped = dedupe_questions(entries.clone());
        assert_eq!(reclean(&deduped, true), deduped);
    }

    #[test]
    fn report_lists_mapping() {
        let (_, report) = clean_objections(&table(), &AliasTable::objections(), false).unwrap();
        assert!(report.mapping.contains(&("question", s!("Objection"))));
        assert!(report.mapping.contains(&("tags", s!("Tags"))));
    }

    #[test]
    fn brokerage_rows_need_a_name() {
        let t = parse_table(
            "Brokerage,Funnel Pilot Rebuttal,SMS\nKeller Williams,We own the funnel,Quick q?\n,orphan,\nFunnel Pilot,,\n",
            Delim::Csv,
        );
        let (rows, report) = clean_brokerage(&t, &AliasTable::brokerage()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(report.rows_before, 3);
        assert_eq!(rows[0].sms, "Quick q?");
        assert_eq!(rows[0].one_liner, "");
        assert_eq!(rows[1].rebuttal, "");
    }
}
