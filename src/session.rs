// src/session.rs
//
// Per-user mutable state: favorites and view counters. One `Session` per
// window / CLI run; the loaded dataset itself is never mutated through here.

use std::collections::HashMap;

use crate::csv::{to_export_string, Delim, RawTable};
use crate::dataset::entry::{
    brokerage_id, split_tokens, BrokerageEntry, Entry, BROKERAGE_HEADERS, DECK_HEADERS,
};
use crate::error::{Error, Result};

/// Rows that can be favorited: anything with a stable id.
pub trait Keyed: Clone {
    fn key(&self) -> &str;
}

impl Keyed for Entry {
    fn key(&self) -> &str { &self.id }
}

impl Keyed for BrokerageEntry {
    fn key(&self) -> &str { &self.id }
}

/// Favorited rows keyed by id, in the order they were added.
#[derive(Clone, Debug)]
pub struct Favorites<T> {
    by_id: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Favorites<T> {
    fn default() -> Self {
        Self { by_id: HashMap::new(), order: Vec::new() }
    }
}

impl<T: Keyed> Favorites<T> {
    pub fn len(&self) -> usize { self.order.len() }
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Upsert. Returns true when the id was new.
    pub fn insert(&mut self, item: T) -> bool {
        let id = s!(item.key());
        let fresh = !self.by_id.contains_key(&id);
        if fresh {
            self.order.push(id.clone());
        }
        self.by_id.insert(id, item);
        fresh
    }

    /// Returns true when something was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.by_id.remove(id).is_some() {
            self.order.retain(|k| k != id);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Upsert every item, or nothing when `items` is an error.
    fn merge(&mut self, items: Result<Vec<T>>) -> Result<usize> {
        Ok(items?.into_iter().map(|it| self.insert(it)).filter(|fresh| *fresh).count())
    }
}

/// View counts keyed by entry id.
#[derive(Clone, Debug, Default)]
pub struct UsageCounters {
    counts: HashMap<String, u64>,
}

impl UsageCounters {
    pub fn get(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    fn bump(&mut self, id: &str) -> u64 {
        let n = self.counts.entry(s!(id)).or_insert(0);
        *n += 1;
        *n
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    pub favorites: Favorites<Entry>,
    pub brokerage_favorites: Favorites<BrokerageEntry>,
    pub usage: UsageCounters,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn add_favorite(&mut self, entry: &Entry) {
        if self.favorites.insert(entry.clone()) {
            logf!("Favorite added: {}", entry.id);
        }
    }

    pub fn remove_favorite(&mut self, id: &str) {
        if self.favorites.remove(id) {
            logf!("Favorite removed: {id}");
        }
    }

    /// Flip favorite state; returns the new state.
    pub fn toggle_favorite(&mut self, entry: &Entry) -> bool {
        if self.is_favorite(&entry.id) {
            self.remove_favorite(&entry.id);
            false
        } else {
            self.add_favorite(entry);
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn add_brokerage_favorite(&mut self, row: &BrokerageEntry) {
        if self.brokerage_favorites.insert(row.clone()) {
            logf!("Brokerage favorite added: {} ({})", row.brokerage, row.id);
        }
    }

    pub fn remove_brokerage_favorite(&mut self, id: &str) {
        if self.brokerage_favorites.remove(id) {
            logf!("Brokerage favorite removed: {id}");
        }
    }

    pub fn toggle_brokerage_favorite(&mut self, row: &BrokerageEntry) -> bool {
        if self.is_brokerage_favorite(&row.id) {
            self.remove_brokerage_favorite(&row.id);
            false
        } else {
            self.add_brokerage_favorite(row);
            true
        }
    }

    pub fn is_brokerage_favorite(&self, id: &str) -> bool {
        self.brokerage_favorites.contains(id)
    }

    pub fn record_view(&mut self, id: &str) -> u64 {
        let n = self.usage.bump(id);
        logd!("View {id} -> {n}");
        n
    }

    /// Up to `limit` (id, count) pairs, count descending. Ties go to the id
    /// that appears first in `entries`; ids absent from `entries` follow,
    /// ordered by id.
    pub fn most_used(&self, limit: usize, entries: &[Entry]) -> Vec<(String, u64)> {
        let first_seen: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .rev()
            .map(|(i, e)| (e.id.as_str(), i))
            .collect();

        let mut ranked: Vec<(&String, u64)> = self.usage.counts.iter().map(|(k, v)| (k, *v)).collect();
        ranked.sort_by(|(a, ca), (b, cb)| {
            let pos = |id: &str| first_seen.get(id).copied().unwrap_or(usize::MAX);
            cb.cmp(ca)
                .then_with(|| pos(a).cmp(&pos(b)))
                .then_with(|| a.cmp(b))
        });
        ranked.into_iter().take(limit).map(|(k, v)| (k.clone(), v)).collect()
    }

    /// Merge a deck into favorites. All-or-nothing: a deck without
    /// question/answer headers changes nothing. Returns how many ids were new.
    pub fn import_favorites(&mut self, deck: &RawTable) -> Result<usize> {
        let added = self.favorites.merge(deck_entries(deck))?;
        logf!("Deck import: {} rows, {} new favorites", deck.row_count(), added);
        Ok(added)
    }

    /// Same as `import_favorites` for a brokerage deck
    /// (brokerage/rebuttal headers required).
    pub fn import_brokerage_favorites(&mut self, deck: &RawTable) -> Result<usize> {
        let added = self.brokerage_favorites.merge(brokerage_deck_entries(deck))?;
        logf!("Brokerage deck import: {} rows, {} new favorites", deck.row_count(), added);
        Ok(added)
    }

    /// Favorites as `DECK_HEADERS` rows.
    pub fn deck_rows(&self) -> Vec<Vec<String>> {
        self.favorites.iter().map(Entry::to_row).collect()
    }

    /// Brokerage favorites as `BROKERAGE_HEADERS` rows.
    pub fn brokerage_deck_rows(&self) -> Vec<Vec<String>> {
        self.brokerage_favorites.iter().map(BrokerageEntry::to_row).collect()
    }

    /// Favorites as a question/answer/category/tags table.
    pub fn deck_to_string(&self, delim: Delim) -> String {
        to_export_string(&DECK_HEADERS, &self.deck_rows(), delim)
    }

    pub fn brokerage_deck_to_string(&self, delim: Delim) -> String {
        to_export_string(&BROKERAGE_HEADERS, &self.brokerage_deck_rows(), delim)
    }
}

fn header_col(deck: &RawTable, name: &str) -> Option<usize> {
    deck.headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Deck headers must name `question` and `answer` exactly (any case);
/// `category` and `tags` are optional. Rows missing text are skipped.
fn deck_entries(deck: &RawTable) -> Result<Vec<Entry>> {
    let col = |name: &str| header_col(deck, name);

    let (Some(q), Some(a)) = (col("question"), col("answer")) else {
        return Err(Error::malformed(format!(
            "deck needs 'question' and 'answer' columns; found: {}",
            deck.headers.join(", ")
        )));
    };
    let cat = col("category");
    let tags = col("tags");

    let entries = (0..deck.row_count())
        .filter_map(|r| {
            let question = deck.cell(r, q).trim();
            let answer = deck.cell(r, a).trim();
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            let category = cat.map(|c| deck.cell(r, c).trim()).unwrap_or("");
            let tags = tags.map(|c| split_tokens(deck.cell(r, c))).unwrap_or_default();
            Some(Entry::new(question, answer, category, tags))
        })
        .collect();
    Ok(entries)
}

/// `BROKERAGE_HEADERS` deck; rows without a brokerage name are skipped.
fn brokerage_deck_entries(deck: &RawTable) -> Result<Vec<BrokerageEntry>> {
    let col = |name: &str| header_col(deck, name);

    let (Some(b), Some(r)) = (col("brokerage"), col("rebuttal")) else {
        return Err(Error::malformed(format!(
            "brokerage deck needs 'brokerage' and 'rebuttal' columns; found: {}",
            deck.headers.join(", ")
        )));
    };
    let optional = |c: Option<usize>, row: usize| c.map(|c| s!(deck.cell(row, c).trim())).unwrap_or_default();
    let (sms, one_liner, notes) = (col("sms"), col("one_liner"), col("notes"));

    let rows = (0..deck.row_count())
        .filter_map(|row| {
            let brokerage = deck.cell(row, b).trim();
            if brokerage.is_empty() {
                return None;
            }
            let rebuttal = deck.cell(row, r).trim();
            Some(BrokerageEntry {
                id: brokerage_id(brokerage, rebuttal),
                brokerage: s!(brokerage),
                rebuttal: s!(rebuttal),
                sms: optional(sms, row),
                one_liner: optional(one_liner, row),
                notes: optional(notes, row),
            })
        })
        .collect();
    Ok(rows)
}
