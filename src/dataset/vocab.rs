// src/dataset/vocab.rs
//! Derived option lists: the topic vocabulary plus the category and tag
//! pickers. All are recomputed from scratch on every load.

use std::collections::{BTreeSet, HashMap};

use crate::config::consts::{TOPIC_MAX_LEN, TOPIC_MIN_LEN};

use super::entry::Entry;

/// Lowercased categories and tag tokens of length 2..=40 (chars), ranked by
/// occurrence count descending, then alphabetically.
pub fn topic_vocabulary(entries: &[Entry]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut bump = |raw: &str| {
        let t = raw.trim();
        let n = t.chars().count();
        if (TOPIC_MIN_LEN..=TOPIC_MAX_LEN).contains(&n) {
            *counts.entry(t.to_lowercase()).or_insert(0) += 1;
        }
    };

    for e in entries {
        if !e.category.trim().is_empty() {
            bump(&e.category);
        }
        for t in &e.tags {
            bump(t);
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)));
    ranked.into_iter().map(|(t, _)| t).collect()
}

/// Distinct non-empty categories as stored, sorted.
pub fn category_options(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.category.as_str())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|c| s!(c))
        .collect()
}

/// Distinct tag tokens, sorted. Case variants collapse to the first spelling
/// seen since tag filtering ignores case anyway.
pub fn tag_options(entries: &[Entry]) -> Vec<String> {
    let mut by_key: HashMap<String, &str> = HashMap::new();
    for t in entries.iter().flat_map(|e| e.tags.iter()) {
        by_key.entry(t.to_lowercase()).or_insert(t.as_str());
    }
    let mut out: Vec<String> = by_key.into_values().map(|t| s!(t)).collect();
    out.sort_by_key(|t| t.to_lowercase());
    out
}
