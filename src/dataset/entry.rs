// src/dataset/entry.rs
//! Canonical row types and the helpers that derive their fields.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::config::consts::{BROKERAGE_ID_LEN, ENTRY_ID_LEN, ID_SEPARATOR, TAG_JOIN, TOPIC_SEPARATORS};

static TOPIC_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOPIC_SEPARATORS).expect("topic separator pattern"));

/// One objection and its rebuttal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Entry {
    /// Build from already-trimmed text; the id is derived here.
    pub fn new(question: &str, answer: &str, category: &str, tags: Vec<String>) -> Self {
        Self {
            id: entry_id(question, answer),
            question: s!(question),
            answer: s!(answer),
            category: s!(category),
            tags,
        }
    }

    /// Lowercased category plus lowercased tags.
    pub fn topic_bag(&self) -> BTreeSet<String> {
        let mut bag: BTreeSet<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();
        let cat = self.category.trim();
        if !cat.is_empty() {
            bag.insert(cat.to_lowercase());
        }
        bag
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let want = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == want)
    }

    pub fn tags_joined(&self) -> String {
        self.tags.join(TAG_JOIN)
    }

    /// Row for deck export, in `DECK_HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.question.clone(), self.answer.clone(), self.category.clone(), self.tags_joined()]
    }
}

pub const DECK_HEADERS: [&str; 4] = ["question", "answer", "category", "tags"];

/// One row of the brokerage comparison sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokerageEntry {
    pub id: String,
    pub brokerage: String,
    pub rebuttal: String,
    pub sms: String,
    pub one_liner: String,
    pub notes: String,
}

impl BrokerageEntry {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.brokerage.clone(),
            self.rebuttal.clone(),
            self.sms.clone(),
            self.one_liner.clone(),
            self.notes.clone(),
        ]
    }
}

pub const BROKERAGE_HEADERS: [&str; 5] = ["brokerage", "rebuttal", "sms", "one_liner", "notes"];

/// Stable id: truncated hex SHA-256 of `question || answer`.
pub fn entry_id(question: &str, answer: &str) -> String {
    hex_digest(question, answer, ENTRY_ID_LEN)
}

pub fn brokerage_id(brokerage: &str, rebuttal: &str) -> String {
    hex_digest(brokerage, rebuttal, BROKERAGE_ID_LEN)
}

fn hex_digest(a: &str, b: &str, len: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(a.as_bytes());
    hasher.update(ID_SEPARATOR.as_bytes());
    hasher.update(b.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(len);
    hex
}

/// Split a delimited cell on `|`, `;`, `,` or `/`; trimmed, no empties.
pub fn split_tokens(cell: &str) -> Vec<String> {
    TOPIC_SPLIT
        .split(cell)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| s!(t))
        .collect()
}
