// src/query.rs
//
// Filtering over the loaded entries. Every filter is optional; active ones
// combine with AND and the result keeps dataset order (except Most Used,
// which is ranked by views).

use std::collections::{BTreeSet, HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::consts::{ALL, MOST_USED_CAP};
use crate::dataset::Entry;
use crate::session::Session;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Topic bag shares at least one selected topic
    #[default]
    Any,
    /// Topic bag holds every selected topic
    All,
}

impl MatchMode {
    pub fn label(self) -> &'static str {
        match self { MatchMode::Any => "Any", MatchMode::All => "All" }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Some(MatchMode::Any),
            "all" => Some(MatchMode::All),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewKind {
    #[default]
    All,
    Favorites,
    MostUsed,
}

impl ViewKind {
    pub const ALL_VIEWS: [ViewKind; 3] = [ViewKind::All, ViewKind::Favorites, ViewKind::MostUsed];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::All => "All",
            ViewKind::Favorites => "Favorites",
            ViewKind::MostUsed => "Most Used",
        }
    }
}

/// Active search/filter values. `None` for category/tag means "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    pub term: String,
    pub topics: Vec<String>,
    pub match_mode: MatchMode,
    pub category: Option<String>,
    pub tag: Option<String>,
}

impl Filter {
    /// Picker value → filter value: the "All" sentinel and blanks mean none.
    pub fn choice(value: &str) -> Option<String> {
        if value == ALL || value.trim().is_empty() { None } else { Some(s!(value)) }
    }

    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.topics.is_empty() && self.category.is_none() && self.tag.is_none()
    }

    pub fn matches_term(&self, e: &Entry) -> bool {
        let term = self.term.trim();
        term.is_empty() || e.question.to_lowercase().contains(&term.to_lowercase())
    }

    pub fn matches_topics(&self, e: &Entry) -> bool {
        if self.topics.is_empty() {
            return true;
        }
        let bag = e.topic_bag();
        let wanted: BTreeSet<String> = self.topics.iter().map(|t| t.trim().to_lowercase()).collect();
        match self.match_mode {
            MatchMode::Any => wanted.iter().any(|t| bag.contains(t)),
            MatchMode::All => wanted.iter().all(|t| bag.contains(t)),
        }
    }

    pub fn matches_category(&self, e: &Entry) -> bool {
        self.category.as_deref().is_none_or(|c| e.category == c)
    }

    pub fn matches_tag(&self, e: &Entry) -> bool {
        self.tag.as_deref().is_none_or(|t| e.has_tag(t))
    }

    pub fn matches(&self, e: &Entry) -> bool {
        self.matches_term(e) && self.matches_topics(e) && self.matches_category(e) && self.matches_tag(e)
    }
}

/// Entries passing `filter`, in their original order.
pub fn query<'a>(entries: &'a [Entry], filter: &Filter) -> Vec<&'a Entry> {
    to_refs(entries, &filter_indices(entries, 0..entries.len(), filter))
}

/// Positions (into `entries`) of candidates passing `filter`.
pub fn filter_indices(entries: &[Entry], candidates: impl Iterator<Item = usize>, filter: &Filter) -> Vec<usize> {
    // Lowercase the term once instead of per row.
    let term = filter.term.trim().to_lowercase();
    let rest = Filter { term: s!(), ..filter.clone() };
    candidates
        .filter(|&i| {
            let e = &entries[i];
            (term.is_empty() || e.question.to_lowercase().contains(&term)) && rest.matches(e)
        })
        .collect()
}

/// `query` restricted to the given view, as positions into `entries`.
///   All:       every entry
///   Favorites: entries whose id is favorited
///   MostUsed:  the 50 most viewed ids, ranked by views
pub fn view_indices(entries: &[Entry], session: &Session, view: ViewKind, filter: &Filter) -> Vec<usize> {
    match view {
        ViewKind::All => filter_indices(entries, 0..entries.len(), filter),
        ViewKind::Favorites => {
            let favs = (0..entries.len()).filter(|&i| session.is_favorite(&entries[i].id));
            filter_indices(entries, favs, filter)
        }
        ViewKind::MostUsed => {
            let top = session.most_used(MOST_USED_CAP, entries);
            let rank: HashMap<&str, usize> = top.iter().enumerate().map(|(i, (id, _))| (id.as_str(), i)).collect();
            // Duplicate (question, answer) rows share an id; show it once.
            let mut seen = HashSet::new();
            let used = (0..entries.len()).filter(|&i| {
                let id = entries[i].id.as_str();
                rank.contains_key(id) && seen.insert(id)
            });
            let mut hits = filter_indices(entries, used, filter);
            hits.sort_by_key(|&i| rank[entries[i].id.as_str()]);
            hits
        }
    }
}

pub fn run_view<'a>(entries: &'a [Entry], session: &Session, view: ViewKind, filter: &Filter) -> Vec<&'a Entry> {
    to_refs(entries, &view_indices(entries, session, view, filter))
}

fn to_refs<'a>(entries: &'a [Entry], ix: &[usize]) -> Vec<&'a Entry> {
    ix.iter().map(|&i| &entries[i]).collect()
}

/// Uniform pick from a result set.
pub fn random_pick<'a, R: Rng + ?Sized>(results: &[&'a Entry], rng: &mut R) -> Option<&'a Entry> {
    results.choose(rng).copied()
}
