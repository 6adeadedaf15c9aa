// src/data.rs
//
// View-layer projection of the loaded entries.
//
// - ResultView: positions of the entries that survive the active view and
//               filters. Borrowed from the dataset, never owns rows.
//
// The dataset itself (entries, topics, report) lives in src/store.rs.

use crate::config::consts::TOPIC_OPTIONS_CAP;
use crate::dataset::Entry;
use crate::query::{self, Filter, ViewKind};
use crate::session::Session;

/// Zero-copy filtered view for display.
#[derive(Clone, Debug)]
pub struct ResultView<'a> {
    /// Positions of kept entries in the dataset
    pub row_ix: Vec<usize>,
    entries: &'a [Entry],
}

impl<'a> ResultView<'a> {
    pub fn build(entries: &'a [Entry], session: &Session, view: ViewKind, filter: &Filter) -> Self {
        Self { row_ix: query::view_indices(entries, session, view, filter), entries }
    }

    pub fn from_indices(entries: &'a [Entry], row_ix: Vec<usize>) -> Self {
        Self { row_ix, entries }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Entry by projected index (no cloning).
    pub fn get(&self, i: usize) -> Option<&'a Entry> {
        self.row_ix.get(i).and_then(|&ix| self.entries.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.entries.get(ix))
    }

    /// Projected index of the entry with this id, if it is in view.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.iter().position(|e| e.id == id)
    }

    pub fn to_refs(&self) -> Vec<&'a Entry> {
        self.iter().collect()
    }
}

/// Topic multi-select options: the vocabulary head.
pub fn topic_options(vocab: &[String]) -> &[String] {
    &vocab[..vocab.len().min(TOPIC_OPTIONS_CAP)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_projects_without_copying() {
        let es = vec![
            Entry::new("a", "1", "", vec![]),
            Entry::new("b", "2", "", vec![]),
            Entry::new("c", "3", "", vec![]),
        ];
        let f = Filter { term: s!("b"), ..Filter::default() };
        let v = ResultView::build(&es, &Session::new(), ViewKind::All, &f);
        assert_eq!(v.row_ix, vec![1]);
        assert!(std::ptr::eq(v.get(0).unwrap(), &es[1]));
        assert_eq!(v.position_of(&es[1].id), Some(0));
        assert_eq!(v.position_of(&es[0].id), None);
    }

    #[test]
    fn topic_options_are_capped() {
        let vocab: Vec<String> = (0..250).map(|i| format!("t{i}")).collect();
        assert_eq!(topic_options(&vocab).len(), TOPIC_OPTIONS_CAP);
        assert_eq!(topic_options(&vocab[..3]).len(), 3);
    }
}
