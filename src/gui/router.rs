// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::objections::PAGE,
    &pages::brokerage::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Objections => &pages::objections::PAGE,
        Brokerage  => &pages::brokerage::PAGE,
    }
}

pub fn index_of(kind: &PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == *kind).unwrap_or(0)
}
