// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,import}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod import;  // src/gui/actions/import.rs

pub use copy::copy;
pub use export::{download_answer, download_brokerage_deck, download_deck, download_pack, export_brokerage};
pub use import::import_deck;
