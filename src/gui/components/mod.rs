// src/gui/components/mod.rs
pub mod brokerage_view;
pub mod dataset_panel;
pub mod deck_panel;
pub mod entry_table;
pub mod entry_view;
pub mod filter_panel;
pub mod tabs;
pub mod voice;
