// src/dataset/mod.rs
//
// Resolve → parse → normalize headers → clean → derive vocabulary.
// Everything here is pure over a `RawTable`; file access lives in store.rs.

pub mod brokerage;
pub mod clean;
pub mod entry;
pub mod resolve;
pub mod schema;
pub mod vocab;

pub use brokerage::BrokerageSheet;
pub use clean::CleanReport;
pub use entry::{BrokerageEntry, Entry};
pub use resolve::resolve;
pub use schema::{AliasTable, BrokerageField, ObjectionField};
