// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod capability;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod dataset;
pub mod error;
pub mod file;
pub mod gui;
pub mod query;
pub mod session;
pub mod store;
pub mod xlsx;

pub use error::{Error, Result};
