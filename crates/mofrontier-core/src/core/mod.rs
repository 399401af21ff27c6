//! # Core Module
//!
//! Stateless building blocks: the decoded molecular record, the element table,
//! unit conversions and the file readers and writers.
//!
//! - **Molecular Representation** ([`models`]) - The decoded system and orbital types
//! - **File I/O** ([`io`]) - Formatted checkpoint decoding and plot-input CSV records
//! - **Units** ([`units`]) - Atomic-unit conversion factors applied at read time

pub mod io;
pub mod models;
pub mod units;
