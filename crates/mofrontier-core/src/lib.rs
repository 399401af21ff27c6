//! # mofrontier
//!
//! Reads Gaussian formatted checkpoint (`.fchk`) files and extracts the
//! molecular-orbital data needed to draw frontier orbital diagrams.
//!
//! The crate is split into three layers:
//!
//! - **[`core`]**: stateless data models (`MolecularSystem`, orbital labels,
//!   element table), unit conversions and file I/O (the fchk decoder and the
//!   plot-input CSV records).
//!
//! - **[`analysis`]**: computations over decoded data, namely the frontier
//!   orbital window and the near-degeneracy classifier, plus their
//!   configuration.
//!
//! - **[`workflows`]**: the public entry points. They decode files (in parallel
//!   for batches), select windows and classify plot-input rows.

pub mod analysis;
pub mod core;
pub mod workflows;
