//! Provides input/output functionality for quantum-chemistry output files.
//!
//! Readers implement the [`traits::ChemistryFile`] trait. The [`records`]
//! module handles the flat CSV rows handed to the plotting layer.

pub mod fchk;
pub mod records;
pub mod traits;
