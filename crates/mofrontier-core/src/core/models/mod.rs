//! # Core Models Module
//!
//! Data structures describing what a formatted checkpoint file contains and the
//! orbital vocabulary used by the analysis layer.
//!
//! - [`system`] - The decoded [`system::MolecularSystem`] record with optional fields
//! - [`orbitals`] - Spin channels, frontier indices, orbital labels and window records
//! - [`formula`] - Element multiset derived from atomic numbers
//! - [`elements`] - Static atomic-number to symbol table

pub mod elements;
pub mod formula;
pub mod orbitals;
pub mod system;
