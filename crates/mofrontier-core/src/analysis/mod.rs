//! Derived analyses over a decoded [`MolecularSystem`](crate::core::models::system::MolecularSystem):
//! the frontier orbital window and the degeneracy classification used when
//! drawing energy-level diagrams.

pub mod config;
pub mod degeneracy;
pub mod error;
pub mod progress;
pub mod window;
