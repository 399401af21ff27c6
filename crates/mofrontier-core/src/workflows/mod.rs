//! # Workflows
//!
//! End-to-end entry points built on [`core`](crate::core) and
//! [`analysis`](crate::analysis):
//!
//! - [`extract`] decodes checkpoint files and produces the frontier window of
//!   each one as plot-input rows. Batches are decoded in parallel.
//! - [`classify`] runs the degeneracy classifier over plot-input rows.

pub mod classify;
pub mod extract;

use crate::analysis::error::AnalysisError;
use crate::core::io::fchk::FchkError;
use crate::core::io::records::RecordsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Checkpoint decoding failed: {0}")]
    Fchk(#[from] FchkError),
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Record I/O failed: {0}")]
    Records(#[from] RecordsError),
}
