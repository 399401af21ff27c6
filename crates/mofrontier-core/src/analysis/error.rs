use crate::core::models::system::MissingField;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Missing precondition: '{field}' must be decoded first")]
    MissingPrecondition { field: &'static str },

    #[error("Window size must be a positive integer (got {0})")]
    InvalidWindowSize(usize),

    #[error(
        "Frontier (HOMO {homo}, LUMO {lumo}) is not addressable in {len} orbital energies"
    )]
    FrontierOutOfRange { homo: isize, lumo: isize, len: usize },

    #[error("Degeneracy count {count} at position {index} is outside the supported range 0-3")]
    UnexpectedDegeneracyCount { index: usize, count: usize },
}

impl From<MissingField> for AnalysisError {
    fn from(missing: MissingField) -> Self {
        AnalysisError::MissingPrecondition { field: missing.0 }
    }
}
