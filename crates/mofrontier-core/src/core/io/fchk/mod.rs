//! Reader for Gaussian formatted checkpoint (`.fchk`) files.
//!
//! The first line is a free-text title and the second line carries the job
//! type, method and basis set. Every later line is scanned for a known section
//! header (see [`sections::HEADER_RULES`]); a recognized header decodes its
//! scalar or array payload and the scan resumes after the lines it consumed.
//! Unrecognized lines are skipped.

pub mod lines;
pub mod sections;

use self::lines::LineBuffer;
use self::sections::SectionContext;
use crate::core::io::traits::ChemistryFile;
use crate::core::models::orbitals::Spin;
use crate::core::models::system::MolecularSystem;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum FchkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("File is empty: the title line is missing")]
    Empty,
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: FchkParseErrorKind,
    },
    #[error("Malformed section '{label}' starting on line {line}: {kind}")]
    MalformedHeader {
        line: usize,
        label: &'static str,
        kind: MalformedHeaderKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Debug, Error)]
pub enum FchkParseErrorKind {
    #[error("Invalid integer value '{value}'")]
    InvalidInt { value: String },
    #[error("Invalid float value '{value}'")]
    InvalidFloat { value: String },
    #[error("Array header does not end with an element count (found '{value}')")]
    MissingCount { value: String },
    #[error("Job line has {tokens} token(s); expected type, method and basis set")]
    JobLineTooShort { tokens: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedHeaderKind {
    #[error("expected {expected} values but only {found} were available")]
    Truncated { expected: usize, found: usize },
    #[error("expected {expected} values but the payload continues past them")]
    Overrun { expected: usize },
    #[error("declared count {0} is not a multiple of 3")]
    NotMultipleOfThree(usize),
    #[error("declared count {declared} does not match the required {required}")]
    UnexpectedCount { required: usize, declared: usize },
}

/// A section recognized while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRecord {
    /// One-based line number of the header.
    pub line: usize,
    pub label: &'static str,
    /// Lines consumed, header included.
    pub lines_consumed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FchkMetadata {
    pub sections: Vec<SectionRecord>,
    pub skipped_lines: usize,
    pub total_lines: usize,
}

impl FchkMetadata {
    pub fn contains(&self, label: &str) -> bool {
        self.sections.iter().any(|s| s.label == label)
    }
}

pub struct FchkFile;

impl FchkFile {
    /// Decodes a formatted checkpoint file held in memory.
    pub fn read_from_str(text: &str) -> Result<(MolecularSystem, FchkMetadata), FchkError> {
        decode_lines(&LineBuffer::from_text(text))
    }
}

impl ChemistryFile for FchkFile {
    type Metadata = FchkMetadata;
    type Error = FchkError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let lines = LineBuffer::read_from(reader)?;
        decode_lines(&lines)
    }
}

fn decode_lines(lines: &LineBuffer) -> Result<(MolecularSystem, FchkMetadata), FchkError> {
    let mut system = MolecularSystem::new();
    let mut metadata = FchkMetadata {
        total_lines: lines.len(),
        ..Default::default()
    };

    let title = lines.get(0).ok_or(FchkError::Empty)?;
    system.title = Some(title.trim().to_string());
    decode_job_line(lines, &mut system)?;

    let mut index = 2;
    while index < lines.len() {
        let line = lines.get(index).unwrap_or("");
        let Some(rule) = sections::match_header(line) else {
            trace!("Skipping unrecognized line {}", index + 1);
            metadata.skipped_lines += 1;
            index += 1;
            continue;
        };

        let ctx = SectionContext {
            lines,
            index,
            label: rule.prefix,
        };
        let consumed = (rule.handler)(&ctx, &mut system)?;
        debug!(
            "Decoded section '{}' at line {} ({} line(s))",
            rule.prefix,
            index + 1,
            consumed
        );
        metadata.sections.push(SectionRecord {
            line: index + 1,
            label: rule.prefix,
            lines_consumed: consumed,
        });
        index += consumed;
    }

    system.validate().map_err(FchkError::Inconsistency)?;

    for spin in [Spin::Alpha, Spin::Beta] {
        if let Ok(frontier) = system.frontier(spin) {
            debug!(
                "{} frontier: HOMO index {}, LUMO index {}",
                spin, frontier.homo, frontier.lumo
            );
        }
    }

    Ok((system, metadata))
}

/// Reads the job type, method and basis set from the second line.
///
/// Tokens 0 and 1 are the job type and method. The basis set is token 3 when
/// the line has at least four tokens and token 2 when it has exactly three,
/// which is how current Gaussian versions lay the line out.
fn decode_job_line(lines: &LineBuffer, system: &mut MolecularSystem) -> Result<(), FchkError> {
    let tokens: Vec<&str> = lines.tokens(1).collect();
    if tokens.len() < 3 {
        return Err(FchkError::Parse {
            line: 2,
            kind: FchkParseErrorKind::JobLineTooShort {
                tokens: tokens.len(),
            },
        });
    }
    let basis = if tokens.len() >= 4 { tokens[3] } else { tokens[2] };

    system.calculation_type = Some(tokens[0].to_string());
    system.method = Some(tokens[1].to_string());
    system.basis_set = Some(basis.to_string());
    Ok(())
}
