//! Header recognition and payload decoding for formatted checkpoint sections.
//!
//! Each recognized header maps to a handler that reads its payload into a
//! [`MolecularSystem`] and returns how many lines it consumed, header included.
//! Scalar sections consume one line; array sections also consume the lines
//! holding exactly the declared number of values.

use super::lines::LineBuffer;
use super::{FchkError, FchkParseErrorKind, MalformedHeaderKind};
use crate::core::models::system::MolecularSystem;
use crate::core::units::{AU_TO_DEBYE, BOHR_TO_ANGSTROM, HARTREE_TO_EV, round_to};
use nalgebra::{Point3, Vector3};
use std::str::FromStr;

/// Decimal places kept for alpha orbital energies after conversion to eV.
const ALPHA_ENERGY_DECIMALS: i32 = 4;

/// Location of a header line being decoded.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub lines: &'a LineBuffer,
    /// Zero-based index of the header line.
    pub index: usize,
    pub label: &'static str,
}

impl SectionContext<'_> {
    fn line_number(&self) -> usize {
        self.index + 1
    }
}

pub type SectionHandler = fn(&SectionContext<'_>, &mut MolecularSystem) -> Result<usize, FchkError>;

pub struct HeaderRule {
    pub prefix: &'static str,
    pub handler: SectionHandler,
}

/// Recognized headers in match order. Only the first matching rule applies.
pub static HEADER_RULES: &[HeaderRule] = &[
    HeaderRule { prefix: "Number of atoms", handler: atom_count },
    HeaderRule { prefix: "Charge", handler: charge },
    HeaderRule { prefix: "Multiplicity", handler: multiplicity },
    HeaderRule { prefix: "Number of electrons", handler: electron_count },
    HeaderRule { prefix: "Number of alpha electrons", handler: alpha_electron_count },
    HeaderRule { prefix: "Number of beta electrons", handler: beta_electron_count },
    HeaderRule { prefix: "Number of basis functions", handler: basis_function_count },
    HeaderRule { prefix: "Number of independent functions", handler: independent_function_count },
    HeaderRule { prefix: "Atomic numbers", handler: atomic_numbers },
    HeaderRule { prefix: "Nuclear charges", handler: nuclear_charges },
    HeaderRule { prefix: "Current cartesian coordinates", handler: cartesian_coordinates },
    HeaderRule { prefix: "Alpha Orbital Energies", handler: alpha_orbital_energies },
    HeaderRule { prefix: "Beta Orbital Energies", handler: beta_orbital_energies },
    HeaderRule { prefix: "Total Energy", handler: total_energy },
    HeaderRule { prefix: "SCF Energy", handler: scf_energy },
    HeaderRule { prefix: "Optimization Number of geometries", handler: optimization_geometries },
    HeaderRule { prefix: "Alpha MO coefficients", handler: alpha_mo_coefficients },
    HeaderRule { prefix: "Beta MO coefficients", handler: beta_mo_coefficients },
    HeaderRule { prefix: "Dipole Moment", handler: dipole_moment },
];

/// Finds the rule whose prefix starts the (left-trimmed) line.
pub fn match_header(line: &str) -> Option<&'static HeaderRule> {
    let line = line.trim_start();
    HEADER_RULES.iter().find(|rule| line.starts_with(rule.prefix))
}

fn parse_scalar<T: FromStr>(
    ctx: &SectionContext<'_>,
    invalid: fn(String) -> FchkParseErrorKind,
) -> Result<T, FchkError> {
    let token = ctx.lines.last_token(ctx.index).unwrap_or("");
    token.parse().map_err(|_| FchkError::Parse {
        line: ctx.line_number(),
        kind: invalid(token.to_string()),
    })
}

fn invalid_int(value: String) -> FchkParseErrorKind {
    FchkParseErrorKind::InvalidInt { value }
}

fn invalid_float(value: String) -> FchkParseErrorKind {
    FchkParseErrorKind::InvalidFloat { value }
}

fn declared_count(ctx: &SectionContext<'_>) -> Result<usize, FchkError> {
    parse_scalar(ctx, |value| FchkParseErrorKind::MissingCount { value })
}

/// Reads exactly `count` values from the lines following the header.
///
/// Tokens are consumed left to right across lines. A token that `convert`
/// rejects (typically the first word of the next header) or the end of the
/// buffer before `count` values is a truncated section; a line that carries
/// more values than remain to be read is an overrun. Returns the values and
/// the number of payload lines consumed.
fn read_array<T>(
    ctx: &SectionContext<'_>,
    count: usize,
    convert: impl Fn(&str) -> Option<T>,
) -> Result<(Vec<T>, usize), FchkError> {
    let malformed = |kind| FchkError::MalformedHeader {
        line: ctx.line_number(),
        label: ctx.label,
        kind,
    };

    let mut values = Vec::with_capacity(count);
    let mut cursor = ctx.index + 1;
    while values.len() < count {
        let Some(line) = ctx.lines.get(cursor) else {
            return Err(malformed(MalformedHeaderKind::Truncated {
                expected: count,
                found: values.len(),
            }));
        };
        for token in line.split_whitespace() {
            if values.len() == count {
                return Err(malformed(MalformedHeaderKind::Overrun { expected: count }));
            }
            match convert(token) {
                Some(value) => values.push(value),
                None => {
                    return Err(malformed(MalformedHeaderKind::Truncated {
                        expected: count,
                        found: values.len(),
                    }));
                }
            }
        }
        cursor += 1;
    }
    Ok((values, cursor - ctx.index - 1))
}

fn read_declared_array<T>(
    ctx: &SectionContext<'_>,
    convert: impl Fn(&str) -> Option<T>,
) -> Result<(Vec<T>, usize), FchkError> {
    let count = declared_count(ctx)?;
    read_array(ctx, count, convert)
}

fn parse_f64(token: &str) -> Option<f64> {
    token.parse().ok()
}

fn atom_count(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    system.atom_count = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn charge(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    system.charge = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn multiplicity(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    system.multiplicity = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn electron_count(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    system.electron_count = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn alpha_electron_count(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    system.alpha_electron_count = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn beta_electron_count(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    system.beta_electron_count = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn basis_function_count(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    system.basis_function_count = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn independent_function_count(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    system.independent_function_count = Some(parse_scalar(ctx, invalid_int)?);
    Ok(1)
}

fn total_energy(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    let hartree: f64 = parse_scalar(ctx, invalid_float)?;
    system.total_energy_ev = Some(hartree * HARTREE_TO_EV);
    Ok(1)
}

fn scf_energy(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    system.scf_energy = Some(parse_scalar(ctx, invalid_float)?);
    Ok(1)
}

fn atomic_numbers(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    let (values, consumed) = read_declared_array(ctx, |t| t.parse::<u8>().ok())?;
    system.atomic_numbers = Some(values);
    Ok(1 + consumed)
}

fn nuclear_charges(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    let (values, consumed) = read_declared_array(ctx, parse_f64)?;
    system.nuclear_charges = Some(values);
    Ok(1 + consumed)
}

fn cartesian_coordinates(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    let count = declared_count(ctx)?;
    if count % 3 != 0 {
        return Err(FchkError::MalformedHeader {
            line: ctx.line_number(),
            label: ctx.label,
            kind: MalformedHeaderKind::NotMultipleOfThree(count),
        });
    }
    let (flat, consumed) = read_array(ctx, count, |t| {
        parse_f64(t).map(|bohr| bohr * BOHR_TO_ANGSTROM)
    })?;
    let positions = flat
        .chunks_exact(3)
        .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
        .collect();
    system.positions = Some(positions);
    Ok(1 + consumed)
}

fn alpha_orbital_energies(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    let (values, consumed) = read_declared_array(ctx, |t| {
        parse_f64(t).map(|hartree| round_to(hartree * HARTREE_TO_EV, ALPHA_ENERGY_DECIMALS))
    })?;
    system.alpha_orbital_energies = Some(values);
    Ok(1 + consumed)
}

// Beta energies keep full precision; only alpha energies are rounded.
fn beta_orbital_energies(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    let (values, consumed) =
        read_declared_array(ctx, |t| parse_f64(t).map(|hartree| hartree * HARTREE_TO_EV))?;
    system.beta_orbital_energies = Some(values);
    Ok(1 + consumed)
}

fn alpha_mo_coefficients(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    let (values, consumed) = read_declared_array(ctx, parse_f64)?;
    system.alpha_mo_coefficients = Some(values);
    Ok(1 + consumed)
}

fn beta_mo_coefficients(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    let (values, consumed) = read_declared_array(ctx, parse_f64)?;
    system.beta_mo_coefficients = Some(values);
    Ok(1 + consumed)
}

fn optimization_geometries(
    ctx: &SectionContext<'_>,
    system: &mut MolecularSystem,
) -> Result<usize, FchkError> {
    let (values, consumed) = read_declared_array(ctx, |t| t.parse::<usize>().ok())?;
    system.optimization_geometry_counts = Some(values);
    Ok(1 + consumed)
}

fn dipole_moment(ctx: &SectionContext<'_>, system: &mut MolecularSystem) -> Result<usize, FchkError> {
    let count = declared_count(ctx)?;
    if count != 3 {
        return Err(FchkError::MalformedHeader {
            line: ctx.line_number(),
            label: ctx.label,
            kind: MalformedHeaderKind::UnexpectedCount {
                required: 3,
                declared: count,
            },
        });
    }
    let (values, consumed) = read_array(ctx, count, |t| parse_f64(t).map(|au| au * AU_TO_DEBYE))?;
    system.dipole_debye = Some(Vector3::new(values[0], values[1], values[2]));
    Ok(1 + consumed)
}
