use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Electron spin channel of a set of molecular orbitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    #[default]
    Alpha,
    Beta,
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Alpha => write!(f, "alpha"),
            Spin::Beta => write!(f, "beta"),
        }
    }
}

impl FromStr for Spin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha" | "a" => Ok(Spin::Alpha),
            "beta" | "b" => Ok(Spin::Beta),
            other => Err(format!("unknown spin '{}', expected 'alpha' or 'beta'", other)),
        }
    }
}

/// Zero-based HOMO and LUMO positions in an orbital energy array.
///
/// `homo` is signed: a spin channel without electrons has `homo == -1`, which
/// leaves the occupied half of a window empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontierIndices {
    pub homo: isize,
    pub lumo: isize,
}

impl FrontierIndices {
    /// Derives the frontier from an electron count: `homo = n - 1`, `lumo = n`.
    pub fn from_electron_count(electrons: usize) -> Self {
        let lumo = electrons as isize;
        Self {
            homo: lumo - 1,
            lumo,
        }
    }
}

/// Position of an orbital relative to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitalLabel {
    /// `HOMO` for offset 0, `HOMO-k` otherwise.
    Homo(usize),
    /// `LUMO` for offset 0, `LUMO+k` otherwise.
    Lumo(usize),
}

impl fmt::Display for OrbitalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OrbitalLabel::Homo(0) => write!(f, "HOMO"),
            OrbitalLabel::Homo(k) => write!(f, "HOMO-{}", k),
            OrbitalLabel::Lumo(0) => write!(f, "LUMO"),
            OrbitalLabel::Lumo(k) => write!(f, "LUMO+{}", k),
        }
    }
}

impl FromStr for OrbitalLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse_offset = |rest: &str| -> Result<usize, String> {
            rest.parse::<usize>()
                .map_err(|_| format!("invalid orbital label '{}'", s))
        };
        match s {
            "HOMO" => Ok(OrbitalLabel::Homo(0)),
            "LUMO" => Ok(OrbitalLabel::Lumo(0)),
            _ => {
                if let Some(rest) = s.strip_prefix("HOMO-") {
                    parse_offset(rest).map(OrbitalLabel::Homo)
                } else if let Some(rest) = s.strip_prefix("LUMO+") {
                    parse_offset(rest).map(OrbitalLabel::Lumo)
                } else {
                    Err(format!("invalid orbital label '{}'", s))
                }
            }
        }
    }
}

/// One orbital of a frontier window.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalWindowRecord {
    pub label: OrbitalLabel,
    pub orbital_index: usize,
    pub energy_ev: f64,
}
