use super::elements::element_symbol;
use super::formula::Formula;
use super::orbitals::{FrontierIndices, Spin};
use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// A field required by a derived quantity was never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required field '{0}' has not been decoded")]
pub struct MissingField(pub &'static str);

/// An atom with a resolved element and a Cartesian position in Ångström.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSite {
    pub atomic_number: u8,
    pub symbol: Option<&'static str>,
    pub position: Point3<f64>,
}

/// The contents of one formatted checkpoint file.
///
/// Every decoded field is optional: `None` means the corresponding section was
/// never encountered, which is distinct from a decoded zero. Quantities that
/// depend on several fields (frontier indices, gaps, the formula) are derived
/// on request, so the order in which sections appear in the file does not
/// matter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MolecularSystem {
    /// Free-text title from the first line.
    pub title: Option<String>,
    /// Job type from the second line (e.g. `SP`, `FOpt`).
    pub calculation_type: Option<String>,
    pub method: Option<String>,
    pub basis_set: Option<String>,

    pub atom_count: Option<usize>,
    pub charge: Option<i32>,
    pub multiplicity: Option<u32>,
    pub electron_count: Option<usize>,
    pub alpha_electron_count: Option<usize>,
    pub beta_electron_count: Option<usize>,
    pub basis_function_count: Option<usize>,
    pub independent_function_count: Option<usize>,

    /// SCF energy in Hartree, as stored in the file.
    pub scf_energy: Option<f64>,
    /// Total energy in eV.
    pub total_energy_ev: Option<f64>,
    /// Dipole moment in Debye.
    pub dipole_debye: Option<Vector3<f64>>,

    pub atomic_numbers: Option<Vec<u8>>,
    pub nuclear_charges: Option<Vec<f64>>,
    /// Cartesian positions in Ångström, one per atom.
    pub positions: Option<Vec<Point3<f64>>>,

    /// Alpha orbital energies in eV, rounded to 4 decimals, in file order.
    pub alpha_orbital_energies: Option<Vec<f64>>,
    /// Beta orbital energies in eV at full precision. Present for open-shell systems only.
    pub beta_orbital_energies: Option<Vec<f64>>,
    pub alpha_mo_coefficients: Option<Vec<f64>>,
    pub beta_mo_coefficients: Option<Vec<f64>>,

    /// Geometry count of each optimization stored in the file.
    pub optimization_geometry_counts: Option<Vec<usize>>,
}

impl MolecularSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electron_count_for(&self, spin: Spin) -> Result<usize, MissingField> {
        match spin {
            Spin::Alpha => self
                .alpha_electron_count
                .ok_or(MissingField("alpha_electron_count")),
            Spin::Beta => self
                .beta_electron_count
                .ok_or(MissingField("beta_electron_count")),
        }
    }

    pub fn orbital_energies(&self, spin: Spin) -> Result<&[f64], MissingField> {
        match spin {
            Spin::Alpha => self
                .alpha_orbital_energies
                .as_deref()
                .ok_or(MissingField("alpha_orbital_energies")),
            Spin::Beta => self
                .beta_orbital_energies
                .as_deref()
                .ok_or(MissingField("beta_orbital_energies")),
        }
    }

    /// Derives the HOMO/LUMO indices of a spin channel.
    ///
    /// Both the electron count and the orbital energies of that channel must
    /// have been decoded.
    pub fn frontier(&self, spin: Spin) -> Result<FrontierIndices, MissingField> {
        let electrons = self.electron_count_for(spin)?;
        self.orbital_energies(spin)?;
        Ok(FrontierIndices::from_electron_count(electrons))
    }

    /// Returns `E(LUMO) - E(HOMO)` in eV, or `None` if either orbital lies
    /// outside the energy array.
    pub fn homo_lumo_gap(&self, spin: Spin) -> Result<Option<f64>, MissingField> {
        let frontier = self.frontier(spin)?;
        let energies = self.orbital_energies(spin)?;
        let homo = usize::try_from(frontier.homo).ok();
        let lumo = usize::try_from(frontier.lumo).ok();
        Ok(match (homo, lumo) {
            (Some(h), Some(l)) if l < energies.len() => Some(energies[l] - energies[h]),
            _ => None,
        })
    }

    pub fn is_open_shell(&self) -> bool {
        self.beta_orbital_energies.is_some()
    }

    pub fn formula(&self) -> Result<Formula, MissingField> {
        self.atomic_numbers
            .as_deref()
            .map(Formula::from_atomic_numbers)
            .ok_or(MissingField("atomic_numbers"))
    }

    /// Pairs atomic numbers with positions.
    ///
    /// Only defined when both arrays were decoded with equal lengths.
    pub fn atom_sites(&self) -> Result<Vec<AtomSite>, MissingField> {
        let numbers = self
            .atomic_numbers
            .as_deref()
            .ok_or(MissingField("atomic_numbers"))?;
        let positions = self
            .positions
            .as_deref()
            .ok_or(MissingField("positions"))?;
        if numbers.len() != positions.len() {
            return Err(MissingField("positions"));
        }
        Ok(numbers
            .iter()
            .zip(positions)
            .map(|(&z, &position)| AtomSite {
                atomic_number: z,
                symbol: element_symbol(z),
                position,
            })
            .collect())
    }

    /// Number of optimizations recorded in the file.
    pub fn optimization_count(&self) -> Option<usize> {
        self.optimization_geometry_counts.as_ref().map(Vec::len)
    }

    /// Geometry steps of the first optimization.
    pub fn optimization_steps(&self) -> Option<usize> {
        self.optimization_geometry_counts
            .as_ref()
            .and_then(|counts| counts.first().copied())
    }

    /// Checks cross-field invariants between sections that were decoded.
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(n) = self.atom_count {
            let per_atom = [
                ("atomic_numbers", self.atomic_numbers.as_ref().map(Vec::len)),
                ("nuclear_charges", self.nuclear_charges.as_ref().map(Vec::len)),
                ("positions", self.positions.as_ref().map(Vec::len)),
            ];
            for (name, len) in per_atom {
                if let Some(len) = len {
                    if len != n {
                        return Err(format!(
                            "{} has {} entries but the file declares {} atoms",
                            name, len, n
                        ));
                    }
                }
            }
        }

        if let (Some(numbers), Some(positions)) = (&self.atomic_numbers, &self.positions) {
            if numbers.len() != positions.len() {
                return Err(format!(
                    "{} atomic numbers but {} positions",
                    numbers.len(),
                    positions.len()
                ));
            }
        }

        if let Some(nbasis) = self.basis_function_count {
            let orbital_arrays = [
                ("alpha_orbital_energies", &self.alpha_orbital_energies),
                ("beta_orbital_energies", &self.beta_orbital_energies),
            ];
            for (name, energies) in orbital_arrays {
                if let Some(energies) = energies {
                    let matches_independent =
                        self.independent_function_count == Some(energies.len());
                    if energies.len() != nbasis && !matches_independent {
                        return Err(format!(
                            "{} has {} entries but the file declares {} basis functions",
                            name,
                            energies.len(),
                            nbasis
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
