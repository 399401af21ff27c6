use super::error::AnalysisError;
use crate::core::models::orbitals::{FrontierIndices, OrbitalLabel, OrbitalWindowRecord, Spin};
use crate::core::models::system::MolecularSystem;
use tracing::debug;

/// Orbitals around the frontier, occupied side first, each side in ascending
/// orbital index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontierWindow {
    records: Vec<OrbitalWindowRecord>,
}

impl FrontierWindow {
    pub fn records(&self) -> &[OrbitalWindowRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<OrbitalWindowRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, label: OrbitalLabel) -> Option<&OrbitalWindowRecord> {
        self.records.iter().find(|r| r.label == label)
    }

    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label.to_string()).collect()
    }
}

/// Selects up to `size` orbitals on each side of the frontier of `spin`.
///
/// # Errors
///
/// Fails with [`AnalysisError::MissingPrecondition`] when the electron count or
/// orbital energies of the channel were never decoded.
pub fn select_window(
    system: &MolecularSystem,
    spin: Spin,
    size: usize,
) -> Result<FrontierWindow, AnalysisError> {
    let frontier = system.frontier(spin)?;
    let energies = system.orbital_energies(spin)?;
    debug!(
        "Selecting {} orbital(s) per side around {} HOMO {} / LUMO {}",
        size, spin, frontier.homo, frontier.lumo
    );
    select_from_energies(energies, frontier, size)
}

/// Window selection over a bare energy array.
///
/// The occupied side covers `homo - size + 1 ..= homo` and silently drops
/// negative indices. The virtual side covers `lumo ..= lumo + size - 1` and
/// stops at the end of the array. Either side may therefore be shorter than
/// `size`.
pub fn select_from_energies(
    energies: &[f64],
    frontier: FrontierIndices,
    size: usize,
) -> Result<FrontierWindow, AnalysisError> {
    if size == 0 {
        return Err(AnalysisError::InvalidWindowSize(size));
    }
    let len = energies.len();
    if frontier.homo >= len as isize || frontier.lumo < 0 {
        return Err(AnalysisError::FrontierOutOfRange {
            homo: frontier.homo,
            lumo: frontier.lumo,
            len,
        });
    }

    // Neither side can hold more than the whole array.
    let span = size.min(len) as isize;
    let mut records = Vec::with_capacity(2 * size.min(len));

    let first_occupied = frontier.homo.saturating_sub(span - 1).max(0);
    for i in first_occupied..=frontier.homo {
        let index = i as usize;
        records.push(OrbitalWindowRecord {
            label: OrbitalLabel::Homo((frontier.homo - i) as usize),
            orbital_index: index,
            energy_ev: energies[index],
        });
    }

    let end_virtual = frontier.lumo.saturating_add(span).min(len as isize);
    for i in frontier.lumo..end_virtual {
        let index = i as usize;
        records.push(OrbitalWindowRecord {
            label: OrbitalLabel::Lumo((i - frontier.lumo) as usize),
            orbital_index: index,
            energy_ev: energies[index],
        });
    }

    Ok(FrontierWindow { records })
}
