use super::WorkflowError;
use crate::analysis::degeneracy::{DegeneracyTier, assign_tiers, classify_degeneracy};
use crate::analysis::error::AnalysisError;
use crate::core::io::records::{OrbitalRecordRow, read_records_from_path};
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    pub counts: Vec<usize>,
    pub tiers: Vec<DegeneracyTier>,
    /// Positions whose count fell outside 0-3 and were clamped.
    pub anomalies: Vec<AnalysisError>,
}

impl Classification {
    pub fn degenerate_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

/// Classifies rows in the order given, on the display (`eV`) column.
#[instrument(skip_all, name = "classify_workflow")]
pub fn run(rows: &[OrbitalRecordRow], tolerance: f64) -> Classification {
    let energies: Vec<f64> = rows.iter().map(|row| row.energy_ev).collect();
    let counts = classify_degeneracy(&energies, tolerance);
    let assignment = assign_tiers(&counts);

    let classification = Classification {
        counts,
        tiers: assignment.tiers,
        anomalies: assignment.anomalies,
    };
    info!(
        "Classified {} level(s) at tolerance {} eV: {} degenerate with a neighbour.",
        rows.len(),
        tolerance,
        classification.degenerate_count()
    );
    classification
}

/// Reads a plot-input CSV and classifies its rows.
pub fn run_path(
    path: &Path,
    tolerance: f64,
) -> Result<(Vec<OrbitalRecordRow>, Classification), WorkflowError> {
    let rows = read_records_from_path(path)?;
    let classification = run(&rows, tolerance);
    Ok((rows, classification))
}
