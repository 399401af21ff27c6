//! Flat per-orbital rows exchanged with the plotting layer as CSV.
//!
//! Column names follow the plot-input files already in use:
//! `compound,unround_eV,eV,symmetry_label,orbital_label,orbital_num`.

use crate::core::models::orbitals::OrbitalWindowRecord;
use crate::core::units::round_to;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

/// Decimal places of the display energy column.
pub const DISPLAY_DECIMALS: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalRecordRow {
    pub compound: String,
    #[serde(rename = "unround_eV")]
    pub unrounded_energy_ev: f64,
    #[serde(rename = "eV")]
    pub energy_ev: f64,
    #[serde(default)]
    pub symmetry_label: String,
    pub orbital_label: String,
    #[serde(rename = "orbital_num")]
    pub orbital_index: usize,
}

impl OrbitalRecordRow {
    pub fn from_window_record(compound: &str, record: &OrbitalWindowRecord) -> Self {
        Self {
            compound: compound.to_string(),
            unrounded_energy_ev: record.energy_ev,
            energy_ev: round_to(record.energy_ev, DISPLAY_DECIMALS),
            symmetry_label: String::new(),
            orbital_label: record.label.to_string(),
            orbital_index: record.orbital_index,
        }
    }

    /// The label shown next to the level: the symmetry label when present,
    /// otherwise the frontier label.
    pub fn display_label(&self) -> &str {
        if self.symmetry_label.trim().is_empty() {
            &self.orbital_label
        } else {
            &self.symmetry_label
        }
    }
}

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub fn write_records<W: Write>(writer: W, rows: &[OrbitalRecordRow]) -> Result<(), RecordsError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(|e| RecordsError::Csv(e.into()))?;
    Ok(())
}

pub fn write_records_to_path(path: &Path, rows: &[OrbitalRecordRow]) -> Result<(), RecordsError> {
    let file = std::fs::File::create(path).map_err(|e| RecordsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_records(file, rows)
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<OrbitalRecordRow>, RecordsError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader
        .deserialize::<OrbitalRecordRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<OrbitalRecordRow>, RecordsError> {
    let file = std::fs::File::open(path).map_err(|e| RecordsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::orbitals::OrbitalLabel;
    use tempfile::tempdir;

    fn homo_row() -> OrbitalRecordRow {
        OrbitalRecordRow::from_window_record(
            "NiTrans",
            &OrbitalWindowRecord {
                label: OrbitalLabel::Homo(0),
                orbital_index: 42,
                energy_ev: -5.6789,
            },
        )
    }

    #[test]
    fn from_window_record_rounds_display_energy_only() {
        let row = homo_row();
        assert_eq!(row.unrounded_energy_ev, -5.6789);
        assert_eq!(row.energy_ev, -5.68);
        assert_eq!(row.orbital_label, "HOMO");
        assert_eq!(row.orbital_index, 42);
        assert_eq!(row.symmetry_label, "");
    }

    #[test]
    fn display_energy_ties_round_to_even() {
        let row = OrbitalRecordRow::from_window_record(
            "NiTrans",
            &OrbitalWindowRecord {
                label: OrbitalLabel::Lumo(1),
                orbital_index: 44,
                energy_ev: -5.125,
            },
        );
        assert_eq!(row.unrounded_energy_ev, -5.125);
        assert_eq!(row.energy_ev, -5.12);
    }

    #[test]
    fn write_records_uses_plot_input_header() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[homo_row()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("compound,unround_eV,eV,symmetry_label,orbital_label,orbital_num")
        );
        assert_eq!(lines.next(), Some("NiTrans,-5.6789,-5.68,,HOMO,42"));
    }

    #[test]
    fn read_records_accepts_files_written_elsewhere() {
        let csv_text = "\
compound,unround_eV,eV,symmetry_label,orbital_label,orbital_num
MTPP,-5.1234,-5.12,a2u,HOMO,160
MTPP,-2.5,-2.5,,LUMO,161
";
        let rows = read_records(csv_text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].display_label(), "a2u");
        assert_eq!(rows[1].display_label(), "LUMO");
        assert_eq!(rows[1].orbital_index, 161);
    }

    #[test]
    fn read_records_rejects_malformed_rows() {
        let csv_text = "compound,unround_eV,eV,symmetry_label,orbital_label,orbital_num\nX,not-a-number,1,,HOMO,1\n";
        assert!(matches!(
            read_records(csv_text.as_bytes()),
            Err(RecordsError::Csv(_))
        ));
    }

    #[test]
    fn records_survive_a_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orbitals.csv");
        let rows = vec![homo_row()];
        write_records_to_path(&path, &rows).unwrap();
        assert_eq!(read_records_from_path(&path).unwrap(), rows);
    }

    #[test]
    fn read_records_from_missing_path_is_io_error() {
        let dir = tempdir().unwrap();
        let result = read_records_from_path(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(RecordsError::Io { .. })));
    }
}
