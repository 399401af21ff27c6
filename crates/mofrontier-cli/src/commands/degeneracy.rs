use crate::cli::DegeneracyArgs;
use crate::config::builder::build_config;
use crate::config::models::ConfigSources;
use crate::error::Result;
use mofrontier::core::io::records::OrbitalRecordRow;
use mofrontier::workflows::classify::{self, Classification};
use tracing::{info, warn};

pub fn run(args: DegeneracyArgs) -> Result<()> {
    let config = build_config(&ConfigSources::from(&args))?;
    let tolerance = config.degeneracy.tolerance;

    info!("Reading plot-input rows from {:?}", &args.input);
    let (rows, classification) = classify::run_path(&args.input, tolerance)?;

    for line in table_lines(&rows, &classification) {
        println!("{}", line);
    }
    for anomaly in &classification.anomalies {
        warn!("{}", anomaly);
        eprintln!("⚠ {}", anomaly);
    }
    println!(
        "{} of {} level(s) lie within {} eV of a preceding level.",
        classification.degenerate_count(),
        rows.len(),
        tolerance
    );
    Ok(())
}

/// One line per row: compound, label, display energy, count and the plot
/// displacement of its tier.
pub fn table_lines(rows: &[OrbitalRecordRow], classification: &Classification) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<16} {:<10} {:>10} {:>6} {:>7} {:>7}",
        "compound", "label", "eV", "degen", "jitter", "offset"
    )];
    for ((row, count), tier) in rows
        .iter()
        .zip(&classification.counts)
        .zip(&classification.tiers)
    {
        lines.push(format!(
            "{:<16} {:<10} {:>10.2} {:>6} {:>7.2} {:>7}",
            row.compound,
            row.display_label(),
            row.energy_ev,
            count,
            tier.jitter_scale(),
            tier.label_offset_steps()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use mofrontier::core::io::records::write_records_to_path;
    use std::fs;
    use tempfile::tempdir;

    fn row(label: &str, energy: f64) -> OrbitalRecordRow {
        OrbitalRecordRow {
            compound: "NiTrans".to_string(),
            unrounded_energy_ev: energy,
            energy_ev: energy,
            symmetry_label: String::new(),
            orbital_label: label.to_string(),
            orbital_index: 0,
        }
    }

    #[test]
    fn table_lines_show_tier_displacements() {
        let rows = vec![row("HOMO-1", -6.02), row("HOMO", -6.0), row("LUMO", -2.0)];
        let classification = classify::run(&rows, 0.05);
        let lines = table_lines(&rows, &classification);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("compound"));
        let homo: Vec<_> = lines[2].split_whitespace().collect();
        assert_eq!(homo, vec!["NiTrans", "HOMO", "-6.00", "1", "1.00", "4"]);
        let lumo: Vec<_> = lines[3].split_whitespace().collect();
        assert_eq!(lumo, vec!["NiTrans", "LUMO", "-2.00", "0", "0.00", "2"]);
    }

    #[test]
    fn run_classifies_a_csv_file_with_tolerance_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("levels.csv");
        write_records_to_path(&path, &[row("HOMO", -6.0), row("LUMO", -5.9)]).unwrap();

        run(DegeneracyArgs {
            input: path,
            tolerance: Some(0.2),
            config: None,
            set_values: vec![],
        })
        .unwrap();
    }

    #[test]
    fn run_rejects_invalid_tolerance_from_set_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("levels.csv");
        fs::write(&path, "compound,unround_eV,eV,symmetry_label,orbital_label,orbital_num\n")
            .unwrap();

        let result = run(DegeneracyArgs {
            input: path,
            tolerance: None,
            config: None,
            set_values: vec!["degeneracy.tolerance=-1".to_string()],
        });
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
