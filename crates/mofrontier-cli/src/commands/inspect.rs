use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use mofrontier::core::io::fchk::{FchkFile, FchkMetadata};
use mofrontier::core::io::traits::ChemistryFile;
use mofrontier::core::models::orbitals::Spin;
use mofrontier::core::models::system::MolecularSystem;
use std::fmt::Display;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Loading checkpoint file from {:?}", &args.input);
    let (system, metadata) =
        FchkFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    for line in describe(&system, &metadata) {
        println!("{}", line);
    }
    Ok(())
}

fn field<T: Display>(name: &str, value: Option<T>) -> String {
    match value {
        Some(v) => format!("{:<28}{}", name, v),
        None => format!("{:<28}-", name),
    }
}

/// Attribute listing of a decoded file, one line per attribute.
pub fn describe(system: &MolecularSystem, metadata: &FchkMetadata) -> Vec<String> {
    let mut lines = vec![
        field("Title", system.title.as_deref()),
        field("Calculation type", system.calculation_type.as_deref()),
        field("Method", system.method.as_deref()),
        field("Basis set", system.basis_set.as_deref()),
        field("Atoms", system.atom_count),
        field("Formula", system.formula().ok()),
        field("Charge", system.charge),
        field("Multiplicity", system.multiplicity),
        field("Electrons", system.electron_count),
        field("Alpha electrons", system.alpha_electron_count),
        field("Beta electrons", system.beta_electron_count),
        field("Basis functions", system.basis_function_count),
        field("Independent functions", system.independent_function_count),
        field("SCF energy (Hartree)", system.scf_energy),
        field("Total energy (eV)", system.total_energy_ev),
        field(
            "Dipole moment (Debye)",
            system
                .dipole_debye
                .map(|d| format!("{:.4} {:.4} {:.4} |{:.4}|", d.x, d.y, d.z, d.norm())),
        ),
        field("Optimization steps", system.optimization_steps()),
    ];

    let spins: &[Spin] = if system.beta_orbital_energies.is_some() {
        &[Spin::Alpha, Spin::Beta]
    } else {
        &[Spin::Alpha]
    };
    for &spin in spins {
        let Ok(frontier) = system.frontier(spin) else {
            continue;
        };
        lines.push(field(&format!("HOMO ({})", spin), Some(frontier.homo)));
        lines.push(field(&format!("LUMO ({})", spin), Some(frontier.lumo)));
        lines.push(field(
            &format!("HOMO-LUMO gap ({}, eV)", spin),
            system.homo_lumo_gap(spin).ok().flatten(),
        ));
    }

    lines.push(format!(
        "{} section(s) recognized, {} of {} line(s) skipped",
        metadata.sections.len(),
        metadata.skipped_lines,
        metadata.total_lines
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const DOUBLET_FCHK: &str = "\
Methyl radical
SP        UHF                                                         STO-3G
Number of atoms                            I                1
Multiplicity                               I                2
Number of alpha electrons                  I                2
Number of beta electrons                   I                1
Atomic numbers                             I   N=           1
           6
Alpha Orbital Energies                     R   N=           3
 -1.00000000E+00 -5.00000000E-01  1.00000000E-01
Beta Orbital Energies                      R   N=           3
 -9.00000000E-01  2.00000000E-02  1.50000000E-01
";

    #[test]
    fn describe_lists_identity_and_both_spin_channels() {
        let (system, metadata) = FchkFile::read_from_str(DOUBLET_FCHK).unwrap();
        let lines = describe(&system, &metadata);

        assert!(lines[0].starts_with("Title") && lines[0].ends_with("Methyl radical"));
        assert!(lines.iter().any(|l| l.starts_with("Formula") && l.ends_with("C")));
        assert!(lines.iter().any(|l| l.starts_with("Charge") && l.ends_with('-')));
        assert!(lines.iter().any(|l| l.starts_with("HOMO (alpha)") && l.ends_with('1')));
        assert!(lines.iter().any(|l| l.starts_with("HOMO (beta)") && l.ends_with('0')));
        assert!(lines.iter().any(|l| l.starts_with("LUMO (beta)") && l.ends_with('1')));
        assert_eq!(
            lines.last().unwrap(),
            "7 section(s) recognized, 0 of 12 line(s) skipped"
        );
    }

    #[test]
    fn run_reports_unreadable_files_with_their_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.fchk");
        fs::write(&path, "").unwrap();

        let result = run(InspectArgs {
            input: path.clone(),
        });
        match result {
            Err(CliError::FileParsing { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn run_accepts_a_valid_file() {
        let dir = tempdir().unwrap();
        let path: PathBuf = dir.path().join("ch3.fchk");
        fs::write(&path, DOUBLET_FCHK).unwrap();
        run(InspectArgs { input: path }).unwrap();
    }
}
