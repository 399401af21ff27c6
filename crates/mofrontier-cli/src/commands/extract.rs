use crate::cli::ExtractArgs;
use crate::config::builder::build_config;
use crate::config::models::ConfigSources;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use mofrontier::analysis::progress::ProgressReporter;
use mofrontier::core::io::records::write_records_to_path;
use mofrontier::workflows::WorkflowError;
use mofrontier::workflows::extract::{self, Extraction, ExtractionJob};
use std::path::PathBuf;
use tracing::{info, warn};

pub fn run(args: ExtractArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let config = build_config(&ConfigSources::from(&args))?;
    let jobs = build_jobs(&args.inputs, &args.compounds)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Extracting {} {} orbital(s) per side from {} file(s)...",
        config.window.size,
        config.window.spin,
        jobs.len()
    );
    let results = extract::run_batch(&jobs, &config, &reporter);

    let mut extractions = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(extraction) => {
                for line in report_lines(&extraction) {
                    println!("{}", line);
                }
                extractions.push(extraction);
            }
            Err(e) => {
                failed += 1;
                eprintln!("✗ {}: {}", job.path.display(), e);
            }
        }
    }

    if let Some(output) = &args.output {
        let rows = extract::collect_rows(&extractions);
        info!("Writing {} row(s) to {:?}", rows.len(), output);
        write_records_to_path(output, &rows).map_err(WorkflowError::from)?;
        println!("✓ Plot-input rows written to: {}", output.display());
    }

    if failed > 0 {
        warn!("{} of {} file(s) failed.", failed, jobs.len());
        return Err(CliError::BatchFailures {
            failed,
            total: jobs.len(),
        });
    }
    Ok(())
}

/// Pairs inputs with compound names. Without explicit names, each file stem is
/// used.
pub fn build_jobs(inputs: &[PathBuf], compounds: &[String]) -> Result<Vec<ExtractionJob>> {
    if compounds.is_empty() {
        return Ok(inputs.iter().map(ExtractionJob::from_path).collect());
    }
    if compounds.len() != inputs.len() {
        return Err(CliError::Argument(format!(
            "{} compound name(s) given for {} input file(s)",
            compounds.len(),
            inputs.len()
        )));
    }
    Ok(inputs
        .iter()
        .zip(compounds)
        .map(|(path, compound)| ExtractionJob::new(path, compound.as_str()))
        .collect())
}

pub fn report_lines(extraction: &Extraction) -> Vec<String> {
    let system = &extraction.system;
    let mut lines = vec![format!(
        "== {} ({} {}/{}) ==",
        extraction.compound,
        system.calculation_type.as_deref().unwrap_or("?"),
        system.method.as_deref().unwrap_or("?"),
        system.basis_set.as_deref().unwrap_or("?"),
    )];
    lines.extend(extraction.window.records().iter().map(|record| {
        format!(
            "{}: Orbital Number = {}, Energy = {}",
            record.label, record.orbital_index, record.energy_ev
        )
    }));
    lines
}
