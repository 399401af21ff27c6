use super::WorkflowError;
use crate::analysis::config::AnalysisConfig;
use crate::analysis::progress::{Progress, ProgressReporter};
use crate::analysis::window::{FrontierWindow, select_window};
use crate::core::io::fchk::{FchkFile, FchkMetadata};
use crate::core::io::records::OrbitalRecordRow;
use crate::core::io::traits::ChemistryFile;
use crate::core::models::system::MolecularSystem;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// A checkpoint file and the compound name its rows are tagged with.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionJob {
    pub path: PathBuf,
    pub compound: String,
}

impl ExtractionJob {
    pub fn new(path: impl Into<PathBuf>, compound: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            compound: compound.into(),
        }
    }

    /// Uses the file stem as the compound name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let compound = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, compound }
    }
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub compound: String,
    pub system: MolecularSystem,
    pub metadata: FchkMetadata,
    pub window: FrontierWindow,
    pub rows: Vec<OrbitalRecordRow>,
}

/// Decodes one file and selects its frontier window.
#[instrument(skip_all, name = "extract_workflow", fields(compound = %job.compound))]
pub fn run(job: &ExtractionJob, config: &AnalysisConfig) -> Result<Extraction, WorkflowError> {
    info!("Decoding '{}'.", job.path.display());
    let (system, metadata) = FchkFile::read_from_path(&job.path)?;
    run_system(&job.compound, system, metadata, config)
}

/// Selects the window of an already decoded system.
pub fn run_system(
    compound: &str,
    system: MolecularSystem,
    metadata: FchkMetadata,
    config: &AnalysisConfig,
) -> Result<Extraction, WorkflowError> {
    let window = select_window(&system, config.window.spin, config.window.size)?;
    let rows = window
        .records()
        .iter()
        .map(|record| OrbitalRecordRow::from_window_record(compound, record))
        .collect();

    info!(
        "Selected {} {} orbital(s) for '{}'.",
        window.len(),
        config.window.spin,
        compound
    );
    Ok(Extraction {
        compound: compound.to_string(),
        system,
        metadata,
        window,
        rows,
    })
}

/// Decodes every job independently on the rayon pool.
///
/// One result is returned per job, in the order of `jobs`. A failing file does
/// not stop the others.
#[instrument(skip_all, name = "extract_batch_workflow")]
pub fn run_batch(
    jobs: &[ExtractionJob],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Vec<Result<Extraction, WorkflowError>> {
    reporter.report(Progress::PhaseStart { name: "Extraction" });
    reporter.report(Progress::BatchStart {
        total_files: jobs.len() as u64,
    });
    info!("Extracting frontier windows from {} file(s).", jobs.len());

    let results: Vec<_> = jobs
        .par_iter()
        .map(|job| {
            let result = run(job, config);
            if let Err(err) = &result {
                warn!("Extraction of '{}' failed: {}", job.path.display(), err);
            }
            reporter.report(Progress::FileFinished {
                compound: job.compound.clone(),
                succeeded: result.is_ok(),
            });
            result
        })
        .collect();

    reporter.report(Progress::BatchFinish);
    reporter.report(Progress::PhaseFinish);

    let failures = results.iter().filter(|r| r.is_err()).count();
    info!(
        "Extraction finished: {} succeeded, {} failed.",
        results.len() - failures,
        failures
    );
    results
}

/// All rows of the successful extractions, in job order.
pub fn collect_rows<'a>(
    extractions: impl IntoIterator<Item = &'a Extraction>,
) -> Vec<OrbitalRecordRow> {
    extractions
        .into_iter()
        .flat_map(|e| e.rows.iter().cloned())
        .collect()
}
