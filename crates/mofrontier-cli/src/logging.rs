use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Environment variable holding extra filter directives, e.g.
/// `MOFRONTIER_LOG=mofrontier::core::io::fchk=trace`.
pub const LOG_ENV_VAR: &str = "MOFRONTIER_LOG";

/// Target prefix shared by the library and the binary.
const CRATE_TARGET: &str = "mofrontier";

pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Verbosity raises only `mofrontier` targets; dependencies stay at WARN.
/// Directives from [`LOG_ENV_VAR`] are appended and win over the defaults.
/// `--quiet` turns everything off regardless.
pub fn build_filter(verbosity: u8, quiet: bool, extra: Option<&str>) -> Result<EnvFilter> {
    let level = level_for(verbosity, quiet);
    let mut directives = format!(
        "{},{}={}",
        level.min(LevelFilter::WARN),
        CRATE_TARGET,
        level
    );
    if let Some(extra) = extra.map(str::trim).filter(|s| !s.is_empty()) {
        if !quiet {
            directives.push(',');
            directives.push_str(extra);
        }
    }
    EnvFilter::try_new(&directives).map_err(|e| {
        CliError::Config(format!("Invalid log filter '{}': {}", directives, e))
    })
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let extra = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(verbosity, quiet, extra.as_deref())?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(&path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::{Mutex, Once};
    use tracing::{debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    /// Runs `emit` under `filter` and returns everything written.
    fn capture(filter: EnvFilter, emit: impl FnOnce()) -> String {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("capture.log");
        let file = File::create(&log_path).unwrap();
        let layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true);
        let subscriber = tracing_subscriber::registry().with(filter).with(layer);
        tracing::subscriber::with_default(subscriber, emit);
        std::fs::read_to_string(log_path).unwrap()
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(7, false), LevelFilter::TRACE);
        assert_eq!(level_for(2, true), LevelFilter::OFF);
    }

    #[test]
    fn verbosity_raises_only_crate_targets() {
        let output = capture(build_filter(2, false, None).unwrap(), || {
            debug!(target: "mofrontier::core::io::fchk", "Decoded section 'Charge'");
            debug!(target: "rayon_core::registry", "worker parked");
            warn!(target: "rayon_core::registry", "pool degraded");
        });
        assert!(output.contains("Decoded section 'Charge'"));
        assert!(!output.contains("worker parked"));
        assert!(output.contains("pool degraded"));
    }

    #[test]
    fn extra_directives_override_defaults() {
        let filter = build_filter(0, false, Some("mofrontier::workflows=info")).unwrap();
        let output = capture(filter, || {
            info!(target: "mofrontier::workflows::extract", "Selected 4 orbital(s)");
            info!(target: "mofrontier::core::io::fchk", "not shown");
        });
        assert!(output.contains("Selected 4 orbital(s)"));
        assert!(!output.contains("not shown"));
    }

    #[test]
    fn quiet_silences_everything_including_extra_directives() {
        let filter = build_filter(3, true, Some("mofrontier=trace")).unwrap();
        let output = capture(filter, || {
            error!(target: "mofrontier::commands", "hidden");
        });
        assert!(output.is_empty());
    }

    #[test]
    fn malformed_extra_directive_is_a_config_error() {
        assert!(matches!(
            build_filter(0, false, Some("mofrontier=loud")),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    #[serial]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();

        error!("This is an error");
        warn!("This is a warning");
        info!("This is info");
        debug!("This is debug");
        trace!("This is trace");
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
