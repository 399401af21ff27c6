use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::ConfigSources;
use crate::error::{CliError, Result};
use crate::utils::parser;
use mofrontier::analysis::config::{AnalysisConfig, AnalysisConfigBuilder};
use mofrontier::core::models::orbitals::Spin;
use tracing::debug;

pub fn build_config(sources: &ConfigSources) -> Result<AnalysisConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = sources.config_path {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, sources.set_values)?;

    let window_file = file_config.window.take().unwrap_or_default();
    let degeneracy_file = file_config.degeneracy.take().unwrap_or_default();

    let window_size = sources
        .window_size
        .or(window_file.size)
        .unwrap_or(defaults.window_size);
    let spin = sources
        .spin
        .or(window_file.spin)
        .unwrap_or(defaults.spin);
    let tolerance = sources
        .tolerance
        .or(degeneracy_file.tolerance)
        .unwrap_or(defaults.degeneracy_tolerance);

    debug!(
        "Resolved configuration: window size {}, spin {}, tolerance {} eV",
        window_size, spin, tolerance
    );

    AnalysisConfigBuilder::new()
        .window_size(window_size)
        .spin(spin)
        .degeneracy_tolerance(tolerance)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "window.size" => {
                config.window.get_or_insert_with(Default::default).size =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "window.spin" => {
                config.window.get_or_insert_with(Default::default).spin =
                    Some(value_str.parse::<Spin>().map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?);
            }
            "degeneracy.tolerance" => {
                config
                    .degeneracy
                    .get_or_insert_with(Default::default)
                    .tolerance = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands, ExtractArgs};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn extract_args(extra: &[&str]) -> ExtractArgs {
        let mut argv = vec!["mofrontier", "extract", "-i", "in.fchk"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Extract(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("mofrontier.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = build_config(&ConfigSources::default()).unwrap();
        let defaults = DefaultsConfig::default();
        assert_eq!(config.window.size, defaults.window_size);
        assert_eq!(config.window.spin, Spin::Alpha);
        assert_eq!(config.degeneracy.tolerance, defaults.degeneracy_tolerance);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            "[window]\nsize = 2\nspin = \"beta\"\n[degeneracy]\ntolerance = 0.1\n",
        );
        let args = extract_args(&["-c", path.to_str().unwrap()]);

        let config = build_config(&ConfigSources::from(&args)).unwrap();
        assert_eq!(config.window.size, 2);
        assert_eq!(config.window.spin, Spin::Beta);
        assert_eq!(config.degeneracy.tolerance, 0.1);
    }

    #[test]
    fn flags_override_file_and_set_values() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[window]\nsize = 2\n");
        let args = extract_args(&[
            "-c",
            path.to_str().unwrap(),
            "-S",
            "window.size=4",
            "-n",
            "7",
        ]);

        let config = build_config(&ConfigSources::from(&args)).unwrap();
        assert_eq!(config.window.size, 7);
    }

    #[test]
    fn set_values_override_file() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[window]\nsize = 2\n");
        let args = extract_args(&[
            "-c",
            path.to_str().unwrap(),
            "-S",
            "window.size=4",
            "-S",
            "window.spin=b",
            "-S",
            "degeneracy.tolerance=0.01",
        ]);

        let config = build_config(&ConfigSources::from(&args)).unwrap();
        assert_eq!(config.window.size, 4);
        assert_eq!(config.window.spin, Spin::Beta);
        assert_eq!(config.degeneracy.tolerance, 0.01);
    }

    #[test]
    fn unsupported_or_malformed_set_values_are_rejected() {
        for bad in ["window.width=3", "window.size", "window.size=many"] {
            let args = extract_args(&["-S", bad]);
            assert!(
                matches!(
                    build_config(&ConfigSources::from(&args)),
                    Err(CliError::Config(_))
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn zero_window_size_fails_validation() {
        let args = extract_args(&["-n", "0"]);
        let err = build_config(&ConfigSources::from(&args)).unwrap_err();
        assert!(err.to_string().contains("window_size"));
    }

    #[test]
    fn negative_tolerance_fails_validation() {
        let sources = ConfigSources {
            tolerance: Some(-0.5),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&sources),
            Err(CliError::Config(_))
        ));
    }
}
