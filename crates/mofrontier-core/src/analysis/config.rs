use crate::core::models::orbitals::Spin;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Orbitals on each side of the frontier.
    pub size: usize,
    pub spin: Spin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DegeneracyConfig {
    /// Energy difference (eV) below which two levels count as degenerate.
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub window: WindowConfig,
    pub degeneracy: DegeneracyConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    window_size: Option<usize>,
    spin: Option<Spin>,
    degeneracy_tolerance: Option<f64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = Some(size);
        self
    }
    pub fn spin(mut self, spin: Spin) -> Self {
        self.spin = Some(spin);
        self
    }
    pub fn degeneracy_tolerance(mut self, tolerance: f64) -> Self {
        self.degeneracy_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let size = self
            .window_size
            .ok_or(ConfigError::MissingParameter("window_size"))?;
        if size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "window_size",
                reason: "must be at least 1".to_string(),
            });
        }

        let tolerance = self
            .degeneracy_tolerance
            .ok_or(ConfigError::MissingParameter("degeneracy_tolerance"))?;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "degeneracy_tolerance",
                reason: format!("must be a finite, non-negative energy (got {})", tolerance),
            });
        }

        Ok(AnalysisConfig {
            window: WindowConfig {
                size,
                spin: self.spin.unwrap_or_default(),
            },
            degeneracy: DegeneracyConfig { tolerance },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_succeeds_with_all_parameters() {
        let config = AnalysisConfigBuilder::new()
            .window_size(5)
            .spin(Spin::Beta)
            .degeneracy_tolerance(0.05)
            .build()
            .unwrap();
        assert_eq!(config.window.size, 5);
        assert_eq!(config.window.spin, Spin::Beta);
        assert_eq!(config.degeneracy.tolerance, 0.05);
    }

    #[test]
    fn spin_defaults_to_alpha() {
        let config = AnalysisConfigBuilder::new()
            .window_size(3)
            .degeneracy_tolerance(0.1)
            .build()
            .unwrap();
        assert_eq!(config.window.spin, Spin::Alpha);
    }

    #[test]
    fn build_fails_without_window_size() {
        let result = AnalysisConfigBuilder::new().degeneracy_tolerance(0.05).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("window_size")));
    }

    #[test]
    fn build_fails_without_tolerance() {
        let result = AnalysisConfigBuilder::new().window_size(5).build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("degeneracy_tolerance"))
        );
    }

    #[test]
    fn build_rejects_zero_window_and_bad_tolerance() {
        let zero = AnalysisConfigBuilder::new()
            .window_size(0)
            .degeneracy_tolerance(0.05)
            .build();
        assert!(matches!(
            zero,
            Err(ConfigError::InvalidParameter { name: "window_size", .. })
        ));

        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let result = AnalysisConfigBuilder::new()
                .window_size(5)
                .degeneracy_tolerance(bad)
                .build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter { name: "degeneracy_tolerance", .. })
            ));
        }
    }
}
