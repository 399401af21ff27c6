use crate::cli::{DegeneracyArgs, ExtractArgs};
use mofrontier::core::models::orbitals::Spin;
use std::path::Path;

/// Everything a command contributes to the configuration layers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigSources<'a> {
    pub config_path: Option<&'a Path>,
    pub set_values: &'a [String],
    pub window_size: Option<usize>,
    pub spin: Option<Spin>,
    pub tolerance: Option<f64>,
}

impl<'a> From<&'a ExtractArgs> for ConfigSources<'a> {
    fn from(args: &'a ExtractArgs) -> Self {
        Self {
            config_path: args.config.as_deref(),
            set_values: &args.set_values,
            window_size: args.window_size,
            spin: args.spin,
            tolerance: None,
        }
    }
}

impl<'a> From<&'a DegeneracyArgs> for ConfigSources<'a> {
    fn from(args: &'a DegeneracyArgs) -> Self {
        Self {
            config_path: args.config.as_deref(),
            set_values: &args.set_values,
            window_size: None,
            spin: None,
            tolerance: args.tolerance,
        }
    }
}
