use clap::{Args, Parser, Subcommand};
use mofrontier::core::models::orbitals::Spin;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "mofrontier contributors",
    version,
    about = "mofrontier - Extract frontier molecular orbitals from Gaussian formatted checkpoint files and prepare them for energy-level diagrams.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to decode files in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the frontier orbital window of one or more .fchk files.
    Extract(ExtractArgs),
    /// Print the decoded contents of a single .fchk file.
    Inspect(InspectArgs),
    /// Classify near-degenerate levels in a plot-input CSV file.
    Degeneracy(DegeneracyArgs),
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Formatted checkpoint file(s) to decode. Can be used multiple times.
    #[arg(short, long = "input", required = true, num_args = 1.., value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Write the plot-input rows of every decoded file to this CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of orbitals taken on each side of the frontier.
    #[arg(short = 'n', long, value_name = "INT")]
    pub window_size: Option<usize>,

    /// Override the spin channel ('alpha' or 'beta').
    #[arg(long, value_name = "SPIN")]
    pub spin: Option<Spin>,

    /// Compound name for each input, in input order. Defaults to the file stem.
    #[arg(long = "compound", value_name = "NAME")]
    pub compounds: Vec<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S window.size=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Formatted checkpoint file to decode.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `degeneracy` subcommand.
#[derive(Args, Debug)]
pub struct DegeneracyArgs {
    /// Plot-input CSV file, as written by `extract --output`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Override the energy tolerance (eV) below which levels are degenerate.
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Example: -S degeneracy.tolerance=0.02
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
