//! Layered configuration: built-in defaults, then an optional TOML file with
//! `-S key=value` overrides applied to it, then dedicated command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
