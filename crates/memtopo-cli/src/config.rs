//! Analysis configuration assembled from an optional TOML file, `--set`
//! overrides and the library defaults, in that order of precedence.

mod builder;
mod file;

pub use builder::build_config;
