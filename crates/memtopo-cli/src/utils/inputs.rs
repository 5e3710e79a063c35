use crate::error::{CliError, Result};
use std::path::PathBuf;

/// Expands input arguments into paths. Each argument may itself be a
/// whitespace-separated list, as produced by workflow managers that pass all
/// inputs as one quoted string. Glob patterns are left to the shell.
pub fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(PathBuf::from)
        .collect();
    if paths.is_empty() {
        return Err(CliError::Argument(
            "At least one input file is required.".to_string(),
        ));
    }
    Ok(paths)
}
