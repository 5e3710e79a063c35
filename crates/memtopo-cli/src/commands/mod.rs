pub mod boctopus2;
pub mod concat;
pub mod psortb;
pub mod signalp;
pub mod tmhmm;

use crate::error::{CliError, Result};
use memtopo::core::io::error::FormatError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Creates `path` and hands a buffered writer to `write`. Format errors are
/// reported against the output path.
pub(crate) fn write_output<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> std::result::Result<(), FormatError>,
{
    let file = File::create(path)?;
    write(BufWriter::new(file)).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}
