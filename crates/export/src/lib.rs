//! Formatting and export helpers: HTML/text result blocks, JSON reports, and CSV route tables.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod html;
pub mod json;
pub mod summary;
pub mod table;
pub mod text;

pub use summary::{AircraftSummary, AirportSummary, RouteSummary};

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
