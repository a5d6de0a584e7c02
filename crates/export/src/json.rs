//! JSON report export.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::ensure_parent_dir;
use crate::summary::RouteSummary;

/// Metadata stamped onto every report.
#[derive(Debug)]
pub struct ReportMetadata<'a> {
    pub generated_utc: &'a str,
    pub tool_version: &'a str,
}

#[derive(Serialize)]
struct Report<'a> {
    generated_utc: &'a str,
    tool_version: &'a str,
    #[serde(flatten)]
    route: &'a RouteSummary,
}

/// Write a pretty-printed JSON report for one route.
pub fn write_report(
    output: &Path,
    meta: &ReportMetadata<'_>,
    summary: &RouteSummary,
) -> io::Result<()> {
    ensure_parent_dir(output)?;
    let report = Report {
        generated_utc: meta.generated_utc,
        tool_version: meta.tool_version,
        route: summary,
    };
    to_writer_pretty(File::create(output)?, &report)?;
    Ok(())
}
