use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::options::{ExportOptions, ExportReport};
use super::sinks::CsvSink;
use crate::errors::ExportError;
use crate::record::Record;

/// Export records to a CSV file at `path`.
///
/// If a write fails partway through, the destination is left as-is; there
/// is no partial cleanup and no retry.
///
/// # Errors
/// Returns `DestinationWrite` if the file cannot be created or a write
/// fails, and `MalformedRecord` if any record lacks a required field.
pub fn export_file(
    records: &[Record],
    path: impl AsRef<Path>,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    log::info!("export: records={}, path={}", records.len(), path.as_ref().display());
    let file = File::create(path.as_ref())
        .map_err(|e| ExportError::DestinationWrite(format!("{}: {e}", path.as_ref().display())))?;
    export_to_writer(records, file, opts)
}

/// Export records as CSV to an arbitrary writer: one header row with the
/// eleven field names in fixed order, then one row per record in input
/// order. Returns the count of data rows written, header excluded.
///
/// # Errors
/// Returns `MalformedRecord` on the first record missing a required key
/// (no later row is emitted) and `DestinationWrite` on write failures.
pub fn export_to_writer<W: Write>(
    records: &[Record],
    writer: W,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let mut sink = CsvSink::new(writer, opts.csv.delimiter);
    sink.write_header()?;
    let mut report = ExportReport::default();
    for (row, record) in records.iter().enumerate() {
        sink.write_row(row, record)?;
        report.written += 1;
    }
    sink.finish()?;
    Ok(report)
}
