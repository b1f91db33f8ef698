use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::ExportError;
use crate::record::Record;

/// Load a JSON array of exercise records from a file.
///
/// # Errors
/// Returns `SourceUnavailable` if the file cannot be opened or does not
/// hold an array of objects, and `Json` on malformed JSON.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, ExportError> {
    log::info!("source: path={}", path.as_ref().display());
    let file = File::open(&path)
        .map_err(|e| ExportError::SourceUnavailable(format!("{}: {e}", path.as_ref().display())))?;
    records_from_reader(BufReader::new(file))
}

/// Parse a JSON array of records from an arbitrary reader. No key
/// validation happens here; presence of the required fields is checked
/// per record at export time.
///
/// # Errors
/// Returns `Json` on malformed JSON and `SourceUnavailable` when the
/// document is not an array of objects.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<Record>, ExportError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    let Some(items) = value.as_array() else {
        return Err(ExportError::SourceUnavailable("expected a JSON array of records".into()));
    };
    items
        .iter()
        .map(|v| {
            v.as_object().cloned().ok_or_else(|| {
                ExportError::SourceUnavailable("expected every record to be a JSON object".into())
            })
        })
        .collect()
}
