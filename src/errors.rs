use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Malformed record at row {row}: missing required field `{field}`")]
    MalformedRecord { row: usize, field: &'static str },

    #[error("Destination write error: {0}")]
    DestinationWrite(String),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),
}
