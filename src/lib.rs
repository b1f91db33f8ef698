pub mod errors;
pub mod export;
pub mod logger;
pub mod record;
pub mod source;

pub use crate::errors::ExportError;
pub use crate::export::{CsvOptions, ExportOptions, ExportReport, export_file, export_to_writer};
pub use crate::record::{FIELDS, Record};
