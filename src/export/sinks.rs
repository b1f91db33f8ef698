use std::io::{BufWriter, Write};

use crate::errors::ExportError;
use crate::record::{FIELDS, Record, value_to_string};

/// CSV sink with the fixed eleven-column layout. The underlying `csv`
/// writer handles RFC 4180 quoting, so multi-line `instructions` values
/// round-trip through standard readers.
pub struct CsvSink<W: Write> {
    w: csv::Writer<BufWriter<W>>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W, delimiter: u8) -> Self {
        let w = csv::WriterBuilder::new().delimiter(delimiter).from_writer(BufWriter::new(inner));
        Self { w }
    }

    pub fn write_header(&mut self) -> Result<(), ExportError> {
        self.w.write_record(FIELDS).map_err(write_err)
    }

    /// Write one data row. A key absent from the mapping (as opposed to an
    /// explicit null) fails the whole export with `MalformedRecord` rather
    /// than emitting a ragged row.
    pub fn write_row(&mut self, row: usize, record: &Record) -> Result<(), ExportError> {
        let mut cells: Vec<String> = Vec::with_capacity(FIELDS.len());
        for field in FIELDS {
            match record.get(field) {
                Some(v) => cells.push(value_to_string(v)),
                None => return Err(ExportError::MalformedRecord { row, field }),
            }
        }
        self.w.write_record(&cells).map_err(write_err)
    }

    pub fn finish(mut self) -> Result<(), ExportError> {
        self.w.flush().map_err(|e| ExportError::DestinationWrite(e.to_string()))
    }
}

fn write_err(e: csv::Error) -> ExportError {
    ExportError::DestinationWrite(e.to_string())
}
