//! CSV writer for Arrow `RecordBatch`es.

use std::io;

use arrow_array::RecordBatch;
use arrow_schema::SchemaRef;
use tracing::debug;

use crate::error::Error;
use crate::projection::batch_to_text_rows;
use crate::schema_support::SchemaExt;

/// Writer-level settings, applied in the order given; later options override
/// earlier ones for the same setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterOption {
    /// Field separator (default `,`).
    Delimiter(u8),
    /// Terminate records with `\r\n` instead of `\n`.
    Crlf(bool),
    /// Emit the schema's field names as the first record, before the first
    /// batch that passes the schema gate.
    Header(bool),
}

/// Writes `RecordBatch`es conforming to a fixed schema as CSV rows.
///
/// The writer does not own the lifecycle of the underlying stream; it is
/// opened before and closed after, by the caller. Output is buffered by the
/// wrapped [`csv::Writer`] until [`flush`](Writer::flush) (or drop).
#[derive(Debug)]
pub struct Writer<W: io::Write> {
    sink: csv::Writer<W>,
    schema: SchemaRef,
    header: bool,
    header_written: bool,
}

impl<W: io::Write> Writer<W> {
    /// Construct a writer over `sink` for batches of `schema`.
    ///
    /// Validates the schema up front: every field must be a supported
    /// primitive type, otherwise `Error::UnsupportedType` and no writer
    /// exists.
    pub fn try_new(sink: W, schema: SchemaRef, options: &[WriterOption]) -> Result<Self, Error> {
        schema.check_csv_support()?;

        let mut delimiter = b',';
        let mut crlf = false;
        let mut header = false;
        for opt in options {
            match *opt {
                WriterOption::Delimiter(d) => delimiter = d,
                WriterOption::Crlf(on) => crlf = on,
                WriterOption::Header(on) => header = on,
            }
        }

        let terminator = if crlf {
            csv::Terminator::CRLF
        } else {
            csv::Terminator::Any(b'\n')
        };
        let sink = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(terminator)
            .from_writer(sink);

        Ok(Self {
            sink,
            schema,
            header,
            header_written: false,
        })
    }

    /// The schema this writer accepts.
    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    /// Write one batch as CSV rows, columns in schema order.
    ///
    /// Returns `Error::SchemaMismatch` (with zero effect on the stream) when
    /// the batch's schema differs structurally from the writer's. Errors
    /// from the underlying CSV writer are propagated verbatim. A zero-row
    /// batch succeeds and emits nothing.
    pub fn write(&mut self, batch: &RecordBatch) -> Result<(), Error> {
        if batch.schema() != self.schema {
            return Err(Error::SchemaMismatch);
        }

        if self.header && !self.header_written {
            self.sink
                .write_record(self.schema.fields().iter().map(|f| f.name().as_str()))?;
            self.header_written = true;
        }

        let rows = batch_to_text_rows(batch)?;
        debug!(
            rows = rows.len(),
            cols = batch.num_columns(),
            "writing record batch as CSV"
        );
        for row in &rows {
            self.sink.write_record(row)?;
        }
        Ok(())
    }

    /// Flush buffered output through to the underlying stream.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_array::Int32Array;
    use arrow_schema::{DataType, Field, Schema};
    use std::sync::Arc;

    fn int_schema() -> SchemaRef {
        Arc::new(Schema::new(vec![Field::new("a", DataType::Int32, false)]))
    }

    fn int_batch(schema: SchemaRef, values: Vec<i32>) -> RecordBatch {
        RecordBatch::try_new(schema, vec![Arc::new(Int32Array::from(values))]).unwrap()
    }

    #[test]
    fn writes_rows_in_order() {
        let schema = int_schema();
        let mut buf = Vec::new();
        {
            let mut w = Writer::try_new(&mut buf, schema.clone(), &[]).unwrap();
            w.write(&int_batch(schema, vec![3, 1, 2])).unwrap();
            w.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n1\n2\n");
    }

    #[test]
    fn later_option_overrides_earlier() {
        // Two columns so the delimiter is observable.
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Int32, false),
            Field::new("b", DataType::Int32, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int32Array::from(vec![1])),
                Arc::new(Int32Array::from(vec![2])),
            ],
        )
        .unwrap();

        let mut buf = Vec::new();
        {
            let mut w = Writer::try_new(
                &mut buf,
                schema,
                &[
                    WriterOption::Delimiter(b';'),
                    WriterOption::Delimiter(b'|'),
                ],
            )
            .unwrap();
            w.write(&batch).unwrap();
            w.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "1|2\n");
    }

    #[test]
    fn schema_accessor_matches_construction_schema() {
        let schema = int_schema();
        let w = Writer::try_new(Vec::new(), schema.clone(), &[]).unwrap();
        assert_eq!(w.schema(), schema);
    }

    #[test]
    fn construction_rejects_unsupported_schema() {
        let item = Arc::new(Field::new("item", DataType::Int32, true));
        let schema = Arc::new(Schema::new(vec![Field::new(
            "tags",
            DataType::List(item),
            false,
        )]));
        let err = Writer::try_new(Vec::new(), schema, &[]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
    }
}
