//! Error types for CSV export.

use arrow_schema::DataType;
use thiserror::Error;

/// Errors surfaced by writer construction and [`write`](crate::Writer::write).
#[derive(Debug, Error)]
pub enum Error {
    /// The schema handed to the writer contains a field outside the closed
    /// set of CSV-projectable primitive types. Surfaced at construction;
    /// a writer never exists with an invalid schema.
    #[error("unsupported data type for CSV export: field '{field}' has type {data_type}")]
    UnsupportedType {
        field: String,
        data_type: DataType,
    },

    /// The batch's schema does not structurally equal the writer's schema.
    /// The call had no effect on the output stream.
    #[error("record batch schema does not match writer schema")]
    SchemaMismatch,

    /// Error from the underlying CSV writer, propagated verbatim.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// I/O error from flushing the underlying stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
