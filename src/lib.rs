//! Arrow `RecordBatch` → CSV conversion.
//!
//! This crate projects columnar Arrow data into row-oriented delimited text:
//! one text token per value, one CSV record per row, columns in schema order.
//! Quoting, escaping, and output buffering are delegated to the [`csv`]
//! crate; this crate owns only the typed column-to-text projection.
//!
//! # Layout contract
//!
//! Each batch is materialised as a **row-major** text buffer before handoff:
//!
//! ```text
//! [ row[0]: [ col[0] | col[1] | ... | col[c-1] ] ]
//! [ row[1]: [ col[0] | col[1] | ... | col[c-1] ] ]
//! ```
//!
//! Only primitive column types are supported (boolean, fixed-width integers,
//! 32/64-bit floats, UTF-8 strings); schemas containing anything else are
//! rejected when the writer is constructed. Null slots are *not* given a
//! dedicated representation; they materialise as the array accessor's
//! default value.

pub mod error;
pub mod projection;
pub mod schema_support;
pub mod writer;

pub use error::Error;
pub use projection::batch_to_text_rows;
pub use schema_support::{is_csv_supported, SchemaExt};
pub use writer::{Writer, WriterOption};
