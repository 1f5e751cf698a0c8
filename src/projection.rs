//! Row-major text projection of Arrow `RecordBatch`es.
//!
//! The projection is driven by a dispatch table keyed by [`DataType`]: one
//! [`FillColumn`] arm per supported primitive variant, each filling its
//! column of the row-major buffer with canonical text tokens. The table is
//! also the definition of the supported-type set — a type is supported iff
//! [`fill_for`] returns an arm for it.
//!
//! Canonical forms: booleans as `true`/`false`, integers in base 10, floats
//! as the shortest decimal string that parses back to the identical value
//! (Rust's `Display`), strings verbatim. CSV quoting and escaping happen
//! downstream in the `csv` crate.

use arrow_array::types::{
    Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, UInt16Type, UInt32Type,
    UInt64Type, UInt8Type,
};
use arrow_array::{
    Array, ArrowPrimitiveType, BooleanArray, PrimitiveArray, RecordBatch, StringArray,
};
use arrow_schema::DataType;

use crate::error::Error;

/// Fills column `col` of the row-major buffer with one text token per row.
///
/// Each arm assumes the array's runtime type matches the `DataType` it was
/// selected for; the schema gate upstream makes a mismatch unreachable.
pub type FillColumn = fn(&dyn Array, usize, &mut [Vec<String>]);

/// Look up the projection arm for a data type.
///
/// Returns `None` for types outside the supported primitive set.
pub fn fill_for(data_type: &DataType) -> Option<FillColumn> {
    Some(match data_type {
        DataType::Boolean => fill_boolean,
        DataType::Int8 => fill_primitive::<Int8Type>,
        DataType::Int16 => fill_primitive::<Int16Type>,
        DataType::Int32 => fill_primitive::<Int32Type>,
        DataType::Int64 => fill_primitive::<Int64Type>,
        DataType::UInt8 => fill_primitive::<UInt8Type>,
        DataType::UInt16 => fill_primitive::<UInt16Type>,
        DataType::UInt32 => fill_primitive::<UInt32Type>,
        DataType::UInt64 => fill_primitive::<UInt64Type>,
        DataType::Float32 => fill_primitive::<Float32Type>,
        DataType::Float64 => fill_primitive::<Float64Type>,
        DataType::Utf8 => fill_utf8,
        _ => return None,
    })
}

/// Project a batch into a row-major buffer of text tokens.
///
/// The buffer has `num_rows()` rows of `num_columns()` tokens each, columns
/// in schema order. A zero-row batch yields an empty buffer.
pub fn batch_to_text_rows(batch: &RecordBatch) -> Result<Vec<Vec<String>>, Error> {
    let mut rows = vec![vec![String::new(); batch.num_columns()]; batch.num_rows()];

    for (j, (field, column)) in batch
        .schema()
        .fields()
        .iter()
        .zip(batch.columns())
        .enumerate()
    {
        let fill = fill_for(field.data_type()).ok_or_else(|| Error::UnsupportedType {
            field: field.name().clone(),
            data_type: field.data_type().clone(),
        })?;
        fill(column.as_ref(), j, &mut rows);
    }

    Ok(rows)
}

fn fill_primitive<T>(array: &dyn Array, col: usize, rows: &mut [Vec<String>])
where
    T: ArrowPrimitiveType,
    T::Native: std::fmt::Display,
{
    let arr = array.as_any().downcast_ref::<PrimitiveArray<T>>().unwrap();
    for (i, row) in rows.iter_mut().enumerate() {
        row[col] = arr.value(i).to_string();
    }
}

fn fill_boolean(array: &dyn Array, col: usize, rows: &mut [Vec<String>]) {
    let arr = array.as_any().downcast_ref::<BooleanArray>().unwrap();
    for (i, row) in rows.iter_mut().enumerate() {
        row[col] = arr.value(i).to_string();
    }
}

fn fill_utf8(array: &dyn Array, col: usize, rows: &mut [Vec<String>]) {
    let arr = array.as_any().downcast_ref::<StringArray>().unwrap();
    for (i, row) in rows.iter_mut().enumerate() {
        row[col] = arr.value(i).to_string();
    }
}
