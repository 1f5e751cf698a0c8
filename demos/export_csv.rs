use std::sync::Arc;

use anyhow::Result;
use arrow_array::{BooleanArray, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow_csv_export::{Error, Writer, WriterOption};
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use tracing::{info, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Arrow → CSV export examples");

    basic_export_example()?;
    options_example()?;
    mismatch_example()?;

    Ok(())
}

fn sales_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("order_id", DataType::Int64, false),
        Field::new("amount", DataType::Float64, false),
        Field::new("customer", DataType::Utf8, false),
        Field::new("shipped", DataType::Boolean, false),
    ]))
}

fn sales_batch(schema: SchemaRef) -> Result<RecordBatch> {
    Ok(RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(vec![1001, 1002, 1003])),
            Arc::new(Float64Array::from(vec![19.99, 250.0, 7.5])),
            Arc::new(StringArray::from(vec!["acme", "globex, inc", "initech"])),
            Arc::new(BooleanArray::from(vec![true, false, true])),
        ],
    )?)
}

fn basic_export_example() -> Result<()> {
    info!("=== Example 1: Basic export ===");

    let schema = sales_schema();
    let batch = sales_batch(schema.clone())?;

    let mut buf = Vec::new();
    {
        let mut writer = Writer::try_new(&mut buf, schema, &[WriterOption::Header(true)])?;
        writer.write(&batch)?;
        writer.flush()?;
    }

    info!("Exported {} bytes:", buf.len());
    for line in String::from_utf8(buf)?.lines() {
        info!("  {}", line);
    }

    Ok(())
}

fn options_example() -> Result<()> {
    info!("=== Example 2: Delimiter and CRLF options ===");

    let schema = sales_schema();
    let batch = sales_batch(schema.clone())?;

    let mut buf = Vec::new();
    {
        let mut writer = Writer::try_new(
            &mut buf,
            schema,
            &[WriterOption::Delimiter(b';'), WriterOption::Crlf(true)],
        )?;
        writer.write(&batch)?;
        writer.flush()?;
    }

    info!("Semicolon-delimited, CRLF-terminated:");
    for line in String::from_utf8(buf)?.lines() {
        info!("  {}", line);
    }

    Ok(())
}

fn mismatch_example() -> Result<()> {
    info!("=== Example 3: Schema mismatch handling ===");

    let schema = sales_schema();
    let other_schema = Arc::new(Schema::new(vec![Field::new("id", DataType::Int64, false)]));
    let other_batch = RecordBatch::try_new(
        other_schema,
        vec![Arc::new(Int64Array::from(vec![42]))],
    )?;

    let mut writer = Writer::try_new(Vec::new(), schema, &[])?;
    match writer.write(&other_batch) {
        Err(Error::SchemaMismatch) => info!("Expected mismatch error, stream untouched"),
        other => info!("Unexpected result: {:?}", other.is_ok()),
    }

    Ok(())
}
