//! Construction-time schema validation.

use arrow_schema::{DataType, Schema};

use crate::error::Error;
use crate::projection::fill_for;

/// Whether a data type belongs to the CSV-projectable primitive set.
pub fn is_csv_supported(data_type: &DataType) -> bool {
    fill_for(data_type).is_some()
}

pub trait SchemaExt {
    /// Check that every field can be projected to CSV text.
    ///
    /// Fails on the first field whose type falls outside the supported
    /// primitive set.
    fn check_csv_support(&self) -> Result<(), Error>;
}

impl SchemaExt for Schema {
    fn check_csv_support(&self) -> Result<(), Error> {
        for field in self.fields() {
            if !is_csv_supported(field.data_type()) {
                return Err(Error::UnsupportedType {
                    field: field.name().clone(),
                    data_type: field.data_type().clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_schema::Field;
    use std::sync::Arc;

    #[test]
    fn accepts_all_primitive_fields() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("score", DataType::Float32, false),
            Field::new("active", DataType::Boolean, false),
        ]);
        assert!(schema.check_csv_support().is_ok());
    }

    #[test]
    fn rejects_nested_field_by_name() {
        let item = Arc::new(Field::new("item", DataType::Int32, true));
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("tags", DataType::List(item), false),
        ]);
        let err = schema.check_csv_support().unwrap_err();
        match err {
            Error::UnsupportedType { field, .. } => assert_eq!(field, "tags"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
