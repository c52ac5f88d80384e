//! Tabular projection of a hydrated record.

use fhir_model::{ColumnMap, FieldValue, Record};

/// Project a record back onto column-oriented output.
///
/// One output column per field stored as a column; fields holding nested
/// records are excluded entirely — flattening a nested record is its own,
/// type-specific pass. A record bound from columns therefore flattens back
/// to exactly the declared subset of its input (column order is not
/// significant, only the set of columns and row alignment).
pub fn flatten(record: &Record) -> ColumnMap {
    record
        .fields()
        .filter_map(|(name, value)| match value {
            FieldValue::Column(values) => Some((name.to_string(), values.clone())),
            FieldValue::Component(_) | FieldValue::Components(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::flatten;
    use fhir_model::{FieldValue, Record, Value};

    #[test]
    fn nested_fields_are_excluded_from_the_projection() {
        let mut record = Record::new("Patient");
        record.set_column("gender", vec![Value::from("female")]);
        record.set_field(
            "maritalStatus",
            FieldValue::Component(Box::new(Record::new("CodeableConcept"))),
        );
        record.set_field(
            "name",
            FieldValue::Components(vec![Record::new("HumanName")]),
        );

        let columns = flatten(&record);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns["gender"], vec![Value::from("female")]);
    }

    #[test]
    fn empty_record_flattens_to_no_columns() {
        assert!(flatten(&Record::new("Patient")).is_empty());
    }
}
