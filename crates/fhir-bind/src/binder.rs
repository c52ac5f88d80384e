//! Record construction from column-oriented input.

use tracing::debug;

use fhir_model::{ColumnMap, Record, ResourceDef};
use fhir_standards::StandardsRegistry;

use crate::error::{BindError, Result};

/// Construct one typed record of `resource_type` from column-oriented input.
///
/// Declared fields present in `columns` are bound as whole columns; declared
/// fields absent from the input stay null. Columns that match no declared
/// field are dropped without failing the bind — unknown columns from a wider
/// extract are expected, not an error.
///
/// After assignment every coded field with a bound column is validated
/// against its value set. Construction is all-or-nothing: the first invalid
/// code fails the bind and no record is returned.
pub fn bind(
    registry: &StandardsRegistry,
    resource_type: &str,
    columns: &ColumnMap,
) -> Result<Record> {
    let def = registry.resource(resource_type)?;

    let mut record = Record::new(&def.name);
    let mut dropped: Vec<&str> = Vec::new();
    for (name, values) in columns {
        if def.has_field(name) {
            record.set_column(name.clone(), values.clone());
        } else {
            dropped.push(name.as_str());
        }
    }
    if !dropped.is_empty() {
        debug!(
            resource = resource_type,
            columns = ?dropped,
            "dropping undeclared columns"
        );
    }

    validate_codes(registry, def, &record)?;
    Ok(record)
}

/// Check every bound coded column against its declared value set.
///
/// All coded fields are visited; the first violation aborts with the
/// offending value and the full legal set.
fn validate_codes(
    registry: &StandardsRegistry,
    def: &ResourceDef,
    record: &Record,
) -> Result<()> {
    for field in def.code_fields() {
        let Some(column) = record.column(&field.name) else {
            continue;
        };
        // Binding presence was validated at registry load.
        let Some(set_name) = field.value_set.as_deref() else {
            continue;
        };
        let value_set = registry.value_set(set_name)?;
        for value in column {
            let Some(code) = value.as_code() else {
                continue;
            };
            if !value_set.contains(&code) {
                return Err(BindError::InvalidCode {
                    resource: def.name.clone(),
                    field: field.name.clone(),
                    value: code,
                    allowed: value_set.allowed_list(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::bind;
    use fhir_model::{ColumnMap, Value};
    use fhir_standards::StandardsRegistry;

    fn columns(pairs: &[(&str, Vec<Value>)]) -> ColumnMap {
        pairs
            .iter()
            .map(|(name, values)| ((*name).to_string(), values.clone()))
            .collect()
    }

    #[test]
    fn undeclared_columns_are_dropped_silently() {
        let registry = StandardsRegistry::embedded().expect("registry");
        let input = columns(&[
            ("birthDate", vec![Value::from("1980-02-01")]),
            ("favouriteColor", vec![Value::from("green")]),
        ]);
        let record = bind(&registry, "Patient", &input).expect("bind");
        assert!(record.column("birthDate").is_some());
        assert!(record.column("favouriteColor").is_none());
    }

    #[test]
    fn null_codes_are_skipped_by_validation() {
        let registry = StandardsRegistry::embedded().expect("registry");
        let input = columns(&[(
            "gender",
            vec![Value::Null, Value::from("female"), Value::Null],
        )]);
        let record = bind(&registry, "Patient", &input).expect("bind");
        assert_eq!(record.row_count(), 3);
    }
}
