//! Property: binding valid scalar columns and flattening reproduces the
//! input exactly, for any row count and any legal code casing.

use proptest::prelude::*;

use fhir_bind::{bind, flatten};
use fhir_model::{ColumnMap, Value};
use fhir_standards::StandardsRegistry;

fn gender_code() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "male", "female", "other", "unknown", "Male", "FEMALE", "Other",
    ])
    .prop_map(str::to_string)
}

fn patient_columns() -> impl Strategy<Value = ColumnMap> {
    (1usize..8).prop_flat_map(|rows| {
        (
            prop::collection::vec(any::<i64>(), rows),
            prop::collection::vec(gender_code(), rows),
            prop::collection::vec("[12][0-9]{3}-[01][0-9]-[0-3][0-9]", rows),
            prop::collection::vec(any::<bool>(), rows),
        )
            .prop_map(|(identifiers, genders, birth_dates, actives)| {
                let mut columns = ColumnMap::new();
                columns.insert(
                    "identifier".to_string(),
                    identifiers.into_iter().map(Value::Int).collect(),
                );
                columns.insert(
                    "gender".to_string(),
                    genders.into_iter().map(Value::String).collect(),
                );
                columns.insert(
                    "birthDate".to_string(),
                    birth_dates.into_iter().map(Value::String).collect(),
                );
                columns.insert(
                    "active".to_string(),
                    actives.into_iter().map(Value::Bool).collect(),
                );
                columns
            })
    })
}

proptest! {
    #[test]
    fn bind_then_flatten_is_identity_on_scalar_columns(input in patient_columns()) {
        let registry = StandardsRegistry::embedded().expect("embedded registry");
        let record = bind(&registry, "Patient", &input).expect("valid input binds");
        let output = flatten(&record);
        prop_assert_eq!(&output, &input);

        let rows = input.values().next().map_or(0, Vec::len);
        for column in output.values() {
            prop_assert_eq!(column.len(), rows);
        }
    }
}
