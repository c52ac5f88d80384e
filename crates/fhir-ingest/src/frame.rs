//! Polars interop: `DataFrame` to and from the binder's column maps.

use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, PolarsResult, Series};

use fhir_model::{ColumnMap, Value};

/// Convert one Polars cell to the binder's scalar shape.
pub fn any_to_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Bool(v),
        AnyValue::Int8(v) => Value::Int(i64::from(v)),
        AnyValue::Int16(v) => Value::Int(i64::from(v)),
        AnyValue::Int32(v) => Value::Int(i64::from(v)),
        AnyValue::Int64(v) => Value::Int(v),
        AnyValue::UInt8(v) => Value::Int(i64::from(v)),
        AnyValue::UInt16(v) => Value::Int(i64::from(v)),
        AnyValue::UInt32(v) => Value::Int(i64::from(v)),
        AnyValue::UInt64(v) => {
            i64::try_from(v).map_or_else(|_| Value::Float(v as f64), Value::Int)
        }
        AnyValue::Float32(v) => Value::Float(f64::from(v)),
        AnyValue::Float64(v) => Value::Float(v),
        AnyValue::String(v) => Value::String(v.to_string()),
        AnyValue::StringOwned(v) => Value::String(v.to_string()),
        other => Value::String(other.to_string()),
    }
}

/// Project a dataframe into the binder's ingestion shape.
pub fn columns_from_frame(frame: &DataFrame) -> ColumnMap {
    let mut columns = ColumnMap::new();
    for column in frame.get_columns() {
        let values: Vec<Value> = column
            .as_materialized_series()
            .iter()
            .map(any_to_value)
            .collect();
        columns.insert(column.name().to_string(), values);
    }
    columns
}

/// Materialize a column map as a dataframe, picking the narrowest dtype each
/// column supports (int, then float, then bool, falling back to text).
pub fn frame_from_columns(columns: &ColumnMap) -> PolarsResult<DataFrame> {
    let mut series: Vec<Column> = Vec::with_capacity(columns.len());
    for (name, values) in columns {
        series.push(build_column(name, values));
    }
    DataFrame::new(series)
}

fn build_column(name: &str, values: &[Value]) -> Column {
    let non_null = values.iter().filter(|value| !value.is_null());
    if non_null.clone().count() > 0 {
        if non_null.clone().all(|value| matches!(value, Value::Int(_))) {
            let ints: Vec<Option<i64>> = values
                .iter()
                .map(|value| match value {
                    Value::Int(v) => Some(*v),
                    _ => None,
                })
                .collect();
            return Series::new(name.into(), ints).into();
        }
        if non_null
            .clone()
            .all(|value| matches!(value, Value::Int(_) | Value::Float(_)))
        {
            let floats: Vec<Option<f64>> = values
                .iter()
                .map(|value| match value {
                    Value::Int(v) => Some(*v as f64),
                    Value::Float(v) => Some(*v),
                    _ => None,
                })
                .collect();
            return Series::new(name.into(), floats).into();
        }
        if non_null.clone().all(|value| matches!(value, Value::Bool(_))) {
            let bools: Vec<Option<bool>> = values
                .iter()
                .map(|value| match value {
                    Value::Bool(v) => Some(*v),
                    _ => None,
                })
                .collect();
            return Series::new(name.into(), bools).into();
        }
    }
    let strings: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            if value.is_null() {
                None
            } else {
                Some(value.to_string())
            }
        })
        .collect();
    Series::new(name.into(), strings).into()
}

#[cfg(test)]
mod tests {
    use super::{columns_from_frame, frame_from_columns};
    use fhir_model::{ColumnMap, Value};

    #[test]
    fn frame_round_trip_preserves_values() {
        let mut columns = ColumnMap::new();
        columns.insert(
            "identifier".to_string(),
            vec![Value::Int(0), Value::Int(1), Value::Null],
        );
        columns.insert(
            "gender".to_string(),
            vec![Value::from("female"), Value::from("male"), Value::Null],
        );
        columns.insert(
            "active".to_string(),
            vec![Value::Bool(true), Value::Bool(false), Value::Null],
        );

        let frame = frame_from_columns(&columns).expect("build frame");
        assert_eq!(frame.height(), 3);
        let round = columns_from_frame(&frame);
        assert_eq!(round, columns);
    }

    #[test]
    fn mixed_numeric_columns_widen_to_float() {
        let mut columns = ColumnMap::new();
        columns.insert(
            "value".to_string(),
            vec![Value::Int(1), Value::Float(2.5)],
        );
        let frame = frame_from_columns(&columns).expect("build frame");
        let round = columns_from_frame(&frame);
        assert_eq!(
            round["value"],
            vec![Value::Float(1.0), Value::Float(2.5)]
        );
    }
}
