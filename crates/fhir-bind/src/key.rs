//! Identifier resolution: which field carries a type's own identity.

use fhir_model::{Record, ResourceDef};

use crate::error::{BindError, Result};

/// Field names that denote a type's own identity by convention. Resource
/// types carry their key in `identifier`; component types use the synthetic
/// `object_id` assigned during extraction.
pub const KEY_FIELD_NAMES: &[&str] = &["identifier", "object_id"];

/// Resolve the key field declared by a type.
///
/// An explicitly declared key wins. Types generated without one fall back to
/// the conventional-name scan over their own declared fields; zero or more
/// than one candidate is a hard error, since exactly one key field is
/// correct for any keyed type. Deterministic for a fixed type.
pub fn key_field(def: &ResourceDef) -> Result<&str> {
    if let Some(key) = def.key.as_deref() {
        return Ok(key);
    }
    let candidates: Vec<&str> = def
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .filter(|name| KEY_FIELD_NAMES.contains(name))
        .collect();
    match candidates.as_slice() {
        [only] => Ok(only),
        [] => Err(BindError::MissingKeyField {
            resource: def.name.clone(),
            expected: KEY_FIELD_NAMES.join(", "),
        }),
        many => Err(BindError::AmbiguousKeyField {
            resource: def.name.clone(),
            candidates: many.join(", "),
        }),
    }
}

/// Resolve the key field actually bound on a hydrated record.
///
/// Same candidate rule as [`key_field`], restricted to fields present as
/// columns on `record`. A record bound without its key column cannot anchor
/// relationship resolution, so absence is the same hard error as an unkeyed
/// type.
pub fn bound_key_field<'a>(def: &'a ResourceDef, record: &Record) -> Result<&'a str> {
    let key = key_field(def)?;
    if record.column(key).is_some() {
        return Ok(key);
    }
    Err(BindError::MissingKeyField {
        resource: def.name.clone(),
        expected: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{bound_key_field, key_field};
    use crate::error::BindError;
    use fhir_model::{FieldDef, FieldKind, Record, ResourceDef, Value};

    fn scalar(name: &str) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            kind: FieldKind::Scalar,
            target: None,
            value_set: None,
        }
    }

    fn def(name: &str, key: Option<&str>, fields: &[&str]) -> ResourceDef {
        ResourceDef {
            name: name.to_string(),
            key: key.map(str::to_string),
            fields: fields.iter().map(|field| scalar(field)).collect(),
        }
    }

    #[test]
    fn declared_key_wins_over_convention() {
        let def = def("Patient", Some("identifier"), &["identifier", "object_id"]);
        assert_eq!(key_field(&def).expect("key"), "identifier");
    }

    #[test]
    fn convention_scan_requires_exactly_one_candidate() {
        let unkeyed = def("Narrative", None, &["status", "div"]);
        assert!(matches!(
            key_field(&unkeyed),
            Err(BindError::MissingKeyField { .. })
        ));

        let ambiguous = def("Odd", None, &["identifier", "object_id"]);
        assert!(matches!(
            key_field(&ambiguous),
            Err(BindError::AmbiguousKeyField { .. })
        ));

        let keyed = def("Coding", None, &["object_id", "code"]);
        assert_eq!(key_field(&keyed).expect("key"), "object_id");
    }

    #[test]
    fn bound_key_requires_the_column_to_be_present() {
        let def = def("Coding", None, &["object_id", "code"]);
        let mut record = Record::new("Coding");
        record.set_column("code", vec![Value::from("a")]);
        assert!(matches!(
            bound_key_field(&def, &record),
            Err(BindError::MissingKeyField { .. })
        ));

        record.set_column("object_id", vec![Value::Int(1)]);
        assert_eq!(bound_key_field(&def, &record).expect("key"), "object_id");
    }
}
