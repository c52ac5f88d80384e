use serde::{Deserialize, Serialize};

/// Semantic kind of a declared field, per the FHIR R4 definitions the
/// registry is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain scalar column (string/int/bool/date text).
    Scalar,
    /// Scalar restricted to a declared value set.
    Code,
    /// Column that links to another type's key field.
    Reference,
    /// A single embedded record of the target type.
    Component,
    /// An ordered sequence of embedded records of the target type.
    ComponentList,
}

impl FieldKind {
    /// True for kinds that point at another declared type and therefore
    /// contribute a relationship declaration.
    pub fn is_linking(self) -> bool {
        matches!(
            self,
            FieldKind::Reference | FieldKind::Component | FieldKind::ComponentList
        )
    }

    /// Canonical kind name as it appears in definition documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Code => "code",
            FieldKind::Reference => "reference",
            FieldKind::Component => "component",
            FieldKind::ComponentList => "component_list",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One declared field of a resource or component type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    /// Target type name for reference/component kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Value-set name for `code` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,
}

/// Declared shape of one resource or component type.
///
/// These are generated from the standard's machine-readable definitions and
/// loaded as data; nothing here is hand-maintained per type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDef {
    pub name: String,
    /// The field holding this type's own identity, when the type is keyed.
    /// Declared explicitly in the generated definitions rather than
    /// re-derived from naming conventions at every call site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub fields: Vec<FieldDef>,
}

impl ResourceDef {
    /// Look up a declared field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Fields that point at another type (reference or embedded component).
    pub fn linking_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.kind.is_linking())
    }

    /// Fields validated against a value set.
    pub fn code_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(|field| field.kind == FieldKind::Code)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldDef, FieldKind, ResourceDef};

    fn sample() -> ResourceDef {
        ResourceDef {
            name: "ContactPoint".to_string(),
            key: Some("object_id".to_string()),
            fields: vec![
                FieldDef {
                    name: "object_id".to_string(),
                    kind: FieldKind::Scalar,
                    target: None,
                    value_set: None,
                },
                FieldDef {
                    name: "system".to_string(),
                    kind: FieldKind::Code,
                    target: None,
                    value_set: Some("contact-point-system".to_string()),
                },
                FieldDef {
                    name: "period".to_string(),
                    kind: FieldKind::Component,
                    target: Some("Period".to_string()),
                    value_set: None,
                },
            ],
        }
    }

    #[test]
    fn field_lookup_is_exact() {
        let def = sample();
        assert!(def.has_field("system"));
        assert!(!def.has_field("System"));
    }

    #[test]
    fn linking_and_code_fields_filter_by_kind() {
        let def = sample();
        let linking: Vec<&str> = def.linking_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(linking, vec!["period"]);
        let coded: Vec<&str> = def.code_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(coded, vec!["system"]);
    }

    #[test]
    fn kind_deserializes_from_snake_case() {
        let field: FieldDef = serde_json::from_str(
            r#"{"name": "name", "kind": "component_list", "target": "HumanName"}"#,
        )
        .expect("parse field");
        assert_eq!(field.kind, FieldKind::ComponentList);
        assert_eq!(field.target.as_deref(), Some("HumanName"));
    }
}
