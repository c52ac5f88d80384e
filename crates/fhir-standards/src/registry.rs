use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use fhir_model::{FieldKind, Relation, ResourceDef, ValueSet};

use crate::definitions::Definitions;
use crate::error::StandardsError;

/// Definitions generated from the FHIR R4 (4.0.1) StructureDefinitions,
/// compiled into the crate so callers need no external data directory.
const EMBEDDED_R4: &str = include_str!("../data/fhir-r4-definitions.json");

/// Read-only catalog of type, value-set, and relationship declarations.
///
/// Built once at startup, then shared by reference; every lookup is `&self`,
/// so concurrent binders need no locking.
#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    fhir_version: String,
    resources: BTreeMap<String, ResourceDef>,
    value_sets: BTreeMap<String, ValueSet>,
    relations: BTreeMap<String, Vec<Relation>>,
}

impl StandardsRegistry {
    /// Load the compiled-in FHIR R4 definition subset.
    pub fn embedded() -> Result<Self, StandardsError> {
        Self::from_json_str(EMBEDDED_R4)
    }

    /// Load a generated definitions document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, StandardsError> {
        let definitions: Definitions =
            serde_json::from_str(json).map_err(|source| StandardsError::Json { source })?;
        Self::build(definitions)
    }

    /// Load a generated definitions document from a file.
    pub fn from_path(path: &Path) -> Result<Self, StandardsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
        Self::from_json_str(&contents)
    }

    /// Validate a definitions document and derive the relation table.
    fn build(definitions: Definitions) -> Result<Self, StandardsError> {
        let mut value_sets: BTreeMap<String, ValueSet> = BTreeMap::new();
        for set in definitions.value_sets {
            if value_sets.contains_key(&set.name) {
                return Err(StandardsError::DuplicateValueSet { name: set.name });
            }
            value_sets.insert(set.name.clone(), set);
        }

        let mut resources: BTreeMap<String, ResourceDef> = BTreeMap::new();
        for resource in &definitions.resources {
            if resources.contains_key(&resource.name) {
                return Err(StandardsError::DuplicateResource {
                    name: resource.name.clone(),
                });
            }
            resources.insert(resource.name.clone(), resource.clone());
        }

        for resource in resources.values() {
            validate_fields(resource, &resources, &value_sets)?;
        }

        let relations = derive_relations(&definitions.resources, &resources);

        let registry = Self {
            fhir_version: definitions.fhir_version,
            resources,
            value_sets,
            relations,
        };
        debug!(
            fhir_version = %registry.fhir_version,
            resources = registry.resources.len(),
            value_sets = registry.value_sets.len(),
            relations = registry.relations.values().map(Vec::len).sum::<usize>(),
            "standards registry loaded"
        );
        Ok(registry)
    }

    pub fn fhir_version(&self) -> &str {
        &self.fhir_version
    }

    /// Look up a type declaration. Unknown names are a programming error on
    /// the caller's side and surface as a fatal `UnknownResource`.
    pub fn resource(&self, name: &str) -> Result<&ResourceDef, StandardsError> {
        self.resources
            .get(name)
            .ok_or_else(|| StandardsError::UnknownResource {
                name: name.to_string(),
            })
    }

    pub fn value_set(&self, name: &str) -> Result<&ValueSet, StandardsError> {
        self.value_sets
            .get(name)
            .ok_or_else(|| StandardsError::UnknownValueSet {
                name: name.to_string(),
            })
    }

    /// The full static relation list declared by `child_type`, in field
    /// declaration order. Empty for types with no reference-bearing fields.
    pub fn relations_for(&self, child_type: &str) -> &[Relation] {
        self.relations
            .get(child_type)
            .map_or(&[] as &[Relation], Vec::as_slice)
    }

    /// Declared type names in sorted order.
    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn value_set_count(&self) -> usize {
        self.value_sets.len()
    }
}

fn validate_fields(
    resource: &ResourceDef,
    resources: &BTreeMap<String, ResourceDef>,
    value_sets: &BTreeMap<String, ValueSet>,
) -> Result<(), StandardsError> {
    for field in &resource.fields {
        match field.kind {
            FieldKind::Code => {
                let Some(value_set) = field.value_set.as_deref() else {
                    return Err(StandardsError::MissingValueSetBinding {
                        resource: resource.name.clone(),
                        field: field.name.clone(),
                    });
                };
                if !value_sets.contains_key(value_set) {
                    return Err(StandardsError::UnknownValueSetBinding {
                        resource: resource.name.clone(),
                        field: field.name.clone(),
                        value_set: value_set.to_string(),
                    });
                }
            }
            FieldKind::Reference | FieldKind::Component | FieldKind::ComponentList => {
                let Some(target) = field.target.as_deref() else {
                    return Err(StandardsError::MissingTarget {
                        resource: resource.name.clone(),
                        field: field.name.clone(),
                        kind: field.kind.as_str().to_string(),
                    });
                };
                let Some(target_def) = resources.get(target) else {
                    return Err(StandardsError::UnknownTarget {
                        resource: resource.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                };
                if target_def.key.is_none() {
                    return Err(StandardsError::UnkeyedTarget {
                        resource: resource.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
            FieldKind::Scalar => {}
        }
    }
    Ok(())
}

/// One relation per reference-bearing field: the parent is the field's target
/// type and the parent key is that type's declared key field. Declaration
/// order within a type is preserved.
fn derive_relations(
    declared: &[ResourceDef],
    resources: &BTreeMap<String, ResourceDef>,
) -> BTreeMap<String, Vec<Relation>> {
    let mut relations: BTreeMap<String, Vec<Relation>> = BTreeMap::new();
    for resource in declared {
        for field in resource.linking_fields() {
            // Targets and keys were validated above.
            let Some(target) = field.target.as_deref() else {
                continue;
            };
            let Some(parent_key) = resources.get(target).and_then(|def| def.key.as_deref()) else {
                continue;
            };
            relations
                .entry(resource.name.clone())
                .or_default()
                .push(Relation::new(
                    target,
                    parent_key,
                    resource.name.as_str(),
                    field.name.as_str(),
                ));
        }
    }
    relations
}

#[cfg(test)]
mod tests {
    use super::StandardsRegistry;

    #[test]
    fn embedded_definitions_load() {
        let registry = StandardsRegistry::embedded().expect("embedded registry");
        assert_eq!(registry.fhir_version(), "4.0.1");
        assert!(registry.resource("Patient").is_ok());
        assert!(registry.resource("patient").is_err());
    }

    #[test]
    fn relations_preserve_field_declaration_order() {
        let registry = StandardsRegistry::embedded().expect("embedded registry");
        let relations = registry.relations_for("Identifier");
        let fields: Vec<&str> = relations
            .iter()
            .map(|relation| relation.child_field.as_str())
            .collect();
        assert_eq!(fields, vec!["type", "period"]);
    }
}
