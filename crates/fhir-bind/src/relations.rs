//! Relationship eligibility against a universe of loaded types.

use std::collections::BTreeSet;

use fhir_model::Relation;
use fhir_standards::StandardsRegistry;

/// Filter `child_type`'s static relation list down to declarations whose
/// parent type is actually present in `available`.
///
/// Eligibility is purely structural: a declaration is returned when its
/// parent type is loaded, regardless of whether the parent key resolves on
/// any particular record (that check belongs to identifier resolution, run
/// by the caller before a declaration is consumed). Relative order is
/// preserved and nothing is deduplicated.
pub fn eligible_relations<'a>(
    registry: &'a StandardsRegistry,
    child_type: &str,
    available: &BTreeSet<String>,
) -> Vec<&'a Relation> {
    registry
        .relations_for(child_type)
        .iter()
        .filter(|relation| available.contains(&relation.parent_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::eligible_relations;
    use fhir_standards::StandardsRegistry;
    use std::collections::BTreeSet;

    #[test]
    fn empty_universe_yields_no_relations() {
        let registry = StandardsRegistry::embedded().expect("registry");
        let available = BTreeSet::new();
        assert!(eligible_relations(&registry, "Patient", &available).is_empty());
    }

    #[test]
    fn result_is_a_subset_in_declaration_order() {
        let registry = StandardsRegistry::embedded().expect("registry");
        let available: BTreeSet<String> = ["HumanName", "Address", "Period"]
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        let eligible = eligible_relations(&registry, "Patient", &available);
        let fields: Vec<&str> = eligible
            .iter()
            .map(|relation| relation.child_field.as_str())
            .collect();
        // name declares before address on Patient; Period is no parent of Patient.
        assert_eq!(fields, vec!["name", "address"]);
    }
}
