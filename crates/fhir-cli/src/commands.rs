use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use fhir_bind::{bind, bound_key_field, eligible_relations, flatten};
use fhir_ingest::{load_columns, write_columns};
use fhir_standards::StandardsRegistry;

use crate::cli::{BindArgs, DescribeArgs, RelationsArgs};

pub fn load_registry(definitions: Option<&Path>) -> Result<StandardsRegistry> {
    match definitions {
        Some(path) => StandardsRegistry::from_path(path)
            .with_context(|| format!("load definitions: {}", path.display())),
        None => StandardsRegistry::embedded().context("load embedded definitions"),
    }
}

pub fn run_resources(registry: &StandardsRegistry) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Resource", "Key", "Fields", "Relations"]);
    apply_table_style(&mut table);
    for name in registry.resource_names() {
        let def = registry.resource(name)?;
        table.add_row(vec![
            def.name.clone(),
            def.key.clone().unwrap_or_default(),
            def.fields.len().to_string(),
            registry.relations_for(name).len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_describe(registry: &StandardsRegistry, args: &DescribeArgs) -> Result<()> {
    let def = registry.resource(&args.resource)?;

    let mut fields = Table::new();
    fields.set_header(vec!["Field", "Kind", "Target", "Value set"]);
    apply_table_style(&mut fields);
    for field in &def.fields {
        fields.add_row(vec![
            field.name.clone(),
            field.kind.to_string(),
            field.target.clone().unwrap_or_default(),
            field.value_set.clone().unwrap_or_default(),
        ]);
    }
    println!("{fields}");

    if let Some(key) = def.key.as_deref() {
        println!("key field: {key}");
    }
    let relations = registry.relations_for(&def.name);
    if !relations.is_empty() {
        println!();
        print_relations(relations.iter());
    }
    Ok(())
}

pub fn run_bind(registry: &StandardsRegistry, args: &BindArgs) -> Result<()> {
    let columns = load_columns(&args.csv)?;
    info!(
        resource = %args.resource,
        columns = columns.len(),
        "binding csv extract"
    );

    let record = bind(registry, &args.resource, &columns)
        .with_context(|| format!("bind {} against {}", args.csv.display(), args.resource))?;

    let def = registry.resource(&args.resource)?;
    let key = bound_key_field(def, &record)
        .map(str::to_string)
        .unwrap_or_else(|_| "(none bound)".to_string());

    let flattened = flatten(&record);
    println!(
        "bound {} rows of {} ({} of {} declared fields, key field: {key})",
        record.row_count(),
        record.resource_type(),
        flattened.len(),
        def.fields.len(),
    );

    if let Some(out) = &args.flatten_out {
        write_columns(out, &flattened)?;
        info!(path = %out.display(), "wrote flattened output");
    }
    Ok(())
}

pub fn run_relations(registry: &StandardsRegistry, args: &RelationsArgs) -> Result<()> {
    // Validate the type before filtering; unknown names fail loudly instead
    // of yielding an empty table.
    registry.resource(&args.resource)?;

    let available: BTreeSet<String> = args.available.iter().cloned().collect();
    let eligible = eligible_relations(registry, &args.resource, &available);
    if eligible.is_empty() {
        println!(
            "no eligible relations for {} against {{{}}}",
            args.resource,
            args.available.join(", ")
        );
        return Ok(());
    }
    print_relations(eligible.into_iter());
    Ok(())
}

fn print_relations<'a>(relations: impl Iterator<Item = &'a fhir_model::Relation>) {
    let mut table = Table::new();
    table.set_header(vec!["Child field", "Parent type", "Parent key"]);
    apply_table_style(&mut table);
    for relation in relations {
        table.add_row(vec![
            relation.child_field.clone(),
            relation.parent_type.clone(),
            relation.parent_key.clone(),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
