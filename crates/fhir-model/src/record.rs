use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Column-oriented input and output shape: field name -> aligned value
/// sequence, one element per logical row.
///
/// All sequences in one map are expected to share the same length. Producers
/// own that invariant; the binder does not re-check it.
pub type ColumnMap = BTreeMap<String, Vec<Value>>;

/// What a record actually holds under one field name.
///
/// A freshly bound record stores whole columns. Graph assembly may later
/// attach nested records under component fields; the flattener dispatches on
/// this tag to keep only column-shaped fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// An aligned sequence of scalar cells, one per row.
    Column(Vec<Value>),
    /// A single embedded record of another type.
    Component(Box<Record>),
    /// An ordered sequence of embedded records.
    Components(Vec<Record>),
}

impl FieldValue {
    pub fn is_column(&self) -> bool {
        matches!(self, FieldValue::Column(_))
    }

    pub fn as_column(&self) -> Option<&[Value]> {
        match self {
            FieldValue::Column(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

/// One hydrated instance of a declared resource or component type.
///
/// Fields absent from the map are null: the binder only inserts fields that
/// arrived in the input, so "declared but unbound" and "never declared" are
/// distinguished through the schema, not through the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    resource_type: String,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Borrow a field's column, or `None` when the field is unbound or holds
    /// nested records.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.fields.get(name).and_then(FieldValue::as_column)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<Value>) {
        self.set_field(name, FieldValue::Column(values));
    }

    /// Iterate bound fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of rows carried by the record's column fields.
    ///
    /// Zero when no column is bound. Columns are assumed aligned, so the
    /// first one is representative.
    pub fn row_count(&self) -> usize {
        self.fields
            .values()
            .find_map(FieldValue::as_column)
            .map_or(0, <[Value]>::len)
    }
}
