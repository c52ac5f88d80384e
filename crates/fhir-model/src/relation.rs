use serde::{Deserialize, Serialize};

/// A static relationship declaration: one per reference-bearing field.
///
/// `child_type.child_field` holds values that link to `parent_type`'s
/// `parent_key` field. Component-list fields contribute one declaration each
/// even though they may hold many instances at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub parent_type: String,
    pub parent_key: String,
    pub child_type: String,
    pub child_field: String,
}

impl Relation {
    pub fn new(
        parent_type: impl Into<String>,
        parent_key: impl Into<String>,
        child_type: impl Into<String>,
        child_field: impl Into<String>,
    ) -> Self {
        Self {
            parent_type: parent_type.into(),
            parent_key: parent_key.into(),
            child_type: child_type.into(),
            child_field: child_field.into(),
        }
    }
}
