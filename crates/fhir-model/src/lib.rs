pub mod record;
pub mod relation;
pub mod schema;
pub mod value;
pub mod valueset;

pub use record::{ColumnMap, FieldValue, Record};
pub use relation::Relation;
pub use schema::{FieldDef, FieldKind, ResourceDef};
pub use value::Value;
pub use valueset::ValueSet;
