//! Record-graph binder core.
//!
//! Four operations, all pure functions over caller-owned data and the
//! immutable [`fhir_standards::StandardsRegistry`]:
//!
//! - [`bind`]: hydrate one typed record from column-oriented input, with
//!   value-set validation of coded fields;
//! - [`flatten`]: project a record's column-shaped fields back to tabular
//!   output;
//! - [`key_field`] / [`bound_key_field`]: resolve which field carries a
//!   type's own identity;
//! - [`eligible_relations`]: filter a type's static relation table to the
//!   declarations resolvable against a universe of loaded types.

pub mod binder;
pub mod error;
pub mod flatten;
pub mod key;
pub mod relations;

pub use binder::bind;
pub use error::{BindError, Result};
pub use flatten::flatten;
pub use key::{KEY_FIELD_NAMES, bound_key_field, key_field};
pub use relations::eligible_relations;
