//! Schema registry for the FHIR tabular binder.
//!
//! Exposes per-type field declarations, value-set bindings, and the derived
//! relationship table, all loaded from definition documents generated from
//! the FHIR R4 machine-readable StructureDefinitions.

pub mod definitions;
pub mod error;
pub mod registry;

pub use definitions::Definitions;
pub use error::StandardsError;
pub use registry::StandardsRegistry;
