//! On-disk format of the generated definition files.
//!
//! A definitions document is produced once from the FHIR R4 machine-readable
//! StructureDefinitions and shipped as data. The registry consumes it as-is;
//! nothing in this format is hand-maintained per type.

use serde::{Deserialize, Serialize};

use fhir_model::{ResourceDef, ValueSet};

/// Root of a definitions document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definitions {
    /// Version of the standard the document was generated from (e.g. "4.0.1").
    pub fhir_version: String,
    #[serde(default)]
    pub value_sets: Vec<ValueSet>,
    pub resources: Vec<ResourceDef>,
}
