use fhir_standards::StandardsError;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error(transparent)]
    Standards(#[from] StandardsError),

    #[error("invalid code {value:?} for {resource}.{field}; allowed values: {allowed}")]
    InvalidCode {
        resource: String,
        field: String,
        value: String,
        allowed: String,
    },

    #[error("no key field found for {resource}; expected one of: {expected}")]
    MissingKeyField { resource: String, expected: String },

    #[error("ambiguous key field for {resource}; candidates: {candidates}")]
    AmbiguousKeyField {
        resource: String,
        candidates: String,
    },
}

pub type Result<T> = std::result::Result<T, BindError>;
