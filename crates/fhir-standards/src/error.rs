use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse definitions JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate resource definition: {name}")]
    DuplicateResource { name: String },

    #[error("duplicate value set definition: {name}")]
    DuplicateValueSet { name: String },

    #[error("field {resource}.{field} is declared as code but names no value set")]
    MissingValueSetBinding { resource: String, field: String },

    #[error("field {resource}.{field} references unknown value set {value_set}")]
    UnknownValueSetBinding {
        resource: String,
        field: String,
        value_set: String,
    },

    #[error("field {resource}.{field} is a {kind} field but names no target type")]
    MissingTarget {
        resource: String,
        field: String,
        kind: String,
    },

    #[error("field {resource}.{field} targets unknown type {target}")]
    UnknownTarget {
        resource: String,
        field: String,
        target: String,
    },

    #[error("type {target} is referenced by {resource}.{field} but declares no key field")]
    UnkeyedTarget {
        resource: String,
        field: String,
        target: String,
    },

    #[error("unknown resource type: {name}")]
    UnknownResource { name: String },

    #[error("unknown value set: {name}")]
    UnknownValueSet { name: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
