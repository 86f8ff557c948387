//! Error types for versioned records.

use std::path::PathBuf;

/// Errors raised while loading or writing a versioned record.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document is not valid JSON.
    #[error("{schema}: invalid JSON: {source}")]
    Json {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No integer `schema_version` at the top level.
    #[error("{schema}: missing or non-integer schema_version")]
    MissingVersion { schema: &'static str },

    /// `schema_version` names a version this build does not know.
    #[error("{schema}: unknown schema version {version} (current is {current})")]
    UnknownVersion {
        schema: &'static str,
        version: u64,
        current: u32,
    },

    /// The document does not match the shape of its declared version.
    #[error("{schema} v{version}: {source}")]
    Malformed {
        schema: &'static str,
        version: u32,
        #[source]
        source: serde_json::Error,
    },

    /// An upgrade step could not convert the document.
    #[error("{schema}: upgrade to v{version} failed: {message}")]
    Upgrade {
        schema: &'static str,
        version: u32,
        message: String,
    },

    /// Serializing the current record failed.
    #[error("{schema}: serialization failed: {source}")]
    Serialize {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Create an upgrade error.
    pub fn upgrade(schema: &'static str, version: u32, message: impl Into<String>) -> Self {
        Self::Upgrade {
            schema,
            version,
            message: message.into(),
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
