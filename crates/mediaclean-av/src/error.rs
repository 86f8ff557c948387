//! Error types for mediaclean-av.

use crate::model::SourceTool;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning tool output into a snapshot.
///
/// Every variant means the file's stream information is unavailable from
/// that tool; no partial snapshot is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing or cannot be normalized.
    #[error("failed to parse {tool} output: {message}")]
    Format { tool: SourceTool, message: String },

    /// The external tool reported failure.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: SourceTool, message: String },

    /// The output is not valid JSON.
    #[error("{tool} JSON error: {source}")]
    Json {
        tool: SourceTool,
        #[source]
        source: serde_json::Error,
    },

    /// The output is not valid XML.
    #[error("{tool} XML error: {source}")]
    Xml {
        tool: SourceTool,
        #[source]
        source: roxmltree::Error,
    },
}

impl Error {
    /// Create a format error.
    pub fn format(tool: SourceTool, message: impl Into<String>) -> Self {
        Self::Format {
            tool,
            message: message.into(),
        }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: SourceTool, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool,
            message: message.into(),
        }
    }

    /// The tool whose output caused the error.
    pub fn tool(&self) -> SourceTool {
        match self {
            Error::Format { tool, .. }
            | Error::ToolFailed { tool, .. }
            | Error::Json { tool, .. }
            | Error::Xml { tool, .. } => *tool,
        }
    }
}
