//! # mediaclean-schema
//!
//! Versioned JSON records that stay readable across schema changes.
//!
//! Each record family (the global [`ConfigFile`] and the per-file
//! [`Sidecar`]) has a [`Schema`] table with one entry per historical version.
//! Old files are decoded at the version they declare and upgraded in memory;
//! writes always use the current version.
//!
//! ## Example
//!
//! ```
//! use mediaclean_schema::{from_str, ConfigFile, VersionedRecord};
//!
//! let config: ConfigFile = from_str(r#"{
//!     "schema_version": 1,
//!     "process": {"keep_languages": "eng,fre", "remove_unwanted_languages": true}
//! }"#)?;
//!
//! assert_eq!(config.schema_version, 3);
//! assert_eq!(config.deserialized_version, 1);
//! assert!(config.was_upgraded());
//! assert_eq!(config.language.keep_languages, ["eng", "fre"]);
//! # Ok::<(), mediaclean_schema::SchemaError>(())
//! ```

pub mod config;
mod error;
pub mod sidecar;
pub mod versioned;

// Re-exports
pub use config::{ConfigFile, CONFIG_SCHEMA, CONFIG_VERSION};
pub use error::{Result, SchemaError};
pub use sidecar::{
    FileInfo, Sidecar, SidecarState, ToolRecord, ToolRecords, ToolSnapshots, SIDECAR_SCHEMA,
    SIDECAR_VERSION,
};
pub use versioned::{
    from_slice, from_str, read_record, to_string, write_record, Schema, SchemaVersion,
    VersionedRecord,
};
