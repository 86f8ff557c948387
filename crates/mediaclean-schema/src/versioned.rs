//! Versioned record loading and writing.
//!
//! Every record family keeps a [`Schema`]: an ordered table with one entry
//! per historical version. Loading sniffs the top-level `schema_version`,
//! decodes the document with exactly that version's decoder and then runs
//! every later entry's upgrade step until the current version is reached.
//! Writing always emits the current version.

use crate::error::{Result, SchemaError};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Name of the top-level version field.
pub const VERSION_FIELD: &str = "schema_version";

/// One historical version of a record family.
pub struct SchemaVersion<D: 'static> {
    pub version: u32,
    pub name: &'static str,
    /// Decode a document written at this version.
    pub decode: fn(Value) -> serde_json::Result<D>,
    /// Convert a document of the previous version into this version.
    pub upgrade: Option<fn(D) -> Result<D>>,
}

/// The ordered version table of a record family.
pub struct Schema<D: 'static> {
    pub name: &'static str,
    pub versions: &'static [SchemaVersion<D>],
}

impl<D> Schema<D> {
    /// The newest version in the table.
    pub fn current(&self) -> u32 {
        self.versions.last().map_or(0, |v| v.version)
    }

    /// Parse `bytes` and upgrade to the current version.
    ///
    /// Returns the upgraded document and the version it was written at.
    pub fn load(&self, bytes: &[u8]) -> Result<(D, u32)> {
        let value: Value = serde_json::from_slice(bytes).map_err(|source| SchemaError::Json {
            schema: self.name,
            source,
        })?;
        self.load_value(value)
    }

    /// Upgrade an already parsed JSON value to the current version.
    pub fn load_value(&self, value: Value) -> Result<(D, u32)> {
        let version = self.sniff_version(&value)?;
        let start = self
            .versions
            .iter()
            .position(|v| u64::from(v.version) == version)
            .ok_or(SchemaError::UnknownVersion {
                schema: self.name,
                version,
                current: self.current(),
            })?;

        let entry = &self.versions[start];
        let mut document = (entry.decode)(value).map_err(|source| SchemaError::Malformed {
            schema: self.name,
            version: entry.version,
            source,
        })?;

        for next in &self.versions[start + 1..] {
            let upgrade = next.upgrade.ok_or_else(|| {
                SchemaError::upgrade(self.name, next.version, "no upgrade step")
            })?;
            document = upgrade(document)?;
            tracing::debug!(
                "Upgraded {} from v{} to v{} ({})",
                self.name,
                next.version - 1,
                next.version,
                next.name
            );
        }

        Ok((document, entry.version))
    }

    /// Read `schema_version` without decoding the rest of the document.
    pub fn sniff_version(&self, value: &Value) -> Result<u64> {
        value
            .get(VERSION_FIELD)
            .and_then(Value::as_u64)
            .ok_or(SchemaError::MissingVersion { schema: self.name })
    }
}

/// A record family's current shape.
pub trait VersionedRecord: Serialize + Sized {
    /// One variant per historical version.
    type Document: 'static;

    fn schema() -> &'static Schema<Self::Document>;

    /// Unwrap a fully upgraded document.
    fn from_current(document: Self::Document, deserialized_version: u32) -> Result<Self>;

    /// The version this record was read at (the current version for new records).
    fn deserialized_version(&self) -> u32;

    /// Whether the record was read from an older schema.
    fn was_upgraded(&self) -> bool {
        self.deserialized_version() < Self::schema().current()
    }
}

/// Load a record from JSON bytes of any known version.
pub fn from_slice<R: VersionedRecord>(bytes: &[u8]) -> Result<R> {
    let (document, version) = R::schema().load(bytes)?;
    R::from_current(document, version)
}

/// Load a record from JSON text of any known version.
pub fn from_str<R: VersionedRecord>(text: &str) -> Result<R> {
    from_slice(text.as_bytes())
}

/// Serialize a record as pretty JSON at the current version.
pub fn to_string<R: VersionedRecord>(record: &R) -> Result<String> {
    let schema = R::schema();
    let serialize_error = |source| SchemaError::Serialize {
        schema: schema.name,
        source,
    };

    let mut value = serde_json::to_value(record).map_err(serialize_error)?;
    if let Value::Object(map) = &mut value {
        map.insert(VERSION_FIELD.to_string(), Value::from(schema.current()));
    }
    serde_json::to_string_pretty(&value).map_err(serialize_error)
}

/// Read and upgrade a record file.
pub fn read_record<R: VersionedRecord>(path: &Path) -> Result<R> {
    let bytes = std::fs::read(path).map_err(|e| SchemaError::io(path, e))?;
    let record: R = from_slice(&bytes)?;
    if record.was_upgraded() {
        tracing::info!(
            "Read {} v{} from {}, upgraded to v{}",
            R::schema().name,
            record.deserialized_version(),
            path.display(),
            R::schema().current()
        );
    }
    Ok(record)
}

/// Write a record at the current version.
///
/// The file is written to a temporary file in the same directory and then
/// renamed over `path`, so readers never see a partial record.
pub fn write_record<R: VersionedRecord>(path: &Path, record: &R) -> Result<()> {
    let json = to_string(record)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| SchemaError::io(dir, e))?;
    let temp_path = file.path().to_path_buf();
    writeln!(file, "{}", json).map_err(|e| SchemaError::io(&temp_path, e))?;
    file.flush().map_err(|e| SchemaError::io(&temp_path, e))?;
    file.persist(path)
        .map_err(|e| SchemaError::io(path, e.error))?;

    tracing::debug!("Wrote {} to {}", R::schema().name, path.display());
    Ok(())
}
