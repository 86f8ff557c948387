//! Per-file sidecar record.
//!
//! A sidecar sits next to its media file (`movie.mkv.mediaclean`) and stores
//! the tool output captured for the file, the processing steps already done
//! and the derived track states.
//!
//! | Version | Change |
//! |---|---|
//! | 1 | flat tool outputs, `verified` flag |
//! | 2 | `file` and `tools` groups, `state` list |
//! | 3 | `file.hash`, typed `state` set, `tracks` cache |

pub mod v1;
pub mod v2;

pub use v1::SidecarV1;
pub use v2::{SidecarV2, ToolRecord, ToolRecords};

use crate::error::{Result, SchemaError};
use crate::versioned::{Schema, SchemaVersion, VersionedRecord};
use chrono::{DateTime, Utc};
use mediaclean_av::{parse, MediaSnapshot, SourceTool};
use mediaclean_common::paths::sidecar_path;
use mediaclean_common::LanguageResolver;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Current sidecar schema version.
pub const SIDECAR_VERSION: u32 = 3;

/// A processing step recorded in the sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidecarState {
    SetLanguage,
    ReMuxed,
    ReEncoded,
    Verified,
    VerifyFailed,
    Repaired,
    RemovedTracks,
}

impl SidecarState {
    pub const ALL: [SidecarState; 7] = [
        SidecarState::SetLanguage,
        SidecarState::ReMuxed,
        SidecarState::ReEncoded,
        SidecarState::Verified,
        SidecarState::VerifyFailed,
        SidecarState::Repaired,
        SidecarState::RemovedTracks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SidecarState::SetLanguage => "setlanguage",
            SidecarState::ReMuxed => "remuxed",
            SidecarState::ReEncoded => "reencoded",
            SidecarState::Verified => "verified",
            SidecarState::VerifyFailed => "verifyfailed",
            SidecarState::Repaired => "repaired",
            SidecarState::RemovedTracks => "removedtracks",
        }
    }
}

impl std::fmt::Display for SidecarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SidecarState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        SidecarState::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sidecar state '{}'", s))
    }
}

/// Size, modification time and optional content hash of the media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub size: u64,
    pub modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl FileInfo {
    pub fn new(size: u64, modified: DateTime<Utc>) -> Self {
        Self {
            size,
            modified,
            hash: None,
        }
    }

    /// Read size and modification time from the file system.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| SchemaError::io(path, e))?;
        let modified = metadata.modified().map_err(|e| SchemaError::io(path, e))?;
        Ok(Self::new(metadata.len(), DateTime::<Utc>::from(modified)))
    }
}

/// The three tools' views of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSnapshots {
    pub mkvmerge: MediaSnapshot,
    pub ffprobe: MediaSnapshot,
    pub mediainfo: MediaSnapshot,
}

impl ToolSnapshots {
    pub fn get(&self, tool: SourceTool) -> &MediaSnapshot {
        match tool {
            SourceTool::MkvMerge => &self.mkvmerge,
            SourceTool::FfProbe => &self.ffprobe,
            SourceTool::MediaInfo => &self.mediainfo,
        }
    }
}

/// A sidecar document at any known version.
#[derive(Debug, Clone, PartialEq)]
pub enum SidecarDocument {
    V1(SidecarV1),
    V2(SidecarV2),
    V3(Sidecar),
}

impl SidecarDocument {
    pub fn version(&self) -> u32 {
        match self {
            SidecarDocument::V1(_) => 1,
            SidecarDocument::V2(_) => 2,
            SidecarDocument::V3(_) => 3,
        }
    }
}

fn decode_v1(value: Value) -> serde_json::Result<SidecarDocument> {
    serde_json::from_value(value).map(SidecarDocument::V1)
}

fn decode_v2(value: Value) -> serde_json::Result<SidecarDocument> {
    serde_json::from_value(value).map(SidecarDocument::V2)
}

fn decode_v3(value: Value) -> serde_json::Result<SidecarDocument> {
    serde_json::from_value(value).map(SidecarDocument::V3)
}

fn upgrade_v2(document: SidecarDocument) -> Result<SidecarDocument> {
    match document {
        SidecarDocument::V1(v1) => Ok(SidecarDocument::V2(v1.into())),
        other => Err(unexpected(2, &other)),
    }
}

fn upgrade_v3(document: SidecarDocument) -> Result<SidecarDocument> {
    let v2 = match document {
        SidecarDocument::V2(v2) => v2,
        other => return Err(unexpected(3, &other)),
    };

    let state = v2
        .state
        .iter()
        .map(|s| s.parse::<SidecarState>())
        .collect::<std::result::Result<BTreeSet<_>, _>>()
        .map_err(|message| SchemaError::upgrade(SIDECAR_SCHEMA.name, 3, message))?;

    Ok(SidecarDocument::V3(Sidecar {
        schema_version: SIDECAR_VERSION,
        deserialized_version: SIDECAR_VERSION,
        file: FileInfo::new(v2.file.size, v2.file.modified),
        tools: v2.tools,
        state,
        tracks: BTreeMap::new(),
    }))
}

fn unexpected(version: u32, document: &SidecarDocument) -> SchemaError {
    SchemaError::upgrade(
        SIDECAR_SCHEMA.name,
        version,
        format!("expected a v{} document, got v{}", version - 1, document.version()),
    )
}

/// Version table of the sidecar family.
pub static SIDECAR_SCHEMA: Schema<SidecarDocument> = Schema {
    name: "sidecar",
    versions: &[
        SchemaVersion {
            version: 1,
            name: "initial",
            decode: decode_v1,
            upgrade: None,
        },
        SchemaVersion {
            version: 2,
            name: "grouped",
            decode: decode_v2,
            upgrade: Some(upgrade_v2),
        },
        SchemaVersion {
            version: 3,
            name: "state_set_and_tracks",
            decode: decode_v3,
            upgrade: Some(upgrade_v3),
        },
    ],
};

/// Current (v3) sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidecar {
    pub schema_version: u32,
    /// Version the file was read at.
    #[serde(skip)]
    pub deserialized_version: u32,
    pub file: FileInfo,
    #[serde(default)]
    pub tools: ToolRecords,
    #[serde(default)]
    pub state: BTreeSet<SidecarState>,
    /// Decision states per tool, from the last processing run.
    #[serde(default)]
    pub tracks: BTreeMap<SourceTool, MediaSnapshot>,
}

impl VersionedRecord for Sidecar {
    type Document = SidecarDocument;

    fn schema() -> &'static Schema<SidecarDocument> {
        &SIDECAR_SCHEMA
    }

    fn from_current(document: SidecarDocument, deserialized_version: u32) -> Result<Self> {
        match document {
            SidecarDocument::V3(sidecar) => Ok(Self {
                schema_version: SIDECAR_VERSION,
                deserialized_version,
                ..sidecar
            }),
            other => Err(SchemaError::upgrade(
                SIDECAR_SCHEMA.name,
                SIDECAR_VERSION,
                format!("upgrade stopped at v{}", other.version()),
            )),
        }
    }

    fn deserialized_version(&self) -> u32 {
        self.deserialized_version
    }
}

impl Sidecar {
    pub fn new(file: FileInfo, tools: ToolRecords) -> Self {
        Self {
            schema_version: SIDECAR_VERSION,
            deserialized_version: SIDECAR_VERSION,
            file,
            tools,
            state: BTreeSet::new(),
            tracks: BTreeMap::new(),
        }
    }

    /// Sidecar path for a media file.
    pub fn path_for(media: &Path) -> PathBuf {
        sidecar_path(media)
    }

    /// Whether the sidecar still describes a file of this size and
    /// modification time and holds output for every tool.
    pub fn is_current_for(&self, size: u64, modified: DateTime<Utc>) -> bool {
        self.file.size == size && self.file.modified == modified && self.has_outputs()
    }

    pub fn has_outputs(&self) -> bool {
        self.tools.mkvmerge.has_output()
            && self.tools.ffprobe.has_output()
            && self.tools.mediainfo.has_output()
    }

    pub fn tool(&self, tool: SourceTool) -> &ToolRecord {
        match tool {
            SourceTool::MkvMerge => &self.tools.mkvmerge,
            SourceTool::FfProbe => &self.tools.ffprobe,
            SourceTool::MediaInfo => &self.tools.mediainfo,
        }
    }

    /// Parse the stored tool output.
    pub fn snapshots(&self, resolver: &LanguageResolver) -> mediaclean_av::Result<ToolSnapshots> {
        let snapshot = |tool: SourceTool| parse(tool, &self.tool(tool).output, resolver);
        Ok(ToolSnapshots {
            mkvmerge: snapshot(SourceTool::MkvMerge)?,
            ffprobe: snapshot(SourceTool::FfProbe)?,
            mediainfo: snapshot(SourceTool::MediaInfo)?,
        })
    }

    pub fn mark(&mut self, state: SidecarState) {
        self.state.insert(state);
    }

    pub fn has_state(&self, state: SidecarState) -> bool {
        self.state.contains(&state)
    }

    /// Remember the decision states derived from one tool's snapshot.
    pub fn record_tracks(&mut self, snapshot: MediaSnapshot) {
        self.tracks.insert(snapshot.source, snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn modified() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap()
    }

    fn sidecar() -> Sidecar {
        Sidecar::new(
            FileInfo::new(1024, modified()),
            ToolRecords {
                mkvmerge: ToolRecord::new("mkvmerge v80.0", "{}"),
                ffprobe: ToolRecord::new("ffprobe 6.0", "{}"),
                mediainfo: ToolRecord::new("MediaInfoLib - v23.04", "<MediaInfo/>"),
            },
        )
    }

    #[test]
    fn test_state_names() {
        for state in SidecarState::ALL {
            assert_eq!(state.name().parse::<SidecarState>(), Ok(state));
            assert_eq!(
                serde_json::to_value(state).unwrap(),
                Value::String(state.name().to_string())
            );
        }
        assert_eq!("Verified".parse::<SidecarState>(), Ok(SidecarState::Verified));
        assert!("bogus".parse::<SidecarState>().is_err());
    }

    #[test]
    fn test_is_current_for() {
        let sidecar = sidecar();
        assert!(sidecar.is_current_for(1024, modified()));
        assert!(!sidecar.is_current_for(1025, modified()));
        assert!(!sidecar.is_current_for(1024, modified() + chrono::Duration::seconds(1)));

        let mut missing = sidecar.clone();
        missing.tools.ffprobe.output.clear();
        assert!(!missing.is_current_for(1024, modified()));
    }

    #[test]
    fn test_mark() {
        let mut sidecar = sidecar();
        assert!(!sidecar.has_state(SidecarState::Verified));
        sidecar.mark(SidecarState::Verified);
        sidecar.mark(SidecarState::Verified);
        assert!(sidecar.has_state(SidecarState::Verified));
        assert_eq!(sidecar.state.len(), 1);
    }

    #[test]
    fn test_unknown_v2_state_fails_upgrade() {
        let json = r#"{
            "schema_version": 2,
            "file": {"size": 1, "modified": "2023-04-01T12:00:00Z"},
            "state": ["verified", "shiny"]
        }"#;
        assert_matches!(
            crate::from_str::<Sidecar>(json),
            Err(SchemaError::Upgrade { version: 3, .. })
        );
    }

    #[test]
    fn test_stored_output_parse_failure() {
        let mut sidecar = sidecar();
        sidecar.tools.ffprobe.output = "Invalid data found when processing input".to_string();

        let err = sidecar.snapshots(&LanguageResolver::new()).unwrap_err();
        assert_eq!(err.tool(), SourceTool::FfProbe);
    }
}
