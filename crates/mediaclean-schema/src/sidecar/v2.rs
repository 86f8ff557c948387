//! Sidecar schema v2: grouped `file` and `tools`, `state` list.

use super::v1::SidecarV1;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidecarV2 {
    pub file: FileInfoV2,
    #[serde(default)]
    pub tools: ToolRecords,
    #[serde(default)]
    pub state: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileInfoV2 {
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Version and captured output of one tool. Unchanged since v2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolRecord {
    pub version: String,
    pub output: String,
}

impl ToolRecord {
    pub fn new(version: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            output: output.into(),
        }
    }

    pub fn has_output(&self) -> bool {
        !self.output.trim().is_empty()
    }
}

/// Stored output of all three tools. Unchanged since v2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolRecords {
    pub mkvmerge: ToolRecord,
    pub ffprobe: ToolRecord,
    pub mediainfo: ToolRecord,
}

impl From<SidecarV1> for SidecarV2 {
    fn from(v1: SidecarV1) -> Self {
        let state = if v1.verified {
            vec!["verified".to_string()]
        } else {
            Vec::new()
        };

        Self {
            file: FileInfoV2 {
                size: v1.file_size,
                modified: v1.file_time,
            },
            tools: ToolRecords {
                mkvmerge: ToolRecord::new(v1.mkvmerge_version, v1.mkvmerge_json),
                ffprobe: ToolRecord::new(v1.ffprobe_version, v1.ffprobe_json),
                mediainfo: ToolRecord::new(v1.mediainfo_version, v1.mediainfo_xml),
            },
            state,
        }
    }
}
