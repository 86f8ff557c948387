//! Sidecar schema v1: flat tool outputs and a single `verified` flag.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidecarV1 {
    #[serde(default)]
    pub mediainfo_xml: String,
    #[serde(default)]
    pub ffprobe_json: String,
    #[serde(default)]
    pub mkvmerge_json: String,
    #[serde(default)]
    pub mediainfo_version: String,
    #[serde(default)]
    pub ffprobe_version: String,
    #[serde(default)]
    pub mkvmerge_version: String,
    pub file_size: u64,
    pub file_time: DateTime<Utc>,
    #[serde(default)]
    pub verified: bool,
}
