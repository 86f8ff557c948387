//! Global configuration record.
//!
//! | Version | Change |
//! |---|---|
//! | 1 | comma-separated lists in one `process` group |
//! | 2 | real lists, `reencode_video` pairs, `remove_unwanted_tracks`, `set_unknown_language` |
//! | 3 | `language`, `convert` and `verify` groups split out of `process` |

pub mod v1;
pub mod v2;

pub use v1::{ConfigV1, ToolsConfig};
pub use v2::ConfigV2;

use crate::error::{Result, SchemaError};
use crate::versioned::{Schema, SchemaVersion, VersionedRecord};
use mediaclean_common::paths::has_extension_in;
use mediaclean_common::LanguageResolver;
use mediaclean_rules::{lowercase_set, DecisionPolicy, VideoFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Current config schema version.
pub const CONFIG_VERSION: u32 = 3;

/// A config document at any known version.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigDocument {
    V1(ConfigV1),
    V2(ConfigV2),
    V3(ConfigFile),
}

impl ConfigDocument {
    pub fn version(&self) -> u32 {
        match self {
            ConfigDocument::V1(_) => 1,
            ConfigDocument::V2(_) => 2,
            ConfigDocument::V3(_) => 3,
        }
    }
}

fn decode_v1(value: Value) -> serde_json::Result<ConfigDocument> {
    serde_json::from_value(value).map(ConfigDocument::V1)
}

fn decode_v2(value: Value) -> serde_json::Result<ConfigDocument> {
    serde_json::from_value(value).map(ConfigDocument::V2)
}

fn decode_v3(value: Value) -> serde_json::Result<ConfigDocument> {
    serde_json::from_value(value).map(ConfigDocument::V3)
}

fn upgrade_v2(document: ConfigDocument) -> Result<ConfigDocument> {
    match document {
        ConfigDocument::V1(v1) => Ok(ConfigDocument::V2(v1.into())),
        other => Err(unexpected(2, &other)),
    }
}

fn upgrade_v3(document: ConfigDocument) -> Result<ConfigDocument> {
    match document {
        ConfigDocument::V2(v2) => Ok(ConfigDocument::V3(v2.into())),
        other => Err(unexpected(3, &other)),
    }
}

fn unexpected(version: u32, document: &ConfigDocument) -> SchemaError {
    SchemaError::upgrade(
        CONFIG_SCHEMA.name,
        version,
        format!("expected a v{} document, got v{}", version - 1, document.version()),
    )
}

/// Version table of the config family.
pub static CONFIG_SCHEMA: Schema<ConfigDocument> = Schema {
    name: "config",
    versions: &[
        SchemaVersion {
            version: 1,
            name: "initial",
            decode: decode_v1,
            upgrade: None,
        },
        SchemaVersion {
            version: 2,
            name: "lists",
            decode: decode_v2,
            upgrade: Some(upgrade_v2),
        },
        SchemaVersion {
            version: 3,
            name: "option_groups",
            decode: decode_v3,
            upgrade: Some(upgrade_v3),
        },
    ],
};

/// Which processing steps run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    pub remux: bool,
    pub reencode: bool,
    pub remove_unwanted_tracks: bool,
    /// Tag tracks with an unknown language as `language.default_language`.
    pub set_unknown_language: bool,
    pub delete_empty_folders: bool,
    pub verify: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            remux: true,
            reencode: true,
            remove_unwanted_tracks: true,
            set_unknown_language: true,
            delete_empty_folders: true,
            verify: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageOptions {
    /// Language assigned to tracks whose language is unknown.
    pub default_language: String,
    pub keep_languages: Vec<String>,
    /// Keep tracks in the media's original language even if not listed.
    pub keep_original_language: bool,
}

impl Default for LanguageOptions {
    fn default() -> Self {
        Self {
            default_language: "eng".to_string(),
            keep_languages: vec!["eng".to_string(), "und".to_string()],
            keep_original_language: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Containers always remuxed to MKV, with a leading dot (`.avi`).
    pub remux_extensions: Vec<String>,
    pub reencode_video: Vec<VideoFormat>,
    pub reencode_audio_formats: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            remux_extensions: strings(&[
                ".avi", ".divx", ".flv", ".m2ts", ".ts", ".vob", ".mp4", ".m4v", ".asf", ".wmv",
            ]),
            reencode_video: vec![
                VideoFormat::with_profile("mpeg2video", "*"),
                VideoFormat::with_profile("msmpeg4v3", "*"),
                VideoFormat::with_profile("h264", "Constrained Baseline@30"),
            ],
            reencode_audio_formats: strings(&["flac", "mp2", "vorbis", "wmapro", "pcm_s16le"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOptions {
    pub auto_repair: bool,
    pub delete_invalid_files: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            auto_repair: true,
            delete_invalid_files: false,
        }
    }
}

/// Current (v3) configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub schema_version: u32,
    /// Version the file was read at.
    #[serde(skip)]
    pub deserialized_version: u32,
    pub process: ProcessOptions,
    pub language: LanguageOptions,
    pub convert: ConvertOptions,
    pub verify: VerifyOptions,
    pub tools: ToolsConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_VERSION,
            deserialized_version: CONFIG_VERSION,
            process: ProcessOptions::default(),
            language: LanguageOptions::default(),
            convert: ConvertOptions::default(),
            verify: VerifyOptions::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl From<ConfigV2> for ConfigFile {
    fn from(v2: ConfigV2) -> Self {
        let p = v2.process;
        Self {
            schema_version: CONFIG_VERSION,
            deserialized_version: CONFIG_VERSION,
            process: ProcessOptions {
                remux: p.remux,
                reencode: p.reencode,
                remove_unwanted_tracks: p.remove_unwanted_tracks,
                set_unknown_language: p.set_unknown_language,
                delete_empty_folders: p.delete_empty_folders,
                verify: p.verify,
            },
            language: LanguageOptions {
                keep_languages: p.keep_languages,
                ..LanguageOptions::default()
            },
            convert: ConvertOptions {
                remux_extensions: p.remux_extensions,
                reencode_video: p.reencode_video,
                reencode_audio_formats: p.reencode_audio_formats,
            },
            verify: VerifyOptions::default(),
            tools: v2.tools,
        }
    }
}

impl VersionedRecord for ConfigFile {
    type Document = ConfigDocument;

    fn schema() -> &'static Schema<ConfigDocument> {
        &CONFIG_SCHEMA
    }

    fn from_current(document: ConfigDocument, deserialized_version: u32) -> Result<Self> {
        match document {
            ConfigDocument::V3(config) => Ok(Self {
                schema_version: CONFIG_VERSION,
                deserialized_version,
                ..config
            }),
            other => Err(SchemaError::upgrade(
                CONFIG_SCHEMA.name,
                CONFIG_VERSION,
                format!("upgrade stopped at v{}", other.version()),
            )),
        }
    }

    fn deserialized_version(&self) -> u32 {
        self.deserialized_version
    }
}

impl ConfigFile {
    /// Build the decision engine's input.
    ///
    /// Keep languages are canonicalized through the resolver so `en`,
    /// `English` and `eng` all keep `eng` tracks; unresolvable entries are
    /// kept as written.
    pub fn decision_policy(&self, resolver: &LanguageResolver) -> DecisionPolicy {
        let keep_languages = self.language.keep_languages.iter().map(|language| {
            resolver
                .resolve_code(language)
                .unwrap_or_else(|| language.trim().to_lowercase())
        });

        DecisionPolicy {
            keep_languages: lowercase_set(keep_languages),
            reencode_video: self.convert.reencode_video.clone(),
            reencode_audio_formats: lowercase_set(&self.convert.reencode_audio_formats),
            remux: self.process.remux,
            remove_unwanted_tracks: self.process.remove_unwanted_tracks,
            reencode: self.process.reencode,
        }
    }

    /// Whether the container is always remuxed, based on its extension.
    pub fn is_remux_extension(&self, path: &Path) -> bool {
        self.process.remux && has_extension_in(path, &self.convert.remux_extensions)
    }
}
