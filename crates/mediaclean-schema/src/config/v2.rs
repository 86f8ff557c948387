//! Config schema v2: real lists, paired video formats, track removal flag.

use super::v1::{split_list, ConfigV1, ToolsConfig};
use mediaclean_rules::VideoFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigV2 {
    pub process: ProcessV2,
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcessV2 {
    pub keep_languages: Vec<String>,
    pub remux_extensions: Vec<String>,
    pub reencode_video: Vec<VideoFormat>,
    pub reencode_audio_formats: Vec<String>,
    pub remux: bool,
    pub reencode: bool,
    pub remove_unwanted_tracks: bool,
    pub set_unknown_language: bool,
    pub delete_empty_folders: bool,
    pub verify: bool,
}

impl Default for ProcessV2 {
    fn default() -> Self {
        Self {
            keep_languages: Vec::new(),
            remux_extensions: Vec::new(),
            reencode_video: Vec::new(),
            reencode_audio_formats: Vec::new(),
            remux: false,
            reencode: false,
            remove_unwanted_tracks: false,
            set_unknown_language: true,
            delete_empty_folders: false,
            verify: false,
        }
    }
}

impl From<ConfigV1> for ConfigV2 {
    fn from(v1: ConfigV1) -> Self {
        let p = v1.process;

        // The two lists pair up by position, so blanks are only dropped after pairing.
        let profiles: Vec<&str> = p.reencode_video_profiles.split(',').map(str::trim).collect();
        let reencode_video = p
            .reencode_video_formats
            .split(',')
            .map(str::trim)
            .enumerate()
            .filter(|(_, format)| !format.is_empty())
            .map(|(i, format)| match profiles.get(i) {
                Some(profile) if !profile.is_empty() => VideoFormat::with_profile(format, *profile),
                _ => VideoFormat::any(format),
            })
            .collect();

        Self {
            process: ProcessV2 {
                keep_languages: split_list(&p.keep_languages),
                remux_extensions: split_list(&p.remux_extensions),
                reencode_video,
                reencode_audio_formats: split_list(&p.reencode_audio_formats),
                remux: p.remux,
                reencode: p.reencode,
                remove_unwanted_tracks: p.remove_unwanted_languages,
                set_unknown_language: true,
                delete_empty_folders: p.delete_empty_folders,
                verify: p.verify,
            },
            tools: v1.tools,
        }
    }
}
