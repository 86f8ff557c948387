//! Config schema v1: comma-separated lists in a single `process` group.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigV1 {
    pub process: ProcessV1,
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcessV1 {
    pub keep_languages: String,
    pub remux_extensions: String,
    /// Parallel to `reencode_video_profiles`.
    pub reencode_video_formats: String,
    pub reencode_video_profiles: String,
    pub reencode_audio_formats: String,
    pub remux: bool,
    pub reencode: bool,
    pub remove_unwanted_languages: bool,
    pub delete_empty_folders: bool,
    pub verify: bool,
}

/// Where the external tools live. Unchanged in every version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Use the tools found on `PATH` instead of `root_path`.
    pub use_system: bool,
    pub root_path: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            use_system: true,
            root_path: String::new(),
        }
    }
}

/// Split a comma-separated list, dropping blanks.
pub(crate) fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" eng, fre ,,ger "), vec!["eng", "fre", "ger"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
