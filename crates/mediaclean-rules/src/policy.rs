//! Inputs to the decision engine.

use mediaclean_av::Track;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Profile value that matches any profile.
pub const ANY_PROFILE: &str = "*";

/// A video format (and optionally profile) that must be re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoFormat {
    /// Format name as ffprobe reports it (e.g. `h264`, `mpeg2video`).
    pub format: String,
    /// `Profile@Level`; empty, absent or `*` matches any profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl VideoFormat {
    /// Match a format regardless of profile.
    pub fn any(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            profile: None,
        }
    }

    /// Match a format with one profile.
    pub fn with_profile(format: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            profile: Some(profile.into()),
        }
    }

    /// Whether the profile is a wildcard.
    pub fn matches_any_profile(&self) -> bool {
        self.profile
            .as_deref()
            .map(str::trim)
            .map_or(true, |p| p.is_empty() || p == ANY_PROFILE)
    }

    /// Whether a video track has this format and profile.
    pub fn matches(&self, track: &Track) -> bool {
        if !track.format.eq_ignore_ascii_case(&self.format) {
            return false;
        }
        if self.matches_any_profile() {
            return true;
        }

        let track_profile = track.profile_level().or(track.profile.as_deref());
        match (self.profile.as_deref(), track_profile) {
            (Some(wanted), Some(actual)) => wanted.trim().eq_ignore_ascii_case(actual.trim()),
            _ => false,
        }
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.profile {
            Some(profile) if !self.matches_any_profile() => write!(f, "{}:{}", self.format, profile),
            _ => write!(f, "{}:{}", self.format, ANY_PROFILE),
        }
    }
}

/// Everything the decision pipeline needs to know about the user's wishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionPolicy {
    /// Canonical lowercase language codes to keep.
    pub keep_languages: HashSet<String>,
    pub reencode_video: Vec<VideoFormat>,
    /// Lowercase audio format names to re-encode.
    pub reencode_audio_formats: HashSet<String>,
    /// Evaluate remux decisions.
    pub remux: bool,
    /// Evaluate remove decisions.
    pub remove_unwanted_tracks: bool,
    /// Evaluate re-encode decisions.
    pub reencode: bool,
}

impl DecisionPolicy {
    /// Policy with every stage enabled and nothing configured.
    pub fn new() -> Self {
        Self {
            remux: true,
            remove_unwanted_tracks: true,
            reencode: true,
            ..Default::default()
        }
    }

    pub fn keep_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keep_languages = lowercase_set(languages);
        self
    }

    pub fn reencode_video(mut self, formats: impl IntoIterator<Item = VideoFormat>) -> Self {
        self.reencode_video = formats.into_iter().collect();
        self
    }

    pub fn reencode_audio<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reencode_audio_formats = lowercase_set(formats);
        self
    }
}

/// Trimmed, lowercased, de-duplicated set.
pub fn lowercase_set<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}
