//! ffprobe `-show_streams` JSON output.

use super::{canonical_language, non_empty};
use crate::model::{MediaSnapshot, SourceTool, Track, TrackDetail, TrackState};
use crate::{Error, Result};
use mediaclean_common::{LanguageResolver, UNDETERMINED};
use serde::Deserialize;
use std::collections::HashMap;

const TOOL: SourceTool = SourceTool::FfProbe;

/// ffprobe's placeholder for a language it could not read.
const UNKNOWN_LANGUAGE: &str = "???";

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: u32,
    codec_type: Option<String>,
    codec_name: Option<String>,
    codec_tag_string: Option<String>,
    profile: Option<String>,
    level: Option<serde_json::Value>,
    #[serde(default)]
    disposition: FfprobeDisposition,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    default: u8,
    #[serde(default)]
    forced: u8,
    #[serde(default)]
    attached_pic: u8,
}

impl FfprobeStream {
    /// Tag lookup; Matroska tags come through upper-case.
    fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Cover art is reported as a video stream with a MIME type tag.
    fn is_cover_art(&self) -> bool {
        self.tag("mimetype").is_some_and(|m| !m.trim().is_empty())
            || self.disposition.attached_pic == 1
    }
}

/// Parse `ffprobe -show_streams -print_format json` output.
pub fn parse_ffprobe(json: &str, resolver: &LanguageResolver) -> Result<MediaSnapshot> {
    let output: FfprobeOutput =
        serde_json::from_str(json).map_err(|source| Error::Json { tool: TOOL, source })?;

    let mut snapshot = MediaSnapshot::new(TOOL);

    for stream in &output.streams {
        let detail = match stream.codec_type.as_deref() {
            Some("video") => {
                if stream.is_cover_art() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Skipping cover art stream {}", stream.index);
                    continue;
                }
                TrackDetail::Video {
                    profile_level: profile_level(stream.profile.as_deref(), stream.level.as_ref()),
                }
            }
            Some("audio") => TrackDetail::Audio,
            Some("subtitle") => TrackDetail::Subtitle { muxing_mode: None },
            _ => continue,
        };

        let language = normalize_language(stream.tag("language"), resolver)?;

        let format = non_empty(stream.codec_name.clone()).ok_or_else(|| {
            Error::format(TOOL, format!("stream {} has no codec name", stream.index))
        })?;

        snapshot.push(Track {
            id: stream.index,
            number: stream.index,
            format,
            codec_id: stream.codec_tag_string.clone().unwrap_or_default(),
            profile: non_empty(stream.profile.clone()),
            language,
            title: non_empty(stream.tag("title").map(str::to_string)),
            default: stream.disposition.default == 1,
            forced: stream.disposition.forced == 1,
            state: TrackState::None,
            detail,
        });
    }

    Ok(snapshot)
}

/// Absent, empty and `???` all mean undetermined; anything else must be a
/// 3-letter code.
fn normalize_language(tag: Option<&str>, resolver: &LanguageResolver) -> Result<String> {
    match tag.map(str::trim) {
        None | Some("") | Some(UNKNOWN_LANGUAGE) => Ok(UNDETERMINED.to_string()),
        Some(language) => canonical_language(TOOL, language, resolver),
    }
}

/// Combine profile and level as `Profile@Level` when both are known.
///
/// ffprobe reports the level as a number (`41`), with a negative value when
/// it is unknown.
fn profile_level(profile: Option<&str>, level: Option<&serde_json::Value>) -> Option<String> {
    let profile = profile.map(str::trim).filter(|p| !p.is_empty())?;

    let level = level.and_then(|value| match value {
        serde_json::Value::Number(n) => n.as_i64().filter(|l| *l >= 0).map(|l| l.to_string()),
        serde_json::Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        _ => None,
    });

    match level {
        Some(level) => Some(format!("{}@{}", profile, level)),
        None => Some(profile.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    const SAMPLE: &str = r#"{
        "streams": [
            {"index": 0, "codec_name": "h264", "codec_type": "video", "codec_tag_string": "avc1",
             "profile": "Constrained Baseline", "level": 30,
             "disposition": {"default": 1, "forced": 0, "attached_pic": 0},
             "tags": {"language": "eng"}},
            {"index": 1, "codec_name": "aac", "codec_type": "audio", "codec_tag_string": "mp4a",
             "profile": "LC", "tags": {"language": "???", "title": "Stereo"}},
            {"index": 2, "codec_name": "mov_text", "codec_type": "subtitle", "tags": {"language": ""}},
            {"index": 3, "codec_name": "mjpeg", "codec_type": "video",
             "tags": {"mimetype": "image/jpeg", "filename": "cover.jpg"}},
            {"index": 4, "codec_type": "data", "tags": {"handler_name": "SubtitleHandler"}}
        ]
    }"#;

    #[test]
    fn test_parse_streams() {
        let snapshot = parse_ffprobe(SAMPLE, &LanguageResolver::new()).unwrap();

        assert_eq!(snapshot.source, SourceTool::FfProbe);
        assert_eq!(snapshot.video.len(), 1, "cover art must be excluded");
        assert_eq!(snapshot.audio.len(), 1);
        assert_eq!(snapshot.subtitle.len(), 1);

        let video = &snapshot.video[0];
        assert_eq!(video.format, "h264");
        assert_eq!(video.codec_id, "avc1");
        assert_eq!(video.profile.as_deref(), Some("Constrained Baseline"));
        assert_eq!(video.profile_level(), Some("Constrained Baseline@30"));
        assert!(video.default);
    }

    #[test]
    fn test_placeholder_and_empty_language_are_undetermined() {
        let snapshot = parse_ffprobe(SAMPLE, &LanguageResolver::new()).unwrap();
        assert_eq!(snapshot.audio[0].language, "und");
        assert_eq!(snapshot.subtitle[0].language, "und");
        assert_eq!(snapshot.audio[0].title.as_deref(), Some("Stereo"));
    }

    #[test]
    fn test_upper_case_language_tag() {
        let json = r#"{"streams": [{"index": 0, "codec_name": "ac3", "codec_type": "audio", "tags": {"LANGUAGE": "GER"}}]}"#;
        let snapshot = parse_ffprobe(json, &LanguageResolver::new()).unwrap();
        assert_eq!(snapshot.audio[0].language, "ger");
    }

    #[test]
    fn test_terminologic_codes_are_canonicalized() {
        let json = r#"{"streams": [
            {"index": 0, "codec_name": "h264", "codec_type": "video", "tags": {"language": "zho"}},
            {"index": 1, "codec_name": "aac", "codec_type": "audio", "tags": {"language": "zho"}},
            {"index": 2, "codec_name": "ac3", "codec_type": "audio", "tags": {"language": "fra"}},
            {"index": 3, "codec_name": "subrip", "codec_type": "subtitle", "tags": {"language": "zho"}}
        ]}"#;
        let snapshot = parse_ffprobe(json, &LanguageResolver::new()).unwrap();
        let languages: Vec<&str> = snapshot
            .tracks()
            .iter()
            .map(|t| t.language.as_str())
            .collect();
        assert_eq!(languages, vec!["chi", "chi", "fre", "chi"]);
    }

    #[test]
    fn test_malformed_language_is_rejected() {
        let json = r#"{"streams": [{"index": 0, "codec_name": "ac3", "codec_type": "audio", "tags": {"language": "english"}}]}"#;
        assert_matches!(
            parse_ffprobe(json, &LanguageResolver::new()),
            Err(Error::Format { tool: SourceTool::FfProbe, .. })
        );
    }

    #[test]
    fn test_attached_pic_is_excluded() {
        let json = r#"{"streams": [{"index": 0, "codec_name": "png", "codec_type": "video", "disposition": {"attached_pic": 1}}]}"#;
        let snapshot = parse_ffprobe(json, &LanguageResolver::new()).unwrap();
        assert!(snapshot.video.is_empty());
    }

    #[test]
    fn test_profile_level() {
        assert_eq!(
            profile_level(Some("High"), Some(&json!(41))).as_deref(),
            Some("High@41")
        );
        assert_eq!(profile_level(Some("Main 10"), None).as_deref(), Some("Main 10"));
        assert_eq!(
            profile_level(Some("Main"), Some(&json!(-99))).as_deref(),
            Some("Main")
        );
        assert_eq!(
            profile_level(Some("Main"), Some(&json!("5.1"))).as_deref(),
            Some("Main@5.1")
        );
        assert_eq!(profile_level(None, Some(&json!(41))), None);
    }

    #[test]
    fn test_missing_codec_name_is_rejected() {
        let json = r#"{"streams": [{"index": 0, "codec_type": "audio"}]}"#;
        assert_matches!(parse_ffprobe(json, &LanguageResolver::new()), Err(Error::Format { .. }));
    }
}
