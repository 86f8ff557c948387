//! mkvmerge `-J` identification output.

use super::{canonical_language, non_empty};
use crate::model::{MediaSnapshot, SourceTool, Track, TrackDetail, TrackState};
use crate::{Error, Result};
use mediaclean_common::{LanguageResolver, UNDETERMINED};
use serde::Deserialize;

const TOOL: SourceTool = SourceTool::MkvMerge;

#[derive(Debug, Deserialize)]
struct MkvMergeOutput {
    #[serde(default)]
    container: Option<MkvMergeContainer>,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    tracks: Vec<MkvMergeTrack>,
}

#[derive(Debug, Deserialize)]
struct MkvMergeContainer {
    #[serde(default = "default_true")]
    recognized: bool,
    #[serde(rename = "type")]
    container_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MkvMergeTrack {
    id: u32,
    #[serde(rename = "type")]
    track_type: String,
    codec: Option<String>,
    #[serde(default)]
    properties: MkvMergeProperties,
}

#[derive(Debug, Default, Deserialize)]
struct MkvMergeProperties {
    codec_id: Option<String>,
    language: Option<String>,
    number: Option<u32>,
    track_name: Option<String>,
    #[serde(default)]
    default_track: bool,
    #[serde(default)]
    forced_track: bool,
}

fn default_true() -> bool {
    true
}

/// Parse `mkvmerge -J` output.
///
/// The track `id` is what mkvmerge reports for identification; the track
/// `number` is what mkvpropedit edits by. They are kept distinct.
pub fn parse_mkvmerge(json: &str, resolver: &LanguageResolver) -> Result<MediaSnapshot> {
    let output: MkvMergeOutput =
        serde_json::from_str(json).map_err(|source| Error::Json { tool: TOOL, source })?;

    if !output.errors.is_empty() {
        return Err(Error::format(TOOL, output.errors.join("; ")));
    }

    if let Some(container) = &output.container {
        if !container.recognized {
            return Err(Error::format(
                TOOL,
                format!(
                    "container not recognized: {}",
                    container.container_type.as_deref().unwrap_or("unknown")
                ),
            ));
        }
    }

    let mut snapshot = MediaSnapshot::new(TOOL);

    for track in output.tracks {
        let detail = match track.track_type.as_str() {
            "video" => TrackDetail::Video {
                profile_level: None,
            },
            "audio" => TrackDetail::Audio,
            "subtitles" => TrackDetail::Subtitle { muxing_mode: None },
            _ => continue,
        };

        let properties = track.properties;

        let language = match non_empty(properties.language) {
            Some(language) => canonical_language(TOOL, &language, resolver)?,
            None => UNDETERMINED.to_string(),
        };

        let number = properties.number.ok_or_else(|| {
            Error::format(TOOL, format!("track {} has no track number", track.id))
        })?;

        let format = non_empty(track.codec)
            .ok_or_else(|| Error::format(TOOL, format!("track {} has no codec", track.id)))?;

        snapshot.push(Track {
            id: track.id,
            number,
            format,
            codec_id: properties.codec_id.unwrap_or_default(),
            profile: None,
            language,
            title: non_empty(properties.track_name),
            default: properties.default_track,
            forced: properties.forced_track,
            state: TrackState::None,
            detail,
        });
    }

    Ok(snapshot)
}
