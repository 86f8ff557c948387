//! MediaInfo XML output.
//!
//! Handles both the current layout and the pre-2017 one:
//! ```xml
//! <MediaInfo xmlns="https://mediaarea.net/mediainfo" version="2.0">
//!   <media ref="movie.mkv">
//!     <track type="Video">
//!       <StreamOrder>0</StreamOrder>
//!       <ID>1</ID>
//!       <Format>AVC</Format>
//!       <Format_Profile>High</Format_Profile>
//!       <Format_Level>4.1</Format_Level>
//!       <CodecID>V_MPEG4/ISO/AVC</CodecID>
//!       <Language>en</Language>
//!     </track>
//!   </media>
//! </MediaInfo>
//! ```
//! The older layout nests `<track>` under `<File>` and spells some fields
//! differently (`Codec_ID`, `Format_profile`, `Muxing_mode`).

use super::non_empty;
use crate::model::{MediaSnapshot, SourceTool, Track, TrackDetail, TrackState};
use crate::{Error, Result};
use mediaclean_common::LanguageResolver;
use roxmltree::Node;

const TOOL: SourceTool = SourceTool::MediaInfo;

/// Parse `mediainfo --Output=XML` output.
///
/// Languages are free-form and resolved through `resolver`; anything it
/// cannot resolve becomes `und`.
pub fn parse_mediainfo(xml: &str, resolver: &LanguageResolver) -> Result<MediaSnapshot> {
    let doc = roxmltree::Document::parse(xml).map_err(|source| Error::Xml { tool: TOOL, source })?;

    let root = doc.root_element();
    if root.tag_name().name() != "MediaInfo" && root.tag_name().name() != "Mediainfo" {
        return Err(Error::format(
            TOOL,
            format!("unexpected root element <{}>", root.tag_name().name()),
        ));
    }

    let mut snapshot = MediaSnapshot::new(TOOL);

    for track in root
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "track")
    {
        let detail = match track.attribute("type") {
            Some("Video") => TrackDetail::Video {
                profile_level: None,
            },
            Some("Audio") => TrackDetail::Audio,
            Some("Text") => TrackDetail::Subtitle {
                muxing_mode: field(&track, &["MuxingMode", "Muxing_mode"]).map(str::to_string),
            },
            _ => continue,
        };

        let raw_id = field(&track, &["ID"])
            .ok_or_else(|| Error::format(TOOL, "track has no ID"))?;
        let id = leading_number(raw_id)
            .ok_or_else(|| Error::format(TOOL, format!("invalid track ID: {:?}", raw_id)))?;

        let number = field(&track, &["StreamOrder"])
            .and_then(leading_number)
            .unwrap_or(id);

        let format = field(&track, &["Format"])
            .ok_or_else(|| Error::format(TOOL, format!("track {} has no Format", id)))?
            .to_string();

        let profile = field(&track, &["Format_Profile", "Format_profile"]).map(str::to_string);

        let language = field(&track, &["Language"])
            .map(|tag| resolver.resolve_or_und(tag))
            .unwrap_or_else(|| mediaclean_common::UNDETERMINED.to_string());

        let detail = match detail {
            TrackDetail::Video { .. } => TrackDetail::Video {
                profile_level: profile_level(
                    profile.as_deref(),
                    field(&track, &["Format_Level", "Format_level"]),
                ),
            },
            other => other,
        };

        snapshot.push(Track {
            id,
            number,
            format,
            codec_id: field(&track, &["CodecID", "Codec_ID"])
                .unwrap_or_default()
                .to_string(),
            profile,
            language,
            title: non_empty(field(&track, &["Title"]).map(str::to_string)),
            default: field(&track, &["Default"]) == Some("Yes"),
            forced: field(&track, &["Forced"]) == Some("Yes"),
            state: TrackState::None,
            detail,
        });
    }

    Ok(snapshot)
}

/// Text of the first child element named any of `names`, trimmed, non-empty.
fn field<'a, 'input>(track: &Node<'a, 'input>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        track
            .children()
            .find(|c| c.is_element() && c.tag_name().name() == *name)
            .and_then(|c| c.text())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    })
}

/// Parse the leading decimal digits (`2-CC1` -> 2, `4113 (0x1011)` -> 4113).
fn leading_number(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Older versions already report `High@L4.1` as the profile.
fn profile_level(profile: Option<&str>, level: Option<&str>) -> Option<String> {
    let profile = profile?;
    match level {
        Some(level) if !profile.contains('@') => Some(format!("{}@{}", profile, level)),
        _ => Some(profile.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaInfo xmlns="https://mediaarea.net/mediainfo" version="2.0">
  <media ref="movie.mkv">
    <track type="General"><Format>Matroska</Format></track>
    <track type="Video">
      <StreamOrder>0</StreamOrder><ID>1</ID><Format>AVC</Format>
      <Format_Profile>High</Format_Profile><Format_Level>4.1</Format_Level>
      <CodecID>V_MPEG4/ISO/AVC</CodecID><Language>en</Language><Default>Yes</Default>
    </track>
    <track type="Audio">
      <StreamOrder>1</StreamOrder><ID>2</ID><Format>AC-3</Format>
      <CodecID>A_AC3</CodecID><Language>zh-Hant</Language>
    </track>
    <track type="Text" typeorder="1">
      <StreamOrder>2</StreamOrder><ID>3</ID><Format>VobSub</Format>
      <CodecID>S_VOBSUB</CodecID><Language>fr-CA</Language><MuxingMode>zlib</MuxingMode>
      <Forced>Yes</Forced>
    </track>
    <track type="Text" typeorder="2">
      <ID>1-CC1</ID><Format>EIA-608</Format><Language>Klingon</Language>
    </track>
    <track type="Menu"><Format>Chapters</Format></track>
  </media>
</MediaInfo>"#;

    #[test]
    fn test_parse_tracks() {
        let snapshot = parse_mediainfo(SAMPLE, &LanguageResolver::new()).unwrap();

        assert_eq!(snapshot.source, SourceTool::MediaInfo);
        assert_eq!(snapshot.video.len(), 1);
        assert_eq!(snapshot.audio.len(), 1);
        assert_eq!(snapshot.subtitle.len(), 2);

        let video = &snapshot.video[0];
        assert_eq!(video.id, 1);
        assert_eq!(video.number, 0);
        assert_eq!(video.profile_level(), Some("High@4.1"));
        assert_eq!(video.language, "eng");
        assert!(video.default);

        let vobsub = &snapshot.subtitle[0];
        assert_eq!(vobsub.codec_id, "S_VOBSUB");
        assert_eq!(vobsub.muxing_mode(), Some("zlib"));
        assert_eq!(vobsub.language, "fre");
        assert!(vobsub.forced);
    }

    #[test]
    fn test_chinese_resolves_to_bibliographic_code() {
        let snapshot = parse_mediainfo(SAMPLE, &LanguageResolver::new()).unwrap();
        assert_eq!(snapshot.audio[0].language, "chi");
    }

    #[test]
    fn test_composite_id_and_unresolvable_language() {
        let snapshot = parse_mediainfo(SAMPLE, &LanguageResolver::new()).unwrap();
        let caption = &snapshot.subtitle[1];
        assert_eq!(caption.id, 1);
        assert_eq!(caption.number, 1);
        assert_eq!(caption.language, "und");
        assert_eq!(caption.muxing_mode(), None);
    }

    #[test]
    fn test_legacy_layout() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<Mediainfo version="0.7.91">
  <File>
    <track type="Video" streamid="1">
      <ID>1</ID><Format>AVC</Format><Format_profile>High@L4.1</Format_profile>
      <Codec_ID>V_MPEG4/ISO/AVC</Codec_ID><Language>English</Language>
    </track>
    <track type="Text" streamid="1">
      <ID>3</ID><Format>VobSub</Format><Codec_ID>S_VOBSUB</Codec_ID><Language>German</Language>
    </track>
  </File>
</Mediainfo>"#;

        let snapshot = parse_mediainfo(xml, &LanguageResolver::new()).unwrap();
        assert_eq!(snapshot.video[0].profile_level(), Some("High@L4.1"));
        assert_eq!(snapshot.video[0].codec_id, "V_MPEG4/ISO/AVC");
        assert_eq!(snapshot.video[0].language, "eng");
        assert_eq!(snapshot.subtitle[0].language, "ger");
        assert_eq!(snapshot.subtitle[0].muxing_mode(), None);
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let xml = r#"<MediaInfo><media><track type="Audio"><ID>CC1</ID><Format>AAC</Format></track></media></MediaInfo>"#;
        assert_matches!(
            parse_mediainfo(xml, &LanguageResolver::new()),
            Err(Error::Format { tool: SourceTool::MediaInfo, .. })
        );
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let xml = r#"<MediaInfo><media><track type="Audio"><Format>AAC</Format></track></media></MediaInfo>"#;
        assert_matches!(
            parse_mediainfo(xml, &LanguageResolver::new()),
            Err(Error::Format { .. })
        );
    }

    #[test]
    fn test_invalid_xml() {
        assert_matches!(
            parse_mediainfo("<MediaInfo>", &LanguageResolver::new()),
            Err(Error::Xml { .. })
        );
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("2-CC1"), Some(2));
        assert_eq!(leading_number("4113 (0x1011)"), Some(4113));
        assert_eq!(leading_number("12"), Some(12));
        assert_eq!(leading_number("CC1"), None);
        assert_eq!(leading_number(""), None);
    }
}
