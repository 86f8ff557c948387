//! Canonical track model, independent of the tool that produced it.

use mediaclean_common::language::is_undetermined;
use serde::{Deserialize, Serialize};

/// External tool an adapter consumes output from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTool {
    /// mkvmerge `-J` JSON identification.
    MkvMerge,
    /// ffprobe `-show_streams` JSON.
    FfProbe,
    /// mediainfo XML.
    MediaInfo,
}

impl SourceTool {
    /// All tools, in the order the processor consults them.
    pub const ALL: [SourceTool; 3] = [SourceTool::MkvMerge, SourceTool::FfProbe, SourceTool::MediaInfo];

    /// Executable name.
    pub fn name(self) -> &'static str {
        match self {
            SourceTool::MkvMerge => "mkvmerge",
            SourceTool::FfProbe => "ffprobe",
            SourceTool::MediaInfo => "mediainfo",
        }
    }
}

impl std::fmt::Display for SourceTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Track kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

impl TrackKind {
    /// All kinds, in snapshot order.
    pub const ALL: [TrackKind; 3] = [TrackKind::Video, TrackKind::Audio, TrackKind::Subtitle];
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Video => write!(f, "Video"),
            TrackKind::Audio => write!(f, "Audio"),
            TrackKind::Subtitle => write!(f, "Subtitle"),
        }
    }
}

/// Decision state stamped on a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackState {
    /// No decision made yet.
    #[default]
    None,
    Keep,
    Remove,
    ReMux,
    ReEncode,
}

impl std::fmt::Display for TrackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackState::None => write!(f, "None"),
            TrackState::Keep => write!(f, "Keep"),
            TrackState::Remove => write!(f, "Remove"),
            TrackState::ReMux => write!(f, "ReMux"),
            TrackState::ReEncode => write!(f, "ReEncode"),
        }
    }
}

/// Kind discriminator plus the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackDetail {
    Video {
        /// `Profile@Level` when the tool reports both.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile_level: Option<String>,
    },
    Audio,
    Subtitle {
        /// Container encapsulation of bitmap subtitles (e.g. `zlib`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        muxing_mode: Option<String>,
    },
}

/// One video, audio or subtitle stream as reported by one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Tool-scoped identifier, used for reporting.
    pub id: u32,
    /// Tool-scoped ordinal, used by track-editing commands.
    pub number: u32,
    /// Codec family name (e.g. `h264`, `AVC`, `HEVC/H.265/MPEG-H`).
    pub format: String,
    /// Tool-specific codec identifier (e.g. `V_MPEG4/ISO/AVC`, `avc1`).
    pub codec_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Canonical 3-letter code or `und`.
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub forced: bool,
    #[serde(default)]
    pub state: TrackState,
    #[serde(flatten)]
    pub detail: TrackDetail,
}

impl Track {
    fn new(kind: TrackDetail, id: u32, format: &str, language: &str) -> Self {
        Self {
            id,
            number: id,
            format: format.to_string(),
            codec_id: String::new(),
            profile: None,
            language: language.to_string(),
            title: None,
            default: false,
            forced: false,
            state: TrackState::None,
            detail: kind,
        }
    }

    /// Create a video track; `number` defaults to `id`.
    pub fn video(id: u32, format: &str, language: &str) -> Self {
        Self::new(TrackDetail::Video { profile_level: None }, id, format, language)
    }

    /// Create an audio track; `number` defaults to `id`.
    pub fn audio(id: u32, format: &str, language: &str) -> Self {
        Self::new(TrackDetail::Audio, id, format, language)
    }

    /// Create a subtitle track; `number` defaults to `id`.
    pub fn subtitle(id: u32, format: &str, language: &str) -> Self {
        Self::new(TrackDetail::Subtitle { muxing_mode: None }, id, format, language)
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    pub fn with_codec_id(mut self, codec_id: &str) -> Self {
        self.codec_id = codec_id.to_string();
        self
    }

    /// Set the profile; for video this also sets the profile-level.
    pub fn with_profile(mut self, profile: &str) -> Self {
        self.profile = Some(profile.to_string());
        if let TrackDetail::Video { profile_level } = &mut self.detail {
            *profile_level = Some(profile.to_string());
        }
        self
    }

    /// Set the muxing mode. No effect on non-subtitle tracks.
    pub fn with_muxing_mode(mut self, mode: &str) -> Self {
        if let TrackDetail::Subtitle { muxing_mode } = &mut self.detail {
            *muxing_mode = Some(mode.to_string());
        }
        self
    }

    pub fn kind(&self) -> TrackKind {
        match self.detail {
            TrackDetail::Video { .. } => TrackKind::Video,
            TrackDetail::Audio => TrackKind::Audio,
            TrackDetail::Subtitle { .. } => TrackKind::Subtitle,
        }
    }

    pub fn profile_level(&self) -> Option<&str> {
        match &self.detail {
            TrackDetail::Video { profile_level } => profile_level.as_deref(),
            _ => None,
        }
    }

    pub fn muxing_mode(&self) -> Option<&str> {
        match &self.detail {
            TrackDetail::Subtitle { muxing_mode } => muxing_mode.as_deref(),
            _ => None,
        }
    }

    /// Whether the language is empty or `und`.
    pub fn is_language_unknown(&self) -> bool {
        is_undetermined(&self.language)
    }

    /// Copy of this track with `state` set.
    pub fn stamped(&self, state: TrackState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: Id: {}, Number: {}, Format: {}, Codec: {}, Language: {}",
            self.kind(),
            self.id,
            self.number,
            self.format,
            self.codec_id,
            self.language
        )?;
        if let Some(profile) = self.profile_level().or(self.profile.as_deref()) {
            write!(f, ", Profile: {}", profile)?;
        }
        if let Some(mode) = self.muxing_mode() {
            write!(f, ", MuxingMode: {}", mode)?;
        }
        if let Some(title) = &self.title {
            write!(f, ", Title: {}", title)?;
        }
        write!(f, ", State: {}", self.state)
    }
}

/// The tracks one tool reported for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSnapshot {
    pub source: SourceTool,
    #[serde(default)]
    pub video: Vec<Track>,
    #[serde(default)]
    pub audio: Vec<Track>,
    #[serde(default)]
    pub subtitle: Vec<Track>,
}

impl MediaSnapshot {
    /// Create an empty snapshot.
    pub fn new(source: SourceTool) -> Self {
        Self {
            source,
            video: Vec::new(),
            audio: Vec::new(),
            subtitle: Vec::new(),
        }
    }

    /// Append a track to the sequence for its kind.
    pub fn push(&mut self, track: Track) {
        match track.kind() {
            TrackKind::Video => self.video.push(track),
            TrackKind::Audio => self.audio.push(track),
            TrackKind::Subtitle => self.subtitle.push(track),
        }
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_track(mut self, track: Track) -> Self {
        self.push(track);
        self
    }

    /// Tracks of one kind, in tool-reported order.
    pub fn of_kind(&self, kind: TrackKind) -> &[Track] {
        match kind {
            TrackKind::Video => &self.video,
            TrackKind::Audio => &self.audio,
            TrackKind::Subtitle => &self.subtitle,
        }
    }

    pub fn count(&self, kind: TrackKind) -> usize {
        self.of_kind(kind).len()
    }

    pub fn len(&self) -> usize {
        self.video.len() + self.audio.len() + self.subtitle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tracks, sorted by id.
    pub fn tracks(&self) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self
            .video
            .iter()
            .chain(self.audio.iter())
            .chain(self.subtitle.iter())
            .collect();
        tracks.sort_by_key(|t| t.id);
        tracks
    }

    /// Copy of this snapshot with every track stamped `state`.
    pub fn with_state(&self, state: TrackState) -> Self {
        let stamp = |tracks: &[Track]| tracks.iter().map(|t| t.stamped(state)).collect();
        Self {
            source: self.source,
            video: stamp(&self.video),
            audio: stamp(&self.audio),
            subtitle: stamp(&self.subtitle),
        }
    }
}

impl std::fmt::Display for MediaSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: {} video, {} audio, {} subtitle",
            self.source,
            self.video.len(),
            self.audio.len(),
            self.subtitle.len()
        )?;
        for track in self.tracks() {
            writeln!(f, "  {}", track)?;
        }
        Ok(())
    }
}
