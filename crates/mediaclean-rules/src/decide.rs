//! Track decision passes.
//!
//! Each pass is a pure function over one snapshot that splits its tracks into
//! a `keep` partition and a `selected` partition, stamping a state on every
//! track in both. The input snapshot is never modified.

use crate::policy::VideoFormat;
use mediaclean_av::{MediaSnapshot, Track, TrackKind, TrackState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Codec id of VobSub bitmap subtitles.
pub const BITMAP_SUBTITLE_CODEC: &str = "S_VOBSUB";

/// Outcome of a decision pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Tracks the pass leaves alone.
    pub keep: MediaSnapshot,
    /// Tracks the pass selected (unknown language, remux, remove, re-encode).
    pub selected: MediaSnapshot,
}

impl Split {
    /// Everything kept, nothing selected.
    pub fn keep_all(snapshot: &MediaSnapshot) -> Self {
        Self {
            keep: snapshot.with_state(TrackState::Keep),
            selected: MediaSnapshot::new(snapshot.source),
        }
    }

    /// Whether any track of any kind was selected.
    pub fn found(&self) -> bool {
        !self.selected.is_empty()
    }
}

fn split_by<F>(snapshot: &MediaSnapshot, selected_state: TrackState, mut select: F) -> Split
where
    F: FnMut(&Track) -> bool,
{
    let mut split = Split {
        keep: MediaSnapshot::new(snapshot.source),
        selected: MediaSnapshot::new(snapshot.source),
    };

    for kind in TrackKind::ALL {
        for track in snapshot.of_kind(kind) {
            if select(track) {
                split.selected.push(track.stamped(selected_state));
            } else {
                split.keep.push(track.stamped(TrackState::Keep));
            }
        }
    }

    split
}

/// Find tracks whose language is empty or `und`.
///
/// Both partitions are stamped `Keep`; correcting the language is a later,
/// separate step.
pub fn find_unknown_language(snapshot: &MediaSnapshot) -> Split {
    split_by(snapshot, TrackState::Keep, Track::is_language_unknown)
}

/// Find subtitle tracks that must be remuxed.
///
/// VobSub tracks without a muxing mode do not play on some devices and
/// must be re-wrapped. Video and audio always stay in `keep`.
pub fn find_need_remux(snapshot: &MediaSnapshot) -> Split {
    split_by(snapshot, TrackState::ReMux, |track| {
        track.kind() == TrackKind::Subtitle
            && track.codec_id.eq_ignore_ascii_case(BITMAP_SUBTITLE_CODEC)
            && track.muxing_mode().map_or(true, str::is_empty)
    })
}

/// Find tracks whose language is not in `keep_languages`.
///
/// A file never loses its last video or audio track to language filtering:
/// if every track of either kind would be removed, the first one is kept.
/// Subtitles have no such fallback.
pub fn find_need_remove(snapshot: &MediaSnapshot, keep_languages: &HashSet<String>) -> Split {
    let mut split = split_by(snapshot, TrackState::Remove, |track| {
        !keep_languages.contains(&track.language.to_lowercase())
    });

    rescue_first(&mut split.keep.video, &mut split.selected.video);
    rescue_first(&mut split.keep.audio, &mut split.selected.audio);

    split
}

fn rescue_first(keep: &mut Vec<Track>, removed: &mut Vec<Track>) {
    if keep.is_empty() && !removed.is_empty() {
        let first = removed.remove(0);
        tracing::debug!("Keeping {} to avoid removing every track of its kind", first);
        keep.push(first.stamped(TrackState::Keep));
    }
}

/// Find video and audio tracks that must be re-encoded.
///
/// A video track is selected if it matches any of `video_formats`; an audio
/// track if its format is in `audio_formats` (lowercase). Subtitles always
/// stay in `keep`.
pub fn find_need_reencode(
    snapshot: &MediaSnapshot,
    video_formats: &[VideoFormat],
    audio_formats: &HashSet<String>,
) -> Split {
    split_by(snapshot, TrackState::ReEncode, |track| match track.kind() {
        TrackKind::Video => video_formats.iter().any(|f| f.matches(track)),
        TrackKind::Audio => audio_formats.contains(&track.format.to_lowercase()),
        TrackKind::Subtitle => false,
    })
}
