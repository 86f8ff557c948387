//! Composed decision pipeline for one snapshot.

use crate::decide::{find_need_reencode, find_need_remove, find_need_remux, Split};
use crate::policy::DecisionPolicy;
use mediaclean_av::{MediaSnapshot, TrackKind};
use serde::{Deserialize, Serialize};

/// What to do with every track of one snapshot.
///
/// Every track of the input appears in exactly one of the four partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPlan {
    pub keep: MediaSnapshot,
    pub remux: MediaSnapshot,
    pub remove: MediaSnapshot,
    pub reencode: MediaSnapshot,
}

impl TrackPlan {
    /// Run remux, then remove, then re-encode; each stage sees only what the
    /// previous stage kept. Disabled stages keep everything.
    pub fn build(snapshot: &MediaSnapshot, policy: &DecisionPolicy) -> Self {
        let remux = if policy.remux {
            find_need_remux(snapshot)
        } else {
            Split::keep_all(snapshot)
        };

        let remove = if policy.remove_unwanted_tracks {
            find_need_remove(&remux.keep, &policy.keep_languages)
        } else {
            Split::keep_all(&remux.keep)
        };

        let reencode = if policy.reencode {
            find_need_reencode(
                &remove.keep,
                &policy.reencode_video,
                &policy.reencode_audio_formats,
            )
        } else {
            Split::keep_all(&remove.keep)
        };

        let plan = Self {
            keep: reencode.keep,
            remux: remux.selected,
            remove: remove.selected,
            reencode: reencode.selected,
        };
        tracing::debug!("Track plan for {}: {}", snapshot.source, plan);
        plan
    }

    /// Whether nothing needs to change.
    pub fn is_noop(&self) -> bool {
        self.remux.is_empty() && self.remove.is_empty() && self.reencode.is_empty()
    }

    pub fn needs_remux(&self) -> bool {
        !self.remux.is_empty()
    }

    pub fn needs_remove(&self) -> bool {
        !self.remove.is_empty()
    }

    pub fn needs_reencode(&self) -> bool {
        !self.reencode.is_empty()
    }
}

impl std::fmt::Display for TrackPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [
            ("keep", &self.keep),
            ("remux", &self.remux),
            ("remove", &self.remove),
            ("reencode", &self.reencode),
        ];
        let summary: Vec<String> = parts
            .iter()
            .map(|(name, snapshot)| {
                let ids: Vec<String> = snapshot.tracks().iter().map(|t| t.id.to_string()).collect();
                format!("{} [{}]", name, ids.join(", "))
            })
            .collect();
        write!(f, "{}", summary.join(", "))?;

        if !self.keep.is_empty() {
            write!(
                f,
                " ({} video, {} audio, {} subtitle kept)",
                self.keep.count(TrackKind::Video),
                self.keep.count(TrackKind::Audio),
                self.keep.count(TrackKind::Subtitle)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::VideoFormat;
    use mediaclean_av::{SourceTool, Track, TrackState};

    fn snapshot() -> MediaSnapshot {
        MediaSnapshot::new(SourceTool::FfProbe)
            .with_track(Track::video(0, "h264", "eng").with_profile("High@41"))
            .with_track(Track::audio(1, "flac", "eng"))
            .with_track(Track::audio(2, "ac3", "ger"))
            .with_track(Track::subtitle(3, "subrip", "eng"))
            .with_track(Track::subtitle(4, "subrip", "fre"))
    }

    #[test]
    fn test_plan_partitions_every_track_once() {
        let policy = DecisionPolicy::new()
            .keep_languages(["eng"])
            .reencode_audio(["flac"]);
        let plan = TrackPlan::build(&snapshot(), &policy);

        let mut ids: Vec<u32> = [&plan.keep, &plan.remux, &plan.remove, &plan.reencode]
            .iter()
            .flat_map(|s| s.tracks().into_iter().map(|t| t.id).collect::<Vec<_>>())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        assert_eq!(plan.remove.audio[0].id, 2);
        assert_eq!(plan.remove.subtitle[0].id, 4);
        assert_eq!(plan.reencode.audio[0].id, 1);
        assert_eq!(plan.reencode.audio[0].state, TrackState::ReEncode);
        assert!(!plan.is_noop());
        assert!(!plan.needs_remux());
        assert!(plan.needs_remove() && plan.needs_reencode());
    }

    #[test]
    fn test_removed_tracks_are_not_reencoded() {
        let policy = DecisionPolicy::new()
            .keep_languages(["eng"])
            .reencode_audio(["ac3"]);
        let plan = TrackPlan::build(&snapshot(), &policy);

        assert_eq!(plan.remove.audio.len(), 1);
        assert!(plan.reencode.is_empty());
    }

    #[test]
    fn test_disabled_stages_pass_through() {
        let policy = DecisionPolicy {
            remux: false,
            remove_unwanted_tracks: false,
            reencode: false,
            ..DecisionPolicy::new()
                .reencode_video([VideoFormat::any("h264")])
                .reencode_audio(["flac"])
        };
        let plan = TrackPlan::build(&snapshot(), &policy);

        assert!(plan.is_noop());
        assert_eq!(plan.keep.len(), 5);
        assert!(plan.keep.tracks().iter().all(|t| t.state == TrackState::Keep));
    }

    #[test]
    fn test_display_summary() {
        let policy = DecisionPolicy::new().keep_languages(["eng"]);
        let plan = TrackPlan::build(&snapshot(), &policy);
        assert_eq!(
            plan.to_string(),
            "keep [0, 1, 3], remux [], remove [2, 4], reencode [] (1 video, 1 audio, 1 subtitle kept)"
        );
    }
}
