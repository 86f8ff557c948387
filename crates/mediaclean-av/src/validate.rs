//! Cross-tool consistency check.
//!
//! Compares the snapshots the three tools produced for one file. The check
//! is literal: languages are compared as strings (ignoring case), not through
//! the resolver, so `chi` and `zho` count as a disagreement.

use crate::model::{MediaSnapshot, SourceTool, TrackKind};

/// The first disagreement found between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackMismatch {
    /// The tools report a different number of tracks of one kind.
    #[error("{kind} track count mismatch: {}", format_counts(.counts))]
    Count {
        kind: TrackKind,
        counts: Vec<(SourceTool, usize)>,
    },

    /// The tools report different languages for the same track.
    #[error("{kind} track {index} language mismatch: {}", format_languages(.languages))]
    Language {
        kind: TrackKind,
        index: usize,
        languages: Vec<(SourceTool, String)>,
    },
}

fn format_counts(counts: &[(SourceTool, usize)]) -> String {
    counts
        .iter()
        .map(|(tool, count)| format!("{}: {}", tool, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_languages(languages: &[(SourceTool, String)]) -> String {
    languages
        .iter()
        .map(|(tool, language)| format!("{}: {}", tool, language))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that three snapshots agree on per-kind track counts and languages.
pub fn compare_tracks(
    a: &MediaSnapshot,
    b: &MediaSnapshot,
    c: &MediaSnapshot,
) -> Result<(), TrackMismatch> {
    let snapshots = [a, b, c];

    for kind in TrackKind::ALL {
        let counts: Vec<(SourceTool, usize)> =
            snapshots.iter().map(|s| (s.source, s.count(kind))).collect();
        if counts.windows(2).any(|w| w[0].1 != w[1].1) {
            return Err(TrackMismatch::Count { kind, counts });
        }

        for index in 0..a.count(kind) {
            let languages: Vec<(SourceTool, String)> = snapshots
                .iter()
                .map(|s| (s.source, s.of_kind(kind)[index].language.clone()))
                .collect();

            let agree = languages
                .iter()
                .all(|(_, language)| language.eq_ignore_ascii_case(&languages[0].1));
            if !agree {
                return Err(TrackMismatch::Language {
                    kind,
                    index,
                    languages,
                });
            }
        }
    }

    Ok(())
}

/// Whether three snapshots agree on track counts and languages.
pub fn match_tracks(a: &MediaSnapshot, b: &MediaSnapshot, c: &MediaSnapshot) -> bool {
    match compare_tracks(a, b, c) {
        Ok(()) => true,
        Err(_mismatch) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Track mismatch: {}", _mismatch);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;

    fn snapshot(source: SourceTool, audio: &[&str]) -> MediaSnapshot {
        let mut snapshot = MediaSnapshot::new(source).with_track(Track::video(0, "h264", "eng"));
        for (i, language) in audio.iter().enumerate() {
            snapshot.push(Track::audio(i as u32 + 1, "aac", language));
        }
        snapshot
    }

    #[test]
    fn test_agreement() {
        let a = snapshot(SourceTool::MkvMerge, &["eng", "fre"]);
        let b = snapshot(SourceTool::FfProbe, &["ENG", "fre"]);
        let c = snapshot(SourceTool::MediaInfo, &["eng", "fre"]);
        assert!(match_tracks(&a, &b, &c));
    }

    #[test]
    fn test_count_mismatch() {
        let a = snapshot(SourceTool::MkvMerge, &["eng", "fre"]);
        let b = snapshot(SourceTool::FfProbe, &["eng"]);
        let c = snapshot(SourceTool::MediaInfo, &["eng", "fre"]);

        assert!(!match_tracks(&a, &b, &c));
        let err = compare_tracks(&a, &b, &c).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Audio track count mismatch: mkvmerge: 2, ffprobe: 1, mediainfo: 2"
        );
    }

    #[test]
    fn test_any_pair_language_mismatch() {
        let base = ["eng", "fre"];
        for odd in 0..3 {
            let languages: Vec<Vec<&str>> = (0..3)
                .map(|i| if i == odd { vec!["eng", "ger"] } else { base.to_vec() })
                .collect();
            let a = snapshot(SourceTool::MkvMerge, &languages[0]);
            let b = snapshot(SourceTool::FfProbe, &languages[1]);
            let c = snapshot(SourceTool::MediaInfo, &languages[2]);
            assert!(!match_tracks(&a, &b, &c), "odd one out: {}", odd);
        }
    }

    #[test]
    fn test_aliases_are_not_equivalent() {
        let a = snapshot(SourceTool::MkvMerge, &["chi"]);
        let b = snapshot(SourceTool::FfProbe, &["zho"]);
        let c = snapshot(SourceTool::MediaInfo, &["chi"]);

        assert_eq!(
            compare_tracks(&a, &b, &c),
            Err(TrackMismatch::Language {
                kind: TrackKind::Audio,
                index: 0,
                languages: vec![
                    (SourceTool::MkvMerge, "chi".to_string()),
                    (SourceTool::FfProbe, "zho".to_string()),
                    (SourceTool::MediaInfo, "chi".to_string()),
                ],
            })
        );
    }

    #[test]
    fn test_empty_snapshots_match() {
        let a = MediaSnapshot::new(SourceTool::MkvMerge);
        let b = MediaSnapshot::new(SourceTool::FfProbe);
        let c = MediaSnapshot::new(SourceTool::MediaInfo);
        assert!(match_tracks(&a, &b, &c));
    }
}
