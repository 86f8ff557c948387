//! Adapter integration tests
//!
//! Parses captured output of all three tools for the same file and checks
//! that they reconcile.

use mediaclean_av::{
    compare_tracks, match_tracks, parse, parse_output, MediaSnapshot, SourceTool, ToolOutput,
    TrackKind, TrackState,
};
use mediaclean_common::LanguageResolver;

const MKVMERGE: &str = include_str!("fixtures/movie.mkvmerge.json");
const FFPROBE: &str = include_str!("fixtures/movie.ffprobe.json");
const MEDIAINFO: &str = include_str!("fixtures/movie.mediainfo.xml");

fn snapshots() -> (MediaSnapshot, MediaSnapshot, MediaSnapshot) {
    let resolver = LanguageResolver::new();
    (
        parse(SourceTool::MkvMerge, MKVMERGE, &resolver).unwrap(),
        parse(SourceTool::FfProbe, FFPROBE, &resolver).unwrap(),
        parse(SourceTool::MediaInfo, MEDIAINFO, &resolver).unwrap(),
    )
}

#[test]
fn all_tools_agree_on_fixture() {
    let (mkvmerge, ffprobe, mediainfo) = snapshots();

    for kind in TrackKind::ALL {
        assert_eq!(mkvmerge.count(kind), ffprobe.count(kind), "{kind}");
        assert_eq!(mkvmerge.count(kind), mediainfo.count(kind), "{kind}");
    }

    assert!(match_tracks(&mkvmerge, &ffprobe, &mediainfo));
    assert_eq!(compare_tracks(&mkvmerge, &ffprobe, &mediainfo), Ok(()));
}

#[test]
fn languages_are_canonical() {
    let (mkvmerge, ffprobe, mediainfo) = snapshots();

    for snapshot in [&mkvmerge, &ffprobe, &mediainfo] {
        for track in snapshot.tracks() {
            assert_eq!(track.language.len(), 3, "{}", track);
            assert_eq!(track.language, track.language.to_lowercase());
            assert_eq!(track.state, TrackState::None);
        }
    }

    assert_eq!(mediainfo.audio[1].language, "ger");
    assert_eq!(ffprobe.subtitle[1].language, "und");
    assert_eq!(mediainfo.subtitle[1].language, "und");
}

#[test]
fn numbering_schemes_differ_per_tool() {
    let (mkvmerge, ffprobe, mediainfo) = snapshots();

    // mkvmerge: 0-based id, 1-based track number
    assert_eq!((mkvmerge.audio[0].id, mkvmerge.audio[0].number), (1, 2));
    // ffprobe: stream index for both
    assert_eq!((ffprobe.audio[0].id, ffprobe.audio[0].number), (1, 1));
    // mediainfo: 1-based id, 0-based stream order
    assert_eq!((mediainfo.audio[0].id, mediainfo.audio[0].number), (2, 1));
}

#[test]
fn combined_listing_is_sorted_by_id() {
    let (mkvmerge, _, _) = snapshots();

    let ids: Vec<u32> = mkvmerge.tracks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    let listing = mkvmerge.to_string();
    assert!(listing.starts_with("mkvmerge: 1 video, 2 audio, 2 subtitle"));
    assert!(listing.contains("Audio: Id: 1, Number: 2, Format: AC-3"));
}

#[test]
fn cover_art_is_not_a_video_track() {
    let (_, ffprobe, _) = snapshots();
    assert_eq!(ffprobe.video.len(), 1);
    assert_eq!(ffprobe.video[0].format, "h264");
}

#[test]
fn failed_run_yields_no_snapshot() {
    let output = ToolOutput {
        stdout: FFPROBE.to_string(),
        stderr: "Invalid data found when processing input".to_string(),
        exit_code: 1,
    };
    let err = parse_output(SourceTool::FfProbe, &output, &LanguageResolver::new()).unwrap_err();
    assert_eq!(err.tool(), SourceTool::FfProbe);
}
