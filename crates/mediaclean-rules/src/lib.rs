//! # mediaclean-rules
//!
//! Decides what happens to each track of a media file.
//!
//! Every pass takes a [`MediaSnapshot`](mediaclean_av::MediaSnapshot) by
//! reference and returns new `keep`/`selected` partitions with a state
//! stamped on every track:
//!
//! - [`find_unknown_language`] - tracks without a usable language
//! - [`find_need_remux`] - bitmap subtitles that must be re-wrapped
//! - [`find_need_remove`] - tracks in unwanted languages
//! - [`find_need_reencode`] - video/audio in formats the player can't handle
//!
//! [`TrackPlan`] runs remux, remove and re-encode in that order.
//!
//! ## Example
//!
//! ```
//! use mediaclean_av::{MediaSnapshot, SourceTool, Track};
//! use mediaclean_rules::{DecisionPolicy, TrackPlan};
//!
//! let snapshot = MediaSnapshot::new(SourceTool::FfProbe)
//!     .with_track(Track::video(0, "h264", "eng"))
//!     .with_track(Track::audio(1, "aac", "eng"))
//!     .with_track(Track::audio(2, "aac", "spa"));
//!
//! let policy = DecisionPolicy::new().keep_languages(["eng"]);
//! let plan = TrackPlan::build(&snapshot, &policy);
//!
//! assert_eq!(plan.remove.audio[0].id, 2);
//! assert_eq!(plan.keep.len(), 2);
//! ```

pub mod decide;
pub mod plan;
pub mod policy;

pub use decide::{
    find_need_reencode, find_need_remove, find_need_remux, find_unknown_language, Split,
    BITMAP_SUBTITLE_CODEC,
};
pub use plan::TrackPlan;
pub use policy::{lowercase_set, DecisionPolicy, VideoFormat, ANY_PROFILE};
