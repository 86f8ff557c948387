//! # mediaclean-av
//!
//! Canonical track model and tool output adapters.
//!
//! This crate provides functionality for:
//! - Parsing mkvmerge, ffprobe and mediainfo output into one [`MediaSnapshot`]
//!   model with canonical language codes
//! - Cross-checking the three tools' views of the same file
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```
//! use mediaclean_av::{parse_ffprobe, TrackKind};
//! use mediaclean_common::LanguageResolver;
//!
//! let json = r#"{"streams": [
//!     {"index": 0, "codec_type": "video", "codec_name": "h264", "profile": "High", "level": 41},
//!     {"index": 1, "codec_type": "audio", "codec_name": "aac", "tags": {"language": "???"}}
//! ]}"#;
//!
//! let snapshot = parse_ffprobe(json, &LanguageResolver::new())?;
//! assert_eq!(snapshot.count(TrackKind::Video), 1);
//! assert_eq!(snapshot.video[0].profile_level(), Some("High@41"));
//! assert_eq!(snapshot.audio[0].language, "und");
//! # Ok::<(), mediaclean_av::Error>(())
//! ```

pub mod adapters;
mod error;
pub mod model;
pub mod validate;

// Re-exports
pub use adapters::{parse, parse_ffprobe, parse_mediainfo, parse_mkvmerge, parse_output, ToolOutput};
pub use error::{Error, Result};
pub use model::{MediaSnapshot, SourceTool, Track, TrackDetail, TrackKind, TrackState};
pub use validate::{compare_tracks, match_tracks, TrackMismatch};
