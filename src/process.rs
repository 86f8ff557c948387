//! Per-file processing.
//!
//! Ties the adapters, the cross-tool check, the decision passes and the
//! sidecar together for one media file. Remuxing, re-encoding and track
//! editing happen elsewhere; this only decides and records.

use anyhow::{Context, Result};
use mediaclean_av::{
    compare_tracks, parse_output, MediaSnapshot, SourceTool, ToolOutput, Track, TrackKind,
};
use mediaclean_common::paths::is_media_file;
use mediaclean_common::LanguageResolver;
use mediaclean_rules::{find_need_remux, find_unknown_language, Split, TrackPlan};
use mediaclean_schema::{
    read_record, write_record, ConfigFile, FileInfo, Sidecar, ToolRecord, ToolRecords,
    ToolSnapshots,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Freshly captured output of the three tools for one file.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutputs {
    pub mkvmerge: ToolOutput,
    pub ffprobe: ToolOutput,
    pub mediainfo: ToolOutput,
}

impl CapturedOutputs {
    pub fn get(&self, tool: SourceTool) -> &ToolOutput {
        match tool {
            SourceTool::MkvMerge => &self.mkvmerge,
            SourceTool::FfProbe => &self.ffprobe,
            SourceTool::MediaInfo => &self.mediainfo,
        }
    }

    /// Parse all three outputs.
    pub fn snapshots(&self, resolver: &LanguageResolver) -> mediaclean_av::Result<ToolSnapshots> {
        let snapshot = |tool: SourceTool| parse_output(tool, self.get(tool), resolver);
        Ok(ToolSnapshots {
            mkvmerge: snapshot(SourceTool::MkvMerge)?,
            ffprobe: snapshot(SourceTool::FfProbe)?,
            mediainfo: snapshot(SourceTool::MediaInfo)?,
        })
    }

    fn records(&self) -> ToolRecords {
        let record = |tool: SourceTool| ToolRecord::new("", self.get(tool).stdout.clone());
        ToolRecords {
            mkvmerge: record(SourceTool::MkvMerge),
            ffprobe: record(SourceTool::FfProbe),
            mediainfo: record(SourceTool::MediaInfo),
        }
    }
}

/// Options for one processing run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Write or refresh the sidecar next to the media file.
    pub write_sidecar: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            write_sidecar: true,
        }
    }
}

/// Where the stream information came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamSource {
    Captured,
    Sidecar,
}

impl std::fmt::Display for StreamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamSource::Captured => write!(f, "captured tool output"),
            StreamSource::Sidecar => write!(f, "sidecar"),
        }
    }
}

/// What should happen to the file next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Remux first; track removal and re-encoding are decided after, since
    /// remuxing renumbers tracks.
    NeedsRemux {
        /// The container extension is in `remux_extensions`.
        container: bool,
        /// Subtitle tracks that must be re-wrapped (mediainfo view).
        tracks: MediaSnapshot,
    },
    /// Remove and re-encode decisions (ffprobe view).
    Planned { plan: TrackPlan },
}

/// Result of processing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub source: StreamSource,
    /// Schema version of the sidecar found on disk, if any.
    pub sidecar_version: Option<u32>,
    /// First disagreement between the tools, if any.
    pub mismatch: Option<String>,
    /// Tracks with no usable language (mkvmerge view, editing numbers).
    pub unknown_language: Vec<Track>,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Sidecar written by this run.
    pub sidecar: Option<PathBuf>,
}

impl FileReport {
    /// Whether nothing needs to change.
    pub fn is_clean(&self) -> bool {
        self.unknown_language.is_empty()
            && matches!(&self.outcome, Outcome::Planned { plan } if plan.is_noop())
    }
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "File: {}", self.path.display())?;
        writeln!(f, "Source: {}", self.source)?;
        if let Some(version) = self.sidecar_version {
            writeln!(f, "Sidecar: schema v{}", version)?;
        }
        if let Some(mismatch) = &self.mismatch {
            writeln!(f, "Warning: {}", mismatch)?;
        }

        if !self.unknown_language.is_empty() {
            writeln!(f, "\nUnknown language:")?;
            for track in &self.unknown_language {
                writeln!(f, "  {}", track)?;
            }
        }

        match &self.outcome {
            Outcome::NeedsRemux { container, tracks } => {
                writeln!(f, "\nNeeds remux:")?;
                if *container {
                    writeln!(f, "  container extension is in remux_extensions")?;
                }
                for track in tracks.tracks() {
                    writeln!(f, "  {}", track)?;
                }
                writeln!(f, "Track removal and re-encoding deferred until after remux")?;
            }
            Outcome::Planned { plan } if plan.is_noop() => {
                writeln!(f, "\nNothing to do")?;
            }
            Outcome::Planned { plan } => {
                for (name, snapshot) in [("Remove", &plan.remove), ("Re-encode", &plan.reencode)] {
                    if snapshot.is_empty() {
                        continue;
                    }
                    writeln!(f, "\n{}:", name)?;
                    for track in snapshot.tracks() {
                        writeln!(f, "  {}", track)?;
                    }
                }
                writeln!(f, "\nKeep:")?;
                for track in plan.keep.tracks() {
                    writeln!(f, "  {}", track)?;
                }
            }
        }

        if let Some(sidecar) = &self.sidecar {
            writeln!(f, "\nWrote {}", sidecar.display())?;
        }
        Ok(())
    }
}

/// Read the sidecar of a media file, if there is a readable one.
pub fn read_sidecar(media: &Path) -> Option<Sidecar> {
    let path = Sidecar::path_for(media);
    if !path.exists() {
        return None;
    }

    match read_record::<Sidecar>(&path) {
        Ok(sidecar) => Some(sidecar),
        Err(e) => {
            tracing::warn!("Ignoring unreadable sidecar {:?}: {}", path, e);
            None
        }
    }
}

/// Tool snapshots for a file plus the sidecar they came from (or will go to).
pub struct StreamInfo {
    pub snapshots: ToolSnapshots,
    pub source: StreamSource,
    pub sidecar: Sidecar,
    pub sidecar_version: Option<u32>,
}

/// Obtain stream information for a media file.
///
/// Fresh captures win. Without them the sidecar's stored output is used if
/// the sidecar still matches the file's size and modification time.
pub fn stream_info(
    media: &Path,
    resolver: &LanguageResolver,
    outputs: Option<&CapturedOutputs>,
) -> Result<StreamInfo> {
    let file = FileInfo::from_path(media)
        .with_context(|| format!("Failed to read file info: {:?}", media))?;
    let existing = read_sidecar(media);
    let sidecar_version = existing.as_ref().map(|s| s.deserialized_version);
    let existing = existing.filter(|s| s.is_current_for(file.size, file.modified));

    if let Some(outputs) = outputs {
        let snapshots = outputs
            .snapshots(resolver)
            .with_context(|| format!("Failed to parse tool output for {:?}", media))?;

        let mut sidecar = Sidecar::new(file, outputs.records());
        if let Some(previous) = existing {
            // Same file as before: keep what was already done to it
            sidecar.state = previous.state;
            sidecar.file.hash = previous.file.hash;
        }

        return Ok(StreamInfo {
            snapshots,
            source: StreamSource::Captured,
            sidecar,
            sidecar_version,
        });
    }

    let Some(sidecar) = existing else {
        anyhow::bail!(
            "Stream info unavailable for {:?}: no tool output given and no current sidecar",
            media
        );
    };

    let snapshots = sidecar
        .snapshots(resolver)
        .with_context(|| format!("Failed to parse sidecar tool output for {:?}", media))?;

    Ok(StreamInfo {
        snapshots,
        source: StreamSource::Sidecar,
        sidecar,
        sidecar_version,
    })
}

/// Run the decision pipeline for one media file.
pub fn process_file(
    media: &Path,
    config: &ConfigFile,
    resolver: &LanguageResolver,
    outputs: Option<&CapturedOutputs>,
    options: &ProcessOptions,
) -> Result<FileReport> {
    if !media.exists() {
        anyhow::bail!("Input file does not exist: {:?}", media);
    }
    if !is_media_file(media) {
        tracing::warn!("{:?} does not have a known media extension", media);
    }

    tracing::info!("Processing file: {:?}", media);

    let StreamInfo {
        snapshots,
        source,
        mut sidecar,
        sidecar_version,
    } = stream_info(media, resolver, outputs)?;

    for tool in SourceTool::ALL {
        tracing::debug!("{}", snapshots.get(tool));
    }

    let mismatch = compare_tracks(&snapshots.mkvmerge, &snapshots.ffprobe, &snapshots.mediainfo)
        .err()
        .map(|mismatch| {
            tracing::warn!("Track mismatch in {:?}: {}", media, mismatch);
            mismatch.to_string()
        });

    let unknown = find_unknown_language(&snapshots.mkvmerge);
    if unknown.found() {
        tracing::info!(
            "{} track(s) with unknown language in {:?}",
            unknown.selected.len(),
            media
        );
    }
    let unknown_language = unknown.selected.tracks().into_iter().cloned().collect();

    let policy = config.decision_policy(resolver);
    let remux = if policy.remux {
        find_need_remux(&snapshots.mediainfo)
    } else {
        Split::keep_all(&snapshots.mediainfo)
    };
    let container = config.is_remux_extension(media);

    let outcome = if remux.found() || container {
        tracing::info!("{:?} needs remux, deferring other decisions", media);
        sidecar.record_tracks(merged(&[&remux.keep, &remux.selected]));
        Outcome::NeedsRemux {
            container,
            tracks: remux.selected,
        }
    } else {
        let plan = TrackPlan::build(&snapshots.ffprobe, &policy);
        sidecar.record_tracks(merged(&[
            &plan.keep,
            &plan.remux,
            &plan.remove,
            &plan.reencode,
        ]));
        Outcome::Planned { plan }
    };
    sidecar.record_tracks(merged(&[&unknown.keep, &unknown.selected]));

    let written = if options.write_sidecar {
        let path = Sidecar::path_for(media);
        write_record(&path, &sidecar)
            .with_context(|| format!("Failed to write sidecar: {:?}", path))?;
        Some(path)
    } else {
        None
    };

    Ok(FileReport {
        path: media.to_path_buf(),
        source,
        sidecar_version,
        mismatch,
        unknown_language,
        outcome,
        sidecar: written,
    })
}

/// Recombine decision partitions into one snapshot, each kind sorted by id.
fn merged(parts: &[&MediaSnapshot]) -> MediaSnapshot {
    let source = parts.first().map_or(SourceTool::FfProbe, |s| s.source);
    let mut snapshot = MediaSnapshot::new(source);

    for kind in TrackKind::ALL {
        let mut tracks: Vec<&Track> = parts.iter().flat_map(|s| s.of_kind(kind)).collect();
        tracks.sort_by_key(|t| t.id);
        for track in tracks {
            snapshot.push(track.clone());
        }
    }

    snapshot
}
