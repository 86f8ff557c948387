//! Tool output adapters.
//!
//! Each adapter turns one tool's structured output into a [`MediaSnapshot`]:
//!
//! - **mkvmerge** (`mkvmerge -J`): JSON, ISO 639-2 languages, distinct track
//!   id and track number
//! - **ffprobe** (`-show_streams -print_format json`): JSON, optional
//!   languages, cover art reported as video
//! - **mediainfo** (`--Output=XML`): XML, free-form language tags, composite
//!   track ids
//!
//! The adapters are pure; invoking the tools is the caller's concern.

mod ffprobe;
mod mediainfo;
mod mkvmerge;

pub use ffprobe::parse_ffprobe;
pub use mediainfo::parse_mediainfo;
pub use mkvmerge::parse_mkvmerge;

use crate::model::{MediaSnapshot, SourceTool};
use crate::{Error, Result};
use mediaclean_common::LanguageResolver;
use serde::{Deserialize, Serialize};

/// Captured output of one external tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default)]
    pub exit_code: i32,
}

impl ToolOutput {
    /// Output of a run that exited successfully.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Whether the run counts as successful for `tool`.
    ///
    /// mkvmerge returns 0 for success, 1 for warnings.
    pub fn succeeded(&self, tool: SourceTool) -> bool {
        match tool {
            SourceTool::MkvMerge => self.exit_code == 0 || self.exit_code == 1,
            SourceTool::FfProbe | SourceTool::MediaInfo => self.exit_code == 0,
        }
    }
}

/// Parse a captured tool run into a snapshot.
pub fn parse_output(
    tool: SourceTool,
    output: &ToolOutput,
    resolver: &LanguageResolver,
) -> Result<MediaSnapshot> {
    if !output.succeeded(tool) {
        let message = match output.stderr.trim() {
            "" => format!("exit code {}", output.exit_code),
            stderr => stderr.to_string(),
        };
        return Err(Error::tool_failed(tool, message));
    }

    parse(tool, &output.stdout, resolver)
}

/// Parse raw tool text into a snapshot.
pub fn parse(tool: SourceTool, text: &str, resolver: &LanguageResolver) -> Result<MediaSnapshot> {
    let snapshot = match tool {
        SourceTool::MkvMerge => parse_mkvmerge(text, resolver)?,
        SourceTool::FfProbe => parse_ffprobe(text, resolver)?,
        SourceTool::MediaInfo => parse_mediainfo(text, resolver)?,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Parsed {} output: {} video, {} audio, {} subtitle",
        tool,
        snapshot.video.len(),
        snapshot.audio.len(),
        snapshot.subtitle.len()
    );

    Ok(snapshot)
}

/// Validate a language reported as an ISO 639-2 code.
fn three_letter_language(tool: SourceTool, value: &str) -> Result<String> {
    let value = value.trim();
    if value.chars().count() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::format(
            tool,
            format!("invalid language code: {:?}", value),
        ));
    }
    Ok(value.to_ascii_lowercase())
}

/// Validate a 3-letter code and map it to the resolver's canonical code.
///
/// Codes missing from the reference table are kept as written.
fn canonical_language(
    tool: SourceTool,
    value: &str,
    resolver: &LanguageResolver,
) -> Result<String> {
    let code = three_letter_language(tool, value)?;
    Ok(resolver
        .resolve(&code)
        .map(|language| language.code().to_string())
        .unwrap_or(code))
}

/// Treat empty strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_three_letter_language() {
        assert_eq!(three_letter_language(SourceTool::MkvMerge, "eng").unwrap(), "eng");
        assert_eq!(three_letter_language(SourceTool::MkvMerge, "GER").unwrap(), "ger");
        assert_matches!(
            three_letter_language(SourceTool::MkvMerge, "en"),
            Err(Error::Format { .. })
        );
        assert_matches!(
            three_letter_language(SourceTool::MkvMerge, "e1g"),
            Err(Error::Format { .. })
        );
    }

    #[test]
    fn test_canonical_language() {
        let resolver = LanguageResolver::new();
        let canonical = |value| canonical_language(SourceTool::FfProbe, value, &resolver).unwrap();
        assert_eq!(canonical("zho"), "chi");
        assert_eq!(canonical("FRA"), "fre");
        assert_eq!(canonical("ger"), "ger");
        assert_eq!(canonical("qaa"), "qaa");
        assert_matches!(
            canonical_language(SourceTool::FfProbe, "zh", &resolver),
            Err(Error::Format { .. })
        );
    }

    #[test]
    fn test_mkvmerge_warning_exit_is_accepted() {
        let output = ToolOutput {
            stdout: r#"{"tracks": []}"#.to_string(),
            stderr: String::new(),
            exit_code: 1,
        };
        let resolver = LanguageResolver::new();
        assert!(parse_output(SourceTool::MkvMerge, &output, &resolver).is_ok());
        assert_matches!(
            parse_output(SourceTool::FfProbe, &output, &resolver),
            Err(Error::ToolFailed { tool: SourceTool::FfProbe, .. })
        );
    }

    #[test]
    fn test_tool_failure_reports_stderr() {
        let output = ToolOutput {
            stdout: String::new(),
            stderr: "No such file\n".to_string(),
            exit_code: 2,
        };
        let err = parse_output(SourceTool::MkvMerge, &output, &LanguageResolver::new()).unwrap_err();
        assert_eq!(err.to_string(), "tool execution failed: mkvmerge: No such file");
    }
}
