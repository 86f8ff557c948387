//! Path utilities for media files and their sidecars.

use std::path::{Path, PathBuf};

/// Extension appended to a media file's name to form its sidecar name.
pub const SIDECAR_EXTENSION: &str = "mediaclean";

/// List of media container extensions handled by the processor.
const MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "m2ts", "webm", "mov", "wmv", "mpg", "mpeg", "vob",
];

/// Check if a path has a media container extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mediaclean_common::paths::is_media_file;
///
/// assert!(is_media_file(Path::new("movie.mkv")));
/// assert!(is_media_file(Path::new("/path/to/video.AVI")));
/// assert!(!is_media_file(Path::new("movie.mkv.mediaclean")));
/// ```
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path is a sidecar file.
pub fn is_sidecar_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SIDECAR_EXTENSION))
}

/// Get the sidecar path for a media file (`movie.mkv` -> `movie.mkv.mediaclean`).
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use mediaclean_common::paths::sidecar_path;
///
/// assert_eq!(
///     sidecar_path(Path::new("/media/movie.mkv")),
///     PathBuf::from("/media/movie.mkv.mediaclean")
/// );
/// ```
pub fn sidecar_path(media: &Path) -> PathBuf {
    let mut name = media.as_os_str().to_owned();
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}

/// Check if a path's extension is in `extensions`.
///
/// Entries are written with a leading dot (`.avi`) and compared ignoring case.
pub fn has_extension_in<I, S>(path: &Path, extensions: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    extensions.into_iter().any(|candidate| {
        candidate
            .as_ref()
            .strip_prefix('.')
            .is_some_and(|c| c.eq_ignore_ascii_case(ext))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_media_file() {
        assert!(is_media_file(Path::new("a.mkv")));
        assert!(is_media_file(Path::new("a.M2TS")));
        assert!(!is_media_file(Path::new("a.srt")));
        assert!(!is_media_file(Path::new("noext")));
    }

    #[test]
    fn test_sidecar_path_keeps_original_extension() {
        assert_eq!(
            sidecar_path(Path::new("show/ep01.avi")),
            PathBuf::from("show/ep01.avi.mediaclean")
        );
        assert!(is_sidecar_file(&sidecar_path(Path::new("x.mkv"))));
        assert!(!is_sidecar_file(Path::new("x.mkv")));
    }

    #[test]
    fn test_has_extension_in() {
        let remux = [".avi", ".MP4"];
        assert!(has_extension_in(Path::new("a.avi"), remux));
        assert!(has_extension_in(Path::new("a.mp4"), remux));
        assert!(!has_extension_in(Path::new("a.mkv"), remux));
        assert!(!has_extension_in(Path::new("avi"), remux));
        assert!(!has_extension_in(Path::new("a.avi"), ["avi"]));
    }
}
