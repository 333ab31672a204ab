//! Executable-relative path resolution and name/extension splitting.
//!
//! Batch tools are often launched from an arbitrary working directory
//! while their bundled resources (models, palettes, LUTs) sit next to the
//! binary. The sanitize functions keep paths that resolve as given and
//! fall back to the executable's own directory for the rest.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use imgfs_base::error::ErrorKind;
use imgfs_base::{FsHandle, ImgfsError, ImgfsResult};

/// Returns the directory containing the currently running binary.
///
/// Fails with a `Resolution` error when the platform query fails or the
/// reported executable path has no parent component.
#[instrument(skip(fs))]
pub fn executable_directory(fs: &FsHandle) -> ImgfsResult<PathBuf> {
    let exe = fs.executable_path()?;
    let dir = exe.parent().ok_or_else(|| {
        Box::new(ImgfsError::new(ErrorKind::Resolution {
            message: format!("executable path {} has no parent directory", exe.display()),
        }))
    })?;
    Ok(dir.to_path_buf())
}

/// Returns `path` unchanged when it is readable as given; otherwise
/// resolves it relative to the executable's directory.
///
/// The fallback result is not validated further: if it is also unusable,
/// that surfaces when the caller opens it.
#[instrument(skip(fs), fields(path = %path.display()))]
pub fn sanitize_file_path(fs: &FsHandle, path: &Path) -> ImgfsResult<PathBuf> {
    if fs.is_readable(path) {
        return Ok(path.to_path_buf());
    }
    let fallback = executable_directory(fs)?.join(path);
    debug!(fallback = %fallback.display(), "falling back to executable directory");
    Ok(fallback)
}

/// Returns `path` unchanged when it is a directory; otherwise resolves it
/// relative to the executable's directory.
///
/// Same single-level fallback policy as [`sanitize_file_path`], with a
/// directory probe instead of a readability probe.
#[instrument(skip(fs), fields(path = %path.display()))]
pub fn sanitize_dir_path(fs: &FsHandle, path: &Path) -> ImgfsResult<PathBuf> {
    if fs.is_directory(path) {
        return Ok(path.to_path_buf());
    }
    let fallback = executable_directory(fs)?.join(path);
    debug!(fallback = %fallback.display(), "falling back to executable directory");
    Ok(fallback)
}

/// Everything before the last `.`, or the whole input when it has none.
///
/// Only the final dot counts: `archive.tar.gz` keeps `archive.tar`.
pub fn name_without_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(dot) => &path[..dot],
        None => path,
    }
}

/// Everything after the last `.` (without the dot), or the empty string
/// when the input has none.
pub fn extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(dot) => &path[dot + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use imgfs_base::{FsHandle, MockFs};

    fn mock_with_executable() -> (MockFs, FsHandle) {
        let mock = MockFs::new();
        mock.add_file("/opt/tool/bin/upscale");
        mock.set_executable("/opt/tool/bin/upscale");
        (mock.clone(), FsHandle::new(mock))
    }

    #[test]
    fn test_executable_directory() {
        let (_mock, fs) = mock_with_executable();

        let dir = executable_directory(&fs).unwrap();
        assert_eq!(dir, Path::new("/opt/tool/bin"));
    }

    #[test]
    fn test_executable_directory_without_executable() {
        let fs = FsHandle::new(MockFs::new());

        let err = executable_directory(&fs).unwrap_err();
        match err.kind() {
            ErrorKind::Resolution { .. } => {}
            _ => panic!("Expected Resolution variant"),
        }
    }

    #[test]
    fn test_executable_directory_without_parent() {
        let mock = MockFs::new();
        mock.set_executable("/");
        let fs = FsHandle::new(mock);

        let err = executable_directory(&fs).unwrap_err();
        match err.kind() {
            ErrorKind::Resolution { .. } => {}
            _ => panic!("Expected Resolution variant"),
        }
    }

    #[test]
    fn test_sanitize_file_path_keeps_readable_paths() {
        let (mock, fs) = mock_with_executable();
        mock.add_file("model.bin");

        let resolved = sanitize_file_path(&fs, Path::new("model.bin")).unwrap();
        assert_eq!(resolved, Path::new("model.bin"));
    }

    #[test]
    fn test_sanitize_file_path_falls_back_to_executable_directory() {
        let (_mock, fs) = mock_with_executable();

        let resolved = sanitize_file_path(&fs, Path::new("models/model.bin")).unwrap();
        assert_eq!(resolved, Path::new("/opt/tool/bin/models/model.bin"));
        // The fallback always keeps the original relative path as a suffix
        assert!(resolved.ends_with("models/model.bin"));
    }

    #[test]
    fn test_sanitize_file_path_fallback_is_not_validated() {
        let (_mock, fs) = mock_with_executable();

        // Nothing at the fallback location either; resolution still succeeds
        let resolved = sanitize_file_path(&fs, Path::new("missing.bin")).unwrap();
        assert_eq!(resolved, Path::new("/opt/tool/bin/missing.bin"));
    }

    #[test]
    fn test_sanitize_file_path_without_executable_is_an_error() {
        let fs = FsHandle::new(MockFs::new());

        let err = sanitize_file_path(&fs, Path::new("missing.bin")).unwrap_err();
        match err.kind() {
            ErrorKind::Resolution { .. } => {}
            _ => panic!("Expected Resolution variant"),
        }
    }

    #[test]
    fn test_sanitize_dir_path_keeps_directories() {
        let (mock, fs) = mock_with_executable();
        mock.add_directory("input");

        let resolved = sanitize_dir_path(&fs, Path::new("input")).unwrap();
        assert_eq!(resolved, Path::new("input"));
    }

    #[test]
    fn test_sanitize_dir_path_falls_back() {
        let (mock, fs) = mock_with_executable();
        // A readable file is not a directory; the directory probe fails
        mock.add_file("input");

        let resolved = sanitize_dir_path(&fs, Path::new("input")).unwrap();
        assert_eq!(resolved, Path::new("/opt/tool/bin/input"));
    }

    #[test]
    fn test_name_without_extension() {
        assert_eq!(name_without_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(name_without_extension("photo.png"), "photo");
        assert_eq!(name_without_extension("README"), "README");
        assert_eq!(name_without_extension("trailing."), "trailing");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("photo.png"), "png");
        assert_eq!(extension("README"), "");
        assert_eq!(extension("trailing."), "");
    }

    #[test]
    fn test_split_reassembles() {
        for name in ["archive.tar.gz", "photo.png", "README"] {
            let stem = name_without_extension(name);
            let ext = extension(name);
            let rejoined = if ext.is_empty() {
                stem.to_string()
            } else {
                format!("{}.{}", stem, ext)
            };
            assert_eq!(rejoined, name);
        }
    }
}
