//! Directory enumeration, normalized into a naturally ordered listing.

use std::path::Path;

use tracing::{debug, error, instrument, warn};

use imgfs_base::{EntryKind, FsHandle, ImgfsResult};

use crate::natural::compare_natural;

/// Lists the regular files of `dir`, naturally ordered.
///
/// Subdirectories, symbolic links, and special entries are excluded; when
/// enumeration does not report an entry's type, a stat probe decides it.
/// Returned names are bare file names without a directory prefix. The
/// listing is computed fresh on every call.
///
/// Fails with a `DirectoryOpen` error when `dir` cannot be opened for
/// enumeration; the failure is also logged with the offending path, but
/// the returned error alone is sufficient to detect it.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use imgfs_base::{FsHandle, MockFs};
/// use imgfs_engine::list_directory;
///
/// let mock = MockFs::new();
/// mock.add_file("input/a10.png");
/// mock.add_file("input/a2.png");
///
/// let fs = FsHandle::new(mock);
/// let names = list_directory(&fs, Path::new("input")).unwrap();
/// assert_eq!(names, vec!["a2.png", "a10.png"]);
/// ```
#[instrument(skip(fs), fields(dir = %dir.display()))]
pub fn list_directory(fs: &FsHandle, dir: &Path) -> ImgfsResult<Vec<String>> {
    let entries = match fs.read_directory(dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!("could not list {}: {}", dir.display(), e);
            return Err(e);
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let kind = match entry.kind {
            Some(kind) => kind,
            // Enumeration did not report a type; fall back to a stat probe.
            None => match fs.stat_kind(&dir.join(&entry.name)) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!("skipping {}: {}", entry.name, e);
                    continue;
                }
            },
        };
        if kind != EntryKind::File {
            continue;
        }
        names.push(entry.name);
    }

    names.sort_by(|a, b| compare_natural(a, b));
    debug!(count = names.len(), "listed directory");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    use imgfs_base::error::ErrorKind;
    use imgfs_base::{FsHandle, MockFs, RealFs};

    #[test]
    fn test_lists_only_regular_files_naturally_ordered() {
        let mock = MockFs::new();
        mock.add_file("input/b.txt");
        mock.add_file("input/a10.txt");
        mock.add_file("input/a2.txt");
        mock.add_directory("input/nested");
        mock.add_symlink("input/link");
        mock.add_special("input/device");

        let fs = FsHandle::new(mock);
        let names = list_directory(&fs, Path::new("input")).unwrap();

        assert_eq!(names, vec!["a2.txt", "a10.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_directory_is_an_error_not_an_empty_list() {
        let fs = FsHandle::new(MockFs::new());

        let err = list_directory(&fs, Path::new("missing")).unwrap_err();
        match err.kind() {
            ErrorKind::DirectoryOpen { path, .. } => {
                assert_eq!(path, Path::new("missing"));
            }
            _ => panic!("Expected DirectoryOpen variant"),
        }
    }

    #[test]
    fn test_untyped_entries_go_through_stat_fallback() {
        let mock = MockFs::new();
        mock.add_file("input/typed.png");
        mock.add_file("input/untyped.png");
        mock.add_directory("input/untyped_dir");
        mock.hide_entry_type("input/untyped.png");
        mock.hide_entry_type("input/untyped_dir");

        let fs = FsHandle::new(mock);
        let names = list_directory(&fs, Path::new("input")).unwrap();

        // The stat probe keeps the untyped file and drops the untyped dir
        assert_eq!(names, vec!["typed.png", "untyped.png"]);
    }

    #[test]
    fn test_empty_directory_lists_empty() {
        let mock = MockFs::new();
        mock.add_directory("input");

        let fs = FsHandle::new(mock);
        let names = list_directory(&fs, Path::new("input")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_fresh_listing_per_call() {
        let mock = MockFs::new();
        mock.add_file("input/a.png");

        let fs = FsHandle::new(mock.clone());
        assert_eq!(list_directory(&fs, Path::new("input")).unwrap().len(), 1);

        mock.add_file("input/b.png");
        assert_eq!(list_directory(&fs, Path::new("input")).unwrap().len(), 2);
    }

    #[test]
    fn test_against_real_filesystem() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "").unwrap();
        std::fs::write(temp_dir.path().join("a10.txt"), "").unwrap();
        std::fs::write(temp_dir.path().join("a2.txt"), "").unwrap();
        std::fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let fs = FsHandle::new(RealFs::new());
        let names = list_directory(&fs, temp_dir.path()).unwrap();

        assert_eq!(names, vec!["a2.txt", "a10.txt", "b.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_filesystem_excludes_symlinks() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        std::fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("link.txt")).unwrap();

        let fs = FsHandle::new(RealFs::new());
        let names = list_directory(&fs, temp_dir.path()).unwrap();

        assert_eq!(names, vec!["target.txt"]);
    }

    #[test]
    fn test_real_filesystem_missing_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let fs = FsHandle::new(RealFs::new());

        let result = list_directory(&fs, &temp_dir.path().join("missing"));
        assert!(result.is_err());
    }
}
