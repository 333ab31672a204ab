use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::ImgfsResult;
use crate::error::{ErrorKind, ImgfsError};

use super::traits::{DirEntry, EntryKind, PlatformFs};

/// Concrete [`PlatformFs`] implementation over `std::fs`.
///
/// The platform-specific executable query (`GetModuleFileNameW` on Windows,
/// `_NSGetExecutablePath` on Apple platforms, the `/proc/self/exe` link on
/// other POSIX systems) is reached through `std::env::current_exe`, so all
/// platform branching stays behind this one type.
#[derive(Debug, Default)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Other
    }
}

impl PlatformFs for RealFs {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn is_directory(&self, path: &Path) -> bool {
        let is_dir = fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
        debug!(is_dir, "checked directory");
        is_dir
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn is_readable(&self, path: &Path) -> bool {
        // Opening the file is the probe; the handle drops right here.
        let readable = fs::File::open(path).is_ok();
        debug!(readable, "probed readability");
        readable
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn read_directory(&self, path: &Path) -> ImgfsResult<Vec<DirEntry>> {
        let read_dir = fs::read_dir(path).map_err(|e| {
            Box::new(ImgfsError::new(ErrorKind::DirectoryOpen {
                path: path.to_path_buf(),
                source: e,
            }))
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                Box::new(ImgfsError::new(ErrorKind::DirectoryOpen {
                    path: path.to_path_buf(),
                    source: e,
                }))
            })?;
            // file_type comes from the directory entry itself where the
            // platform provides it; callers stat entries it could not type.
            let kind = entry.file_type().ok().map(kind_of);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        debug!(count = entries.len(), "enumerated directory");
        Ok(entries)
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn stat_kind(&self, path: &Path) -> ImgfsResult<EntryKind> {
        // symlink_metadata, so links report as links rather than as their
        // targets.
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| crate::err!("could not determine type of {}: {}", path.display(), e))?;
        Ok(kind_of(metadata.file_type()))
    }

    #[instrument(skip(self))]
    fn executable_path(&self) -> ImgfsResult<PathBuf> {
        let exe = std::env::current_exe().map_err(|e| {
            Box::new(ImgfsError::new(ErrorKind::Resolution {
                message: e.to_string(),
            }))
        })?;
        debug!(exe = %exe.display(), "resolved executable path");
        Ok(exe)
    }
}
