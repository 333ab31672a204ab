use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ImgfsResult;
use crate::error::{ErrorKind, ImgfsError};

use super::traits::{DirEntry, EntryKind, PlatformFs};

/// In-memory [`PlatformFs`] implementation for testing.
///
/// Stores an entry table in a HashMap and supports all operations without
/// touching the real filesystem. Registering a file or directory also
/// registers its ancestor directories. Clones share the same storage.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use imgfs_base::{MockFs, PlatformFs};
///
/// let mock = MockFs::new();
/// mock.add_file("input/a.png");
/// assert!(mock.is_directory(Path::new("input")));
/// assert!(mock.is_readable(Path::new("input/a.png")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    entries: Arc<Mutex<HashMap<PathBuf, EntryKind>>>,
    // Entries whose kind is withheld during enumeration, to model
    // filesystems that do not report entry types.
    untyped: Arc<Mutex<HashSet<PathBuf>>>,
    executable: Arc<Mutex<Option<PathBuf>>>,
}

impl MockFs {
    /// Create a new empty MockFs.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, path: PathBuf, kind: EntryKind) {
        let mut entries = self.entries.lock().unwrap();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Directory);
        }
        entries.insert(path, kind);
    }

    /// Register a regular file.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.insert(path.into(), EntryKind::File);
    }

    /// Register a directory.
    pub fn add_directory(&self, path: impl Into<PathBuf>) {
        self.insert(path.into(), EntryKind::Directory);
    }

    /// Register a symbolic link.
    pub fn add_symlink(&self, path: impl Into<PathBuf>) {
        self.insert(path.into(), EntryKind::Symlink);
    }

    /// Register a special entry (device file, socket, ...).
    pub fn add_special(&self, path: impl Into<PathBuf>) {
        self.insert(path.into(), EntryKind::Other);
    }

    /// Withhold the kind of an already-registered entry during enumeration,
    /// forcing callers through the [`PlatformFs::stat_kind`] fallback.
    pub fn hide_entry_type(&self, path: impl Into<PathBuf>) {
        self.untyped.lock().unwrap().insert(path.into());
    }

    /// Set the path reported as the running executable.
    pub fn set_executable(&self, path: impl Into<PathBuf>) {
        *self.executable.lock().unwrap() = Some(path.into());
    }
}

impl PlatformFs for MockFs {
    fn is_directory(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().get(path) == Some(&EntryKind::Directory)
    }

    fn is_readable(&self, path: &Path) -> bool {
        // Only regular files are openable in the mock.
        self.entries.lock().unwrap().get(path) == Some(&EntryKind::File)
    }

    fn read_directory(&self, path: &Path) -> ImgfsResult<Vec<DirEntry>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(EntryKind::Directory) => {}
            Some(_) => {
                return Err(Box::new(ImgfsError::new(ErrorKind::DirectoryOpen {
                    path: path.to_path_buf(),
                    source: std::io::Error::other("not a directory"),
                })));
            }
            None => {
                return Err(Box::new(ImgfsError::new(ErrorKind::DirectoryOpen {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no such directory",
                    ),
                })));
            }
        }

        let untyped = self.untyped.lock().unwrap();
        Ok(entries
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .map(|(child, kind)| DirEntry {
                name: child
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                kind: if untyped.contains(child.as_path()) {
                    None
                } else {
                    Some(*kind)
                },
            })
            .collect())
    }

    fn stat_kind(&self, path: &Path) -> ImgfsResult<EntryKind> {
        self.entries
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .ok_or_else(|| crate::err!("could not determine type of {}", path.display()))
    }

    fn executable_path(&self) -> ImgfsResult<PathBuf> {
        self.executable.lock().unwrap().clone().ok_or_else(|| {
            Box::new(ImgfsError::new(ErrorKind::Resolution {
                message: "no executable configured".to_string(),
            }))
        })
    }
}
