use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::ImgfsResult;

/// Kind of a filesystem entry, as reported by enumeration or a stat probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Plain data file.
    File,
    Directory,
    /// Symbolic link; never followed when classifying entries.
    Symlink,
    /// Device files, sockets, and other special entries.
    Other,
}

/// A single entry yielded by directory enumeration.
///
/// `kind` is `None` when the enumeration API could not report a type for
/// the entry; callers decide such entries with [`PlatformFs::stat_kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Bare entry name, without any directory prefix.
    pub name: String,
    pub kind: Option<EntryKind>,
}

/// Platform filesystem capability.
///
/// The single point where platform branching lives. Implement this trait to
/// provide custom filesystem behavior; two implementations are provided:
/// - `RealFs`: the real filesystem via `std::fs`
/// - `MockFs`: in-memory implementation for testing
///
/// Every operation is a blocking call; any handle an operation acquires is
/// released before it returns, on success and failure alike.
pub trait PlatformFs: std::fmt::Debug + Send + Sync + 'static {
    /// Existence/type probe: true when `path` names a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Accessibility probe: opens the file for reading and immediately
    /// closes it again. The transient handle is the only side effect.
    fn is_readable(&self, path: &Path) -> bool;

    /// Enumerate the entries of the directory at `path`, in no particular
    /// order. Fails with a `DirectoryOpen` error when the directory is
    /// missing, not a directory, or inaccessible.
    fn read_directory(&self, path: &Path) -> ImgfsResult<Vec<DirEntry>>;

    /// Stat-style probe for the kind of a single path. Does not follow
    /// symbolic links: a link is reported as `Symlink`, not as its target.
    fn stat_kind(&self, path: &Path) -> ImgfsResult<EntryKind>;

    /// Full path of the currently running binary.
    ///
    /// Fails with a `Resolution` error when the platform query itself
    /// fails; the failure is never swallowed.
    fn executable_path(&self) -> ImgfsResult<PathBuf>;
}

/// Handle to a [`PlatformFs`] implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn PlatformFs>` for cheap cloning and thread-safe
/// sharing. Can be cloned and passed around freely without lifetime
/// concerns.
///
/// # Examples
///
/// ```
/// use imgfs_base::{FsHandle, RealFs};
///
/// let fs = FsHandle::new(RealFs::new());
/// let fs_clone = fs.clone(); // Cheap clone, shares the same implementation
/// ```
#[derive(Debug, Clone)]
pub struct FsHandle(Arc<dyn PlatformFs>);

impl FsHandle {
    /// Create a new FsHandle from a PlatformFs implementation.
    pub fn new(fs: impl PlatformFs + 'static) -> Self {
        Self(Arc::new(fs))
    }
}

impl std::ops::Deref for FsHandle {
    type Target = dyn PlatformFs;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
