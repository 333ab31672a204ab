//! Foundational crate for the imgfs workspace: the error type, tracing
//! setup, and the platform filesystem capability shared by all crates.

pub mod error;
pub mod fs;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ImgfsError, ImgfsResult, ResultExt};
pub use fs::{DirEntry, EntryKind, FsHandle, MockFs, PlatformFs, RealFs};
