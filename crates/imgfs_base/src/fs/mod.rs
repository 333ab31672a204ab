//! Platform filesystem capability.
//!
//! Filesystem access goes through the [`PlatformFs`] trait so the ordering
//! and resolution logic stays platform-agnostic and unit-testable. Two
//! implementations are provided: [`RealFs`] over `std::fs`, and [`MockFs`],
//! an in-memory stand-in for deterministic tests.

pub mod mock;
pub mod real_fs;
mod traits;

pub use mock::MockFs;
pub use real_fs::RealFs;
pub use traits::{DirEntry, EntryKind, FsHandle, PlatformFs};
