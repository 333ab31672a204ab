//! Discovery, ordering, and resolution of input files for batch image
//! tools, identical across Windows and POSIX hosts.
//!
//! Three independent pieces, composed by callers that need a reproducibly
//! ordered input list:
//! - [`natural`]: orders path strings the way a human reads them (digit
//!   runs by magnitude, letters case-insensitively),
//! - [`listing`]: enumerates the regular files of a directory, naturally
//!   ordered,
//! - [`resolver`]: falls back to the running binary's own directory for
//!   paths that do not resolve from the working directory, and splits file
//!   names from extensions.
//!
//! All filesystem access goes through [`imgfs_base::PlatformFs`], keeping
//! this crate platform-agnostic and testable against the in-memory mock.

pub mod listing;
pub mod natural;
pub mod resolver;

pub use listing::list_directory;
pub use natural::{compare_natural, natural_less};
pub use resolver::{
    executable_directory, extension, name_without_extension, sanitize_dir_path,
    sanitize_file_path,
};
