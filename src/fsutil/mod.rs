//! Filesystem Utilities
//!
//! The small set of filesystem primitives the store is built on.
//!
//! ## Responsibilities
//! - List a directory, distinguishing "absent" from "empty"
//! - Scoped reads: open a file and hand a buffered reader to a callback
//! - Scoped writes: write through a temp file, then rename over the target
//! - Existence check and removal
//!
//! None of these take locks; callers serialize access themselves.

mod dir;
mod file;

pub use dir::{read_dir, DirEntryInfo};
pub use file::{exists, read_file_with, remove_file, write_file_with};
