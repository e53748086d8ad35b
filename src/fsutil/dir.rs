//! Directory listing

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// File name (no directory component)
    pub name: OsString,

    /// True for directories, including symlinks that resolve to one
    pub is_dir: bool,
}

impl DirEntryInfo {
    /// Returns the name without `.{extension}` if it carries that extension
    ///
    /// A bare ".json" counts: its stem is empty.
    pub fn strip_extension(&self, extension: &str) -> Option<&str> {
        let name = self.name.to_str()?;
        let stem = name.strip_suffix(extension)?.strip_suffix('.')?;
        Some(stem)
    }
}

/// List the children of `path`
///
/// Returns:
/// - `Ok(Some(entries))` — directory exists (possibly empty)
/// - `Ok(None)` — directory does not exist
/// - `Err(e)` — any other I/O failure
pub fn read_dir(path: &Path) -> io::Result<Option<Vec<DirEntryInfo>>> {
    let iter = match fs::read_dir(path) {
        Ok(iter) => iter,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut entries = Vec::new();
    for entry in iter {
        let entry = entry?;

        // file_type() does not follow symlinks; metadata() does
        let file_type = entry.file_type()?;
        let mut is_dir = file_type.is_dir();
        if file_type.is_symlink() {
            is_dir = fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false);
        }

        entries.push(DirEntryInfo {
            name: entry.file_name(),
            is_dir,
        });
    }

    Ok(Some(entries))
}
