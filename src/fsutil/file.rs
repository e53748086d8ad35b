//! Scoped file reads and writes

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use tempfile::NamedTempFile;

/// Open `path` and run `f` over a buffered reader
///
/// A missing file surfaces as an `io::Error` of kind `NotFound`, converted
/// into the callback's error type.
pub fn read_file_with<R, E, F>(path: &Path, f: F) -> Result<R, E>
where
    E: From<io::Error>,
    F: FnOnce(&mut BufReader<File>) -> Result<R, E>,
{
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    f(&mut reader)
}

/// Write `path` by running `f` over a buffered writer
///
/// Steps:
/// 1. Create parent directories
/// 2. Write into a randomly named `.tmpXXXXXX` file in the same directory
/// 3. Flush (and fsync if `sync`)
/// 4. Persist (rename) over `path`
///
/// The temp name has no extension of its own, so it never collides with an
/// entry file. On failure the temp file is dropped, which deletes it, and
/// `path` is left untouched.
pub fn write_file_with<E, F>(path: &Path, sync: bool, f: F) -> Result<(), E>
where
    E: From<io::Error>,
    F: FnOnce(&mut BufWriter<NamedTempFile>) -> Result<(), E>,
{
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut writer = BufWriter::new(NamedTempFile::new_in(parent)?);
    f(&mut writer)?;

    let temp_file = writer.into_inner().map_err(|e| e.into_error())?;
    if sync {
        temp_file.as_file().sync_all()?;
    }

    temp_file.persist(path).map_err(io::Error::from)?;
    Ok(())
}

/// True if something exists at `path`
///
/// Unlike `Path::exists`, permission errors are reported instead of read as "absent".
pub fn exists(path: &Path) -> io::Result<bool> {
    path.try_exists()
}

/// Remove the file at `path`
pub fn remove_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}
