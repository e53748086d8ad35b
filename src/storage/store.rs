//! Storage implementation
//!
//! One JSON file per entry under a single directory, guarded by one
//! read-write lock per instance.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::StoreConfig;
use crate::error::{Cause, Result, StoreError};
use crate::fsutil;

use super::entry::{Entry, EntryRef};
use super::key;

/// A directory of JSON entry files, keyed case-insensitively
///
/// ## Concurrency:
/// - `get`, `range`, `contains`: shared lock (run concurrently)
/// - `put`, `edit`, `delete`: exclusive lock
/// - `edit` holds the exclusive lock across read → transform → write
///
/// The lock is per instance. Two `Storage` values on the same directory, or
/// other processes writing into it, are not synchronized with each other.
///
/// Callbacks (`range` visitors, `edit` transforms) run with the lock held;
/// calling back into the same store from one of them deadlocks.
pub struct Storage<T> {
    /// Directory, extension and encoding options
    config: StoreConfig,

    /// Guards every filesystem access made through this instance
    lock: RwLock<()>,

    /// `fn() -> T` keeps the store Send + Sync whatever T is
    _marker: PhantomData<fn() -> T>,
}

impl<T> Storage<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a store over `dir` with default options
    ///
    /// The directory is not touched until the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::open(StoreConfig::builder().dir(dir).build())
    }

    /// Create a store from a full config
    pub fn open(config: StoreConfig) -> Self {
        Self {
            config,
            lock: RwLock::new(()),
            _marker: PhantomData,
        }
    }

    /// Get the value stored under `key`
    ///
    /// Returns:
    /// - `Ok(value)` — entry found and decoded
    /// - `Err(NotExist)` — no file for the canonical key
    /// - `Err(Internal)` — any other read or decode failure
    pub fn get(&self, key: &str) -> Result<T> {
        let (canonical, path) = self.locate(key);
        trace!(key = %canonical, "get");

        let entry = {
            let _read_guard = self.lock.read();
            Self::read_entry(&path)
        };

        match entry {
            Ok(entry) => Ok(entry.value),
            Err(cause) if cause.is_not_found() => Err(StoreError::NotExist(canonical)),
            Err(cause) => Err(Self::internal("get", cause)),
        }
    }

    /// Store `value` under `key`, replacing any previous entry entirely
    pub fn put(&self, key: &str, value: &T) -> Result<()> {
        let (canonical, path) = self.locate(key);

        let _write_guard = self.lock.write();
        self.write_entry(&path, &canonical, value)
            .map_err(|cause| Self::internal("put", cause))?;

        debug!(key = %canonical, path = %path.display(), "put entry");
        Ok(())
    }

    /// Atomically read, transform and rewrite the value under `key`
    ///
    /// Steps (all under the exclusive lock):
    /// 1. Read the current value; `NotExist` if absent (transform not called)
    /// 2. Apply `transform`; its error is returned as is and nothing is written
    /// 3. Write the new value and return it
    pub fn edit<F, E>(&self, key: &str, transform: F) -> std::result::Result<T, E>
    where
        F: FnOnce(T) -> std::result::Result<T, E>,
        E: From<StoreError>,
    {
        let (canonical, path) = self.locate(key);

        let _write_guard = self.lock.write();

        let current = match Self::read_entry(&path) {
            Ok(entry) => entry.value,
            Err(cause) if cause.is_not_found() => {
                return Err(StoreError::NotExist(canonical).into());
            }
            Err(cause) => return Err(Self::internal("edit", cause).into()),
        };

        let updated = transform(current)?;

        self.write_entry(&path, &canonical, &updated)
            .map_err(|cause| Self::internal("edit", cause))?;

        debug!(key = %canonical, path = %path.display(), "edited entry");
        Ok(updated)
    }

    /// Remove the entry under `key`; a missing entry is not an error
    pub fn delete(&self, key: &str) -> Result<()> {
        let (canonical, path) = self.locate(key);

        let _write_guard = self.lock.write();

        let present = fsutil::exists(&path).map_err(|e| Self::internal("delete", e))?;
        if !present {
            return Ok(());
        }

        match fsutil::remove_file(&path) {
            Ok(()) => {}
            // Removed behind our back between the check and the remove
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Self::internal("delete", e)),
        }

        debug!(key = %canonical, path = %path.display(), "deleted entry");
        Ok(())
    }

    /// Visit every entry in directory-listing order
    ///
    /// - Missing directory: empty store, `visit` never called
    /// - Subdirectories and files without the extension are ignored
    /// - A file that disappears mid-scan is skipped
    /// - Any other read/decode failure aborts with `Internal`
    /// - An error from `visit` stops the scan and is returned as is
    ///
    /// The shared lock is held for the whole scan, so writers wait for it.
    pub fn range<F, E>(&self, mut visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(&str, T) -> std::result::Result<(), E>,
        E: From<StoreError>,
    {
        let _read_guard = self.lock.read();

        let children = match fsutil::read_dir(self.dir()) {
            Ok(Some(children)) => children,
            Ok(None) => return Ok(()),
            Err(e) => return Err(Self::internal("range", e).into()),
        };

        for child in children {
            if child.is_dir || child.strip_extension(&self.config.extension).is_none() {
                continue;
            }

            let path = self.dir().join(&child.name);
            let entry = match Self::read_entry(&path) {
                Ok(entry) => entry,
                Err(cause) if cause.is_not_found() => {
                    let name = child.name.to_string_lossy();
                    let file_key = key::unescape_file_name(&name, &self.config.extension);
                    debug!(key = ?file_key, path = %path.display(), "entry vanished during range, skipping");
                    continue;
                }
                Err(cause) => return Err(Self::internal("range", cause).into()),
            };

            visit(&entry.key, entry.value)?;
        }

        Ok(())
    }

    /// Check whether a file exists for `key` without decoding it
    pub fn contains(&self, key: &str) -> Result<bool> {
        let (_, path) = self.locate(key);

        let _read_guard = self.lock.read();
        fsutil::exists(&path).map_err(|e| Self::internal("contains", e))
    }

    /// Collect the keys of every entry (as stored in the entry files)
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        self.range(|key, _value: T| {
            keys.push(key.to_string());
            Ok::<(), StoreError>(())
        })?;
        Ok(keys)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the store directory
    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// Get the file path `key` maps to
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.locate(key).1
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn locate(&self, key: &str) -> (String, PathBuf) {
        key::key_path(&self.config.dir, key, &self.config.extension)
    }

    fn read_entry(path: &Path) -> std::result::Result<Entry<T>, Cause> {
        fsutil::read_file_with(path, |reader| Entry::<T>::decode(reader).map_err(Cause::from))
    }

    fn write_entry(&self, path: &Path, canonical: &str, value: &T) -> std::result::Result<(), Cause> {
        let pretty = self.config.pretty;
        fsutil::write_file_with(path, self.config.sync_writes, |writer| {
            EntryRef::new(canonical, value).encode(writer, pretty)
        })
    }

    fn internal(op: &'static str, cause: impl Into<Cause>) -> StoreError {
        let err = StoreError::internal(op, cause);
        warn!(op, error = %err, "storage operation failed");
        err
    }
}
