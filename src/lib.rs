//! # jsonstore
//!
//! A generic key-value store that keeps every entry in its own JSON file:
//! - One file per key, `{dir}/{escaped lowercased key}.json`
//! - Case-insensitive keys
//! - Single-writer/multi-reader locking per store instance
//! - Atomic read-modify-write through `edit`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Storage<T>                            │
//! │        get / put / edit / delete / range / contains          │
//! │                   (RwLock per instance)                      │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!        ┌──────────────┐               ┌──────────────┐
//!        │  Key Mapper  │               │ Entry Codec  │
//!        │ (lowercase + │               │ {key, value} │
//!        │  %-escape)   │               │   as JSON    │
//!        └──────┬───────┘               └──────┬───────┘
//!               │                              │
//!               └──────────────┬───────────────┘
//!                              ▼
//!                      ┌──────────────┐
//!                      │   fsutil     │
//!                      │ (list, read, │
//!                      │ write, rm)   │
//!                      └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use jsonstore::{Storage, StoreError};
//!
//! let store: Storage<u32> = Storage::new("./counters");
//! store.put("Visits", &1)?;
//! let visits = store.edit("visits", |n| Ok::<_, StoreError>(n + 1))?;
//! assert_eq!(visits, 2);
//! # Ok::<(), StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod fsutil;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Cause, Result, StoreError};
pub use config::StoreConfig;
pub use storage::Storage;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jsonstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
