//! Storage Module
//!
//! File-per-entry JSON storage.
//!
//! ## Responsibilities
//! - Map caller keys to file paths (case-insensitive, percent-escaped)
//! - Encode/decode the `{key, value}` envelope
//! - Serialize filesystem access through one read-write lock
//!
//! ## Layout
//! ```text
//! {dir}/
//!   ├── alice.json          {"key":"alice","value":...}
//!   ├── bob%2Fsmith.json    {"key":"bob/smith","value":...}
//!   └── notes.txt           (ignored)
//! ```

pub mod key;
mod entry;
mod store;

pub use entry::{Entry, EntryRef};
pub use store::Storage;
