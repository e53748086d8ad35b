//! Key/Path Mapper
//!
//! Canonical key = lowercased caller key.
//! File name     = percent-escaped canonical key + "." + extension.
//!
//! Escaping follows URL path-segment rules: ASCII alphanumerics and
//! `-._~$&+=:@` pass through, every other byte becomes `%XX`. That covers
//! `/`, `\`, `%`, NUL and all non-ASCII bytes, so an escaped key is
//! always a single path component.
//!
//! On Windows `:` is escaped as well (`%3A`), since it is not allowed in file
//! names there. Directories written on one platform with keys containing `:`
//! are not readable by those keys on the other.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped in a file name on every platform (besides ASCII alphanumerics)
const PATH_SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'=')
    .remove(b'@');

#[cfg(not(windows))]
const KEY_ESCAPE_SET: &AsciiSet = &PATH_SEGMENT_SET.remove(b':');

#[cfg(windows)]
const KEY_ESCAPE_SET: &AsciiSet = PATH_SEGMENT_SET;

/// Lowercase a caller key into its canonical form
///
/// Lowercases char by char, with no context-sensitive rules: a word-final
/// `Σ` becomes `σ`, not `ς`.
pub fn canonical_key(key: &str) -> String {
    key.chars().flat_map(char::to_lowercase).collect()
}

/// Percent-escape a canonical key for use as a file stem
pub fn escape_key(canonical: &str) -> Cow<'_, str> {
    utf8_percent_encode(canonical, KEY_ESCAPE_SET).into()
}

/// File name for a canonical key: `{escaped}.{extension}`
pub fn file_name(canonical: &str, extension: &str) -> String {
    format!("{}.{}", escape_key(canonical), extension)
}

/// Full path for a caller key inside `dir`
///
/// Returns the canonical key alongside the path, since every caller needs both.
pub fn key_path(dir: &Path, key: &str, extension: &str) -> (String, PathBuf) {
    let canonical = canonical_key(key);
    let path = dir.join(file_name(&canonical, extension));
    (canonical, path)
}

/// Reverse of `file_name`: recover the canonical key from an entry file name
///
/// Returns `None` if the name lacks the extension or does not decode to UTF-8.
pub fn unescape_file_name(name: &str, extension: &str) -> Option<String> {
    let stem = name.strip_suffix(extension)?.strip_suffix('.')?;
    percent_decode_str(stem)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
