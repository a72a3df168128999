//! Platform-independent filename splitting.
//!
//! Mesh names come from metadata exported on arbitrary hosts, so both `/` and
//! `\` count as directory separators regardless of the current platform.

/// Final path component (`"models/silo.obj"` -> `"silo.obj"`).
pub fn file_base(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Final path component without its extension (`"models/silo.obj"` -> `"silo"`).
///
/// A leading dot does not start an extension, so `".hidden"` stays `".hidden"`.
pub fn file_stem(path: &str) -> &str {
    let base = file_base(path);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[..idx],
        _ => base,
    }
}

/// Extension of the final path component, without the dot.
pub fn file_extension(path: &str) -> Option<&str> {
    let base = file_base(path);
    match base.rfind('.') {
        Some(idx) if idx > 0 => Some(&base[idx + 1..]),
        _ => None,
    }
}
