//! Lexical POSIX path primitives.
//!
//! Everything here works on `/`-separated strings and never touches the
//! filesystem: no existence checks, no symlink resolution. Cleaning is done
//! by `path_clean` and diffing by `pathdiff`; this module only adds the
//! string-level rules around them (empty input, trailing separators).
//! `crate::fs_op::path` handles the Windows-to-POSIX separator conversion.

use path_clean::PathClean;
use std::path::Path;

/// Returns `true` when `path` starts at the filesystem root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Normalize `path` lexically.
///
/// Behaviour:
/// - Repeated separators and `.` segments are removed.
/// - `..` removes the preceding segment. A relative path keeps leading `..`
///   segments it cannot collapse; an absolute path drops them at the root.
/// - A trailing separator on the input survives on the output.
/// - A relative path that collapses to nothing becomes `.` (or `./` when it
///   had a trailing separator); the empty string becomes `.`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let mut out = to_slash(&Path::new(path).clean());
    if path.ends_with('/') && !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Resolve `path` against the working directory `cwd`.
///
/// An absolute `path` ignores `cwd`. The result is normalized and carries no
/// trailing separator. When `cwd` is absolute (the normal case) the result is
/// absolute too.
pub fn resolve(cwd: &str, path: &str) -> String {
    to_slash(&Path::new(cwd).join(path).clean())
}

/// Compute the path that leads from directory `from` to `to`.
///
/// Both sides are normalized first; relative inputs are treated as rooted at
/// `/`. The common leading segments are dropped, one `..` is emitted for every
/// segment left in `from`, and the rest of `to` follows. Identical paths give
/// the empty string.
pub fn relative(from: &str, to: &str) -> String {
    let from = resolve("/", from);
    let to = resolve("/", to);

    // Both sides are rooted and clean, so a diff always exists.
    match pathdiff::diff_paths(&to, &from) {
        Some(diff) => to_slash(&diff),
        None => to,
    }
}

fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}
