use crate::fs_op::error::{PathUtilError, Result};
use crate::fs_op::posix;
use std::borrow::Cow;

/// Normalize a user-supplied filepath to a slash-delimited form.
///
/// Every `\` is turned into `/` first, then the path is normalized with
/// POSIX rules (see [`posix::normalize`]). The function is total: `""`
/// becomes `"."` and nothing is ever rejected.
pub fn normalize_filepath(filepath: &str) -> String {
    let posix_filepath = filepath.replace('\\', "/");
    posix::normalize(&posix_filepath)
}

/// Convert `filepath` to a path relative to `base_dir`.
///
/// Behaviour:
/// - A relative `filepath` is first resolved against the process working
///   directory. An absolute one is used as given.
/// - With a `base_dir`, the result is the lexical relative path from
///   `base_dir` to `filepath`. `base_dir` must be absolute, otherwise
///   `PathUtilError::InvalidArgument` is returned.
/// - Without a `base_dir` (or with an empty one) a single leading `/` is
///   stripped and the rest is returned unchanged.
///
/// Symlinks are not taken into account and nothing is checked on disk.
pub fn get_relative_path(filepath: &str, base_dir: Option<&str>) -> Result<String> {
    // Validate before reading the cwd so a cwd failure never hides a bad
    // base_dir.
    let base_dir = validate_base_dir(base_dir)?;
    let cwd = if posix::is_absolute(filepath) {
        None
    } else {
        Some(std::env::current_dir()?.to_string_lossy().into_owned())
    };
    Ok(relative_to_base(filepath, base_dir, cwd.as_deref()))
}

/// Same as [`get_relative_path`] but resolves a relative `filepath` against
/// `cwd` instead of the process working directory.
pub fn get_relative_path_from(
    filepath: &str,
    base_dir: Option<&str>,
    cwd: &str,
) -> Result<String> {
    let base_dir = validate_base_dir(base_dir)?;
    Ok(relative_to_base(filepath, base_dir, Some(cwd)))
}

// `base_dir` is already validated. `cwd` is only consulted for a relative
// `filepath`.
fn relative_to_base(filepath: &str, base_dir: Option<&str>, cwd: Option<&str>) -> String {
    let filepath: Cow<'_, str> = match cwd {
        Some(cwd) if !posix::is_absolute(filepath) => {
            let resolved = posix::resolve(cwd, filepath);
            tracing::debug!(
                "resolved relative path {:?} against {:?} to {:?}",
                filepath,
                cwd,
                resolved
            );
            Cow::Owned(resolved)
        }
        _ => Cow::Borrowed(filepath),
    };

    let relative_path = match base_dir {
        Some(base) => posix::relative(base, &filepath),
        None => filepath.strip_prefix('/').unwrap_or(&*filepath).to_string(),
    };
    tracing::trace!("relative path of {:?} is {:?}", filepath, relative_path);
    relative_path
}

// An empty base directory counts as "not provided". Anything else must be
// absolute.
fn validate_base_dir(base_dir: Option<&str>) -> Result<Option<&str>> {
    match base_dir {
        None | Some("") => Ok(None),
        Some(base) if posix::is_absolute(base) => Ok(Some(base)),
        Some(base) => {
            tracing::warn!("rejecting non-absolute base_dir {:?}", base);
            Err(PathUtilError::base_dir_not_absolute(base))
        }
    }
}
