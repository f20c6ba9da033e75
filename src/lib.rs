//! Helpers for normalizing filepaths and computing paths relative to a base
//! directory. Nothing here touches the filesystem.

pub mod fs_op;

pub use crate::fs_op::error::{PathUtilError, Result};
pub use crate::fs_op::path::{get_relative_path, get_relative_path_from, normalize_filepath};
pub use crate::fs_op::posix;
