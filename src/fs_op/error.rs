use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathUtilError>;

/// Errors produced by the path helpers.
#[derive(Error, Debug)]
pub enum PathUtilError {
    /// An argument was rejected by validation (for example a relative
    /// `base_dir`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The process working directory could not be read.
    #[error("could not read current working directory: {0}")]
    CurrentDir(#[from] std::io::Error),
}

impl PathUtilError {
    pub(crate) fn base_dir_not_absolute(base_dir: &str) -> Self {
        PathUtilError::InvalidArgument(format!(
            "base_dir should be an absolute path (got `{}`)",
            base_dir
        ))
    }
}
