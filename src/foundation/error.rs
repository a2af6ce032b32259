use std::path::{Path, PathBuf};

/// Convenience result type for icon generation.
pub type IconResult<T> = Result<T, IconError>;

/// Errors surfaced while laying out, rendering, or writing icons.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Input rejected before any drawing happens (e.g. a zero size).
    #[error("validation error: {0}")]
    Validation(String),

    /// A backend failed to rasterize or emit markup.
    #[error("render error: {0}")]
    Render(String),

    /// Pixel data could not be encoded into the output format.
    #[error("encode error: {0}")]
    Encode(String),

    /// The requested backend was not compiled into this build.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure while preparing the output directory or writing a file.
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        /// Path that was being created or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Anything else, with its context chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build a [`IconError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`IconError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`IconError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`IconError::Unavailable`].
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Build a [`IconError::Io`] for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
