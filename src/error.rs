use std::path::PathBuf;

/// Errors raised while resizing or packaging images.
///
/// A destination that already exists is not an error; the resizer reports
/// it as [`crate::resize::FileOutcome::AlreadyExists`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source file missing: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to read source image {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {reason}", .path.display())]
    UnwritableDestination { path: PathBuf, reason: String },

    #[error("only PNG images are supported, got {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {}: {reason}", .path.display())]
    Catalog { path: PathBuf, reason: String },

    #[error("invalid resize parameters: {0}")]
    InvalidParams(String),

    #[error("output directory must not be empty")]
    EmptyOutputDir,

    #[error("failed to read answer: {0}")]
    Prompt(#[source] dialoguer::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
