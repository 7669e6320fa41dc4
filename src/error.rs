//! Error types for the trustmark-decode crate.

use std::path::PathBuf;

/// Errors that can occur while decoding a watermark.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No watermark decoder backend was compiled into this build.
    #[error("Missing dependency: trustmark decoder backend not available. Install with: cargo install trustmark-decode --features trustmark")]
    MissingDependency,

    /// The input image does not exist.
    #[error("Image file not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// The model type is not one of the supported variants.
    #[error("unsupported model type '{0}' (expected P or Q)")]
    InvalidModelType(String),

    /// The watermark backend reported an error.
    #[error("{0}")]
    Backend(String),

    /// The image could not be decoded.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
