//! Error types for stegotext operations.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the stegotext library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A mask pixel's red channel was neither 0 nor 255 during encoding.
    ///
    /// The text renderer guarantees binary output, so hitting this means a
    /// hand-supplied mask broke the contract. Encoding aborts rather than
    /// producing silently corrupted output.
    #[error("mask pixel at ({x}, {y}) is not binary: red channel is {value}, expected 0 or 255")]
    MaskNotBinary { x: u32, y: u32, value: u8 },

    /// Mask and cover image dimensions do not match.
    #[error("mask dimensions {}x{} do not match cover dimensions {}x{}", mask.0, mask.1, cover.0, cover.1)]
    MaskDimensionMismatch { mask: (u32, u32), cover: (u32, u32) },

    /// Failed to read or parse a TOML configuration file.
    #[error("failed to load config from {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for stegotext operations.
pub type Result<T> = std::result::Result<T, Error>;
