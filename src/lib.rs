//! # stegotext
//!
//! Hides a text message in the least-significant bits of an image's red
//! channel, and recovers hidden messages as black/white visualizations.
//!
//! The crate is built from four small pieces, leaves first:
//! - [`bits`]: single-bit read/write primitives over 8-bit channel values
//! - [`render`]: rasterizes wrapped text into a binary black/white mask
//! - [`encoder`]: writes a mask's bit pattern into a cover image's red LSBs
//! - [`decoder`]: reads red LSBs back out as a black/white image
//!
//! Encoding and decoding are independent transforms that share one bit
//! convention (red LSB 0 = black, 1 = white). Decoding does not recover the
//! original string; it reconstructs an image of the embedded mask, which a
//! human reads visually.

pub mod bits;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod io;
pub mod render;

pub use decoder::decode;
pub use encoder::{apply_mask, encode};
pub use error::{Error, Result};
pub use render::render_text;
