//! Embeds a binary text mask into a cover image's red-channel LSBs.

use image::RgbImage;
use log::debug;

use crate::bits::write_lsb;
use crate::error::{Error, Result};
use crate::render::render_text;

/// Encode `text` into a copy of `cover`.
///
/// The text is rasterized to a black/white mask the size of the cover
/// image, then each mask pixel's bit is written into the matching cover
/// pixel's red-channel LSB (black = 0, white = 1). Green and blue channels
/// pass through untouched.
///
/// Text that does not fit the cover's dimensions is clipped by the
/// renderer; there is no capacity check.
pub fn encode(text: &str, cover: &RgbImage) -> Result<RgbImage> {
    let mask = render_text(text, cover.width(), cover.height());
    apply_mask(&mask, cover)
}

/// Write `mask`'s bit pattern into a copy of `cover`'s red-channel LSBs.
///
/// This is the core transform behind [`encode`], exposed separately so the
/// bit-plane convention can be exercised with hand-built masks. The mask
/// must have the cover's exact dimensions and every mask pixel's red
/// channel must be exactly 0 or 255; anything else aborts the encode with
/// an error rather than producing corrupted output.
pub fn apply_mask(mask: &RgbImage, cover: &RgbImage) -> Result<RgbImage> {
    if mask.dimensions() != cover.dimensions() {
        return Err(Error::MaskDimensionMismatch {
            mask: mask.dimensions(),
            cover: cover.dimensions(),
        });
    }

    debug!(
        "embedding {}x{} mask into cover red-channel LSBs",
        mask.width(),
        mask.height()
    );

    let mut encoded = cover.clone();
    // Both buffers are row-major and equally sized, so the zip lines up
    // pixel (x, y) with pixel (x, y).
    for ((x, y, pixel), mask_pixel) in encoded.enumerate_pixels_mut().zip(mask.pixels()) {
        let bit = match mask_pixel[0] {
            0 => 0,
            255 => 1,
            value => return Err(Error::MaskNotBinary { x, y, value }),
        };
        pixel[0] = write_lsb(pixel[0], bit);
    }

    Ok(encoded)
}
