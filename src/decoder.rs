//! Reconstructs the embedded mask from an image's red-channel LSBs.

use image::RgbImage;
use log::debug;

use crate::bits::read_lsb;
use crate::render::{BLACK, WHITE};

/// Decode `encoded` into a black/white visualization of its red LSBs.
///
/// Each pixel of the output is pure black where the source pixel's red
/// LSB is 0 and pure white where it is 1. The output has the source's
/// dimensions and is always produced; decoding an image that was never
/// encoded simply visualizes its red-channel LSB noise, since nothing
/// distinguishes an encoded image from an arbitrary one.
pub fn decode(encoded: &RgbImage) -> RgbImage {
    let (width, height) = encoded.dimensions();
    debug!("reading red-channel LSBs from {}x{} image", width, height);

    let mut output = RgbImage::new(width, height);
    for (out, pixel) in output.pixels_mut().zip(encoded.pixels()) {
        *out = if read_lsb(pixel[0]) == 0 { BLACK } else { WHITE };
    }

    output
}
