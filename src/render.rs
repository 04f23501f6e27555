//! Black/white text rasterization.
//!
//! Produces the binary mask consumed by the encoder: a black canvas with
//! text drawn in pure white pixels. The output must stay strictly binary
//! (every pixel exactly black or white) because the encoder discriminates
//! mask pixels on exact 0/255 red values, so glyphs come from an 8x8
//! bitmap font rather than an anti-aliased rasterizer.

use font8x8::legacy::BASIC_LEGACY;
use image::{Rgb, RgbImage};
use log::warn;

/// Pure black, the mask background.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
/// Pure white, the glyph stroke color.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Maximum characters per wrapped line.
pub const WRAP_WIDTH: usize = 60;

/// Left margin for the first glyph column, in pixels.
const MARGIN: u32 = 10;
/// Top offset of the first line, in pixels.
const TOP_OFFSET: u32 = 10;
/// Vertical advance per wrapped line, in pixels.
const LINE_HEIGHT: u32 = 10;
/// Width and height of one font cell, in pixels.
const GLYPH_SIZE: u32 = 8;

/// Rasterize `text` into a black/white mask of the given dimensions.
///
/// The text is wrapped at word boundaries to at most [`WRAP_WIDTH`]
/// characters per line (a single word longer than the limit is broken),
/// then drawn line by line starting at a fixed margin and advancing a
/// fixed line height. Characters outside the font's ASCII range leave
/// their cell blank.
///
/// Lines that fall past the bottom of the canvas, or glyph columns past
/// the right edge, are clipped and lost. No capacity validation happens
/// here or downstream.
///
/// Every returned pixel is exactly (0,0,0) or (255,255,255).
pub fn render_text(text: &str, width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, BLACK);

    let lines = textwrap::wrap(text, WRAP_WIDTH);
    let required = TOP_OFFSET + lines.len() as u32 * LINE_HEIGHT;
    if required > height {
        warn!(
            "rendered text needs {} rows but canvas is {} tall; overflowing lines will be clipped",
            required, height
        );
    }

    let mut offset = TOP_OFFSET;
    for line in &lines {
        draw_line(&mut canvas, line, MARGIN, offset);
        offset += LINE_HEIGHT;
    }

    canvas
}

/// Draw one line of text in white, one 8x8 font cell per character.
///
/// Pixels outside the canvas are dropped.
fn draw_line(canvas: &mut RgbImage, line: &str, origin_x: u32, origin_y: u32) {
    if origin_y >= canvas.height() {
        return;
    }

    for (index, ch) in line.chars().enumerate() {
        let code = ch as usize;
        if code >= BASIC_LEGACY.len() {
            continue;
        }
        let glyph = BASIC_LEGACY[code];
        let cell_x = origin_x + index as u32 * GLYPH_SIZE;

        for (row, row_bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if row_bits & (1 << col) == 0 {
                    continue;
                }
                let x = cell_x + col;
                let y = origin_y + row as u32;
                if x < canvas.width() && y < canvas.height() {
                    canvas.put_pixel(x, y, WHITE);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_binary(img: &RgbImage) -> bool {
        img.pixels().all(|p| *p == BLACK || *p == WHITE)
    }

    #[test]
    fn test_output_is_strictly_binary() {
        let img = render_text("ab", 20, 20);
        assert_eq!(img.dimensions(), (20, 20));
        assert!(is_binary(&img));
    }

    #[test]
    fn test_empty_text_is_all_black() {
        let img = render_text("", 30, 30);
        assert!(img.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_text_produces_white_pixels() {
        // Generous canvas so the first glyph cell is fully inside
        let img = render_text("hello world", 600, 60);
        assert!(img.pixels().any(|p| *p == WHITE));
        assert!(is_binary(&img));
    }

    #[test]
    fn test_glyphs_start_at_margin() {
        let img = render_text("X", 100, 100);
        // Nothing above the top offset or left of the margin
        for (x, y, pixel) in img.enumerate_pixels() {
            if x < 10 || y < 10 {
                assert_eq!(*pixel, BLACK, "unexpected white pixel at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_overflow_is_clipped_not_panicking() {
        // Far more text than a 16x16 canvas can hold
        let long = "word ".repeat(200);
        let img = render_text(&long, 16, 16);
        assert_eq!(img.dimensions(), (16, 16));
        assert!(is_binary(&img));
    }

    #[test]
    fn test_deterministic() {
        let a = render_text("determinism", 200, 50);
        let b = render_text("determinism", 200, 50);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_wrapping_breaks_long_text_into_lines() {
        // Two words that cannot share a 60-column line land on two lines,
        // so white pixels appear in two distinct line bands.
        let text = format!("{} {}", "a".repeat(40), "b".repeat(40));
        let img = render_text(&text, 600, 60);

        let band = |top: u32| {
            img.enumerate_pixels()
                .any(|(_, y, p)| y >= top && y < top + 8 && *p == WHITE)
        };
        assert!(band(10), "first line band should contain glyphs");
        assert!(band(20), "second line band should contain glyphs");
    }
}
