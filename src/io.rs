//! Image loading and saving.
//!
//! Thin wrappers over the `image` crate that pin the pixel format to RGB8
//! and attach the offending path to failures.

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::error::{Error, Result};

/// Load an image from disk and convert it to RGB8.
///
/// Any raster format the `image` crate can decode is accepted (PNG and
/// JPEG included). Alpha channels and other pixel layouts are converted.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    info!("loaded image from {}", path.display());
    Ok(img.to_rgb8())
}

/// Save an image to disk, with the format chosen from the path extension.
pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    info!("saved image to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pattern.png");

        let original = RgbImage::from_fn(12, 8, |x, y| Rgb([(x * 20) as u8, (y * 30) as u8, 5]));
        save_image(&original, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded.as_raw(), original.as_raw());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = load_image(dir.path().join("no_such_image.png"));
        assert!(matches!(result, Err(Error::ImageLoad { .. })));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let img = RgbImage::new(2, 2);
        let result = save_image(&img, dir.path().join("missing").join("out.png"));
        assert!(matches!(result, Err(Error::ImageSave { .. })));
    }
}
