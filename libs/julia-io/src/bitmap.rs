//! Grayscale bitmap adapter for intensity fields.

use std::path::Path;

use image::{GrayImage, ImageFormat};
use julia_types::ScalarField;
use tracing::info;

use crate::error::{IoError, IoResult};

/// Save a field as an 8-bit grayscale PNG, one pixel per sample.
pub fn save_field_png<P: AsRef<Path>>(field: &ScalarField, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let (width, height) = dimensions(field)?;
    let img = GrayImage::from_raw(width, height, field.data().to_vec())
        .ok_or_else(|| IoError::invalid_content("field buffer does not match its dimensions"))?;
    img.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), width, height, "wrote field image");
    Ok(())
}

/// Load any supported image as a field, converting to 8-bit luminance.
pub fn load_field_image<P: AsRef<Path>>(path: P) -> IoResult<ScalarField> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path)?.to_luma8();
    let (width, height) = img.dimensions();
    ScalarField::from_raw(width as usize, height as usize, img.into_raw())
        .ok_or_else(|| IoError::invalid_content("decoded image buffer does not match its size"))
}

fn dimensions(field: &ScalarField) -> IoResult<(u32, u32)> {
    let convert = |n: usize| {
        u32::try_from(n)
            .map_err(|_| IoError::invalid_content(format!("dimension {n} exceeds image limits")))
    };
    Ok((convert(field.width())?, convert(field.height())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.png");
        let data: Vec<u8> = (0..60).map(|i| (i * 4) as u8).collect();
        let field = ScalarField::from_raw(10, 6, data).unwrap();

        save_field_png(&field, &path).unwrap();
        let loaded = load_field_image(&path).unwrap();
        assert_eq!(loaded, field);
    }

    #[test]
    fn test_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_field_image(dir.path().join("missing.png")),
            Err(IoError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_garbage_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load_field_image(&path), Err(IoError::Image(_))));
    }
}
