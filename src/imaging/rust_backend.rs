//! Pure Rust codec backend on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF, BMP, TIFF, WebP) | `image::ImageReader` (pure Rust decoders) |
//! | Alpha discard | `DynamicImage::to_rgb8` |
//! | Resample | `image::imageops::resize` with `Lanczos3` |
//!
//! The resample is exact: the output has the requested dimensions whether or
//! not they preserve the source aspect ratio. Fitting decisions belong to
//! [`sizing`](crate::sizing), not here.

use super::backend::{BackendError, ImageBackend, RgbPixels};
use crate::types::Dimensions;
use image::imageops::FilterType;
use image::{ImageReader, RgbImage};
use std::path::Path;

/// Production backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<RgbPixels, BackendError> {
        let img = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let rgb = img.to_rgb8();
        let dimensions = Dimensions::new(rgb.width(), rgb.height());
        RgbPixels::from_raw(dimensions, rgb.into_raw()).ok_or_else(|| BackendError::Decode {
            path: path.to_path_buf(),
            reason: "decoded buffer length mismatch".to_string(),
        })
    }

    fn resample(&self, pixels: &RgbPixels, target: Dimensions) -> Result<RgbPixels, BackendError> {
        let src = pixels.dimensions();
        let img = RgbImage::from_raw(src.width, src.height, pixels.as_raw().to_vec()).ok_or(
            BackendError::Resize {
                width: target.width,
                height: target.height,
                reason: "source buffer length mismatch".to_string(),
            },
        )?;

        let resized = image::imageops::resize(&img, target.width, target.height, FilterType::Lanczos3);
        RgbPixels::from_raw(target, resized.into_raw()).ok_or(BackendError::Resize {
            width: target.width,
            height: target.height,
            reason: "resampled buffer length mismatch".to_string(),
        })
    }
}
