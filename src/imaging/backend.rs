//! Image decoding backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the pipeline needs
//! from a codec: decode a file to an in-memory RGB buffer, and resample such
//! a buffer to new dimensions. Nothing here ever writes to the source file —
//! the working image lives entirely in memory.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked decoders from the `image` crate.

use crate::types::Dimensions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to resample to {width}x{height}: {reason}")]
    Resize {
        width: u32,
        height: u32,
        reason: String,
    },
}

/// A decoded image: interleaved 8-bit RGB, row-major, top-left origin.
///
/// Invariant: `data.len() == dimensions.area() * 3`. Alpha is discarded at
/// decode time; the buffer never carries a fourth channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbPixels {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl RgbPixels {
    /// Build from an interleaved RGB byte buffer. Returns `None` when the
    /// buffer length does not match the dimensions.
    pub fn from_raw(dimensions: Dimensions, data: Vec<u8>) -> Option<Self> {
        (data.len() == dimensions.area() * 3).then_some(Self { dimensions, data })
    }

    /// Build by sampling a function at each pixel, row by row.
    pub fn from_fn(dimensions: Dimensions, f: impl Fn(u32, u32) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(dimensions.area() * 3);
        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { dimensions, data }
    }

    /// A buffer filled with a single color.
    pub fn filled(dimensions: Dimensions, color: [u8; 3]) -> Self {
        Self::from_fn(dimensions, |_, _| color)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The interleaved RGB bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume into the raw byte buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Trait for image codec backends.
///
/// Both operations are total over the working buffer: `decode` is the only
/// place the filesystem is touched, and `resample` maps buffer to buffer.
/// The rest of the crate is backend-agnostic, which keeps pipeline tests
/// free of real image files.
pub trait ImageBackend: Sync {
    /// Open and decode an image file to RGB, discarding any alpha channel.
    fn decode(&self, path: &Path) -> Result<RgbPixels, BackendError>;

    /// Resample a decoded buffer to exactly `target` (no aspect preservation).
    fn resample(&self, pixels: &RgbPixels, target: Dimensions) -> Result<RgbPixels, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations and serves canned decode results.
    /// Uses Mutex so it stays Sync like the real backend.
    #[derive(Default)]
    pub struct MockBackend {
        pub decode_results: Mutex<Vec<RgbPixels>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode(String),
        Resample { width: u32, height: u32 },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_decoded(pixels: Vec<RgbPixels>) -> Self {
            Self {
                decode_results: Mutex::new(pixels),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn decode(&self, path: &Path) -> Result<RgbPixels, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode(path.to_string_lossy().to_string()));

            self.decode_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::Decode {
                    path: path.to_path_buf(),
                    reason: "no mock pixels".to_string(),
                })
        }

        fn resample(
            &self,
            pixels: &RgbPixels,
            target: Dimensions,
        ) -> Result<RgbPixels, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Resample {
                width: target.width,
                height: target.height,
            });

            // Nearest thing to a resample without pixel math: a buffer of the
            // target size carrying the input's first pixel.
            let color = match pixels.as_raw() {
                [r, g, b, ..] => [*r, *g, *b],
                _ => [0, 0, 0],
            };
            Ok(RgbPixels::filled(target, color))
        }
    }

    #[test]
    fn from_raw_rejects_bad_length() {
        assert!(RgbPixels::from_raw(Dimensions::new(2, 2), vec![0; 11]).is_none());
        assert!(RgbPixels::from_raw(Dimensions::new(2, 2), vec![0; 12]).is_some());
    }

    #[test]
    fn from_fn_is_row_major() {
        let pixels = RgbPixels::from_fn(Dimensions::new(2, 2), |x, y| [x as u8, y as u8, 9]);
        assert_eq!(
            pixels.as_raw(),
            &[0, 0, 9, 1, 0, 9, 0, 1, 9, 1, 1, 9],
        );
    }

    #[test]
    fn mock_records_decode() {
        let backend = MockBackend::with_decoded(vec![RgbPixels::filled(
            Dimensions::new(2, 1),
            [10, 20, 30],
        )]);

        let pixels = backend.decode(Path::new("/test/image.png")).unwrap();
        assert_eq!(pixels.dimensions(), Dimensions::new(2, 1));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Decode(p) if p == "/test/image.png"));
    }

    #[test]
    fn mock_decode_without_pixels_errors() {
        let backend = MockBackend::new();
        assert!(backend.decode(Path::new("/missing.png")).is_err());
    }

    #[test]
    fn mock_resample_returns_target_dimensions() {
        let backend = MockBackend::new();
        let input = RgbPixels::filled(Dimensions::new(8, 4), [1, 2, 3]);

        let out = backend.resample(&input, Dimensions::new(4, 2)).unwrap();
        assert_eq!(out.dimensions(), Dimensions::new(4, 2));
        assert_eq!(&out.as_raw()[..3], &[1, 2, 3]);

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[0],
            RecordedOp::Resample {
                width: 4,
                height: 2
            }
        ));
    }
}
