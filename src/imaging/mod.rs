//! Image decoding and resampling — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode to RGB** | `image::ImageReader` + `to_rgb8` (alpha discarded) |
//! | **Resample** | `image::imageops::resize`, Lanczos3, exact target size |
//! | **Channel split** | [`split_channels`] (row-major invariant) |
//!
//! The module is split into:
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Channels**: flat per-channel sequences for the code emitter

pub mod backend;
pub mod channels;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, RgbPixels};
pub use channels::{ChannelBuffer, split_channels};
pub use rust_backend::RustBackend;
