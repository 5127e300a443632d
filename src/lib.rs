//! # img2ctrpf
//!
//! Convert a still image into CTRPluginFramework drawing code for the 3DS.
//!
//! The generated plugin source embeds the image as three per-channel byte
//! arrays plus draw geometry, and paints it pixel by pixel on the top
//! (400×240) or bottom (320×240) screen via `OSD::DrawPixel`.
//!
//! # Architecture: One Pipeline, Fixed Order
//!
//! ```text
//! decode → size decision → resample? → placement → channel split → emit → write
//! ```
//!
//! The stages around the middle are pure functions; the only I/O is the
//! single decode at the front and the tree write at the back. The source
//! image is never modified — sizing happens on the in-memory buffer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Screen targets with fixed bounds, dimensions, positions |
//! | [`sizing`] | Pure dimension policy: fit-to-screen decisions and centering |
//! | [`imaging`] | Codec backend trait, `image`-crate backend, channel split |
//! | [`emit`] | Deterministic C++ source generation |
//! | [`scaffold`] | Plugin tree layout on disk |
//! | [`report`] | Explicit reporter capability + summary formatting |
//! | [`convert`] | The pipeline driver and its error taxonomy |
//!
//! # Design Decisions
//!
//! ## In-Memory Sizing
//!
//! Earlier tooling in this space resized by overwriting the input file, then
//! re-read it for extraction. Here the decode happens once, at most one
//! Lanczos3 resample maps buffer to buffer, and the user's file is never
//! touched. A failed conversion leaves both the input and any previous
//! output directory content intact (the output tree is only replaced after
//! the source text is fully rendered).
//!
//! ## Everything Fits the Panel
//!
//! The 3DS cannot draw past the physical screen, so the sizing policy treats
//! the screen bound as a hard ceiling: an oversized source or an oversized
//! size request collapses to exactly the bound, overriding any explicit
//! request. In-bounds requests are honored as-is. See [`sizing`] for the
//! precedence rules.
//!
//! ## Errors Are Values, Silence Is Scoped
//!
//! Every failure is a typed `Result` (`thiserror` enums) mapped to a nonzero
//! exit in `main`, and `--silent` gates informational stdout only — errors
//! reach stderr regardless. There is no global state of any kind.

pub mod convert;
pub mod emit;
pub mod imaging;
pub mod report;
pub mod scaffold;
pub mod sizing;
pub mod types;

pub use convert::{ConvertError, ConvertRequest, ConvertSummary, convert};
pub use report::Reporter;
pub use types::{Dimensions, Position, ScreenTarget};
