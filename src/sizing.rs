//! Pure calculation functions for working dimensions and draw position.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The sizing rules, in order of precedence:
//!
//! 1. An image or request larger than the screen is forced to exactly the
//!    screen bound. The 3DS cannot draw past the physical panel, so an unfit
//!    size is never honored.
//! 2. An explicit `--width`/`--height` request that fits the screen is
//!    honored as-is; an unspecified axis keeps the source value.
//! 3. Otherwise the source dimensions pass through untouched and no resample
//!    happens at all.

use crate::types::{Dimensions, Position, ScreenTarget};

/// Outcome of the sizing policy: the working dimensions for the rest of the
/// pipeline, and whether the decoded pixels must be resampled to reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeDecision {
    pub dimensions: Dimensions,
    pub resample: bool,
}

/// Decide the working dimensions for a source image on a given screen.
///
/// A requested axis left as `None` defaults to the source value, so a partial
/// request (`--width` only) scales one axis and keeps the other.
///
/// # Examples
/// ```
/// # use img2ctrpf::sizing::decide_dimensions;
/// # use img2ctrpf::types::{Dimensions, ScreenTarget};
/// // Fits as-is: passes through without a resample
/// let d = decide_dimensions(Dimensions::new(100, 50), None, None, ScreenTarget::Top);
/// assert_eq!((d.dimensions, d.resample), (Dimensions::new(100, 50), false));
///
/// // Wider than the top screen: forced to the full bound
/// let d = decide_dimensions(Dimensions::new(500, 100), None, None, ScreenTarget::Top);
/// assert_eq!((d.dimensions, d.resample), (Dimensions::new(400, 240), true));
/// ```
pub fn decide_dimensions(
    source: Dimensions,
    requested_width: Option<u32>,
    requested_height: Option<u32>,
    target: ScreenTarget,
) -> SizeDecision {
    let bound = target.bound();
    let effective = Dimensions::new(
        requested_width.unwrap_or(source.width),
        requested_height.unwrap_or(source.height),
    );

    let source_oversized = source.width > bound.width || source.height > bound.height;
    let request_oversized = effective.width > bound.width || effective.height > bound.height;

    // Anything unfit collapses to the screen bound, overriding an explicit
    // request. A request that is itself too large gets the same treatment as
    // an oversized source.
    if source_oversized || request_oversized {
        return SizeDecision {
            dimensions: bound,
            resample: true,
        };
    }

    if requested_width.is_some() || requested_height.is_some() {
        return SizeDecision {
            dimensions: effective,
            resample: true,
        };
    }

    SizeDecision {
        dimensions: source,
        resample: false,
    }
}

/// Compute the top-left draw position for the working dimensions.
///
/// Defaults center the region on the screen using floor division. A supplied
/// coordinate overrides its axis; `Some(0)` is a legitimate override, not an
/// absent value.
pub fn place(
    dimensions: Dimensions,
    target: ScreenTarget,
    requested_x: Option<i32>,
    requested_y: Option<i32>,
) -> Position {
    let bound = target.bound();
    Position {
        x: requested_x.unwrap_or_else(|| centered(bound.width, dimensions.width)),
        y: requested_y.unwrap_or_else(|| centered(bound.height, dimensions.height)),
    }
}

/// Centering offset along one axis. Floor division, so a region one pixel
/// smaller than the bound lands at offset 0, not 1.
fn centered(bound: u32, size: u32) -> i32 {
    (bound as i32 - size as i32).div_euclid(2)
}
