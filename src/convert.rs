//! The conversion pipeline.
//!
//! Stages run in a fixed order: decode → sizing decision → resample (if the
//! decision calls for one) → placement → channel split → code emission →
//! tree writing. The order is load-bearing: the channel split must see the
//! resampled buffer, or the emitted arrays disagree with the emitted
//! `width`/`height` literals and the plugin draws garbage without any error.
//! The code below enforces that structurally — extraction reads the buffer
//! the resample returned, never the file.
//!
//! The source file is read exactly once and never written. All sizing
//! happens on the in-memory buffer.

use crate::imaging::{BackendError, ImageBackend, split_channels};
use crate::report::Reporter;
use crate::sizing;
use crate::types::{Dimensions, Position, ScreenTarget};
use crate::{emit, scaffold};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no such file: {0}")]
    SourceNotFound(PathBuf),
    #[error(transparent)]
    Imaging(#[from] BackendError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// One conversion, as requested on the command line.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Draw position; `None` centers on the target screen.
    pub x: Option<i32>,
    pub y: Option<i32>,
    /// Working size; `None` keeps the source size (subject to the screen bound).
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub target: ScreenTarget,
}

impl ConvertRequest {
    /// A request with defaults for everything but the paths.
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            x: None,
            y: None,
            width: None,
            height: None,
            target: ScreenTarget::Top,
        }
    }
}

/// What a conversion did, for the final report.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub source: Dimensions,
    pub dimensions: Dimensions,
    pub resampled: bool,
    pub position: Position,
    pub target: ScreenTarget,
    pub files: Vec<PathBuf>,
}

/// Run the full pipeline for one image.
///
/// Fails fast: any error aborts the conversion with nothing written. There
/// is no partial artifact — the output directory is only touched once the
/// source text is fully rendered.
pub fn convert(
    backend: &impl ImageBackend,
    request: &ConvertRequest,
    reporter: &Reporter,
) -> Result<ConvertSummary, ConvertError> {
    if !request.source.exists() {
        return Err(ConvertError::SourceNotFound(request.source.clone()));
    }

    reporter.info(format!("Reading {}", request.source.display()));
    let decoded = backend.decode(&request.source)?;
    let source_dims = decoded.dimensions();

    let decision = sizing::decide_dimensions(
        source_dims,
        request.width,
        request.height,
        request.target,
    );
    let pixels = if decision.resample {
        reporter.info(format!(
            "Resampling {} \u{2192} {}",
            source_dims, decision.dimensions
        ));
        backend.resample(&decoded, decision.dimensions)?
    } else {
        decoded
    };

    let position = sizing::place(decision.dimensions, request.target, request.x, request.y);
    reporter.info(format!(
        "Drawing at ({}, {}) on the {} screen",
        position.x,
        position.y,
        request.target.name()
    ));

    let channels = split_channels(&pixels);
    let source_code = emit::draw_source(request.target, position, decision.dimensions, &channels);

    reporter.info(format!("Writing {}", request.output_dir.display()));
    let files = scaffold::write_plugin_tree(&request.output_dir, &source_code)?;

    Ok(ConvertSummary {
        source: source_dims,
        dimensions: decision.dimensions,
        resampled: decision.resample,
        position,
        target: request.target,
        files,
    })
}
