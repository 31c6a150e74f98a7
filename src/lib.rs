//! panel_scan - Comic page panel detection and reading order
//!
//! A pure Rust library that locates the rectangular panels of a comic page
//! raster image and orders them for one-panel-at-a-time reading. Two
//! deterministic engines share one contract: a gutter-grid detector and a
//! connected-component region detector. No ML, no I/O — the caller decodes
//! pages and hands over pixels.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Detection thresholds and reading direction
pub mod config;
/// The grid and region detection engines
pub mod detector;
/// Error taxonomy for detection calls
pub mod error;
/// Core data structures (Panel, Rect, BitMatrix, DetectionResult)
pub mod models;
/// Borrowed pixel views over decoded images
pub mod pixels;
/// Helpers for the CLI tools, tests, and benches
pub mod tools;
/// Pixel-level building blocks (grayscale, Sobel, Otsu, morphology)
pub mod utils;

pub use config::{DetectionConfig, ReadingDirection};
pub use detector::{CancelToken, DetectorKind, GridDetector, PanelDetector, RegionDetector};
pub use error::DetectionError;
pub use models::{BitMatrix, DetectionResult, Panel, Rect};

use crate::pixels::PixelImage;
use rayon::prelude::*;

/// Detect panels with the grid engine.
///
/// The grid engine is the primary choice: it handles regular layouts well
/// and always yields at least one panel (full-page fallback).
pub fn detect(
    image: &dyn PixelImage,
    config: &DetectionConfig,
    direction: ReadingDirection,
) -> DetectionResult {
    GridDetector::new(*config).detect(image, direction)
}

/// Detect panels with the engine selected by `kind`
pub fn detect_with(
    kind: DetectorKind,
    image: &dyn PixelImage,
    config: &DetectionConfig,
    direction: ReadingDirection,
) -> DetectionResult {
    match kind {
        DetectorKind::Grid => GridDetector::new(*config).detect(image, direction),
        DetectorKind::Region => RegionDetector::new(*config).detect(image, direction),
    }
}

/// Detect panels for a batch of pages in parallel.
///
/// Each page runs as an independent detection call on the rayon pool;
/// results come back in page order. Failure on one page never affects the
/// others.
pub fn detect_pages<I>(
    pages: &[I],
    kind: DetectorKind,
    config: &DetectionConfig,
    direction: ReadingDirection,
) -> Vec<DetectionResult>
where
    I: PixelImage + Sync,
{
    pages
        .par_iter()
        .map(|page| detect_with(kind, page, config, direction))
        .collect()
}
