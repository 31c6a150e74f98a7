//! Panel detection engines
//!
//! Two engines share one contract (image + config + reading direction →
//! ordered panel list):
//! - Grid: gutter discovery over a Sobel edge map, cells become panels
//! - Region: Otsu binarization + dilation + connected components
//!
//! Both run the shared filter/merge and reading-order stages and check for
//! cooperative cancellation between stages.

/// Connected-component labeling (region engine)
pub mod components;
/// Gutter-grid engine
pub mod grid;
/// Gutter-line discovery over edge maps (grid engine)
pub mod gutters;
/// Overlap merging shared by both engines
pub mod merge;
/// Reading-order assignment shared by both engines
pub mod order;
/// Connected-component engine
pub mod region;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use grid::GridDetector;
pub use region::RegionDetector;

use crate::config::ReadingDirection;
use crate::error::DetectionError;
use crate::models::DetectionResult;
use crate::pixels::PixelImage;

/// Engine selector for callers that pick a detector by policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    /// Gutter-grid engine; falls back to a full-page panel
    Grid,
    /// Connected-component engine; may report `NoPanelsFound`
    Region,
}

/// Cooperative cancellation flag shared between a detection call and its
/// caller. Cancellation is observed between pipeline stages; the cancelled
/// call reports `Error("detection cancelled")`.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the detection call holding this token
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The result a detector returns when its token is cancelled
pub(crate) fn cancelled() -> DetectionResult {
    DetectionResult::Error(DetectionError::Cancelled.to_string())
}

/// Common contract of the detection engines.
///
/// Detection is pure and synchronous: the image and configuration are
/// immutable inputs, every intermediate buffer lives inside the call, and no
/// state persists between calls, so one detector can serve concurrent calls
/// for different pages.
pub trait PanelDetector {
    /// Detect panels and order them for the given reading direction
    fn detect(&self, image: &dyn PixelImage, direction: ReadingDirection) -> DetectionResult {
        self.detect_with_cancel(image, direction, &CancelToken::new())
    }

    /// Like [`PanelDetector::detect`], checking `cancel` between stages
    fn detect_with_cancel(
        &self,
        image: &dyn PixelImage,
        direction: ReadingDirection,
        cancel: &CancelToken,
    ) -> DetectionResult;
}
