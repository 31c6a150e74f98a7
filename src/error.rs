use thiserror::Error;

/// Failures a detection call can report.
///
/// Every variant is recoverable: callers fall back to showing the source
/// page without panel navigation. Failures are local to one page and never
/// affect detection of any other page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    /// Image dimensions that cannot describe a raster page
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Claimed width in pixels
        width: usize,
        /// Claimed height in pixels
        height: usize,
    },

    /// A pixel buffer shorter than its claimed dimensions require
    #[error("pixel buffer too small: expected {expected} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes required by width x height x bytes-per-pixel
        expected: usize,
        /// Bytes actually provided
        actual: usize,
    },

    /// The caller cancelled the detection call between stages
    #[error("detection cancelled")]
    Cancelled,
}
