use serde::{Deserialize, Serialize};

/// Reading direction of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingDirection {
    /// Western order: left to right, top to bottom
    LeftToRight,
    /// Manga order: right to left, top to bottom
    RightToLeft,
}

/// Tunable thresholds for both detection engines.
///
/// Immutable during detection; a single value can be shared across
/// concurrent calls. All fields are plain knobs with the defaults below —
/// there is no runtime validation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Sobel gradient magnitude above which a pixel counts as an edge.
    /// Default: 50.0.
    pub edge_threshold: f32,
    /// Fraction of the image span a non-edge run must exceed for a row or
    /// column to qualify as a gutter. Default: 0.6.
    pub min_gutter_ratio: f32,
    /// Border (in pixels) excluded from gutter scanning. Default: 10.
    pub margin_pixels: u32,
    /// Minimum panel edge length in pixels; also the minimum spacing between
    /// accepted gutter lines. Default: 100.
    pub min_panel_size: u32,
    /// Smallest accepted panel area as a fraction of image area. Default: 0.02.
    pub min_panel_area_ratio: f32,
    /// Largest accepted panel area as a fraction of image area. Default: 0.95.
    pub max_panel_area_ratio: f32,
    /// Pixels shaved off each side of a grid cell so gutters stay outside the
    /// panel content. Default: 5.
    pub gutter_padding: u32,
    /// Overlap ratio (intersection over smaller area) above which two panels
    /// merge. Default: 0.3.
    pub merge_overlap_threshold: f32,
    /// Square structuring element size for the region engine's dilation.
    /// Default: 3.
    pub dilation_size: u32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            edge_threshold: 50.0,
            min_gutter_ratio: 0.6,
            margin_pixels: 10,
            min_panel_size: 100,
            min_panel_area_ratio: 0.02,
            max_panel_area_ratio: 0.95,
            gutter_padding: 5,
            merge_overlap_threshold: 0.3,
            dilation_size: 3,
        }
    }
}
