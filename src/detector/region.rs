//! Region detection engine.
//!
//! Assumes panel content forms connected foreground blobs: the page is
//! binarized with Otsu's threshold (dark ink = content), dilated to close
//! thin borders, and labeled into 4-connected components whose bounding
//! boxes become panel candidates. More tolerant of irregular grids than the
//! gutter engine, but touching panels fuse into one component. A page with
//! no surviving component reports [`DetectionResult::NoPanelsFound`].

use tracing::debug;

use crate::config::{DetectionConfig, ReadingDirection};
use crate::detector::components::label_components;
use crate::detector::merge::merge_overlapping;
use crate::detector::order::assign_reading_order;
use crate::detector::{CancelToken, PanelDetector, cancelled};
use crate::models::{DetectionResult, Panel, Rect};
use crate::pixels::PixelImage;
use crate::utils::binarization::otsu_binarize;
use crate::utils::grayscale::to_grayscale;
use crate::utils::morphology::dilate;

/// Row-cluster threshold factor: 0.3x the smallest panel height
const ROW_CLUSTER_FACTOR: f32 = 0.3;

/// Connected-component panel detector
#[derive(Debug, Clone, Default)]
pub struct RegionDetector {
    config: DetectionConfig,
}

impl RegionDetector {
    /// Create a region detector with the given thresholds
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// The thresholds this detector runs with
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}

impl PanelDetector for RegionDetector {
    fn detect_with_cancel(
        &self,
        image: &dyn PixelImage,
        direction: ReadingDirection,
        cancel: &CancelToken,
    ) -> DetectionResult {
        let config = &self.config;
        let width = image.width();
        let height = image.height();
        let image_area = (width * height) as i64;

        let gray = to_grayscale(image);
        if cancel.is_cancelled() {
            return cancelled();
        }

        let binary = otsu_binarize(&gray, width, height);
        if cancel.is_cancelled() {
            return cancelled();
        }

        let dilated = dilate(&binary, config.dilation_size);
        if cancel.is_cancelled() {
            return cancelled();
        }

        let components = label_components(&dilated);
        let min_area = config.min_panel_area_ratio as f64 * image_area as f64;
        let panels: Vec<Panel> = components
            .iter()
            .filter(|c| c.rect.area() as f64 >= min_area)
            .enumerate()
            .map(|(id, c)| Panel::new(id as u32, c.rect))
            .collect();
        debug!(
            components = components.len(),
            kept = panels.len(),
            "component labeling complete"
        );

        if panels.is_empty() {
            return DetectionResult::NoPanelsFound;
        }
        if cancel.is_cancelled() {
            return cancelled();
        }

        let mut panels = merge_overlapping(&panels, config.merge_overlap_threshold);
        for panel in &mut panels {
            panel.confidence = confidence_for_rect(&panel.rect, image_area);
        }

        let ordered = assign_reading_order(panels, direction, ROW_CLUSTER_FACTOR);
        debug!(panels = ordered.len(), "region detection complete");
        DetectionResult::Success(ordered)
    }
}

/// Confidence as the product of an aspect-ratio score and an area-ratio score
fn confidence_for_rect(rect: &Rect, image_area: i64) -> f32 {
    let aspect = rect.width() as f32 / rect.height() as f32;
    let aspect_score = if !(0.2..=5.0).contains(&aspect) {
        0.5
    } else if !(0.5..=2.0).contains(&aspect) {
        0.8
    } else {
        1.0
    };

    let area_ratio = rect.area() as f32 / image_area as f32;
    let area_score = if area_ratio < 0.05 {
        0.5
    } else if area_ratio < 0.1 {
        0.8
    } else if area_ratio > 0.8 {
        0.6
    } else {
        1.0
    };

    aspect_score * area_score
}
