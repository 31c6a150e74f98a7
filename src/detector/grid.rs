//! Grid detection engine.
//!
//! Assumes panels sit in a roughly rectangular grid separated by blank
//! gutters. Gutter rows/columns are found as long runs of non-edge pixels in
//! a Sobel edge map; the cells of the resulting grid become panel candidates.
//! This engine never reports an empty page: when nothing survives filtering
//! it falls back to a single full-page panel.

use tracing::debug;

use crate::config::{DetectionConfig, ReadingDirection};
use crate::detector::gutters::{find_gutter_cols, find_gutter_rows};
use crate::detector::merge::merge_overlapping;
use crate::detector::order::assign_reading_order;
use crate::detector::{CancelToken, PanelDetector, cancelled};
use crate::models::{DetectionResult, Panel, Rect};
use crate::pixels::PixelImage;
use crate::utils::edges::sobel_edges;
use crate::utils::grayscale::to_grayscale;

/// Row-cluster threshold factor: half of the smallest panel height
const ROW_CLUSTER_FACTOR: f32 = 0.5;

/// Gutter-grid panel detector
#[derive(Debug, Clone, Default)]
pub struct GridDetector {
    config: DetectionConfig,
}

impl GridDetector {
    /// Create a grid detector with the given thresholds
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// The thresholds this detector runs with
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}

impl PanelDetector for GridDetector {
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

        let edges = sobel_edges(&gray, width, height, config.edge_threshold);
        if cancel.is_cancelled() {
            return cancelled();
        }

        let gutter_rows = find_gutter_rows(&edges, config);
        let gutter_cols = find_gutter_cols(&edges, config);
        debug!(
            rows = gutter_rows.len(),
            cols = gutter_cols.len(),
            "gutter discovery complete"
        );

        let cells = build_cells(&gutter_rows, &gutter_cols, config.gutter_padding as i32);
        let filtered = filter_cells(&cells, config, image_area);
        if cancel.is_cancelled() {
            return cancelled();
        }

        let mut panels = merge_overlapping(&filtered, config.merge_overlap_threshold);
        if panels.is_empty() {
            // The grid engine never reports an empty page
            debug!("no grid cells survived; falling back to full-page panel");
            panels.push(Panel::new(0, Rect::new(0, 0, width as i32, height as i32)));
        }

        for panel in &mut panels {
            let area_ratio = if image_area > 0 {
                panel.rect.area() as f64 / image_area as f64
            } else {
                1.0
            };
            panel.confidence = confidence_for_area_ratio(area_ratio);
        }
        if cancel.is_cancelled() {
            return cancelled();
        }

        let ordered = assign_reading_order(panels, direction, ROW_CLUSTER_FACTOR);
        debug!(panels = ordered.len(), "grid detection complete");
        DetectionResult::Success(ordered)
    }
}

/// Cut the gutter grid into cells, shaving `padding` pixels off each cell
/// side so gutter pixels stay outside the panel. Degenerate cells are
/// dropped.
fn build_cells(gutter_rows: &[u32], gutter_cols: &[u32], padding: i32) -> Vec<Rect> {
    let mut cells = Vec::new();
    for rows in gutter_rows.windows(2) {
        for cols in gutter_cols.windows(2) {
            let cell = Rect::new(
                cols[0] as i32,
                rows[0] as i32,
                cols[1] as i32,
                rows[1] as i32,
            )
            .shrink(padding);
            if cell.area() > 0 {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Keep cells whose area ratio lies within the configured band and whose
/// sides both exceed the minimum panel size
fn filter_cells(cells: &[Rect], config: &DetectionConfig, image_area: i64) -> Vec<Panel> {
    let mut panels = Vec::new();
    for &rect in cells {
        let area_ratio = rect.area() as f64 / image_area as f64;
        if area_ratio < config.min_panel_area_ratio as f64
            || area_ratio > config.max_panel_area_ratio as f64
        {
            continue;
        }
        if rect.width() <= config.min_panel_size as i32
            || rect.height() <= config.min_panel_size as i32
        {
            continue;
        }
        panels.push(Panel::new(panels.len() as u32, rect));
    }
    panels
}

/// Stepped confidence on panel-to-image area ratio
fn confidence_for_area_ratio(area_ratio: f64) -> f32 {
    if area_ratio < 0.02 {
        0.3
    } else if area_ratio < 0.05 {
        0.6
    } else if area_ratio < 0.5 {
        0.9
    } else if area_ratio < 0.8 {
        0.7
    } else {
        0.5
    }
}
