//! Gutter-line discovery for the grid engine.
//!
//! A gutter is a blank strip between panels, located by the absence of edge
//! pixels across a sufficient span of a row or column.

use crate::config::DetectionConfig;
use crate::models::BitMatrix;

/// Find horizontal gutter lines (row indices) in an edge map.
///
/// A row qualifies when its longest contiguous run of non-edge pixels exceeds
/// `width * min_gutter_ratio`. Candidates inside the `margin_pixels` border
/// are not considered. Accepted gutters suppress further candidates within
/// `min_panel_size` pixels (greedy, top to bottom). The image borders 0 and
/// `height` are always included; the result is deduplicated and ascending.
pub fn find_gutter_rows(edges: &BitMatrix, config: &DetectionConfig) -> Vec<u32> {
    let width = edges.width();
    let height = edges.height();
    let margin = config.margin_pixels as usize;
    let min_span = width as f32 * config.min_gutter_ratio;
    let min_spacing = config.min_panel_size as usize;

    let mut lines: Vec<u32> = Vec::new();
    let mut last_accepted: Option<usize> = None;

    for y in margin..height.saturating_sub(margin) {
        let mut longest = 0usize;
        let mut run = 0usize;
        for x in 0..width {
            if edges.get(x, y) {
                run = 0;
            } else {
                run += 1;
                longest = longest.max(run);
            }
        }

        if longest as f32 > min_span && last_accepted.is_none_or(|prev| y - prev > min_spacing) {
            lines.push(y as u32);
            last_accepted = Some(y);
        }
    }

    lines.push(0);
    lines.push(height as u32);
    lines.sort_unstable();
    lines.dedup();
    lines
}

/// Find vertical gutter lines (column indices); symmetric to
/// [`find_gutter_rows`].
pub fn find_gutter_cols(edges: &BitMatrix, config: &DetectionConfig) -> Vec<u32> {
    let width = edges.width();
    let height = edges.height();
    let margin = config.margin_pixels as usize;
    let min_span = height as f32 * config.min_gutter_ratio;
    let min_spacing = config.min_panel_size as usize;

    let mut lines: Vec<u32> = Vec::new();
    let mut last_accepted: Option<usize> = None;

    for x in margin..width.saturating_sub(margin) {
        let mut longest = 0usize;
        let mut run = 0usize;
        for y in 0..height {
            if edges.get(x, y) {
                run = 0;
            } else {
                run += 1;
                longest = longest.max(run);
            }
        }

        if longest as f32 > min_span && last_accepted.is_none_or(|prev| x - prev > min_spacing) {
            lines.push(x as u32);
            last_accepted = Some(x);
        }
    }

    lines.push(0);
    lines.push(width as u32);
    lines.sort_unstable();
    lines.dedup();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> DetectionConfig {
        DetectionConfig {
            margin_pixels: 2,
            min_panel_size: 5,
            ..DetectionConfig::default()
        }
    }

    /// Edge map that is solid edges except for the listed clear rows/columns
    fn edge_map_with_clear_lines(
        width: usize,
        height: usize,
        clear_rows: &[usize],
        clear_cols: &[usize],
    ) -> BitMatrix {
        let mut edges = BitMatrix::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let clear = clear_rows.contains(&y) || clear_cols.contains(&x);
                edges.set(x, y, !clear);
            }
        }
        edges
    }

    #[test]
    fn test_finds_clear_row_and_adds_borders() {
        let edges = edge_map_with_clear_lines(20, 20, &[10], &[]);
        let rows = find_gutter_rows(&edges, &small_config());
        assert_eq!(rows, vec![0, 10, 20]);
    }

    #[test]
    fn test_finds_clear_col() {
        let edges = edge_map_with_clear_lines(20, 20, &[], &[7]);
        let cols = find_gutter_cols(&edges, &small_config());
        assert_eq!(cols, vec![0, 7, 20]);
    }

    #[test]
    fn test_greedy_suppression_of_close_gutters() {
        // Rows 5 and 8 are both clear, but 8 is within min_panel_size of 5;
        // row 14 is far enough to be accepted again
        let edges = edge_map_with_clear_lines(20, 20, &[5, 8, 14], &[]);
        let rows = find_gutter_rows(&edges, &small_config());
        assert_eq!(rows, vec![0, 5, 14, 20]);
    }

    #[test]
    fn test_margin_excludes_outer_rows() {
        let edges = edge_map_with_clear_lines(20, 20, &[1, 19], &[]);
        let rows = find_gutter_rows(&edges, &small_config());
        assert_eq!(rows, vec![0, 20]);
    }

    #[test]
    fn test_short_runs_are_not_gutters() {
        // A clear row broken by edge pixels every few columns never reaches
        // the required span
        let mut edges = BitMatrix::new(20, 20);
        for y in 0..20 {
            for x in 0..20 {
                edges.set(x, y, true);
            }
        }
        for x in 0..20 {
            edges.set(x, 10, x % 4 == 0);
        }
        let rows = find_gutter_rows(&edges, &small_config());
        assert_eq!(rows, vec![0, 20]);
    }

    #[test]
    fn test_blank_map_accepts_spaced_rows() {
        // No edges at all: every interior row qualifies, thinned by spacing
        let edges = BitMatrix::new(20, 20);
        let rows = find_gutter_rows(&edges, &small_config());
        assert_eq!(rows, vec![0, 2, 8, 14, 20]);
    }
}
