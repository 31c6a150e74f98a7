//! Integration tests for panel detection on synthetic pages.
//!
//! These cover the externally observable guarantees of both engines:
//! determinism, reading-order contiguity, bounds containment, direction
//! monotonicity, and the fallback policies for blank pages.

mod common;

use common::synthetic_page::{two_by_two_page, uniform_page};
use panel_scan::pixels::RgbBuffer;
use panel_scan::{
    DetectionConfig, DetectionResult, DetectorKind, Panel, ReadingDirection, Rect, detect_with,
};

fn detect_page(
    rgb: &[u8],
    width: usize,
    height: usize,
    kind: DetectorKind,
    direction: ReadingDirection,
) -> DetectionResult {
    let image = RgbBuffer::new(rgb, width, height).unwrap();
    detect_with(kind, &image, &DetectionConfig::default(), direction)
}

fn panel_rects(panels: &[Panel]) -> Vec<Rect> {
    panels.iter().map(|p| p.rect).collect()
}

#[test]
fn test_grid_two_by_two_left_to_right() {
    let (rgb, width, height) = two_by_two_page();
    let result = detect_page(&rgb, width, height, DetectorKind::Grid, ReadingDirection::LeftToRight);

    let panels = result.into_panels().expect("grid detection succeeds");
    assert_eq!(
        panel_rects(&panels),
        vec![
            Rect::new(5, 5, 386, 586),
            Rect::new(396, 5, 795, 586),
            Rect::new(5, 596, 386, 1195),
            Rect::new(396, 596, 795, 1195),
        ]
    );
    for (index, panel) in panels.iter().enumerate() {
        assert_eq!(panel.reading_order, index as u32);
        assert_eq!(panel.confidence, 0.9);
    }
}

#[test]
fn test_grid_two_by_two_right_to_left() {
    let (rgb, width, height) = two_by_two_page();
    let result = detect_page(&rgb, width, height, DetectorKind::Grid, ReadingDirection::RightToLeft);

    let panels = result.into_panels().expect("grid detection succeeds");
    // Same rows, each read right to left
    assert_eq!(
        panel_rects(&panels),
        vec![
            Rect::new(396, 5, 795, 586),
            Rect::new(5, 5, 386, 586),
            Rect::new(396, 596, 795, 1195),
            Rect::new(5, 596, 386, 1195),
        ]
    );
}

#[test]
fn test_region_two_by_two() {
    let (rgb, width, height) = two_by_two_page();
    let result = detect_page(&rgb, width, height, DetectorKind::Region, ReadingDirection::LeftToRight);

    let panels = result.into_panels().expect("region detection succeeds");
    // Component bounds grow by the 1px dilation radius
    assert_eq!(
        panel_rects(&panels),
        vec![
            Rect::new(9, 9, 391, 591),
            Rect::new(409, 9, 791, 591),
            Rect::new(9, 609, 391, 1191),
            Rect::new(409, 609, 791, 1191),
        ]
    );
    for panel in &panels {
        assert_eq!(panel.confidence, 1.0);
    }
}

#[test]
fn test_grid_blank_page_falls_back_to_full_page() {
    let rgb = uniform_page(800, 1200, 255);
    let result = detect_page(&rgb, 800, 1200, DetectorKind::Grid, ReadingDirection::LeftToRight);

    let panels = result.into_panels().expect("grid detection succeeds");
    assert_eq!(panels.len(), 1);
    assert_eq!(panels[0].rect, Rect::new(0, 0, 800, 1200));
    assert_eq!(panels[0].confidence, 0.5);
    assert_eq!(panels[0].reading_order, 0);
}

#[test]
fn test_region_uniform_page_reports_no_panels() {
    let rgb = uniform_page(500, 500, 240);
    let result = detect_page(&rgb, 500, 500, DetectorKind::Region, ReadingDirection::LeftToRight);
    assert_eq!(result, DetectionResult::NoPanelsFound);
}

#[test]
fn test_detection_is_deterministic() {
    let (rgb, width, height) = two_by_two_page();
    for kind in [DetectorKind::Grid, DetectorKind::Region] {
        let first = detect_page(&rgb, width, height, kind, ReadingDirection::RightToLeft);
        let second = detect_page(&rgb, width, height, kind, ReadingDirection::RightToLeft);
        assert_eq!(first, second);
    }
}

#[test]
fn test_reading_order_is_contiguous_and_bounds_hold() {
    let (rgb, width, height) = two_by_two_page();
    for kind in [DetectorKind::Grid, DetectorKind::Region] {
        let result = detect_page(&rgb, width, height, kind, ReadingDirection::LeftToRight);
        let panels = result.into_panels().expect("detection succeeds");

        let orders: Vec<u32> = panels.iter().map(|p| p.reading_order).collect();
        let expected: Vec<u32> = (0..panels.len() as u32).collect();
        assert_eq!(orders, expected);

        for panel in &panels {
            let rect = panel.rect;
            assert!(0 <= rect.left && rect.left < rect.right && rect.right <= width as i32);
            assert!(0 <= rect.top && rect.top < rect.bottom && rect.bottom <= height as i32);
            assert!((0.0..=1.0).contains(&panel.confidence));
        }
    }
}

#[test]
fn test_direction_monotonicity_within_rows() {
    let (rgb, width, height) = two_by_two_page();
    for kind in [DetectorKind::Grid, DetectorKind::Region] {
        let ltr = detect_page(&rgb, width, height, kind, ReadingDirection::LeftToRight)
            .into_panels()
            .unwrap();
        let rtl = detect_page(&rgb, width, height, kind, ReadingDirection::RightToLeft)
            .into_panels()
            .unwrap();

        // Panels 0,1 and 2,3 are the two rows of this layout
        for row in [[0, 1], [2, 3]] {
            assert!(ltr[row[0]].rect.left <= ltr[row[1]].rect.left);
            assert!(rtl[row[0]].rect.left >= rtl[row[1]].rect.left);
        }
    }
}

#[test]
fn test_rtl_is_ltr_with_rows_reversed() {
    let (rgb, width, height) = two_by_two_page();
    let ltr = detect_page(&rgb, width, height, DetectorKind::Grid, ReadingDirection::LeftToRight)
        .into_panels()
        .unwrap();
    let rtl = detect_page(&rgb, width, height, DetectorKind::Grid, ReadingDirection::RightToLeft)
        .into_panels()
        .unwrap();

    assert_eq!(rtl[0].rect, ltr[1].rect);
    assert_eq!(rtl[1].rect, ltr[0].rect);
    assert_eq!(rtl[2].rect, ltr[3].rect);
    assert_eq!(rtl[3].rect, ltr[2].rect);
}
