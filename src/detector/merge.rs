//! Overlap merging shared by both engines.

use crate::models::{Panel, Rect};

/// Overlap ratio of two rectangles: intersection area divided by the area of
/// the smaller rectangle. Zero when they do not intersect.
pub fn overlap_ratio(a: &Rect, b: &Rect) -> f32 {
    let Some(intersection) = a.intersection(b) else {
        return 0.0;
    };
    let smaller = a.area().min(b.area());
    if smaller == 0 {
        return 0.0;
    }
    intersection.area() as f32 / smaller as f32
}

/// Merge overlapping panels in a single greedy left-to-right pass.
///
/// Panels are visited in their original order; each one absorbs every later,
/// not-yet-consumed panel whose overlap ratio with the running bounding union
/// exceeds `threshold`. A consumed panel is never revisited, and the pass is
/// not restarted after a union grows, so merging is deliberately not
/// transitive. The survivor keeps its id; its rectangle becomes the union.
pub fn merge_overlapping(panels: &[Panel], threshold: f32) -> Vec<Panel> {
    let mut consumed = vec![false; panels.len()];
    let mut merged = Vec::with_capacity(panels.len());

    for i in 0..panels.len() {
        if consumed[i] {
            continue;
        }
        let mut survivor = panels[i];
        for j in (i + 1)..panels.len() {
            if consumed[j] {
                continue;
            }
            if overlap_ratio(&survivor.rect, &panels[j].rect) > threshold {
                survivor.rect = survivor.rect.union(&panels[j].rect);
                consumed[j] = true;
            }
        }
        merged.push(survivor);
    }

    merged
}
