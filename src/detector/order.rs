//! Reading-order assignment shared by both engines.

use crate::config::ReadingDirection;
use crate::models::Panel;

/// Panel height assumed when there are no panels to measure
const FALLBACK_PANEL_HEIGHT: i32 = 50;

/// Assign reading order to panels and return them in that order.
///
/// Panels are stably sorted by top edge, then greedily clustered into rows:
/// a panel joins the first existing row that has any member whose vertical
/// center lies within `cluster_factor * smallest panel height` of its own.
/// The clustering is incremental and order-sensitive; that asymmetry is
/// inherent to the heuristic and part of the observable behavior. Rows keep
/// their creation order (top to bottom), panels within a row sort by left
/// edge — ascending for left-to-right reading, descending for right-to-left —
/// and `reading_order` is assigned 0..N-1 across the concatenation.
pub fn assign_reading_order(
    mut panels: Vec<Panel>,
    direction: ReadingDirection,
    cluster_factor: f32,
) -> Vec<Panel> {
    let min_height = panels
        .iter()
        .map(|p| p.rect.height())
        .min()
        .unwrap_or(FALLBACK_PANEL_HEIGHT);
    let threshold = min_height as f32 * cluster_factor;

    panels.sort_by_key(|p| p.rect.top);

    let mut rows: Vec<Vec<Panel>> = Vec::new();
    for panel in panels {
        let center = panel.rect.center_y();
        let row = rows
            .iter_mut()
            .find(|row| row.iter().any(|p| (p.rect.center_y() - center).abs() <= threshold));
        match row {
            Some(row) => row.push(panel),
            None => rows.push(vec![panel]),
        }
    }

    let mut ordered = Vec::new();
    for mut row in rows {
        match direction {
            ReadingDirection::LeftToRight => row.sort_by_key(|p| p.rect.left),
            ReadingDirection::RightToLeft => row.sort_by_key(|p| std::cmp::Reverse(p.rect.left)),
        }
        ordered.extend(row);
    }

    for (index, panel) in ordered.iter_mut().enumerate() {
        panel.reading_order = index as u32;
    }
    ordered
}
