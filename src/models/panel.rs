use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A detected comic panel.
///
/// `id` is the creation sequence number and is not stable across merges:
/// when two panels merge, the survivor keeps its id and its rectangle grows
/// to the bounding union. `reading_order` stays 0 until the ordering stage
/// assigns the final 0..N-1 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Creation sequence number
    pub id: u32,
    /// Bounding rectangle in image pixel coordinates
    pub rect: Rect,
    /// Position in the reading sequence, assigned by the ordering stage
    pub reading_order: u32,
    /// Detection confidence in [0, 1]
    pub confidence: f32,
}

impl Panel {
    /// Create an unordered, unscored panel
    pub fn new(id: u32, rect: Rect) -> Self {
        Self {
            id,
            rect,
            reading_order: 0,
            confidence: 0.0,
        }
    }
}
