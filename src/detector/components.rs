//! Connected-component labeling for the region engine.

use std::collections::VecDeque;

use crate::models::{BitMatrix, Rect};

/// A maximal 4-connected set of foreground pixels
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// Bounding rectangle of the member pixels
    pub rect: Rect,
    /// Number of member pixels
    pub pixel_count: usize,
}

/// Label 4-connected foreground components via breadth-first flood fill.
///
/// The visited array is scratch space scoped to this call. Components come
/// out in scan order (top-to-bottom, left-to-right by first pixel).
pub fn label_components(map: &BitMatrix) -> Vec<Component> {
    let width = map.width();
    let height = map.height();
    let mut visited = vec![false; width * height];
    let mut components = Vec::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if visited[y * width + x] || !map.get(x, y) {
                continue;
            }

            visited[y * width + x] = true;
            queue.push_back((x, y));

            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
            let mut pixel_count = 0usize;

            while let Some((cx, cy)) = queue.pop_front() {
                pixel_count += 1;
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for (dx, dy) in [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
                    let nx = cx as i32 + dx;
                    let ny = cy as i32 + dy;
                    if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !visited[ny * width + nx] && map.get(nx, ny) {
                        visited[ny * width + nx] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }

            components.push(Component {
                rect: Rect::new(
                    min_x as i32,
                    min_y as i32,
                    max_x as i32 + 1,
                    max_y as i32 + 1,
                ),
                pixel_count,
            });
        }
    }

    components
}
