//! Binary morphology for the region engine.

use crate::models::BitMatrix;

/// Dilate a binary map with a square structuring element of the given size.
///
/// A pixel is foreground in the output iff any input pixel within
/// `size / 2` Chebyshev distance (clipped to the image bounds) is foreground.
/// Implemented as two separable passes, which is exactly equivalent for a
/// square element. Sizes below 2 return the input unchanged.
pub fn dilate(map: &BitMatrix, size: u32) -> BitMatrix {
    let radius = (size / 2) as usize;
    if radius == 0 {
        return map.clone();
    }

    let width = map.width();
    let height = map.height();

    // Horizontal pass
    let mut horizontal = BitMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(width.saturating_sub(1));
            for nx in x0..=x1 {
                if map.get(nx, y) {
                    horizontal.set(x, y, true);
                    break;
                }
            }
        }
    }

    // Vertical pass over the horizontal result
    let mut dilated = BitMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let y0 = y.saturating_sub(radius);
            let y1 = (y + radius).min(height.saturating_sub(1));
            for ny in y0..=y1 {
                if horizontal.get(x, ny) {
                    dilated.set(x, y, true);
                    break;
                }
            }
        }
    }

    dilated
}
