//! Otsu binarization for the region engine.
//!
//! Dark ink is treated as content: a pixel is foreground iff its luminance is
//! strictly below the selected threshold.

use crate::models::BitMatrix;

/// Calculate Otsu's optimal threshold from a grayscale buffer.
///
/// At each candidate threshold t the background class holds intensities
/// strictly below t; candidates with an empty class are skipped. The
/// between-class variance wB*wF*(mB-mF)^2 is maximized with a strict `>`
/// comparison, so ties keep the lowest t. Returns 0 when no threshold splits
/// the histogram into two non-empty classes (uniform image), which leaves
/// every pixel background.
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u32; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total = gray.len() as f64;
    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(intensity, &count)| intensity as f64 * count as f64)
        .sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut max_variance = 0.0f64;
    let mut optimal = 0u8;

    for threshold in 0..=255usize {
        // Classes for this candidate: background < threshold <= foreground
        if weight_bg > 0.0 {
            let weight_fg = total - weight_bg;
            if weight_fg <= 0.0 {
                break;
            }
            let mean_bg = sum_bg / weight_bg;
            let mean_fg = (sum_total - sum_bg) / weight_fg;
            let diff = mean_bg - mean_fg;
            let variance = weight_bg * weight_fg * diff * diff;
            if variance > max_variance {
                max_variance = variance;
                optimal = threshold as u8;
            }
        }

        let count = histogram[threshold] as f64;
        weight_bg += count;
        sum_bg += threshold as f64 * count;
    }

    optimal
}

/// Binarize a grayscale image with Otsu's threshold.
/// Returns a BitMatrix where true = foreground (content), false = background.
pub fn otsu_binarize(gray: &[u8], width: usize, height: usize) -> BitMatrix {
    let threshold = otsu_threshold(gray);
    let mut binary = BitMatrix::new(width, height);

    for y in 0..height {
        for x in 0..width {
            if gray[y * width + x] < threshold {
                binary.set(x, y, true);
            }
        }
    }

    binary
}
