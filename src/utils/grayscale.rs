//! Grayscale conversion.
//!
//! Y = round(0.299*R + 0.587*G + 0.114*B), the BT.601 luma weights. The
//! rounding is part of the observable behavior downstream (Otsu histogram
//! bins, Sobel magnitudes), so the conversion sticks to f64 + `round()`
//! rather than a shifted integer approximation.

use rayon::prelude::*;

use crate::pixels::PixelImage;

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Luminance of a single RGB pixel
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64).round() as u8
}

/// Convert an image to a row-major grayscale buffer.
///
/// A 0x0 image yields an empty buffer; callers treat that as "no panels".
pub fn to_grayscale<I: PixelImage + ?Sized>(img: &I) -> Vec<u8> {
    let (width, height) = (img.width(), img.height());
    let mut gray = vec![0u8; width * height];
    for y in 0..height {
        let row = &mut gray[y * width..(y + 1) * width];
        for (x, out) in row.iter_mut().enumerate() {
            let (r, g, b) = img.rgb_at(x, y);
            *out = luminance(r, g, b);
        }
    }
    gray
}

/// Convert to grayscale using parallel row processing.
///
/// Output is identical to [`to_grayscale`]; use this for large pages when a
/// rayon pool is already paying for itself.
pub fn to_grayscale_parallel<I: PixelImage + Sync + ?Sized>(img: &I) -> Vec<u8> {
    let (width, height) = (img.width(), img.height());
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, out) in row.iter_mut().enumerate() {
            let (r, g, b) = img.rgb_at(x, y);
            *out = luminance(r, g, b);
        }
    });

    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::RgbBuffer;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_luminance_rounding() {
        // 0.299*100 = 29.9 rounds up
        assert_eq!(luminance(100, 0, 0), 30);
        // 0.114*100 = 11.4 rounds down
        assert_eq!(luminance(0, 0, 100), 11);
        // full weights: 29.9 + 58.7 + 11.4 = 100.0 exactly
        assert_eq!(luminance(100, 100, 100), 100);
    }

    #[test]
    fn test_to_grayscale() {
        let rgb = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let img = RgbBuffer::new(&rgb, 2, 2).unwrap();
        let gray = to_grayscale(&img);
        assert_eq!(gray, vec![76, 150, 29, 255]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let rgb: Vec<u8> = (0..32 * 16 * 3).map(|i| (i * 37 % 256) as u8).collect();
        let img = RgbBuffer::new(&rgb, 32, 16).unwrap();
        assert_eq!(to_grayscale(&img), to_grayscale_parallel(&img));
    }

    #[test]
    fn test_empty_image() {
        let img = RgbBuffer::new(&[], 0, 0).unwrap();
        assert!(to_grayscale(&img).is_empty());
    }
}
