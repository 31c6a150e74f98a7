//! Helpers for the CLI tools, integration tests, and benchmarks.
//!
//! These wrap the `image` crate for file loading; the detection core itself
//! never touches the filesystem.

use image::GenericImageView;
use std::env;
use std::path::Path;

/// Optional downscale cap, from the `PANEL_MAX_DIM` environment variable.
/// `0` or unset disables downscaling.
fn max_dim_from_env() -> Option<u32> {
    match env::var("PANEL_MAX_DIM") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
        Err(_) => None,
    }
}

/// Load an image file as flat RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(path)?;
    let rgb = if let Some(max_dim) = max_dim_from_env() {
        let (orig_w, orig_h) = img.dimensions();
        if orig_w.max(orig_h) > max_dim {
            img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
                .to_rgb8()
        } else {
            img.to_rgb8()
        }
    } else {
        img.to_rgb8()
    };
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Summary statistics for grayscale data
#[derive(Debug, Clone, Copy)]
pub struct GrayStats {
    /// Minimum grayscale value
    pub min: u8,
    /// Maximum grayscale value
    pub max: u8,
    /// Mean grayscale value
    pub mean: f64,
}

/// Compute min/max/mean of a grayscale buffer
pub fn gray_stats(gray: &[u8]) -> GrayStats {
    if gray.is_empty() {
        return GrayStats {
            min: 0,
            max: 0,
            mean: 0.0,
        };
    }
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;
    for &value in gray {
        min = min.min(value);
        max = max.max(value);
        sum += value as u64;
    }
    GrayStats {
        min,
        max,
        mean: sum as f64 / gray.len() as f64,
    }
}
