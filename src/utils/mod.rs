//! Pixel-level building blocks shared by the detection engines:
//! - Grayscale conversion (BT.601 luminance)
//! - Sobel edge detection (grid engine)
//! - Otsu binarization (region engine)
//! - Binary morphology (region engine)

pub mod binarization;
pub mod edges;
pub mod grayscale;
pub mod morphology;
