//! Shared synthetic pages for the benchmarks.

/// 800x1200 white page with four solid black panels in a 2x2 grid
pub fn two_by_two_page() -> (Vec<u8>, usize, usize) {
    let (width, height) = (800, 1200);
    let mut rgb = vec![255u8; width * height * 3];
    for &(left, top, right, bottom) in &[
        (10usize, 10usize, 390usize, 590usize),
        (410, 10, 790, 590),
        (10, 610, 390, 1190),
        (410, 610, 790, 1190),
    ] {
        for y in top..bottom {
            for x in left..right {
                let idx = (y * width + x) * 3;
                rgb[idx] = 0;
                rgb[idx + 1] = 0;
                rgb[idx + 2] = 0;
            }
        }
    }
    (rgb, width, height)
}
