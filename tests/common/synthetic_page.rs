//! Synthetic comic pages for integration tests and benchmarks.

/// Flat RGB page filled with a single gray level
pub fn uniform_page(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height * 3]
}

/// Fill a half-open rectangle of an RGB buffer with a solid gray level
pub fn fill_rect(
    rgb: &mut [u8],
    width: usize,
    (left, top, right, bottom): (usize, usize, usize, usize),
    value: u8,
) {
    for y in top..bottom {
        for x in left..right {
            let idx = (y * width + x) * 3;
            rgb[idx] = value;
            rgb[idx + 1] = value;
            rgb[idx + 2] = value;
        }
    }
}

/// 800x1200 white page with four solid black panels in a 2x2 grid,
/// separated by 20px gutters and a 10px outer margin
pub fn two_by_two_page() -> (Vec<u8>, usize, usize) {
    let (width, height) = (800, 1200);
    let mut rgb = uniform_page(width, height, 255);
    fill_rect(&mut rgb, width, (10, 10, 390, 590), 0);
    fill_rect(&mut rgb, width, (410, 10, 790, 590), 0);
    fill_rect(&mut rgb, width, (10, 610, 390, 1190), 0);
    fill_rect(&mut rgb, width, (410, 610, 790, 1190), 0);
    (rgb, width, height)
}
