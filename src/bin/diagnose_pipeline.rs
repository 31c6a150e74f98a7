//! Print stage-by-stage diagnostics for both detection engines.
//!
//! Usage: diagnose_pipeline <image>

use panel_scan::detector::components::label_components;
use panel_scan::detector::gutters::{find_gutter_cols, find_gutter_rows};
use panel_scan::pixels::RgbBuffer;
use panel_scan::utils::binarization::{otsu_binarize, otsu_threshold};
use panel_scan::utils::edges::sobel_edges;
use panel_scan::utils::grayscale::to_grayscale;
use panel_scan::utils::morphology::dilate;
use panel_scan::{
    DetectionConfig, DetectionResult, DetectorKind, ReadingDirection, detect_with, tools,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: diagnose_pipeline <image>");
        std::process::exit(2);
    }

    let path = &args[1];
    let (rgb, width, height) = match tools::load_rgb(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Failed to load {path}: {err}");
            std::process::exit(1);
        }
    };
    let image = RgbBuffer::new(&rgb, width, height).expect("decoder produced a full buffer");
    let config = DetectionConfig::default();

    println!("Image: {width}x{height}");

    let gray = to_grayscale(&image);
    let stats = tools::gray_stats(&gray);
    println!(
        "Grayscale: min={} max={} mean={:.1}",
        stats.min, stats.max, stats.mean
    );

    // Grid engine stages
    let edges = sobel_edges(&gray, width, height, config.edge_threshold);
    println!(
        "Edges: {} pixels above threshold {}",
        edges.count_ones(),
        config.edge_threshold
    );
    let gutter_rows = find_gutter_rows(&edges, &config);
    let gutter_cols = find_gutter_cols(&edges, &config);
    println!("Gutter rows: {gutter_rows:?}");
    println!("Gutter cols: {gutter_cols:?}");

    // Region engine stages
    let threshold = otsu_threshold(&gray);
    println!("Otsu threshold: {threshold}");
    let binary = otsu_binarize(&gray, width, height);
    println!("Foreground pixels: {}", binary.count_ones());
    let dilated = dilate(&binary, config.dilation_size);
    let components = label_components(&dilated);
    println!("Components after dilation: {}", components.len());

    for kind in [DetectorKind::Grid, DetectorKind::Region] {
        let result = detect_with(kind, &image, &config, ReadingDirection::LeftToRight);
        match result {
            DetectionResult::Success(panels) => {
                println!("{kind:?}: {} panels", panels.len());
                for panel in panels {
                    println!(
                        "  #{} rect=({}, {})-({}, {}) confidence={:.2}",
                        panel.reading_order,
                        panel.rect.left,
                        panel.rect.top,
                        panel.rect.right,
                        panel.rect.bottom,
                        panel.confidence
                    );
                }
            }
            DetectionResult::NoPanelsFound => println!("{kind:?}: no panels found"),
            DetectionResult::Error(message) => println!("{kind:?}: error: {message}"),
        }
    }
}
