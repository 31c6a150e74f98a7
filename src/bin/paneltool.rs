//! Detect panels in an image file and print the result as JSON.
//!
//! Usage: paneltool <image> [--region] [--rtl]

use panel_scan::pixels::RgbBuffer;
use panel_scan::{DetectionConfig, DetectorKind, ReadingDirection, detect_with, tools};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: paneltool <image> [--region] [--rtl]");
        std::process::exit(2);
    }

    let path = &args[1];
    let kind = if args.iter().any(|a| a == "--region") {
        DetectorKind::Region
    } else {
        DetectorKind::Grid
    };
    let direction = if args.iter().any(|a| a == "--rtl") {
        ReadingDirection::RightToLeft
    } else {
        ReadingDirection::LeftToRight
    };

    let (rgb, width, height) = match tools::load_rgb(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Failed to load {path}: {err}");
            std::process::exit(1);
        }
    };
    let image = RgbBuffer::new(&rgb, width, height).expect("decoder produced a full buffer");

    let result = detect_with(kind, &image, &DetectionConfig::default(), direction);
    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("detection result serializes")
    );
}
