pub mod matrix;
pub mod panel;
pub mod rect;
pub mod result;

pub use matrix::BitMatrix;
pub use panel::Panel;
pub use rect::Rect;
pub use result::DetectionResult;
