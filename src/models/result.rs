use serde::{Deserialize, Serialize};

use super::panel::Panel;

/// Outcome of one panel detection call.
///
/// `Success` carries panels sorted by `reading_order` with values exactly
/// 0..N-1. `NoPanelsFound` is produced only by the region engine; the grid
/// engine falls back to a synthetic full-page panel instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetectionResult {
    /// Panels in reading order
    Success(Vec<Panel>),
    /// Detection failed; the message is safe to show to the user
    Error(String),
    /// The page had no detectable panel content (region engine only)
    NoPanelsFound,
}

impl DetectionResult {
    /// The ordered panels, if detection succeeded
    pub fn panels(&self) -> Option<&[Panel]> {
        match self {
            DetectionResult::Success(panels) => Some(panels),
            _ => None,
        }
    }

    /// Consume the result and return the ordered panels, if any
    pub fn into_panels(self) -> Option<Vec<Panel>> {
        match self {
            DetectionResult::Success(panels) => Some(panels),
            _ => None,
        }
    }

    /// Whether detection produced a panel list
    pub fn is_success(&self) -> bool {
        matches!(self, DetectionResult::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    #[test]
    fn test_accessors() {
        let ok = DetectionResult::Success(vec![Panel::new(0, Rect::new(0, 0, 10, 10))]);
        assert!(ok.is_success());
        assert_eq!(ok.panels().unwrap().len(), 1);

        let err = DetectionResult::Error("bad page".into());
        assert!(!err.is_success());
        assert!(err.panels().is_none());
        assert!(DetectionResult::NoPanelsFound.into_panels().is_none());
    }
}
