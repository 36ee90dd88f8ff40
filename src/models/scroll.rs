use serde::{Deserialize, Serialize};

/// Scroll offsets, in px, past which the chrome changes state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollThresholds {
    pub nav: f64,
    pub sticky_cta: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            nav: 50.0,
            sticky_cta: 600.0,
        }
    }
}

/// Chrome state derived from the scroll position. There is no hysteresis:
/// every crossing of a threshold flips the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollFlags {
    pub nav_scrolled: bool,
    pub cta_visible: bool,
}

impl ScrollFlags {
    pub fn from_scroll_y(scroll_y: f64, thresholds: &ScrollThresholds) -> Self {
        Self {
            nav_scrolled: scroll_y > thresholds.nav,
            cta_visible: scroll_y > thresholds.sticky_cta,
        }
    }
}
