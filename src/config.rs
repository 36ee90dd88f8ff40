use serde::{Deserialize, Serialize};

use crate::models::{ContactMessages, ScrollThresholds};

/// Page-wide settings, provided to every component through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub scroll: ScrollThresholds,
    pub contact: ContactMessages,
    /// Fraction of a reveal-text element that must be visible before it plays.
    pub reveal_threshold: f64,
    /// Play the intro loader before section animations register.
    pub play_loader: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollThresholds::default(),
            contact: ContactMessages::default(),
            reveal_threshold: 0.5,
            play_loader: true,
        }
    }
}

impl SiteConfig {
    pub fn reveal_threshold(&self) -> f64 {
        self.reveal_threshold.clamp(0.0, 1.0)
    }
}

/// The page configuration from context, or the default outside an app tree.
pub fn use_config() -> SiteConfig {
    leptos::prelude::use_context::<SiteConfig>().unwrap_or_default()
}
