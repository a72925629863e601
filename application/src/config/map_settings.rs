//! Map rendering parameters.
//!
//! [`MapSettings`] groups the static parameters of a choropleth image.
//! They are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Image parameters for the choropleth map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Fill opacity of classified countries (0.0 - 1.0).
    pub opacity: f64,
    /// Caption drawn above the map.
    pub title: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            opacity: 0.5,
            title: "Country Overlap between Selected Programs, Centers, Funders, and Projects"
                .to_string(),
        }
    }
}

impl MapSettings {
    // ==================== Builder Methods ====================

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opacity is clamped to `[0, 1]`
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
