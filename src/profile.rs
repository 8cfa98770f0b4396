//! Serializable appearance settings.
//!
//! An [`AppearanceProfile`] captures the persisted appearance knobs a dock
//! panel applies to its items: the icon size range the zoom sweeps, the
//! animation step count, and panel chrome colors. Reading and writing the
//! backing store is the embedder's job; this type is the JSON-friendly data
//! carrier between that store and item construction.
//!
//! # Example
//!
//! ```
//! use paradock_renderer::AppearanceProfile;
//!
//! let profile = AppearanceProfile::new()
//!     .with_icon_sizes(48, 128)
//!     .with_zoom_animation_steps(12);
//!
//! let json = profile.to_json().unwrap();
//! let restored = AppearanceProfile::from_json(&json).unwrap();
//! assert_eq!(restored.minimum_icon_size, 48);
//! ```

use serde::{Deserialize, Serialize};

fn default_minimum_icon_size() -> i32 {
    128
}

fn default_maximum_icon_size() -> i32 {
    512
}

fn default_zoom_animation_steps() -> i32 {
    20
}

fn default_background_color() -> String {
    "#638abd".to_owned()
}

fn default_border_color() -> String {
    "#b1c4de".to_owned()
}

fn default_tooltip_font_size() -> i32 {
    20
}

/// Persisted appearance settings for one dock panel.
///
/// Every field has a default, so a partial (or empty) JSON document
/// deserializes into a usable profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceProfile {
    /// Icon size when an item is not zoomed, in pixels.
    #[serde(default = "default_minimum_icon_size")]
    pub minimum_icon_size: i32,

    /// Icon size when an item is fully zoomed, in pixels.
    #[serde(default = "default_maximum_icon_size")]
    pub maximum_icon_size: i32,

    /// Number of discrete steps a zoom transition animates over.
    #[serde(default = "default_zoom_animation_steps")]
    pub zoom_animation_steps: i32,

    /// Panel background color, as a `#rrggbb` string.
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Panel border color, as a `#rrggbb` string.
    #[serde(default = "default_border_color")]
    pub border_color: String,

    /// Tooltip font size, in points.
    #[serde(default = "default_tooltip_font_size")]
    pub tooltip_font_size: i32,
}

impl Default for AppearanceProfile {
    fn default() -> Self {
        Self {
            minimum_icon_size: default_minimum_icon_size(),
            maximum_icon_size: default_maximum_icon_size(),
            zoom_animation_steps: default_zoom_animation_steps(),
            background_color: default_background_color(),
            border_color: default_border_color(),
            tooltip_font_size: default_tooltip_font_size(),
        }
    }
}

impl AppearanceProfile {
    /// Creates a profile with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon size range the zoom sweeps.
    pub fn with_icon_sizes(mut self, minimum: i32, maximum: i32) -> Self {
        self.minimum_icon_size = minimum;
        self.maximum_icon_size = maximum;
        self
    }

    /// Sets the zoom animation step count.
    pub fn with_zoom_animation_steps(mut self, steps: i32) -> Self {
        self.zoom_animation_steps = steps;
        self
    }

    /// The icon size range as an ordered `(min, max)` pair.
    ///
    /// Guards against a store where the two values were edited past each
    /// other; items require `min <= max`.
    pub fn icon_size_range(&self) -> (i32, i32) {
        if self.minimum_icon_size <= self.maximum_icon_size {
            (self.minimum_icon_size, self.maximum_icon_size)
        } else {
            (self.maximum_icon_size, self.minimum_icon_size)
        }
    }

    /// Serializes this profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_appearance() {
        let profile = AppearanceProfile::default();
        assert_eq!(profile.minimum_icon_size, 128);
        assert_eq!(profile.maximum_icon_size, 512);
        assert_eq!(profile.zoom_animation_steps, 20);
        assert_eq!(profile.background_color, "#638abd");
        assert_eq!(profile.border_color, "#b1c4de");
        assert_eq!(profile.tooltip_font_size, 20);
    }

    #[test]
    fn json_round_trip() {
        let profile = AppearanceProfile::new()
            .with_icon_sizes(48, 128)
            .with_zoom_animation_steps(12);
        let json = profile.to_json().unwrap();
        let restored = AppearanceProfile::from_json(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn camel_case_field_names() {
        let json = AppearanceProfile::default().to_json().unwrap();
        assert!(json.contains("minimumIconSize"));
        assert!(json.contains("zoomAnimationSteps"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let profile = AppearanceProfile::from_json("{}").unwrap();
        assert_eq!(profile, AppearanceProfile::default());

        let profile = AppearanceProfile::from_json(r#"{"minimumIconSize": 32}"#).unwrap();
        assert_eq!(profile.minimum_icon_size, 32);
        assert_eq!(profile.maximum_icon_size, 512);
    }

    #[test]
    fn icon_size_range_orders_swapped_bounds() {
        let profile = AppearanceProfile::new().with_icon_sizes(128, 32);
        assert_eq!(profile.icon_size_range(), (32, 128));
    }
}
