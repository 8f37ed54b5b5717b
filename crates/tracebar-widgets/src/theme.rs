//! Theme and layout configuration for the timeline scrollbar
//!
//! Colors and layout constants are configurable defaults, stored as YAML in
//! the user's config directory. Default location:
//! `~/.config/tracebar/scrollbar.yaml`. Missing or invalid files fall back
//! to the built-in defaults with a logged warning.

use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure loading a theme file. Callers that prefer warn-and-default
/// semantics use [`load_theme`] instead of [`read_theme`].
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Root theme configuration for the scrollbar widgets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarTheme {
    /// Track, slider and minimap colors
    pub colors: TrackColors,
    /// Pixel-space layout constants
    pub layout: TrackLayout,
}

/// Color configuration.
///
/// Colors are specified as hex strings (e.g., "#E00000"); alphas are
/// separate so a theme can re-tint without re-stating the opacities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackColors {
    /// Track background (default: near-black)
    pub background: String,
    /// Main viewport slider (default: red)
    pub slider: String,
    /// Main slider opacity
    pub slider_alpha: f32,
    /// Chronometer span indicator (default: blue)
    pub chronometer: String,
    /// Chronometer opacity
    pub chronometer_alpha: f32,
    /// Overlay opacity of minimap heat bars
    pub heat_alpha: f32,
}

impl Default for TrackColors {
    fn default() -> Self {
        Self {
            background: "#1A1A1F".to_string(),
            slider: "#E00000".to_string(),
            slider_alpha: 0.5,
            chronometer: "#4040C8".to_string(),
            chronometer_alpha: 0.25,
            heat_alpha: 0.75,
        }
    }
}

impl TrackColors {
    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background)
    }

    pub fn slider_color(&self) -> Color {
        with_alpha(parse_hex_color(&self.slider), self.slider_alpha)
    }

    pub fn chronometer_color(&self) -> Color {
        with_alpha(parse_hex_color(&self.chronometer), self.chronometer_alpha)
    }
}

/// Layout configuration.
///
/// The indicator and bar-height thresholds are visually derived defaults,
/// not protocol values; themes may tune them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLayout {
    /// Height of the scrollbar track in pixels
    pub track_height: f32,
    /// Vertical offset of the track top in scene space, for hosts that
    /// embed the scrollbar in a scene with a centered y origin
    pub track_top: f32,
    /// Rendered slider widths below this (pixels) get edge markers
    pub indicator_size: f32,
    /// Height floor for minimap heat bars in pixels
    pub min_bar_height: f32,
    /// Zoom-step coefficient shared with the host's main chart view
    pub zoom_step: f64,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            track_height: 80.0,
            track_top: -40.0,
            indicator_size: 8.0,
            min_bar_height: 5.0,
            zoom_step: 1.25,
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns white on parse failure
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Get the default theme file path
///
/// Returns: `~/.config/tracebar/scrollbar.yaml`
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("tracebar")
        .join("scrollbar.yaml")
}

/// Read a theme file, failing loudly.
pub fn read_theme(path: &Path) -> Result<ScrollbarTheme, ThemeError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_theme(path: &Path) -> ScrollbarTheme {
    if !path.exists() {
        log::info!("load_theme: {:?} doesn't exist, using defaults", path);
        return ScrollbarTheme::default();
    }

    match read_theme(path) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("load_theme: {}, using defaults", e);
            ScrollbarTheme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#FF0000");
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);

        let color = parse_hex_color("00FF00");
        assert_eq!(color.r, 0.0);
        assert_eq!(color.g, 1.0);
    }

    #[test]
    fn test_invalid_hex_falls_back_to_white() {
        assert_eq!(parse_hex_color("#12"), Color::WHITE);
    }

    #[test]
    fn test_default_layout_constants() {
        let layout = TrackLayout::default();
        assert_eq!(layout.track_height, 80.0);
        assert_eq!(layout.indicator_size, 8.0);
        assert_eq!(layout.min_bar_height, 5.0);
        assert!((layout.zoom_step - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_slider_color_carries_alpha() {
        let colors = TrackColors::default();
        let slider = colors.slider_color();
        assert!((slider.a - 0.5).abs() < 1e-6);
        assert!(slider.r > 0.8);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut theme = ScrollbarTheme::default();
        theme.colors.slider = "#00FF00".to_string();
        theme.layout.indicator_size = 12.0;

        let yaml = serde_yaml::to_string(&theme).unwrap();
        let parsed: ScrollbarTheme = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.colors.slider, "#00FF00");
        assert_eq!(parsed.layout.indicator_size, 12.0);
        // Untouched fields keep their defaults through the roundtrip.
        assert_eq!(parsed.layout.track_height, 80.0);
    }
}
