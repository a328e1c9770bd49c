//! Core sizing, scaling and naming logic for the background generator.
//!
//! Everything here is pure and UI-independent; the egui frontend in the
//! binary drives these functions from input events.

use serde::{Deserialize, Serialize};

/// Largest allowed canvas edge in pixels. Larger requests are clamped.
pub const MAX_DIMENSION: u32 = 5000;

/// Fallback width when the width field does not parse as a number.
pub const DEFAULT_WIDTH: u32 = 1920;

/// Fallback height when the height field does not parse as a number.
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Preset canvas sizes offered in the UI, as `"{W}x{H}"` strings.
pub const PRESET_SIZES: &[&str] = &[
    "1920x1080",
    "2560x1440",
    "3840x2160",
    "1280x720",
    "1024x768",
    "800x600",
];

/// The canvas being previewed and exported: pixel dimensions plus fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Fill color as sRGB bytes.
    pub color: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: [52, 152, 219],
        }
    }
}

impl CanvasConfig {
    /// Returns a copy with both dimensions clamped into `[1, MAX_DIMENSION]`.
    pub fn clamped(self) -> Self {
        let (width, height) = clamp_dimensions(self.width, self.height);
        Self {
            width,
            height,
            ..self
        }
    }

    /// Lowercase hex color code without the leading `#`.
    pub fn color_hex(&self) -> String {
        let [r, g, b] = self.color;
        format!("{r:02x}{g:02x}{b:02x}")
    }

    /// Filename the export is written under:
    /// `background_{hex}_{width}x{height}.png`.
    pub fn export_filename(&self) -> String {
        format!(
            "background_{}_{}x{}.png",
            self.color_hex(),
            self.width,
            self.height
        )
    }
}

/// Clamps a width/height pair into `[1, MAX_DIMENSION]` on each axis.
pub fn clamp_dimensions(width: u32, height: u32) -> (u32, u32) {
    (
        width.clamp(1, MAX_DIMENSION),
        height.clamp(1, MAX_DIMENSION),
    )
}

/// Display scale at which a `canvas_w` × `canvas_h` surface fits inside the
/// viewport: the smaller of the two axis ratios, capped at 1.0 so the preview
/// never upscales past 100%.
///
/// A degenerate viewport (zero or negative available space) yields the
/// smallest positive scale rather than 0 or a negative factor.
pub fn compute_fit_scale(canvas_w: u32, canvas_h: u32, viewport_w: f32, viewport_h: f32) -> f32 {
    let width_ratio = viewport_w / canvas_w as f32;
    let height_ratio = viewport_h / canvas_h as f32;
    let scale = width_ratio.min(height_ratio).min(1.0);

    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        f32::MIN_POSITIVE
    }
}

/// Parses a `"{W}x{H}"` preset string. Returns `None` for anything else.
pub fn parse_preset(preset: &str) -> Option<(u32, u32)> {
    let (w, h) = preset.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

/// Parses a dimension input field: non-numeric text falls back to `default`,
/// out-of-range values are clamped into `[1, MAX_DIMENSION]`.
pub fn parse_dimension(input: &str, default: u32) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .unwrap_or(default)
        .clamp(1, MAX_DIMENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_a_noop_in_range() {
        assert_eq!(clamp_dimensions(1, 1), (1, 1));
        assert_eq!(clamp_dimensions(1920, 1080), (1920, 1080));
        assert_eq!(clamp_dimensions(5000, 5000), (5000, 5000));
    }

    #[test]
    fn clamp_is_idempotent() {
        let once = clamp_dimensions(7200, 0);
        assert_eq!(clamp_dimensions(once.0, once.1), once);
    }

    #[test]
    fn oversized_dimensions_clamp_to_max() {
        assert_eq!(clamp_dimensions(9000, 1080), (5000, 1080));
        assert_eq!(clamp_dimensions(800, 123_456), (800, 5000));
    }

    #[test]
    fn zero_dimensions_clamp_to_one() {
        assert_eq!(clamp_dimensions(0, 0), (1, 1));
    }

    #[test]
    fn fit_scale_never_upscales() {
        assert_eq!(compute_fit_scale(100, 100, 1000.0, 1000.0), 1.0);
        assert_eq!(compute_fit_scale(1, 1, 500.0, 500.0), 1.0);
    }

    #[test]
    fn fit_scale_uses_smaller_axis_ratio() {
        // Width-constrained: 1000/2000 < 1000/1000
        assert_eq!(compute_fit_scale(2000, 1000, 1000.0, 1000.0), 0.5);
        // Height-constrained: 1000/4000 < 1000/1000
        assert_eq!(compute_fit_scale(1000, 4000, 1000.0, 1000.0), 0.25);
    }

    #[test]
    fn fit_scale_degenerate_viewport_stays_positive() {
        assert!(compute_fit_scale(1920, 1080, 0.0, 0.0) > 0.0);
        assert!(compute_fit_scale(1920, 1080, -60.0, 400.0) > 0.0);
        assert!(compute_fit_scale(1920, 1080, 400.0, -60.0) > 0.0);
    }

    #[test]
    fn preset_parsing() {
        assert_eq!(parse_preset("800x600"), Some((800, 600)));
        assert_eq!(parse_preset(""), None);
        assert_eq!(parse_preset("800x"), None);
        assert_eq!(parse_preset("axb"), None);
    }

    #[test]
    fn all_presets_parse() {
        for preset in PRESET_SIZES {
            assert!(
                parse_preset(preset).is_some(),
                "preset {preset:?} should parse"
            );
        }
    }

    #[test]
    fn dimension_field_fallback_and_clamp() {
        assert_eq!(parse_dimension("800", DEFAULT_WIDTH), 800);
        assert_eq!(parse_dimension(" 800 ", DEFAULT_WIDTH), 800);
        assert_eq!(parse_dimension("abc", DEFAULT_WIDTH), 1920);
        assert_eq!(parse_dimension("", DEFAULT_HEIGHT), 1080);
        assert_eq!(parse_dimension("9001", DEFAULT_WIDTH), 5000);
        assert_eq!(parse_dimension("0", DEFAULT_WIDTH), 1);
    }

    #[test]
    fn export_filename_format() {
        let config = CanvasConfig {
            width: 800,
            height: 600,
            color: [255, 0, 0],
        };
        assert_eq!(config.export_filename(), "background_ff0000_800x600.png");
    }

    #[test]
    fn color_hex_is_lowercase_without_hash() {
        let config = CanvasConfig {
            color: [0xab, 0xcd, 0xef],
            ..CanvasConfig::default()
        };
        assert_eq!(config.color_hex(), "abcdef");
    }
}
