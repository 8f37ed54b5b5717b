//! Color conversion for the minimap heat ramp.

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Heat color for a normalized bar height `col` in `[0, 1]`.
///
/// Maps short bars to green and tall bars through yellow to red:
/// `hue = (1 - col) * 0.35` of the hue circle, at fixed saturation and
/// brightness 0.85. Quantized to 8-bit channels so that nearby heights
/// collapse onto the same color and consecutive bars can share one fill.
pub fn heat_rgb(col: f64) -> [u8; 3] {
    let hue = (1.0 - col.clamp(0.0, 1.0)) as f32 * 0.35 * 360.0;
    let (r, g, b) = hsv_to_rgb(hue, 0.85, 0.85);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let (r, g, b) = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((r - 1.0).abs() < 0.01);
        assert!(g.abs() < 0.01);
        assert!(b.abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_green() {
        let (r, g, b) = hsv_to_rgb(120.0, 1.0, 1.0);
        assert!(r.abs() < 0.01);
        assert!((g - 1.0).abs() < 0.01);
        assert!(b.abs() < 0.01);
    }

    #[test]
    fn test_heat_ramp_endpoints() {
        // Tallest bars are pure-hue red (hue 0).
        let [r, g, b] = heat_rgb(1.0);
        assert!(r > g && r > b);

        // Shortest bars sit at hue 126 degrees, on the green side.
        let [r, g, _b] = heat_rgb(0.0);
        assert!(g > r);
    }

    #[test]
    fn test_heat_col_is_clamped() {
        // Heights above the bounding box (possible when the box is shorter
        // than the bar floor) must not wrap the hue around.
        assert_eq!(heat_rgb(1.5), heat_rgb(1.0));
        assert_eq!(heat_rgb(-0.2), heat_rgb(0.0));
    }
}
