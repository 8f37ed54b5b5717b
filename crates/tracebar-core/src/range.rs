//! Range, value and window-scale bookkeeping for the timeline scrollbar
//!
//! The `RangeController` owns the logical `[minimum, maximum]` extent, the
//! current scroll offset ("value") and the window scale relating logical
//! units to device pixels. All mutations clamp immediately, so the state is
//! consistent after every call and callers can forward the returned value
//! to listeners as the authoritative one.

/// Spans below this are treated as empty; the window scale is pinned to 1
/// to avoid dividing by zero.
pub const SPAN_EPSILON: f64 = 1e-3;

// =============================================================================
// Slider Geometry
// =============================================================================

/// Geometry of a slider rectangle, always centered on `position`.
///
/// Used for both the main viewport slider and the chronometer indicator;
/// the rectangle spans `[position - halfwidth, position + halfwidth]` in
/// logical units. Vertical extent is a layout concern of the widget layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    halfwidth: f64,
    position: f64,
}

impl SliderGeometry {
    pub fn new() -> Self {
        Self {
            halfwidth: 0.5,
            position: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.halfwidth * 2.0
    }

    pub fn halfwidth(&self) -> f64 {
        self.halfwidth
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Left edge in logical units.
    pub fn left(&self) -> f64 {
        self.position - self.halfwidth
    }

    /// Right edge in logical units.
    pub fn right(&self) -> f64 {
        self.position + self.halfwidth
    }

    pub fn set_width(&mut self, width: f64) {
        self.halfwidth = width * 0.5;
    }

    pub fn set_halfwidth(&mut self, halfwidth: f64) {
        self.halfwidth = halfwidth;
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    /// Place the rectangle so it covers `[left, right]`.
    pub fn set_span(&mut self, left: f64, right: f64) {
        self.halfwidth = (right - left) * 0.5;
        self.position = left + self.halfwidth;
    }
}

impl Default for SliderGeometry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Render Context
// =============================================================================

/// Immutable scale/origin snapshot handed to each paint call.
///
/// Visual items query the current scale through this context instead of
/// caching their own copy, so a resize between events and the next paint
/// can never leave an item drawing with a stale scale.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Device pixels per logical unit.
    pub scale: f64,
    /// Logical coordinate mapped to pixel x = 0 (the range minimum).
    pub origin: f64,
}

impl RenderContext {
    /// Map a logical coordinate to a device-pixel x position.
    pub fn to_screen_x(&self, logical: f64) -> f64 {
        (logical - self.origin) * self.scale
    }

    /// Map a device-pixel x position back to a logical coordinate.
    pub fn to_logical(&self, x_px: f64) -> f64 {
        self.origin + x_px / self.scale
    }
}

// =============================================================================
// Range Controller
// =============================================================================

/// Owns the scrollable `[minimum, maximum]` range, the current value and
/// the window scale.
///
/// Invariant after every mutation:
/// `minimum <= value <= max(minimum, maximum - slider_width)`.
#[derive(Debug, Clone)]
pub struct RangeController {
    minimum: f64,
    maximum: f64,
    value: f64,
    slider_halfwidth: f64,
    window_scale: f64,
    viewport_width: f64,
}

impl RangeController {
    pub fn new() -> Self {
        Self {
            minimum: 0.0,
            maximum: 500.0,
            value: 10.0,
            slider_halfwidth: 0.5,
            window_scale: 1.0,
            viewport_width: 500.0,
        }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn window_scale(&self) -> f64 {
        self.window_scale
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn slider_width(&self) -> f64 {
        self.slider_halfwidth * 2.0
    }

    pub fn slider_halfwidth(&self) -> f64 {
        self.slider_halfwidth
    }

    /// Center of the main slider rectangle in logical units.
    pub fn slider_position(&self) -> f64 {
        self.value + self.slider_halfwidth
    }

    /// Largest value the slider's left edge may take.
    fn upper_bound(&self) -> f64 {
        (self.maximum - self.slider_width()).max(self.minimum)
    }

    /// Clamp `value` into the valid window and store it.
    ///
    /// Returns the clamped value; callers forward it to listeners even when
    /// it equals the input, since the clamped value is the authoritative one.
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.value = value.clamp(self.minimum, self.upper_bound());
        self.value
    }

    /// Replace the range, preserving the previous relative scroll position.
    ///
    /// The relative fraction `(value - old_min) / old_span` is computed
    /// before the mutation and restored against the new span, then the
    /// window scale is recomputed for the current viewport width. Returns
    /// the re-clamped value.
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> f64 {
        let old_span = self.span();
        let fraction = if old_span < SPAN_EPSILON {
            0.0
        } else {
            (self.value - self.minimum) / old_span
        };

        self.minimum = minimum;
        self.maximum = maximum;

        let value = self.set_value(minimum + fraction * self.span());
        self.on_viewport_width_change(self.viewport_width);
        value
    }

    /// Update the slider width and re-clamp the current value, which a
    /// narrower range tail can push out of bounds.
    pub fn set_slider_width(&mut self, width: f64) -> f64 {
        self.slider_halfwidth = width * 0.5;
        self.set_value(self.value)
    }

    /// Recompute the window scale for a new viewport pixel width.
    ///
    /// Degenerate spans pin the scale to 1. Returns the new scale.
    pub fn on_viewport_width_change(&mut self, pixel_width: f64) -> f64 {
        self.viewport_width = pixel_width;
        self.window_scale = self.scale_for_width(pixel_width);
        self.window_scale
    }

    /// Scale a viewport of `pixel_width` would get, without storing it.
    pub fn scale_for_width(&self, pixel_width: f64) -> f64 {
        let span = self.span();
        if span < SPAN_EPSILON {
            1.0
        } else {
            pixel_width / span
        }
    }

    /// Snapshot for paint calls, using the live viewport width reported by
    /// the canvas bounds rather than the stored one.
    pub fn render_context(&self, pixel_width: f64) -> RenderContext {
        RenderContext {
            scale: self.scale_for_width(pixel_width),
            origin: self.minimum,
        }
    }

    /// Value candidate for a track press at pixel `x_px`: jumps the window
    /// so the slider is centered on the pressed point. Not clamped; feed it
    /// through [`set_value`](Self::set_value).
    pub fn press_value(&self, x_px: f64) -> f64 {
        self.minimum + x_px / self.window_scale - self.slider_halfwidth
    }

    /// Value candidate for a drag of `dx_px` device pixels.
    pub fn drag_value(&self, dx_px: f64) -> f64 {
        self.value + dx_px / self.window_scale
    }
}

impl Default for RangeController {
    fn default() -> Self {
        Self::new()
    }
}
