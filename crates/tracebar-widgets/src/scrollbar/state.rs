//! Scrollbar state
//!
//! Following iced 0.14 patterns, state lives at the application level while
//! view functions consume references. `ScrollbarState` composes the range
//! controller, the chronometer indicator and the minimap source, and
//! exposes the operations a trace-viewer host drives it with. Mutators
//! return the authoritative clamped value so hosts can forward it to their
//! own listeners.

use std::sync::Arc;

use tracebar_core::{
    DurationSample, HeatRun, MinimapSource, RangeController, SliderGeometry, ThreadId,
};

use crate::theme::ScrollbarTheme;

/// Application-level state of one timeline scrollbar.
#[derive(Debug, Clone)]
pub struct ScrollbarState {
    range: RangeController,
    chronometer: SliderGeometry,
    chronometer_visible: bool,
    minimap: MinimapSource,
    heat_runs: Vec<HeatRun>,
    theme: ScrollbarTheme,
}

impl ScrollbarState {
    pub fn new() -> Self {
        Self::with_theme(ScrollbarTheme::default())
    }

    pub fn with_theme(theme: ScrollbarTheme) -> Self {
        Self {
            range: RangeController::new(),
            chronometer: SliderGeometry::new(),
            chronometer_visible: false,
            minimap: MinimapSource::new(),
            heat_runs: Vec::new(),
            theme,
        }
    }

    pub fn range(&self) -> &RangeController {
        &self.range
    }

    pub fn theme(&self) -> &ScrollbarTheme {
        &self.theme
    }

    /// Replace the scrollable range, preserving the relative scroll
    /// position. Returns the re-clamped value.
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> f64 {
        self.range.set_range(minimum, maximum)
    }

    /// Clamp and store a new scroll offset. Returns the clamped value.
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.range.set_value(value)
    }

    /// Resize the visible-window slider. Returns the re-clamped value.
    pub fn set_slider_width(&mut self, width: f64) -> f64 {
        self.range.set_slider_width(width)
    }

    /// Recompute the window scale for a new viewport pixel width.
    pub fn on_viewport_width_change(&mut self, pixel_width: f64) -> f64 {
        self.range.on_viewport_width_change(pixel_width)
    }

    // -------------------------------------------------------------------------
    // Chronometer indicator
    // -------------------------------------------------------------------------

    pub fn chronometer(&self) -> &SliderGeometry {
        &self.chronometer
    }

    pub fn chronometer_visible(&self) -> bool {
        self.chronometer_visible
    }

    /// Place the chronometer span over `[left, right]` logical units.
    pub fn set_chrono_span(&mut self, left: f64, right: f64) {
        self.chronometer.set_span(left, right);
    }

    pub fn show_chrono(&mut self) {
        self.chronometer_visible = true;
    }

    pub fn hide_chrono(&mut self) {
        self.chronometer_visible = false;
    }

    // -------------------------------------------------------------------------
    // Minimap
    // -------------------------------------------------------------------------

    pub fn minimap_thread(&self) -> ThreadId {
        self.minimap.thread_id()
    }

    pub fn minimap_visible(&self) -> bool {
        self.minimap.is_visible()
    }

    /// Color-batched heat bars, recomputed on [`set_minimap_from`](Self::set_minimap_from),
    /// not per paint.
    pub fn heat_runs(&self) -> &[HeatRun] {
        &self.heat_runs
    }

    /// Replace the minimap's sample snapshot and rebuild its heat runs.
    ///
    /// An empty snapshot hides the minimap; it keeps its geometry and is
    /// shown again by the next non-empty snapshot.
    pub fn set_minimap_from(&mut self, thread_id: ThreadId, samples: Arc<[DurationSample]>) {
        self.minimap.set_source(thread_id, samples);
        self.heat_runs = self.minimap.heat_runs(
            self.theme.layout.track_height as f64,
            self.theme.layout.min_bar_height as f64,
        );
    }

    /// Handle a thread-menu selection.
    ///
    /// Returns `Some(thread_id)` when the selection differs from the thread
    /// the minimap currently displays; the host stores the shared selection
    /// and notifies its listeners. Same-thread selections are a no-op.
    pub fn select_thread(&self, thread_id: ThreadId) -> Option<ThreadId> {
        if thread_id != self.minimap.thread_id() {
            Some(thread_id)
        } else {
            None
        }
    }
}

impl Default for ScrollbarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(durations: &[f64]) -> Arc<[DurationSample]> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| DurationSample::new(i as f64 * 5.0, d))
            .collect()
    }

    #[test]
    fn test_chrono_span_centers_geometry() {
        let mut state = ScrollbarState::new();
        state.set_chrono_span(40.0, 100.0);
        assert!((state.chronometer().left() - 40.0).abs() < 1e-9);
        assert!((state.chronometer().right() - 100.0).abs() < 1e-9);
        assert!(!state.chronometer_visible());

        state.show_chrono();
        assert!(state.chronometer_visible());
        state.hide_chrono();
        assert!(!state.chronometer_visible());
    }

    #[test]
    fn test_minimap_runs_follow_source() {
        let mut state = ScrollbarState::new();
        assert!(state.heat_runs().is_empty());

        state.set_minimap_from(ThreadId(3), samples(&[1.0, 2.0, 9.0]));
        assert!(state.minimap_visible());
        assert!(!state.heat_runs().is_empty());
        assert_eq!(state.minimap_thread(), ThreadId(3));

        state.set_minimap_from(ThreadId(3), samples(&[]));
        assert!(!state.minimap_visible());
        assert!(state.heat_runs().is_empty());
    }

    #[test]
    fn test_select_thread_only_fires_on_change() {
        let mut state = ScrollbarState::new();
        state.set_minimap_from(ThreadId(3), samples(&[1.0]));

        assert_eq!(state.select_thread(ThreadId(4)), Some(ThreadId(4)));
        assert_eq!(state.select_thread(ThreadId(3)), None);
    }

    #[test]
    fn test_value_operations_clamp_through_state() {
        let mut state = ScrollbarState::new();
        state.set_range(0.0, 500.0);
        state.set_slider_width(50.0);

        assert!((state.set_value(10_000.0) - 450.0).abs() < 1e-9);
        assert!((state.set_value(-3.0) - 0.0).abs() < 1e-9);

        let scale = state.on_viewport_width_change(250.0);
        assert!((scale - 0.5).abs() < 1e-9);
    }
}
