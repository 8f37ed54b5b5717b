//! Duration-sample aggregation for the per-thread minimap
//!
//! The minimap summarizes a thread's duration samples as a heat-graded bar
//! chart under the scrollbar track. Sample lists can reach tens of
//! thousands of entries, so bars are grouped into runs of identical color
//! ahead of painting: the widget layer issues one fill per run instead of
//! one per bar.

use std::fmt;
use std::sync::Arc;

use crate::color::heat_rgb;

/// Default height floor for heat bars, in device pixels. Keeps even the
/// shortest samples visible.
pub const MIN_BAR_HEIGHT: f64 = 5.0;

/// Identifier of the thread whose samples the minimap displays.
///
/// `ThreadId(0)` is the "no thread" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThreadId(pub u64);

impl ThreadId {
    pub const NONE: ThreadId = ThreadId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One top-level interval of a thread's timeline.
///
/// Lists are ordered by `offset` and non-overlapping at the top level;
/// both are the data source's obligation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationSample {
    /// Start of the interval in logical (scene) units.
    pub offset: f64,
    /// Length of the interval, also the heat measure.
    pub duration: f64,
}

impl DurationSample {
    pub fn new(offset: f64, duration: f64) -> Self {
        Self { offset, duration }
    }

    pub fn end(&self) -> f64 {
        self.offset + self.duration
    }
}

/// One bar of the minimap chart, in logical x units and pixel height.
///
/// Horizontal placement tracks the zoom scale at paint time; the height is
/// precomputed and zoom-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBar {
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

/// A run of consecutive bars sharing one quantized heat color.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatRun {
    pub rgb: [u8; 3],
    pub bars: Vec<HeatBar>,
}

/// The minimap's sample snapshot and its derived duration bounds.
///
/// The sample list is an externally owned, immutable snapshot; the supplier
/// must not mutate it while a paint is in flight, which the `Arc<[_]>`
/// makes structural. Min/max duration are recomputed once per
/// [`set_source`](Self::set_source) call, never per paint.
#[derive(Debug, Clone)]
pub struct MinimapSource {
    thread_id: ThreadId,
    samples: Arc<[DurationSample]>,
    min_duration: f64,
    max_duration: f64,
    visible: bool,
}

impl MinimapSource {
    pub fn new() -> Self {
        Self {
            thread_id: ThreadId::NONE,
            samples: Arc::from(Vec::new()),
            min_duration: 0.0,
            max_duration: 0.0,
            visible: false,
        }
    }

    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn samples(&self) -> &[DurationSample] {
        &self.samples
    }

    /// `(min_duration, max_duration)` over the current sample list.
    pub fn duration_bounds(&self) -> (f64, f64) {
        (self.min_duration, self.max_duration)
    }

    /// Replace the sample snapshot for `thread_id`.
    ///
    /// An empty list hides the minimap without destroying it; a later call
    /// with samples shows it again. Duration bounds come from a single
    /// running min/max pass.
    pub fn set_source(&mut self, thread_id: ThreadId, samples: Arc<[DurationSample]>) {
        self.thread_id = thread_id;
        self.samples = samples;

        if self.samples.is_empty() {
            self.visible = false;
            return;
        }

        let mut min = f64::MAX;
        let mut max = 0.0f64;
        for sample in self.samples.iter() {
            if sample.duration > max {
                max = sample.duration;
            }
            if sample.duration < min {
                min = sample.duration;
            }
        }

        self.min_duration = min;
        self.max_duration = max;
        self.visible = true;

        log::debug!(
            "minimap source: thread {} with {} samples, durations {:.3}..{:.3}",
            self.thread_id,
            self.samples.len(),
            min,
            max
        );
    }

    /// Height coefficient mapping a duration above the minimum to pixels.
    ///
    /// When every duration is equal the coefficient is irrelevant (all bars
    /// sit on the height floor), so a nominal 1.0 sidesteps the zero span.
    fn height_coeff(&self, bounding_height: f64) -> f64 {
        let spread = self.max_duration - self.min_duration;
        if spread < f64::EPSILON {
            1.0
        } else {
            bounding_height / spread
        }
    }

    /// Aggregate the sample list into color-batched heat bars.
    ///
    /// Bar height is `max((duration - min) * coeff, min_bar_height)`;
    /// consecutive bars whose normalized height maps to the same quantized
    /// heat color share one run. Empty when the minimap is hidden.
    pub fn heat_runs(&self, bounding_height: f64, min_bar_height: f64) -> Vec<HeatRun> {
        if !self.visible {
            return Vec::new();
        }

        let coeff = self.height_coeff(bounding_height);
        let mut runs: Vec<HeatRun> = Vec::new();

        for sample in self.samples.iter() {
            let height = ((sample.duration - self.min_duration) * coeff).max(min_bar_height);
            let rgb = heat_rgb(height / bounding_height);
            let bar = HeatBar {
                offset: sample.offset,
                width: sample.duration,
                height,
            };

            match runs.last_mut() {
                Some(run) if run.rgb == rgb => run.bars.push(bar),
                _ => runs.push(HeatRun {
                    rgb,
                    bars: vec![bar],
                }),
            }
        }

        runs
    }
}

impl Default for MinimapSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(durations: &[f64]) -> Arc<[DurationSample]> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| DurationSample::new(i as f64 * 10.0, d))
            .collect()
    }

    #[test]
    fn test_empty_source_hides() {
        let mut minimap = MinimapSource::new();
        minimap.set_source(ThreadId(7), snapshot(&[1.0, 2.0]));
        assert!(minimap.is_visible());

        minimap.set_source(ThreadId(7), snapshot(&[]));
        assert!(!minimap.is_visible());
        assert!(minimap.heat_runs(80.0, MIN_BAR_HEIGHT).is_empty());

        // Hidden, not destroyed: a later snapshot shows it again.
        minimap.set_source(ThreadId(7), snapshot(&[3.0]));
        assert!(minimap.is_visible());
    }

    #[test]
    fn test_duration_bounds_single_pass() {
        let mut minimap = MinimapSource::new();
        minimap.set_source(ThreadId(1), snapshot(&[4.0, 1.5, 9.0, 2.0]));
        let (min, max) = minimap.duration_bounds();
        assert!((min - 1.5).abs() < 1e-9);
        assert!((max - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_height_floor_and_ceiling() {
        let mut minimap = MinimapSource::new();
        minimap.set_source(ThreadId(1), snapshot(&[1.0, 5.0, 9.0]));

        let runs = minimap.heat_runs(80.0, MIN_BAR_HEIGHT);
        let bars: Vec<HeatBar> = runs.iter().flat_map(|r| r.bars.clone()).collect();
        assert_eq!(bars.len(), 3);

        // duration == min renders at the floor.
        assert!((bars[0].height - MIN_BAR_HEIGHT).abs() < 1e-9);
        // duration == max fills the bounding height.
        assert!((bars[2].height - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_durations_sit_on_floor() {
        let mut minimap = MinimapSource::new();
        minimap.set_source(ThreadId(1), snapshot(&[3.0, 3.0, 3.0]));

        let runs = minimap.heat_runs(80.0, MIN_BAR_HEIGHT);
        for bar in runs.iter().flat_map(|r| r.bars.iter()) {
            assert!((bar.height - MIN_BAR_HEIGHT).abs() < 1e-9);
        }
    }

    #[test]
    fn test_color_batching_merges_equal_runs() {
        let mut minimap = MinimapSource::new();

        // Four identical durations followed by one outlier: the first four
        // share one quantized color, so exactly two runs come out.
        minimap.set_source(ThreadId(1), snapshot(&[2.0, 2.0, 2.0, 2.0, 40.0]));
        let runs = minimap.heat_runs(80.0, MIN_BAR_HEIGHT);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].bars.len(), 4);
        assert_eq!(runs[1].bars.len(), 1);
        assert_ne!(runs[0].rgb, runs[1].rgb);
    }

    #[test]
    fn test_bars_keep_logical_placement() {
        let mut minimap = MinimapSource::new();
        minimap.set_source(ThreadId(1), snapshot(&[1.0, 6.0]));

        let runs = minimap.heat_runs(80.0, MIN_BAR_HEIGHT);
        let bars: Vec<HeatBar> = runs.iter().flat_map(|r| r.bars.clone()).collect();
        assert!((bars[0].offset - 0.0).abs() < 1e-9);
        assert!((bars[1].offset - 10.0).abs() < 1e-9);
        assert!((bars[1].width - 6.0).abs() < 1e-9);
    }
}
