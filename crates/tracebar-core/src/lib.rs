//! Core math for the tracebar timeline scrollbar
//!
//! This crate holds the UI-independent parts of the timeline navigation
//! widget: range/value/scale bookkeeping, slider geometry, and the
//! aggregation of per-thread duration samples into color-batched heat bars.
//! Rendering lives in `tracebar-widgets`; everything here is pure data and
//! math so the scrollbar's behavior can be unit tested without a window.

pub mod color;
pub mod minimap;
pub mod range;

pub use color::{heat_rgb, hsv_to_rgb};
pub use minimap::{
    DurationSample, HeatBar, HeatRun, MinimapSource, ThreadId, MIN_BAR_HEIGHT,
};
pub use range::{RangeController, RenderContext, SliderGeometry, SPAN_EPSILON};
