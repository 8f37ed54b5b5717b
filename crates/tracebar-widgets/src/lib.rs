//! iced widgets for the tracebar trace/profiling viewer
//!
//! This crate provides the timeline navigation scrollbar: a canvas-drawn
//! track with a draggable visible-window slider, a chronometer span
//! indicator, and a per-thread duration heat-map minimap.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: pure data (`ScrollbarState`), owned by the host
//!   application and mutated through explicit operations that return the
//!   authoritative clamped values
//! - **View functions**: take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: handle custom rendering and event-to-callback
//!   translation
//!
//! The range/scale/aggregation math lives in `tracebar-core` so it stays
//! testable without a window.

pub mod scrollbar;
pub mod theme;

// Re-export commonly used items
pub use scrollbar::{
    thread_menu, timeline_scrollbar, ScrollbarCanvas, ScrollbarInteraction, ScrollbarState,
    SliderKind, ThreadEntry,
};
pub use theme::{default_theme_path, load_theme, read_theme, ScrollbarTheme, ThemeError};

// Core types hosts need when feeding the widgets
pub use tracebar_core::{DurationSample, RangeController, ThreadId};
