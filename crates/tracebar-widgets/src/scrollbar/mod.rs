//! Timeline scrollbar components
//!
//! A horizontal scrollbar for panning and zooming across a long trace time
//! range, with a draggable slider for the visible window, a chronometer
//! span indicator, and a per-thread heat-map minimap under the track.
//!
//! Following idiomatic iced patterns, this module separates concerns:
//!
//! - **State struct** (`ScrollbarState`): pure data, mutated by the host
//! - **View functions** (`timeline_scrollbar`, `thread_menu`): take state +
//!   callbacks, return `Element<Message>`
//! - **Canvas Program** (`ScrollbarCanvas`): custom rendering and
//!   event-to-callback translation

mod canvas;
mod state;
mod view;

pub use state::ScrollbarState;
pub use view::{thread_menu, timeline_scrollbar, ThreadEntry};

// Re-export canvas types for advanced usage (custom Program state)
pub use canvas::{ScrollbarCanvas, ScrollbarInteraction, SliderKind};
