//! Scrollbar view functions
//!
//! Plain functions that take state references and callback closures and
//! return `Element`s, the idiomatic iced 0.14 pattern.
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! fn view(&self) -> Element<Message> {
//!     let scrollbar = timeline_scrollbar(
//!         &self.scrollbar,
//!         |value| Message::ScrollTo(value),
//!         |point| Message::OpenThreadMenu(point),
//!     );
//!
//!     column![main_chart, scrollbar].into()
//! }
//! ```

use iced::widget::{button, column, text, Canvas};
use iced::{Color, Element, Length, Point};
use tracebar_core::ThreadId;

use super::canvas::ScrollbarCanvas;
use super::state::ScrollbarState;

const MENU_TEXT_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);
const MENU_SELECTED_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.3);
const MENU_BG: Color = Color::from_rgb(0.15, 0.15, 0.17);

/// One row of the thread-selection menu, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadEntry {
    pub id: ThreadId,
    pub label: String,
}

impl ThreadEntry {
    /// Build an entry with the conventional label: "Name Thread N" when the
    /// thread has a name, "Thread N" otherwise.
    pub fn labelled(id: ThreadId, name: Option<&str>) -> Self {
        let label = match name {
            Some(name) if !name.is_empty() => format!("{} Thread {}", name, id),
            _ => format!("Thread {}", id),
        };
        Self { id, label }
    }
}

/// Create the scrollbar track element.
///
/// # Arguments
///
/// * `state` - The scrollbar state (range, chronometer, minimap runs, theme)
/// * `on_value_changed` - Called with a value candidate on press/drag; the
///   host clamps it through `ScrollbarState::set_value` and forwards the
///   returned authoritative value to its listeners
/// * `on_context_menu` - Called with the cursor point on a right press
pub fn timeline_scrollbar<'a, Message>(
    state: &'a ScrollbarState,
    on_value_changed: impl Fn(f64) -> Message + 'a,
    on_context_menu: impl Fn(Point) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let track_height = state.theme().layout.track_height;

    Canvas::new(ScrollbarCanvas {
        state,
        on_value_changed,
        on_context_menu,
    })
    .width(Length::Fill)
    .height(Length::Fixed(track_height))
    .into()
}

/// Create the thread-selection menu column.
///
/// The host supplies the `{ThreadId, label}` entries (it owns the trace
/// data) and the thread the minimap currently shows; that row is
/// highlighted. Selecting a row publishes `on_select(id)`; the host runs it
/// through `ScrollbarState::select_thread` so same-thread picks stay silent.
pub fn thread_menu<'a, Message>(
    entries: &'a [ThreadEntry],
    current: ThreadId,
    on_select: impl Fn(ThreadId) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let rows: Vec<Element<'a, Message>> = entries
        .iter()
        .map(|entry| {
            let selected = entry.id == current;
            let label_color = if selected {
                MENU_SELECTED_COLOR
            } else {
                MENU_TEXT_COLOR
            };

            button(text(entry.label.as_str()).size(11).color(label_color))
                .padding([2, 8])
                .style(|_, _| button::Style {
                    background: Some(MENU_BG.into()),
                    ..Default::default()
                })
                .on_press(on_select(entry.id))
                .into()
        })
        .collect();

    column(rows).spacing(2).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_entry_labels() {
        let named = ThreadEntry::labelled(ThreadId(4), Some("Render"));
        assert_eq!(named.label, "Render Thread 4");

        let unnamed = ThreadEntry::labelled(ThreadId(7), None);
        assert_eq!(unnamed.label, "Thread 7");

        let blank = ThreadEntry::labelled(ThreadId(9), Some(""));
        assert_eq!(blank.label, "Thread 9");
    }
}
