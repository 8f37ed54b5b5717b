//! Canvas Program for the timeline scrollbar
//!
//! Implements the iced canvas `Program` trait for the scrollbar track:
//! click-to-jump and drag scrolling publish values through a callback
//! closure, a right press publishes the cursor point so the host can open
//! its thread menu, and `draw` renders the minimap heat runs, the main
//! slider and the chronometer indicator.

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};
use tracebar_core::{HeatRun, RenderContext, SliderGeometry};

use super::state::ScrollbarState;

/// Which slider variant is being painted; decides the vertical placement
/// of the collapse markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    /// The draggable visible-window slider (markers near the track top).
    Main,
    /// The chronometer span indicator (markers near the track bottom).
    Chrono,
}

/// Canvas state for tracking scrollbar pointer interaction
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollbarInteraction {
    /// Whether the primary button is down on the track (drag scrolling)
    pub is_scrolling: bool,
    /// Cursor x of the previous press/move event, for drag deltas
    pub last_x: f32,
}

/// Canvas program for the scrollbar track.
///
/// Takes two callback closures: `on_value_changed` receives a value
/// candidate on every press or drag step (the host clamps it through
/// `ScrollbarState::set_value` and forwards the result), and
/// `on_context_menu` receives the cursor point of a right press.
pub struct ScrollbarCanvas<'a, Message, ValueFn, MenuFn>
where
    ValueFn: Fn(f64) -> Message,
    MenuFn: Fn(Point) -> Message,
{
    pub state: &'a ScrollbarState,
    pub on_value_changed: ValueFn,
    pub on_context_menu: MenuFn,
}

impl<'a, Message, ValueFn, MenuFn> Program<Message> for ScrollbarCanvas<'a, Message, ValueFn, MenuFn>
where
    Message: Clone,
    ValueFn: Fn(f64) -> Message,
    MenuFn: Fn(Point) -> Message,
{
    type State = ScrollbarInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Some(position) = cursor.position_in(bounds) {
            match event {
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                    interaction.is_scrolling = true;
                    interaction.last_x = position.x;
                    let target = self.state.range().press_value(position.x as f64);
                    return Some(canvas::Action::publish((self.on_value_changed)(target)));
                }
                Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                    interaction.is_scrolling = false;
                }
                Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                    if interaction.is_scrolling {
                        let delta = position.x - interaction.last_x;
                        interaction.last_x = position.x;
                        let target = self.state.range().drag_value(delta as f64);
                        return Some(canvas::Action::publish((self.on_value_changed)(target)));
                    }
                }
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
                    return Some(canvas::Action::publish((self.on_context_menu)(position)));
                }
                _ => {}
            }
        } else if matches!(event, Event::Mouse(mouse::Event::ButtonReleased(_))) {
            interaction.is_scrolling = false;
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_scrolling {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let theme = self.state.theme();

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            theme.colors.background_color(),
        );

        // Scale is queried from the live bounds at paint time, so a resize
        // between events can never leave the track drawing stale.
        let ctx = self.state.range().render_context(bounds.width as f64);
        let track_height = bounds.height;

        if self.state.minimap_visible() {
            draw_minimap(
                &mut frame,
                &ctx,
                self.state.heat_runs(),
                track_height,
                theme.colors.heat_alpha,
            );
        }

        let range = self.state.range();
        let mut main = SliderGeometry::new();
        main.set_span(range.value(), range.value() + range.slider_width());
        draw_slider(
            &mut frame,
            &ctx,
            &main,
            SliderKind::Main,
            theme.colors.slider_color(),
            theme.layout.indicator_size,
            track_height,
        );

        if self.state.chronometer_visible() {
            draw_slider(
                &mut frame,
                &ctx,
                self.state.chronometer(),
                SliderKind::Chrono,
                theme.colors.chronometer_color(),
                theme.layout.indicator_size,
                track_height,
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Paint one slider rectangle spanning the full track height.
///
/// The rendered width is floored to exactly 1 device pixel, re-centered on
/// the true logical center, so the slider never disappears at extreme
/// zoom-out. Below the indicator threshold a pair of inward-pointing edge
/// markers keeps it locatable.
fn draw_slider(
    frame: &mut Frame,
    ctx: &RenderContext,
    geometry: &SliderGeometry,
    kind: SliderKind,
    color: Color,
    indicator_size: f32,
    track_height: f32,
) {
    let mut width = (geometry.width() * ctx.scale) as f32;
    let mut dx = 0.0f32;
    if width < 1.0 {
        dx = (width - 1.0) * 0.5;
        width = 1.0;
    }

    let left = dx + ctx.to_screen_x(geometry.left()) as f32;
    frame.fill_rectangle(
        Point::new(left, 0.0),
        Size::new(width, track_height),
        color,
    );

    let size = indicator_size;
    if width < size {
        let vcenter = match kind {
            SliderKind::Main => size,
            SliderKind::Chrono => track_height - size,
        };

        let left_marker = Path::new(|b| {
            b.move_to(Point::new(left, vcenter));
            b.line_to(Point::new(left - size, vcenter - size));
            b.line_to(Point::new(left - size, vcenter + size));
            b.close();
        });
        frame.fill(&left_marker, color);

        let right = left + width;
        let right_marker = Path::new(|b| {
            b.move_to(Point::new(right, vcenter));
            b.line_to(Point::new(right + size, vcenter - size));
            b.line_to(Point::new(right + size, vcenter + size));
            b.close();
        });
        frame.fill(&right_marker, color);
    }
}

/// Paint the minimap heat bars along the bottom of the track.
///
/// Bars are pre-grouped into runs of one quantized color; each run becomes
/// a single multi-rectangle path and one fill, so tens of thousands of
/// samples stay cheap. Bar widths are floored to 1 device pixel.
fn draw_minimap(
    frame: &mut Frame,
    ctx: &RenderContext,
    runs: &[HeatRun],
    track_height: f32,
    alpha: f32,
) {
    for run in runs {
        let color = Color::from_rgba8(run.rgb[0], run.rgb[1], run.rgb[2], alpha);
        let path = Path::new(|b| {
            for bar in &run.bars {
                let x = ctx.to_screen_x(bar.offset) as f32;
                let width = ((bar.width * ctx.scale) as f32).max(1.0);
                let height = bar.height as f32;
                b.rectangle(
                    Point::new(x, track_height - height),
                    Size::new(width, height),
                );
            }
        });
        frame.fill(&path, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ScrollbarTheme;

    // Rectangle math for the 1-px collapse, checked without a renderer.
    fn collapsed_rect(width_logical: f64, left_logical: f64, scale: f64) -> (f32, f32) {
        let ctx = RenderContext {
            scale,
            origin: 0.0,
        };
        let mut width = (width_logical * ctx.scale) as f32;
        let mut dx = 0.0f32;
        if width < 1.0 {
            dx = (width - 1.0) * 0.5;
            width = 1.0;
        }
        (dx + ctx.to_screen_x(left_logical) as f32, width)
    }

    #[test]
    fn test_sub_pixel_slider_clamps_to_one_centered_pixel() {
        // 50 logical units at scale 0.01 is half a device pixel.
        let (left, width) = collapsed_rect(50.0, 1000.0, 0.01);
        assert_eq!(width, 1.0);

        // The 1-px rect stays centered on the true logical center.
        let true_center = 1000.0 * 0.01 + 50.0 * 0.01 / 2.0;
        let rendered_center = left + width / 2.0;
        assert!((rendered_center - true_center as f32).abs() <= 0.5);
    }

    #[test]
    fn test_wide_slider_keeps_its_width() {
        let (left, width) = collapsed_rect(50.0, 100.0, 2.0);
        assert_eq!(width, 100.0);
        assert_eq!(left, 200.0);
    }

    #[test]
    fn test_marker_threshold() {
        let size = ScrollbarTheme::default().layout.indicator_size;
        // Markers are drawn iff the rendered width is below the threshold.
        let (_, narrow) = collapsed_rect(7.0, 0.0, 1.0);
        assert!(narrow < size);
        let (_, wide) = collapsed_rect(8.0, 0.0, 1.0);
        assert!(wide >= size);
    }
}
