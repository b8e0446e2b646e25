use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::Widget;

use crate::ui::display::{Gradient, SCALE_FULL};
use crate::ui::theme::blend;

const RINGS: usize = 6;
/// Portion of the available radius the circle may fill at full scale.
const FILL: f64 = 0.9;

/// Breathing circle: concentric rings shaded from the gradient's outer
/// colour to its inner one.
pub struct BreathingCircle {
    scale: f64,
    gradient: Gradient,
}

impl BreathingCircle {
    pub fn new(scale: f64, gradient: Gradient) -> Self {
        Self { scale, gradient }
    }
}

impl Widget for BreathingCircle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Terminal cells are about twice as tall as wide; doubling the
        // vertical span keeps the circle round.
        let half_width = area.width as f64 / 2.0;
        let half_height = area.height as f64;
        let max_radius = half_width.min(half_height) * FILL / SCALE_FULL;
        let radius = max_radius * self.scale;
        let gradient = self.gradient;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(move |ctx| {
                for ring in 0..RINGS {
                    let t = ring as f64 / RINGS as f64;
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: radius * (1.0 - t * 0.8),
                        color: blend(gradient.outer, gradient.inner, t),
                    });
                }
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: (radius * 0.05).max(0.5),
                    color: gradient.inner,
                });
            })
            .render(area, buf);
    }
}
