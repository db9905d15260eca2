use std::f64::consts::TAU;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::Widget;

use crate::progress::ring::clamp_fraction;

/// Dots sampled around a full turn. Plenty for a braille canvas.
const SAMPLES: usize = 720;
/// Radii of the concentric passes that give the ring its stroke width.
const STROKE_RADII: [f64; 3] = [0.90, 0.94, 0.98];

/// Circular progress ring: a dim full-circle track with a bright arc on top.
///
/// The arc starts at 12 o'clock and runs clockwise, covering
/// `fraction * 360°`.
pub struct RingWidget {
    fraction: f64,
    fill: Color,
    track: Color,
}

impl RingWidget {
    pub fn new(fraction: f64, fill: Color, track: Color) -> Self {
        Self {
            fraction: clamp_fraction(fraction),
            fill,
            track,
        }
    }
}

/// Points along a clockwise arc from the top of a circle of `radius`.
pub fn arc_points(fraction: f64, radius: f64, samples: usize) -> Vec<(f64, f64)> {
    let count = (samples as f64 * clamp_fraction(fraction)).round() as usize;
    (0..count)
        .map(|i| {
            let angle = i as f64 / samples as f64 * TAU;
            (radius * angle.sin(), radius * angle.cos())
        })
        .collect()
}

/// Canvas bounds that keep the circle round inside `area`.
///
/// Braille packs 2×4 dots into a cell that is about twice as tall as it is
/// wide, so dots are roughly square and the dot grid's aspect ratio is what
/// matters.
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let dots_wide = f64::from(area.width.max(1)) * 2.0;
    let dots_high = f64::from(area.height.max(1)) * 4.0;
    let aspect = dots_wide / dots_high;

    if aspect >= 1.0 {
        ([-aspect, aspect], [-1.0, 1.0])
    } else {
        ([-1.0, 1.0], [-1.0 / aspect, 1.0 / aspect])
    }
}

impl Widget for RingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track: Vec<(f64, f64)> = STROKE_RADII
            .iter()
            .flat_map(|&r| arc_points(1.0, r, SAMPLES))
            .collect();
        let arc: Vec<(f64, f64)> = STROKE_RADII
            .iter()
            .flat_map(|&r| arc_points(self.fraction, r, SAMPLES))
            .collect();

        let (x_bounds, y_bounds) = canvas_bounds(area);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: self.track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &arc,
                    color: self.fill,
                });
            })
            .render(area, buf);
    }
}
