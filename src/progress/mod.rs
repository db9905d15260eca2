pub mod color;
pub mod ring;

use std::time::Instant;

use color::Rgb;
use ring::{Animation, ProgressRing, RingSettings};

/// What the phase timer needs from whatever is displaying it.
pub trait ProgressSurface {
    /// Move the displayed fill towards `fraction` (clamped to 0.0..=1.0).
    fn set_progress(&mut self, fraction: f64, animation: Animation);

    /// Set the fill color. The track color is derived from it.
    fn set_fill_color(&mut self, color: Rgb);

    fn set_countdown_text(&mut self, text: &str);
}

/// The ring plus the countdown label, as drawn by the TUI.
#[derive(Debug, Clone)]
pub struct RingSurface {
    ring: ProgressRing,
    countdown: String,
}

impl RingSurface {
    pub fn new(settings: RingSettings, fill: Rgb) -> Self {
        Self {
            ring: ProgressRing::new(settings, fill, Instant::now()),
            countdown: String::new(),
        }
    }

    pub fn ring(&self) -> &ProgressRing {
        &self.ring
    }

    pub fn countdown(&self) -> &str {
        &self.countdown
    }
}

impl ProgressSurface for RingSurface {
    fn set_progress(&mut self, fraction: f64, animation: Animation) {
        self.ring.set_progress_at(fraction, animation, Instant::now());
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.ring.set_fill_color(color);
    }

    fn set_countdown_text(&mut self, text: &str) {
        text.clone_into(&mut self.countdown);
    }
}
