use std::time::{Duration, Instant};

use super::color::Rgb;

/// Seconds of animation per full unit of fraction change.
pub const DEFAULT_TIME_TO_FILL: f64 = 0.23;
/// Opacity of the track ring relative to the fill color.
pub const DEFAULT_TRACK_OPACITY: f64 = 0.2;

/// How a change of fraction should be animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Jump straight to the target.
    Instant,
    /// Interpolate over a fixed duration.
    Over(Duration),
    /// Duration proportional to the size of the jump: `|new - old| * time_to_fill`.
    Proportional,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSettings {
    pub time_to_fill: f64,
    pub track_opacity: f64,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            time_to_fill: DEFAULT_TIME_TO_FILL,
            track_opacity: DEFAULT_TRACK_OPACITY,
        }
    }
}

/// Clamp a fraction into 0.0..=1.0. NaN is treated as empty.
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Animated circular progress indicator.
///
/// Purely visual state: the displayed fill interpolates linearly from where
/// it was when the last target was set towards the new target. The ring
/// starts empty, like a freshly drawn progress view.
#[derive(Debug, Clone)]
pub struct ProgressRing {
    from: f64,
    target: f64,
    started: Instant,
    duration: Duration,
    fill: Rgb,
    track: Rgb,
    settings: RingSettings,
}

impl ProgressRing {
    pub fn new(settings: RingSettings, fill: Rgb, now: Instant) -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            started: now,
            duration: Duration::ZERO,
            fill,
            track: fill.with_opacity(settings.track_opacity),
            settings,
        }
    }

    /// Start animating from the currently displayed fraction to `fraction`.
    pub fn set_progress_at(&mut self, fraction: f64, animation: Animation, now: Instant) {
        let current = self.fraction_at(now);
        let target = clamp_fraction(fraction);

        self.duration = match animation {
            Animation::Instant => Duration::ZERO,
            Animation::Over(d) => d,
            Animation::Proportional => self.proportional_duration(current, target),
        };
        self.from = current;
        self.target = target;
        self.started = now;
    }

    fn proportional_duration(&self, from: f64, to: f64) -> Duration {
        let secs = (to - from).abs() * self.settings.time_to_fill;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }

    /// Fraction actually shown at `now`.
    pub fn fraction_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.target - self.from) * t
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Length of the animation currently in flight (or last run).
    #[cfg(test)]
    pub fn animation_duration(&self) -> Duration {
        self.duration
    }

    /// Set the fill color; the track follows at reduced opacity.
    pub fn set_fill_color(&mut self, color: Rgb) {
        self.fill = color;
        self.track = color.with_opacity(self.settings.track_opacity);
    }

    pub fn fill_color(&self) -> Rgb {
        self.fill
    }

    pub fn track_color(&self) -> Rgb {
        self.track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring(now: Instant) -> ProgressRing {
        ProgressRing::new(RingSettings::default(), Rgb::RED, now)
    }

    #[test]
    fn starts_empty() {
        let now = Instant::now();
        let r = ring(now);
        assert_eq!(r.fraction_at(now), 0.0);
    }

    #[test]
    fn instant_applies_immediately() {
        let now = Instant::now();
        let mut r = ring(now);
        r.set_progress_at(0.6, Animation::Instant, now);
        assert_eq!(r.fraction_at(now), 0.6);
        assert_eq!(r.animation_duration(), Duration::ZERO);
    }

    #[test]
    fn over_interpolates_linearly() {
        let t0 = Instant::now();
        let mut r = ring(t0);
        r.set_progress_at(1.0, Animation::Instant, t0);
        r.set_progress_at(0.5, Animation::Over(Duration::from_secs(1)), t0);

        let halfway = r.fraction_at(t0 + Duration::from_millis(500));
        assert!((halfway - 0.75).abs() < 1e-9);
        assert_eq!(r.fraction_at(t0 + Duration::from_secs(1)), 0.5);
        assert_eq!(r.fraction_at(t0 + Duration::from_secs(5)), 0.5);
    }

    #[test]
    fn retarget_mid_flight_starts_from_displayed_value() {
        let t0 = Instant::now();
        let mut r = ring(t0);
        r.set_progress_at(1.0, Animation::Over(Duration::from_secs(1)), t0);

        let t1 = t0 + Duration::from_millis(250);
        r.set_progress_at(0.0, Animation::Over(Duration::from_secs(1)), t1);
        assert!((r.fraction_at(t1) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn proportional_duration_scales_with_jump() {
        let t0 = Instant::now();
        let mut r = ring(t0);
        r.set_progress_at(1.0, Animation::Proportional, t0);
        assert_eq!(r.animation_duration(), Duration::from_secs_f64(0.23));

        let t1 = t0 + Duration::from_secs(1);
        r.set_progress_at(0.5, Animation::Proportional, t1);
        assert_eq!(r.animation_duration(), Duration::from_secs_f64(0.5 * 0.23));
    }

    #[test]
    fn proportional_with_no_change_is_instant() {
        let now = Instant::now();
        let mut r = ring(now);
        r.set_progress_at(0.0, Animation::Proportional, now);
        assert_eq!(r.animation_duration(), Duration::ZERO);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let now = Instant::now();
        let mut r = ring(now);
        r.set_progress_at(1.7, Animation::Instant, now);
        assert_eq!(r.target(), 1.0);
        r.set_progress_at(-0.3, Animation::Instant, now);
        assert_eq!(r.target(), 0.0);
        r.set_progress_at(f64::NAN, Animation::Instant, now);
        assert_eq!(r.target(), 0.0);
    }

    #[test]
    fn track_follows_fill_color() {
        let now = Instant::now();
        let mut r = ring(now);
        assert_eq!(r.track_color(), Rgb::RED.with_opacity(DEFAULT_TRACK_OPACITY));

        r.set_fill_color(Rgb::DARK_GREEN);
        assert_eq!(r.fill_color(), Rgb::DARK_GREEN);
        assert_eq!(r.track_color(), Rgb::DARK_GREEN.with_opacity(DEFAULT_TRACK_OPACITY));
    }

    proptest! {
        #[test]
        fn clamp_always_in_unit_range(f in proptest::num::f64::ANY) {
            let c = clamp_fraction(f);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn displayed_fraction_stays_between_endpoints(
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
            ms in 0u64..2000,
        ) {
            let t0 = Instant::now();
            let mut r = ring(t0);
            r.set_progress_at(a, Animation::Instant, t0);
            r.set_progress_at(b, Animation::Over(Duration::from_secs(1)), t0);
            let shown = r.fraction_at(t0 + Duration::from_millis(ms));
            prop_assert!(shown >= a.min(b) - 1e-12 && shown <= a.max(b) + 1e-12);
        }
    }
}
