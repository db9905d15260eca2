pub mod phase;
pub mod ticker;

use std::time::Instant;

use tracing::{debug, info};

use crate::progress::color::Palette;
use crate::progress::ring::Animation;
use crate::progress::ProgressSurface;
use phase::{format_countdown, Durations, PhaseKind};
use ticker::{TickSource, TICK_PERIOD};

/// Countdown state owned by the [`PhaseTimer`].
///
/// `remaining_secs` never exceeds the duration of `phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub phase: PhaseKind,
    pub remaining_secs: u32,
    pub is_running: bool,
}

impl TimerState {
    /// Paused at the top of a work period.
    pub fn fresh(durations: &Durations) -> Self {
        Self {
            phase: PhaseKind::Work,
            remaining_secs: durations.of(PhaseKind::Work),
            is_running: false,
        }
    }
}

/// Periods that ran all the way down during this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub work_completed: u32,
    pub breaks_completed: u32,
}

/// The Pomodoro state machine.
///
/// Owns the countdown and the tick source, and pushes every visible change
/// (fraction, fill color, countdown text) to its surface.
pub struct PhaseTimer<S: ProgressSurface> {
    state: TimerState,
    durations: Durations,
    palette: Palette,
    ticker: TickSource,
    stats: CycleStats,
    surface: S,
}

impl<S: ProgressSurface> PhaseTimer<S> {
    pub fn new(durations: Durations, palette: Palette, surface: S) -> Self {
        let mut timer = Self {
            state: TimerState::fresh(&durations),
            durations,
            palette,
            ticker: TickSource::Idle,
            stats: CycleStats::default(),
            surface,
        };

        timer
            .surface
            .set_fill_color(timer.palette.color_of(PhaseKind::Work));
        timer.emit_countdown();
        timer.surface.set_progress(1.0, Animation::Proportional);
        timer
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    #[cfg(test)]
    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Remaining time as a fraction of the current phase, in 0.0..=1.0.
    pub fn fraction(&self) -> f64 {
        f64::from(self.state.remaining_secs) / f64::from(self.durations.of(self.state.phase))
    }

    pub fn start(&mut self, now: Instant) {
        if self.state.is_running {
            return;
        }
        self.ticker = TickSource::every(TICK_PERIOD, now);
        self.state.is_running = true;
        info!(
            phase = %self.state.phase,
            remaining = self.state.remaining_secs,
            "timer started"
        );
    }

    pub fn pause(&mut self) {
        self.ticker.cancel();
        self.state.is_running = false;
        info!(
            phase = %self.state.phase,
            remaining = self.state.remaining_secs,
            "timer paused"
        );
    }

    /// Stop and return to a full work period, snapping the ring to full.
    pub fn reset(&mut self) {
        // Cancel before touching state so no queued tick sees the reset values.
        self.ticker.cancel();
        self.state = TimerState::fresh(&self.durations);

        self.surface
            .set_fill_color(self.palette.color_of(PhaseKind::Work));
        self.emit_countdown();
        self.surface.set_progress(1.0, Animation::Instant);
        info!("timer reset");
    }

    /// Play/pause button. Resuming from `00:00` refills the current phase first.
    pub fn toggle_running(&mut self, now: Instant) {
        if self.state.is_running {
            self.pause();
            return;
        }

        if self.state.remaining_secs == 0 {
            self.state.remaining_secs = self.durations.of(self.state.phase);
            self.emit_countdown();
            let fraction = self.fraction();
            self.surface.set_progress(fraction, Animation::Proportional);
        }
        self.start(now);
    }

    /// Advance one second. Returns `false` if the timer is stopped and the
    /// tick was ignored.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running {
            debug!("ignoring tick while stopped");
            return false;
        }

        if self.state.remaining_secs > 0 {
            self.state.remaining_secs -= 1;
        } else {
            self.switch_phase();
        }

        let fraction = self.fraction();
        self.surface
            .set_progress(fraction, Animation::Over(TICK_PERIOD));
        self.emit_countdown();
        debug!(
            phase = %self.state.phase,
            remaining = self.state.remaining_secs,
            "tick"
        );
        true
    }

    /// Deliver every tick that has come due by `now`. Returns how many ran.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut delivered = 0;
        while self.ticker.take_due(now) {
            if self.tick() {
                delivered += 1;
            }
        }
        delivered
    }

    fn switch_phase(&mut self) {
        let finished = self.state.phase;
        match finished {
            PhaseKind::Work => self.stats.work_completed += 1,
            PhaseKind::Break => self.stats.breaks_completed += 1,
        }

        let next = finished.toggled();
        self.state.phase = next;
        self.state.remaining_secs = self.durations.of(next);
        self.surface.set_fill_color(self.palette.color_of(next));
        info!(from = %finished, to = %next, "phase switched");
    }

    fn emit_countdown(&mut self) {
        let text = format_countdown(self.state.remaining_secs);
        self.surface.set_countdown_text(&text);
    }
}
