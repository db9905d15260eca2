use std::time::{Duration, Instant};

/// Cadence of the countdown. One tick removes one second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle for the periodic tick source: either absent or scheduled.
///
/// Ticks are pulled by the event loop via [`TickSource::take_due`], so a
/// cancelled source can never deliver a late tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickSource {
    #[default]
    Idle,
    Active {
        next_due: Instant,
        period: Duration,
    },
}

impl TickSource {
    /// A source whose first tick is due one `period` after `now`.
    pub fn every(period: Duration, now: Instant) -> Self {
        TickSource::Active {
            next_due: now + period,
            period,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TickSource::Active { .. })
    }

    pub fn cancel(&mut self) {
        *self = TickSource::Idle;
    }

    /// Consume one tick if its deadline has passed.
    ///
    /// Call repeatedly to catch up after a slow frame; each call advances
    /// the deadline by exactly one period so no tick is lost or doubled.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self {
            TickSource::Idle => false,
            TickSource::Active { next_due, period } => {
                if now >= *next_due {
                    *next_due += *period;
                    true
                } else {
                    false
                }
            }
        }
    }
}
