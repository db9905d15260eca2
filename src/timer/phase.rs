use std::fmt;

use crate::error::ConfigError;

/// Default Pomodoro work period, in seconds.
pub const DEFAULT_WORK_SECS: u32 = 25;
/// Default Pomodoro break period, in seconds.
pub const DEFAULT_BREAK_SECS: u32 = 5;

/// Which half of a Pomodoro cycle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Work,
    Break,
}

impl PhaseKind {
    /// The other phase of the cycle.
    pub fn toggled(self) -> Self {
        match self {
            PhaseKind::Work => PhaseKind::Break,
            PhaseKind::Break => PhaseKind::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Work => "Work",
            PhaseKind::Break => "Break",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated phase lengths. Both are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    work_secs: u32,
    break_secs: u32,
}

impl Durations {
    /// Reject zero-length phases up front so `remaining / duration` is
    /// always defined.
    pub fn new(work_secs: u32, break_secs: u32) -> Result<Self, ConfigError> {
        if work_secs == 0 {
            return Err(ConfigError::ZeroDuration {
                phase: PhaseKind::Work,
            });
        }
        if break_secs == 0 {
            return Err(ConfigError::ZeroDuration {
                phase: PhaseKind::Break,
            });
        }
        Ok(Self {
            work_secs,
            break_secs,
        })
    }

    pub fn of(&self, phase: PhaseKind) -> u32 {
        match phase {
            PhaseKind::Work => self.work_secs,
            PhaseKind::Break => self.break_secs,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

/// Format a second count as zero-padded `MM:SS`.
///
/// Minutes are not wrapped at 60, so 3600 seconds renders as `60:00`.
pub fn format_countdown(remaining_secs: u32) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(PhaseKind::Work.toggled(), PhaseKind::Break);
        assert_eq!(PhaseKind::Break.toggled(), PhaseKind::Work);
    }

    #[test]
    fn durations_reject_zero_work() {
        assert_eq!(
            Durations::new(0, 5),
            Err(ConfigError::ZeroDuration {
                phase: PhaseKind::Work
            })
        );
    }

    #[test]
    fn durations_reject_zero_break() {
        assert_eq!(
            Durations::new(25, 0),
            Err(ConfigError::ZeroDuration {
                phase: PhaseKind::Break
            })
        );
    }

    #[test]
    fn durations_lookup_by_phase() {
        let d = Durations::new(1500, 300).unwrap();
        assert_eq!(d.of(PhaseKind::Work), 1500);
        assert_eq!(d.of(PhaseKind::Break), 300);
    }

    #[test]
    fn default_durations_match_constants() {
        let d = Durations::default();
        assert_eq!(d.of(PhaseKind::Work), DEFAULT_WORK_SECS);
        assert_eq!(d.of(PhaseKind::Break), DEFAULT_BREAK_SECS);
    }

    #[test]
    fn countdown_text_pads_both_fields() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(5), "00:05");
        assert_eq!(format_countdown(25), "00:25");
        assert_eq!(format_countdown(65), "01:05");
        assert_eq!(format_countdown(1500), "25:00");
    }

    #[test]
    fn countdown_text_does_not_wrap_hours() {
        assert_eq!(format_countdown(3600), "60:00");
        assert_eq!(format_countdown(6001), "100:01");
    }
}
