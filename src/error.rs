use thiserror::Error;

use crate::timer::phase::PhaseKind;

/// Reasons a configuration is rejected at startup.
///
/// These are the only fallible conditions in the timer itself; everything
/// downstream of a validated config is total.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A zero duration would make the progress fraction divide by zero.
    #[error("{phase} duration must be at least 1 second")]
    ZeroDuration { phase: PhaseKind },

    #[error("invalid color {value:?}: expected #rrggbb")]
    InvalidColor { value: String },

    #[error("ring time_to_fill must be a finite, non-negative number (got {value})")]
    InvalidFillRate { value: f64 },

    #[error("ring track_opacity must be within 0.0..=1.0 (got {value})")]
    InvalidOpacity { value: f64 },
}
