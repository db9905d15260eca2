use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::progress::color::{Palette, Rgb};
use crate::progress::ring::{RingSettings, DEFAULT_TIME_TO_FILL, DEFAULT_TRACK_OPACITY};
use crate::timer::phase::{Durations, DEFAULT_BREAK_SECS, DEFAULT_WORK_SECS};

/// Application configuration, loaded from config.toml.
///
/// Every section uses `#[serde(default)]`, so a missing file or a file
/// that only sets a couple of fields still yields a complete config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    pub ring: RingConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub work_secs: u32,
    pub break_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Seconds of animation per full ring of change, for jumps outside the
    /// regular tick.
    pub time_to_fill: f64,
    /// Track ring opacity relative to the fill color.
    pub track_opacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub work_color: Rgb,
    pub break_color: Rgb,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            time_to_fill: DEFAULT_TIME_TO_FILL,
            track_opacity: DEFAULT_TRACK_OPACITY,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            work_color: palette.work,
            break_color: palette.rest,
        }
    }
}

/// Everything the timer screen needs, checked once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub durations: Durations,
    pub palette: Palette,
    pub ring: RingSettings,
}

impl AppConfig {
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let durations = Durations::new(self.timer.work_secs, self.timer.break_secs)?;

        let time_to_fill = self.ring.time_to_fill;
        if !time_to_fill.is_finite() || time_to_fill < 0.0 {
            return Err(ConfigError::InvalidFillRate {
                value: time_to_fill,
            });
        }

        let track_opacity = self.ring.track_opacity;
        if !(0.0..=1.0).contains(&track_opacity) {
            return Err(ConfigError::InvalidOpacity {
                value: track_opacity,
            });
        }

        Ok(Settings {
            durations,
            palette: Palette {
                work: self.theme.work_color,
                rest: self.theme.break_color,
            },
            ring: RingSettings {
                time_to_fill,
                track_opacity,
            },
        })
    }
}

/// Load the config from `path`. A missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::phase::PhaseKind;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.timer.work_secs, 25);
        assert_eq!(cfg.timer.break_secs, 5);
        assert_eq!(cfg.ring.time_to_fill, 0.23);
        assert_eq!(cfg.theme.break_color, Rgb::DARK_GREEN);
    }

    #[test]
    fn parse_partial_toml() {
        // Unspecified fields fall back to defaults
        let toml_str = r#"
[timer]
work_secs = 1500
"#;
        let cfg: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.timer.work_secs, 1500);
        assert_eq!(cfg.timer.break_secs, 5);
        assert_eq!(cfg.ring.track_opacity, 0.2);
        assert_eq!(cfg.theme.work_color, Rgb::RED);
    }

    #[test]
    fn parse_theme_colors() {
        let toml_str = r##"
[theme]
work_color = "#ff8800"
"##;
        let cfg: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.theme.work_color, Rgb::new(0xff, 0x88, 0x00));
    }

    #[test]
    fn bad_color_fails_to_parse() {
        let toml_str = r#"
[theme]
break_color = "green"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn negative_duration_fails_to_parse() {
        let toml_str = r#"
[timer]
break_secs = -5
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.timer.work_secs = 0;
        assert_eq!(
            cfg.settings(),
            Err(ConfigError::ZeroDuration {
                phase: PhaseKind::Work
            })
        );
    }

    #[test]
    fn bad_ring_values_are_rejected() {
        let mut cfg = AppConfig::default();
        cfg.ring.time_to_fill = -1.0;
        assert!(matches!(
            cfg.settings(),
            Err(ConfigError::InvalidFillRate { .. })
        ));

        let mut cfg = AppConfig::default();
        cfg.ring.track_opacity = 1.5;
        assert!(matches!(
            cfg.settings(),
            Err(ConfigError::InvalidOpacity { .. })
        ));
    }

    #[test]
    fn default_settings_validate() {
        let settings = AppConfig::default().settings().unwrap();
        assert_eq!(settings.durations, Durations::default());
        assert_eq!(settings.palette, Palette::default());
        assert_eq!(settings.ring, RingSettings::default());
    }

    #[test]
    fn roundtrip_toml() {
        let cfg = AppConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        assert!(toml_str.contains("work_color = \"#ff0000\""));
        let loaded: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.theme.break_color, cfg.theme.break_color);
        assert_eq!(loaded.timer.work_secs, cfg.timer.work_secs);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(cfg.timer.work_secs, 25);
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[timer]\nbreak_secs = 300\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.timer.break_secs, 300);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[timer\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
