//! Stage timings and distances.
//!
//! Everything defaults to the values the experience ships with, so a config
//! file only needs the fields it changes:
//!
//! ```json
//! { "pin_margin": 80.0, "hall": { "card_stagger": 0.1 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StageError, StageResult};

/// Intro exit sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// Final zoom of the backdrop video
    pub video_scale: f64,
    pub video_duration: f64,
    /// Fade-out of heading, signature and button
    pub ui_fade: f64,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            video_scale: 2.5,
            video_duration: 2.0,
            ui_fade: 0.5,
        }
    }
}

/// Hall entry sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HallTiming {
    pub content_duration: f64,
    /// Distance the content rises from, in pixels
    pub content_rise: f64,
    pub card_duration: f64,
    pub card_delay: f64,
    pub card_stagger: f64,
    /// Scale the cards grow from
    pub card_scale: f64,
    pub card_overshoot: f64,
}

impl Default for HallTiming {
    fn default() -> Self {
        Self {
            content_duration: 1.5,
            content_rise: 50.0,
            card_duration: 0.8,
            card_delay: 1.0,
            card_stagger: 0.2,
            card_scale: 0.8,
            card_overshoot: 1.2,
        }
    }
}

/// Trailing section scroll reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// Window start, as a fraction of viewport width
    pub window_start: f64,
    pub window_end: f64,
    pub rise: f64,
    pub duration: f64,
    pub stagger: f64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            window_start: 0.8,
            window_end: 0.5,
            rise: 50.0,
            duration: 0.5,
            stagger: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Extra scroll distance after the last panel settles, in pixels
    pub pin_margin: f64,
    /// Scroll smoothing time, in seconds
    pub scrub: f64,
    /// Advance after this many seconds even if the intro exit never reports
    /// completion. Off unless set.
    pub exit_fallback: Option<f64>,
    pub intro: IntroTiming,
    pub hall: HallTiming,
    pub reveal: RevealTiming,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            pin_margin: 50.0,
            scrub: 0.5,
            exit_fallback: None,
            intro: IntroTiming::default(),
            hall: HallTiming::default(),
            reveal: RevealTiming::default(),
        }
    }
}

impl StageConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> StageResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> StageResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the stage cannot schedule.
    pub fn validate(&self) -> StageResult<()> {
        let durations = [
            ("pin_margin", self.pin_margin),
            ("scrub", self.scrub),
            ("intro.video_duration", self.intro.video_duration),
            ("intro.ui_fade", self.intro.ui_fade),
            ("hall.content_duration", self.hall.content_duration),
            ("hall.card_duration", self.hall.card_duration),
            ("hall.card_delay", self.hall.card_delay),
            ("hall.card_stagger", self.hall.card_stagger),
            ("reveal.duration", self.reveal.duration),
            ("reveal.stagger", self.reveal.stagger),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(StageError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }

        if let Some(fallback) = self.exit_fallback {
            if !fallback.is_finite() || fallback <= 0.0 {
                return Err(StageError::InvalidConfig(format!(
                    "exit_fallback must be positive (got {fallback})"
                )));
            }
        }

        let window = [self.reveal.window_start, self.reveal.window_end];
        if window.iter().any(|f| !f.is_finite() || !(0.0..=1.0).contains(f)) {
            return Err(StageError::InvalidConfig(
                "reveal window must lie within [0, 1]".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_timings() {
        let config = StageConfig::default();
        assert_eq!(config.pin_margin, 50.0);
        assert_eq!(config.scrub, 0.5);
        assert_eq!(config.exit_fallback, None);
        assert_eq!(config.intro.video_scale, 2.5);
        assert_eq!(config.hall.card_delay, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            StageConfig::from_json_str(r#"{"pin_margin": 80.0, "hall": {"card_stagger": 0.1}}"#)
                .unwrap();
        assert_eq!(config.pin_margin, 80.0);
        assert_eq!(config.hall.card_stagger, 0.1);
        assert_eq!(config.hall.card_duration, 0.8);
        assert_eq!(config.scrub, 0.5);
    }

    #[test]
    fn test_negative_durations_are_rejected() {
        let err = StageConfig::from_json_str(r#"{"scrub": -1.0}"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(msg) if msg.contains("scrub")));
    }

    #[test]
    fn test_zero_fallback_is_rejected() {
        let err = StageConfig::from_json_str(r#"{"exit_fallback": 0.0}"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)));
    }

    #[test]
    fn test_reveal_window_must_be_fractional() {
        let err = StageConfig::from_json_str(r#"{"reveal": {"window_start": 1.5}}"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stage.json");
        std::fs::write(&path, r#"{"exit_fallback": 1.8}"#).unwrap();
        let config = StageConfig::load(&path).unwrap();
        assert_eq!(config.exit_fallback, Some(1.8));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = StageConfig::load(Path::new("/nonexistent/stage.json")).unwrap_err();
        assert!(matches!(err, StageError::Io(_)));
    }
}
