//! Detector configuration

use crate::FatigueError;
use serde::{Deserialize, Serialize};

/// Fatigue detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Average EAR below which the eyes count as closed
    pub ear_threshold: f32,

    /// MAR at or above which the mouth counts as open
    pub mar_threshold: f32,

    /// Minimum eye closure duration to count as a blink (seconds)
    pub min_blink_duration_secs: f64,

    /// Minimum mouth-open duration to count as a yawn (seconds)
    pub min_yawn_duration_secs: f64,

    /// Sliding window for per-minute rates (seconds)
    pub rate_window_secs: f64,

    /// Capacity of the blink/yawn timestamp windows
    pub event_history: usize,

    /// Capacity of the closure/yawn duration windows
    pub duration_history: usize,

    /// Capacity of the head position window
    pub head_history: usize,

    /// Ear-to-nose distance ratio deviation from 1.0 classifying Left/Right
    pub yaw_ratio_threshold: f32,

    /// Pitch deviation from the resting offset classifying Up/Down
    pub pitch_threshold: f32,

    /// Resting nose offset below the eye line, as a fraction of the
    /// nose-to-chin distance
    pub neutral_pitch_offset: f32,

    /// Nose x below this escalates Left to Far Left (frame fraction)
    pub far_left_x: f32,

    /// Nose x above this escalates Right to Far Right (frame fraction)
    pub far_right_x: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ear_threshold: 0.25,
            mar_threshold: 0.6,
            min_blink_duration_secs: 0.15,
            min_yawn_duration_secs: 1.0,
            rate_window_secs: 60.0,
            event_history: 100,
            duration_history: 10,
            head_history: 10,
            yaw_ratio_threshold: 0.2,
            pitch_threshold: 0.15,
            neutral_pitch_offset: 0.5,
            far_left_x: 0.35,
            far_right_x: 0.65,
        }
    }
}

impl DetectorConfig {
    /// Create strict config (more sensitive thresholds)
    pub fn strict() -> Self {
        Self {
            ear_threshold: 0.22,
            min_yawn_duration_secs: 0.8,
            yaw_ratio_threshold: 0.15,
            pitch_threshold: 0.1,
            ..Default::default()
        }
    }

    /// Create lenient config (less sensitive thresholds)
    pub fn lenient() -> Self {
        Self {
            ear_threshold: 0.2,
            min_yawn_duration_secs: 1.5,
            yaw_ratio_threshold: 0.3,
            pitch_threshold: 0.2,
            ..Default::default()
        }
    }

    /// Load configuration from a file, falling back to defaults for any
    /// field the file does not set
    pub fn from_file(path: &str) -> Result<Self, FatigueError> {
        let defaults = config::Config::try_from(&Self::default())
            .map_err(|e| FatigueError::Config(e.to_string()))?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| FatigueError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FatigueError::Config(e.to_string()))
    }
}
