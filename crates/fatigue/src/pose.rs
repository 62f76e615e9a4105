//! Head pose classification from landmark geometry

use crate::config::DetectorConfig;
use face_geometry::{indices, LandmarkSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

const MIN_DENOMINATOR: f32 = 1e-6;

/// Categorical head position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadPosition {
    #[default]
    Centered,
    Left,
    Right,
    #[serde(rename = "Far Left")]
    FarLeft,
    #[serde(rename = "Far Right")]
    FarRight,
    Up,
    Down,
}

impl fmt::Display for HeadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeadPosition::Centered => "Centered",
            HeadPosition::Left => "Left",
            HeadPosition::Right => "Right",
            HeadPosition::FarLeft => "Far Left",
            HeadPosition::FarRight => "Far Right",
            HeadPosition::Up => "Up",
            HeadPosition::Down => "Down",
        };
        f.write_str(s)
    }
}

/// Classify the head position for one frame.
///
/// Yaw is checked before pitch and the first threshold exceeded wins, so
/// the output is deterministic when both deviate. The yaw boundary is
/// inclusive: a ratio of exactly `1 + yaw_ratio_threshold` classifies as
/// turned. Missing landmarks or degenerate geometry fall back to `Centered`.
pub fn classify_head_position(landmarks: &LandmarkSet, config: &DetectorConfig) -> HeadPosition {
    match classify_inner(landmarks, config) {
        Some(position) => position,
        None => {
            warn!("head pose landmarks unavailable or degenerate, defaulting to Centered");
            HeadPosition::Centered
        }
    }
}

fn classify_inner(landmarks: &LandmarkSet, config: &DetectorConfig) -> Option<HeadPosition> {
    let nose = landmarks.get(indices::NOSE_TIP)?;
    let chin = landmarks.get(indices::CHIN)?;
    let left_ear = landmarks.get(indices::LEFT_EAR)?;
    let right_ear = landmarks.get(indices::RIGHT_EAR)?;
    let left_eye = landmarks.get(indices::LEFT_EYE_OUTER)?;
    let right_eye = landmarks.get(indices::RIGHT_EYE_OUTER)?;

    // Yaw: imbalance between the ear-to-nose distances
    let d_left = left_ear.distance(&nose);
    let d_right = right_ear.distance(&nose);
    if d_right < MIN_DENOMINATOR {
        return None;
    }
    let ratio = d_left / d_right;

    if ratio >= 1.0 + config.yaw_ratio_threshold {
        return Some(if nose.x > config.far_right_x {
            HeadPosition::FarRight
        } else {
            HeadPosition::Right
        });
    }
    if ratio <= 1.0 - config.yaw_ratio_threshold {
        return Some(if nose.x < config.far_left_x {
            HeadPosition::FarLeft
        } else {
            HeadPosition::Left
        });
    }

    // Pitch: nose offset below the eye line, normalized by face height
    let span = nose.distance(&chin);
    if span < MIN_DENOMINATOR {
        return None;
    }
    let eye_line_y = (left_eye.y + right_eye.y) / 2.0;
    let offset = (nose.y - eye_line_y) / span - config.neutral_pitch_offset;

    if offset > config.pitch_threshold {
        Some(HeadPosition::Down)
    } else if offset < -config.pitch_threshold {
        Some(HeadPosition::Up)
    } else {
        Some(HeadPosition::Centered)
    }
}
