//! Metrics snapshot handed to downstream consumers

use crate::pose::HeadPosition;
use serde::{Deserialize, Serialize};

/// Immutable per-frame metrics value, produced fresh on every processed
/// frame and passed by value to collaborators (broadcast, history,
/// alerting). Serializes to JSON with the wire field names below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Completed blinks in the sliding rate window (per minute)
    pub blink_rate: u32,
    /// Mean blink closure duration, seconds, rounded to 2dp
    pub eye_closure_duration: f64,
    /// Most frequent recent head position
    pub head_position: HeadPosition,
    /// Completed yawns in the sliding rate window (per minute)
    pub yawn_count: u32,
    /// Mean yawn duration, seconds
    pub yawn_duration: f64,
    /// Mouth aspect ratio for this frame
    pub current_mar: f32,
    /// Mouth currently open beyond the yawn threshold
    pub is_yawning: bool,
    /// Alertness score, 0 (worst) to 100 (fully alert)
    pub alertness: u8,
}

impl MetricsSnapshot {
    /// Snapshot for frames with no detected face: fully alert, centered,
    /// no events. Detection absence is not an error.
    pub fn neutral() -> Self {
        Self {
            blink_rate: 0,
            eye_closure_duration: 0.0,
            head_position: HeadPosition::Centered,
            yawn_count: 0,
            yawn_duration: 0.0,
            current_mar: 0.0,
            is_yawning: false,
            alertness: 100,
        }
    }
}

/// Round to two decimal places for reporting
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_snapshot() {
        let s = MetricsSnapshot::neutral();
        assert_eq!(s.alertness, 100);
        assert_eq!(s.head_position, HeadPosition::Centered);
        assert_eq!(s.blink_rate, 0);
        assert!(!s.is_yawning);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.126), 0.13);
        assert_eq!(round2(0.124), 0.12);
        assert_eq!(round2(3.0), 3.0);
    }

    #[test]
    fn test_wire_field_names() {
        let s = MetricsSnapshot {
            head_position: HeadPosition::FarLeft,
            ..MetricsSnapshot::neutral()
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["alertness"], 100);
        assert_eq!(json["head_position"], "Far Left");
        assert!(json.get("blink_rate").is_some());
        assert!(json.get("eye_closure_duration").is_some());
        assert!(json.get("yawn_count").is_some());
        assert!(json.get("yawn_duration").is_some());
        assert!(json.get("current_mar").is_some());
        assert!(json.get("is_yawning").is_some());
    }
}
