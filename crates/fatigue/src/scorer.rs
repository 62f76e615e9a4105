//! Heuristic alertness scoring
//!
//! An interpretable additive model, not a trained classifier: each fatigue
//! indicator subtracts a fixed penalty from a starting score of 100 and the
//! result is clamped to [0, 100]. Penalties are independent, so application
//! order does not matter.

use crate::pose::HeadPosition;

const EYES_CLOSED_PENALTY: i32 = 30;
const LOW_BLINK_RATE_PENALTY: i32 = 20;
const HIGH_BLINK_RATE_PENALTY: i32 = 30;
const FREQUENT_YAWN_PENALTY: i32 = 25;
const OCCASIONAL_YAWN_PENALTY: i32 = 15;
const LONG_YAWN_PENALTY: i32 = 20;
const MODERATE_YAWN_PENALTY: i32 = 10;
const HEAD_AWAY_PENALTY: i32 = 20;

const LOW_BLINK_RATE: u32 = 10;
const HIGH_BLINK_RATE: u32 = 30;
const FREQUENT_YAWNS: u32 = 3;
const OCCASIONAL_YAWNS: u32 = 1;
const LONG_YAWN_SECS: f64 = 4.0;
const MODERATE_YAWN_SECS: f64 = 2.5;

/// Compute the alertness score in [0, 100] from the current eye state and
/// the tracker's rolling statistics. Lower is worse.
pub fn alertness_score(
    eyes_closed: bool,
    blink_rate: u32,
    yawn_rate: u32,
    mean_yawn_duration: f64,
    head_position: HeadPosition,
) -> u8 {
    let mut score: i32 = 100;

    if eyes_closed {
        score -= EYES_CLOSED_PENALTY;
    }

    if blink_rate < LOW_BLINK_RATE {
        score -= LOW_BLINK_RATE_PENALTY;
    } else if blink_rate > HIGH_BLINK_RATE {
        score -= HIGH_BLINK_RATE_PENALTY;
    }

    if yawn_rate > FREQUENT_YAWNS {
        score -= FREQUENT_YAWN_PENALTY;
    } else if yawn_rate > OCCASIONAL_YAWNS {
        score -= OCCASIONAL_YAWN_PENALTY;
    }

    if mean_yawn_duration > LONG_YAWN_SECS {
        score -= LONG_YAWN_PENALTY;
    } else if mean_yawn_duration > MODERATE_YAWN_SECS {
        score -= MODERATE_YAWN_PENALTY;
    }

    if head_position != HeadPosition::Centered {
        score -= HEAD_AWAY_PENALTY;
    }

    score.clamp(0, 100) as u8
}
