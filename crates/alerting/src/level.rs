//! Alert level evaluation against the threshold table

use fatigue::MetricsSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity, ordered so the highest violated level wins
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        };
        f.write_str(s)
    }
}

/// Fixed threshold table for snapshot evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Blink rate below this is a warning (blinks/min)
    pub blink_rate_min: u32,
    /// Blink rate above this is a warning (blinks/min)
    pub blink_rate_max: u32,
    /// Mean eye closure above this is danger (seconds)
    pub eye_closure_max_secs: f64,
    /// Alertness below this raises danger
    pub alertness_danger: u8,
    /// Alertness below this raises a warning
    pub alertness_warning: u8,
    /// Alertness must recover past this to clear a danger (hysteresis)
    pub alertness_danger_clear: u8,
    /// Alertness must recover past this to clear a warning (hysteresis)
    pub alertness_warning_clear: u8,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            blink_rate_min: 10,
            blink_rate_max: 30,
            eye_closure_max_secs: 0.3,
            alertness_danger: 60,
            alertness_warning: 80,
            alertness_danger_clear: 70,
            alertness_warning_clear: 85,
        }
    }
}

/// Evaluate a snapshot against the raise thresholds. Pure; returns the
/// highest violated level and a human-readable message listing every
/// violated threshold.
pub fn evaluate(snapshot: &MetricsSnapshot, thresholds: &AlertThresholds) -> (AlertLevel, String) {
    classify(
        snapshot,
        thresholds,
        thresholds.alertness_danger,
        thresholds.alertness_warning,
    )
}

/// Evaluate with the clear (recovery) margins substituted for the alertness
/// thresholds: the level the metrics still support once an alert is active.
pub(crate) fn evaluate_clear(
    snapshot: &MetricsSnapshot,
    thresholds: &AlertThresholds,
) -> AlertLevel {
    classify(
        snapshot,
        thresholds,
        thresholds.alertness_danger_clear,
        thresholds.alertness_warning_clear,
    )
    .0
}

fn classify(
    snapshot: &MetricsSnapshot,
    thresholds: &AlertThresholds,
    danger_below: u8,
    warning_below: u8,
) -> (AlertLevel, String) {
    let mut level = AlertLevel::Normal;
    let mut reasons = Vec::new();

    if snapshot.alertness < danger_below {
        level = level.max(AlertLevel::Danger);
        reasons.push(format!("Low alertness level: {}%", snapshot.alertness));
    } else if snapshot.alertness < warning_below {
        level = level.max(AlertLevel::Warning);
        reasons.push(format!("Reduced alertness level: {}%", snapshot.alertness));
    }

    if snapshot.eye_closure_duration > thresholds.eye_closure_max_secs {
        level = level.max(AlertLevel::Danger);
        reasons.push("Eyes closed too long".to_string());
    }

    if snapshot.blink_rate < thresholds.blink_rate_min {
        level = level.max(AlertLevel::Warning);
        reasons.push("Blink rate too low".to_string());
    } else if snapshot.blink_rate > thresholds.blink_rate_max {
        level = level.max(AlertLevel::Warning);
        reasons.push("Blink rate too high".to_string());
    }

    let message = if reasons.is_empty() {
        "All metrics normal".to_string()
    } else {
        reasons.join(" | ")
    };

    (level, message)
}
