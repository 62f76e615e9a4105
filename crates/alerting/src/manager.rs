//! Alert state management: hysteresis and duplicate suppression

use crate::level::{evaluate, evaluate_clear, AlertLevel, AlertThresholds};
use fatigue::MetricsSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// An alert transition worth emitting downstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub level: AlertLevel,
    pub message: String,
}

/// Tracks the active alert level across snapshots. Raising is immediate;
/// clearing requires the metrics to recover past the clear margins, so a
/// reading hovering around a threshold cannot flap. Re-observing an
/// already-active level emits nothing.
pub struct AlertManager {
    thresholds: AlertThresholds,
    active: AlertLevel,
    fire_count: usize,
}

impl AlertManager {
    /// Create a manager with the given threshold table
    pub fn new(thresholds: AlertThresholds) -> Self {
        info!(?thresholds, "creating alert manager");
        Self {
            thresholds,
            active: AlertLevel::Normal,
            fire_count: 0,
        }
    }

    /// Feed one snapshot. Returns an event only when the active level
    /// escalates; duplicate observations and recoveries are suppressed.
    pub fn observe(&mut self, snapshot: &MetricsSnapshot) -> Option<AlertEvent> {
        let (raised, message) = evaluate(snapshot, &self.thresholds);
        let floor = evaluate_clear(snapshot, &self.thresholds);

        // The level may rise to whatever the raise thresholds demand, but
        // only falls once the clear margins stop supporting it.
        let next = raised.max(self.active.min(floor));

        if next > self.active {
            self.active = next;
            self.fire_count += 1;
            info!(level = %next, %message, "alert raised");
            return Some(AlertEvent {
                level: next,
                message,
            });
        }

        if next < self.active {
            info!(from = %self.active, to = %next, "alert cleared");
            self.active = next;
        } else if next != AlertLevel::Normal {
            debug!(level = %next, "alert still active, duplicate suppressed");
        }

        None
    }

    /// Currently active alert level
    pub fn active_level(&self) -> AlertLevel {
        self.active
    }

    /// Number of alerts raised over the manager's lifetime
    pub fn fire_count(&self) -> usize {
        self.fire_count
    }

    /// Drop any active alert (session end, driver change)
    pub fn clear(&mut self) {
        self.active = AlertLevel::Normal;
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new(AlertThresholds::default())
    }
}
