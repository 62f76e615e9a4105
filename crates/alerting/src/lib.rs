//! Fatigue Alerting
//!
//! Maps metrics snapshots to alert levels against a fixed threshold table,
//! with hysteresis (raise and clear thresholds differ) and duplicate
//! suppression while a level stays active.

mod level;
mod manager;

pub use level::{evaluate, AlertLevel, AlertThresholds};
pub use manager::{AlertEvent, AlertManager};
