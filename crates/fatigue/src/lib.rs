//! Driver Fatigue Detection
//!
//! Real-time driver fatigue estimation from facial video:
//! - Eye closure and blink tracking (EAR)
//! - Yawn detection (MAR)
//! - Head pose classification
//! - Heuristic alertness scoring with rolling-window statistics
//!
//! The landmark detector is an external capability supplied through the
//! [`LandmarkDetector`] trait. One [`FatigueMonitor`] instance owns the
//! temporal state for one camera session; hosts running several sessions
//! create one monitor per session.

pub mod config;
pub mod frame;
pub mod metrics;
pub mod pose;
pub mod scorer;
pub mod signals;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::DetectorConfig;
pub use frame::VideoFrame;
pub use metrics::MetricsSnapshot;
pub use pose::HeadPosition;
pub use tracker::EventTracker;

use face_geometry::{LandmarkSet, DEFAULT_MAR};
use thiserror::Error;
use tracing::info;

/// Fatigue engine error types. Only construction-time paths return these;
/// per-frame problems degrade to safe defaults so the temporal state
/// machines keep running across glitchy frames.
#[derive(Error, Debug)]
pub enum FatigueError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// External face-landmark capability: given a frame, return the keypoints
/// of at most one tracked face, or `None` when no face is visible.
pub trait LandmarkDetector {
    fn detect(&mut self, frame: &VideoFrame) -> Option<LandmarkSet>;
}

/// Per-session fatigue monitor. Runs the full per-frame pipeline
/// (signal extraction, event tracking, pose classification, scoring,
/// annotation) and exposes session-lifetime read accessors on its single
/// long-lived tracker.
pub struct FatigueMonitor<D> {
    config: DetectorConfig,
    detector: D,
    tracker: EventTracker,
    last_seen: f64,
    last_mar: f32,
}

impl<D: LandmarkDetector> FatigueMonitor<D> {
    /// Create a monitor for one camera session
    pub fn new(config: DetectorConfig, detector: D) -> Self {
        info!(
            ear_threshold = config.ear_threshold,
            mar_threshold = config.mar_threshold,
            "creating fatigue monitor"
        );
        let tracker = EventTracker::new(&config);
        Self {
            config,
            detector,
            tracker,
            last_seen: 0.0,
            last_mar: DEFAULT_MAR,
        }
    }

    /// Process one frame: detect landmarks, update temporal state, score,
    /// and draw the overlay in place. Never fails; a frame without a
    /// usable face yields the neutral snapshot.
    pub fn process_frame(&mut self, frame: &mut VideoFrame) -> MetricsSnapshot {
        let now = frame.timestamp_secs();
        self.last_seen = now;

        let landmarks = match self.detector.detect(frame) {
            Some(set) if !set.is_empty() => set,
            _ => {
                let snapshot = MetricsSnapshot::neutral();
                frame::annotate(frame, None, &snapshot, false);
                return snapshot;
            }
        };

        // Fail-soft: missing subsets fall back to neutral signals
        let eyes_closed = signals::extract_eyes(&landmarks, &self.config)
            .map(|e| e.closed)
            .unwrap_or(false);
        let (mar, mouth_open) = signals::extract_mouth(&landmarks, &self.config)
            .map(|m| (m.mar, m.open))
            .unwrap_or((DEFAULT_MAR, false));
        self.last_mar = mar;

        self.tracker.update_eyes(now, eyes_closed);
        self.tracker.update_mouth(now, mouth_open);

        let position = pose::classify_head_position(&landmarks, &self.config);
        self.tracker.record_head_position(position);

        let snapshot = self.assemble_snapshot(now);
        frame::annotate(frame, Some(&landmarks), &snapshot, eyes_closed);
        snapshot
    }

    fn assemble_snapshot(&self, now: f64) -> MetricsSnapshot {
        let blink_rate = self.tracker.blink_rate(now);
        let yawn_count = self.tracker.yawn_rate(now);
        let yawn_duration = self.tracker.mean_yawn_duration();
        let head_position = self.tracker.mode_head_position();

        let alertness = scorer::alertness_score(
            self.tracker.eyes_closed(),
            blink_rate,
            yawn_count,
            yawn_duration,
            head_position,
        );

        MetricsSnapshot {
            blink_rate,
            eye_closure_duration: metrics::round2(self.tracker.mean_closure_duration()),
            head_position,
            yawn_count,
            yawn_duration,
            current_mar: self.last_mar,
            is_yawning: self.tracker.mouth_open(),
            alertness,
        }
    }

    /// Current metrics without processing a frame, for periodic reporting
    /// (broadcast, history) between frames
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.assemble_snapshot(self.last_seen)
    }

    /// Blinks per minute as of the last processed frame
    pub fn blink_rate(&self) -> u32 {
        self.tracker.blink_rate(self.last_seen)
    }

    /// Yawns per minute as of the last processed frame
    pub fn yawn_rate(&self) -> u32 {
        self.tracker.yawn_rate(self.last_seen)
    }

    /// Most frequent recent head position
    pub fn head_position(&self) -> HeadPosition {
        self.tracker.mode_head_position()
    }

    /// Mean blink closure duration in seconds
    pub fn mean_closure_duration(&self) -> f64 {
        self.tracker.mean_closure_duration()
    }

    /// Mean yawn duration in seconds
    pub fn mean_yawn_duration(&self) -> f64 {
        self.tracker.mean_yawn_duration()
    }

    /// Reset temporal state (driver change, new session)
    pub fn reset(&mut self) {
        self.tracker.reset(&self.config);
        self.last_mar = DEFAULT_MAR;
    }
}
