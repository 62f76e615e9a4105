//! Temporal event tracking
//!
//! Two parallel onset/offset state machines turn instantaneous eye and
//! mouth signals into discrete blink and yawn events with durations, held
//! in bounded rolling windows. All timestamps come from the caller (frame
//! clock), which keeps the machines deterministic under test.

use crate::config::DetectorConfig;
use crate::pose::HeadPosition;
use rolling_window::BoundedWindow;
use tracing::debug;

/// Per-session temporal state. Owned exclusively by one monitor instance;
/// mutated on every processed frame, discarded when the session ends.
#[derive(Debug, Clone)]
pub struct EventTracker {
    eyes_closed: bool,
    eye_closure_start: Option<f64>,
    blink_times: BoundedWindow<f64>,
    eye_closure_durations: BoundedWindow<f64>,

    mouth_open: bool,
    yawn_start: Option<f64>,
    yawn_times: BoundedWindow<f64>,
    yawn_durations: BoundedWindow<f64>,

    head_positions: BoundedWindow<HeadPosition>,

    min_blink_duration: f64,
    min_yawn_duration: f64,
    rate_window: f64,
}

impl EventTracker {
    /// Create a tracker for one monitoring session
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            eyes_closed: false,
            eye_closure_start: None,
            blink_times: BoundedWindow::new(config.event_history),
            eye_closure_durations: BoundedWindow::new(config.duration_history),
            mouth_open: false,
            yawn_start: None,
            yawn_times: BoundedWindow::new(config.event_history),
            yawn_durations: BoundedWindow::new(config.duration_history),
            head_positions: BoundedWindow::new(config.head_history),
            min_blink_duration: config.min_blink_duration_secs,
            min_yawn_duration: config.min_yawn_duration_secs,
            rate_window: config.rate_window_secs,
        }
    }

    /// Advance the blink state machine. A closure only counts as a blink
    /// when it outlasts the minimum duration, which filters single-frame
    /// detector noise.
    pub fn update_eyes(&mut self, now: f64, closed: bool) {
        if closed && !self.eyes_closed {
            self.eye_closure_start = Some(now);
        } else if !closed && self.eyes_closed {
            if let Some(start) = self.eye_closure_start.take() {
                let duration = now - start;
                if duration > self.min_blink_duration {
                    debug!(duration, "blink recorded");
                    self.blink_times.push(now);
                    self.eye_closure_durations.push(duration);
                }
            }
        }
        self.eyes_closed = closed;
    }

    /// Advance the yawn state machine. Short mouth openings (speech) are
    /// filtered by the minimum yawn duration.
    pub fn update_mouth(&mut self, now: f64, open: bool) {
        if open && !self.mouth_open {
            self.yawn_start = Some(now);
        } else if !open && self.mouth_open {
            if let Some(start) = self.yawn_start.take() {
                let duration = now - start;
                if duration > self.min_yawn_duration {
                    debug!(duration, "yawn recorded");
                    self.yawn_times.push(now);
                    self.yawn_durations.push(duration);
                }
            }
        }
        self.mouth_open = open;
    }

    /// Record the per-frame head position classification
    pub fn record_head_position(&mut self, position: HeadPosition) {
        self.head_positions.push(position);
    }

    /// Blinks within the sliding rate window ending at `now`
    pub fn blink_rate(&self, now: f64) -> u32 {
        self.blink_times.count_since(now - self.rate_window) as u32
    }

    /// Yawns within the sliding rate window ending at `now`
    pub fn yawn_rate(&self, now: f64) -> u32 {
        self.yawn_times.count_since(now - self.rate_window) as u32
    }

    /// Mean blink closure duration over the capacity-bounded window
    pub fn mean_closure_duration(&self) -> f64 {
        self.eye_closure_durations.mean()
    }

    /// Mean yawn duration over the capacity-bounded window
    pub fn mean_yawn_duration(&self) -> f64 {
        self.yawn_durations.mean()
    }

    /// Most frequent recent head position, `Centered` when no history
    pub fn mode_head_position(&self) -> HeadPosition {
        self.head_positions.mode().unwrap_or(HeadPosition::Centered)
    }

    /// Eyes currently closed
    pub fn eyes_closed(&self) -> bool {
        self.eyes_closed
    }

    /// Mouth currently open beyond the yawn threshold
    pub fn mouth_open(&self) -> bool {
        self.mouth_open
    }

    /// Reset all temporal state (new driver, new session)
    pub fn reset(&mut self, config: &DetectorConfig) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> EventTracker {
        EventTracker::new(&DetectorConfig::default())
    }

    fn drive_ear(tracker: &mut EventTracker, sequence: &[f32], frame_secs: f64) {
        let threshold = DetectorConfig::default().ear_threshold;
        for (i, &ear) in sequence.iter().enumerate() {
            tracker.update_eyes(i as f64 * frame_secs, ear < threshold);
        }
    }

    #[test]
    fn test_single_blink_from_scripted_ear_sequence() {
        let mut t = tracker();
        // Closed for frames 2..5 at 1s spacing: duration 3s
        drive_ear(&mut t, &[0.3, 0.3, 0.15, 0.15, 0.15, 0.3], 1.0);

        assert_eq!(t.blink_rate(5.0), 1);
        assert!((t.mean_closure_duration() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_dip_is_filtered() {
        let mut t = tracker();
        // Closure lasts 0.1s, below the 0.15s minimum
        drive_ear(&mut t, &[0.3, 0.15, 0.3], 0.1);

        assert_eq!(t.blink_rate(0.2), 0);
        assert_eq!(t.mean_closure_duration(), 0.0);
    }

    #[test]
    fn test_blink_rate_evicts_by_time_not_capacity() {
        let mut t = tracker();
        t.update_eyes(0.0, true);
        t.update_eyes(1.0, false); // blink at t=1

        assert_eq!(t.blink_rate(10.0), 1);
        // All recorded blinks older than the 60s window
        assert_eq!(t.blink_rate(120.0), 0);
    }

    #[test]
    fn test_yawn_minimum_duration() {
        let mut t = tracker();
        // 0.5s opening: speech, not a yawn
        t.update_mouth(0.0, true);
        t.update_mouth(0.5, false);
        assert_eq!(t.yawn_rate(0.5), 0);

        // 1.5s opening: yawn
        t.update_mouth(10.0, true);
        t.update_mouth(11.5, false);
        assert_eq!(t.yawn_rate(11.5), 1);
        assert!((t.mean_yawn_duration() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_window_capacity_eviction() {
        let mut t = tracker();
        // 15 blinks of increasing duration; capacity is 10
        for i in 0..15 {
            let start = i as f64 * 10.0;
            t.update_eyes(start, true);
            t.update_eyes(start + 0.2 + i as f64 * 0.01, false);
        }
        // Oldest five durations evicted: mean over durations 5..14
        let expected: f64 = (5..15).map(|i| 0.2 + i as f64 * 0.01).sum::<f64>() / 10.0;
        assert!((t.mean_closure_duration() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mode_head_position_defaults_centered() {
        let t = tracker();
        assert_eq!(t.mode_head_position(), HeadPosition::Centered);
    }

    #[test]
    fn test_mode_head_position_ties_prefer_first_seen() {
        let mut t = tracker();
        t.record_head_position(HeadPosition::Left);
        t.record_head_position(HeadPosition::Right);
        t.record_head_position(HeadPosition::Left);
        t.record_head_position(HeadPosition::Right);
        assert_eq!(t.mode_head_position(), HeadPosition::Left);
    }

    #[test]
    fn test_still_closed_records_nothing() {
        let mut t = tracker();
        t.update_eyes(0.0, true);
        t.update_eyes(1.0, true);
        t.update_eyes(2.0, true);
        assert!(t.eyes_closed());
        assert_eq!(t.blink_rate(2.0), 0);
    }
}
