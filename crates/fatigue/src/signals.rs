//! Per-frame eye and mouth signal extraction

use crate::config::DetectorConfig;
use face_geometry::{eye_aspect_ratio, indices, mouth_aspect_ratio, LandmarkSet};
use tracing::warn;

/// Instantaneous eye state for one frame
#[derive(Debug, Clone, Copy)]
pub struct EyeSignal {
    pub left_ear: f32,
    pub right_ear: f32,
    pub avg_ear: f32,
    /// Average EAR below the configured threshold
    pub closed: bool,
}

/// Instantaneous mouth state for one frame
#[derive(Debug, Clone, Copy)]
pub struct MouthSignal {
    pub mar: f32,
    /// MAR at or above the configured threshold
    pub open: bool,
}

/// Compute per-eye and averaged EAR, classified against the threshold.
/// Returns `None` when the landmark set is too short for the eye subsets.
pub fn extract_eyes(landmarks: &LandmarkSet, config: &DetectorConfig) -> Option<EyeSignal> {
    let left = landmarks.subset(&indices::LEFT_EYE)?;
    let right = landmarks.subset(&indices::RIGHT_EYE)?;

    let left_ear = eye_aspect_ratio(&left);
    let right_ear = eye_aspect_ratio(&right);
    let avg_ear = (left_ear + right_ear) / 2.0;

    Some(EyeSignal {
        left_ear,
        right_ear,
        avg_ear,
        closed: avg_ear < config.ear_threshold,
    })
}

/// Compute MAR from the mouth subset, classified against the threshold.
pub fn extract_mouth(landmarks: &LandmarkSet, config: &DetectorConfig) -> Option<MouthSignal> {
    let mouth = match landmarks.subset(&indices::MOUTH) {
        Some(m) => m,
        None => {
            warn!("mouth landmarks unavailable, skipping yawn signal");
            return None;
        }
    };

    let mar = mouth_aspect_ratio(&mouth);
    Some(MouthSignal {
        mar,
        open: mar >= config.mar_threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FaceBuilder;
    use face_geometry::Point2;

    #[test]
    fn test_open_eyes_classified_open() {
        let config = DetectorConfig::default();
        let face = FaceBuilder::neutral().build();
        let signal = extract_eyes(&face, &config).unwrap();
        assert!(!signal.closed);
        assert!(signal.avg_ear > config.ear_threshold);
    }

    #[test]
    fn test_closed_eyes_classified_closed() {
        let config = DetectorConfig::default();
        let face = FaceBuilder::neutral().with_closed_eyes().build();
        let signal = extract_eyes(&face, &config).unwrap();
        assert!(signal.closed);
        assert!(signal.avg_ear < 0.05);
    }

    #[test]
    fn test_avg_ear_is_mean_of_both_eyes() {
        let config = DetectorConfig::default();
        let face = FaceBuilder::neutral().build();
        let signal = extract_eyes(&face, &config).unwrap();
        let expected = (signal.left_ear + signal.right_ear) / 2.0;
        assert!((signal.avg_ear - expected).abs() < 1e-6);
    }

    #[test]
    fn test_closed_mouth_classified_closed() {
        let config = DetectorConfig::default();
        let face = FaceBuilder::neutral().build();
        let signal = extract_mouth(&face, &config).unwrap();
        assert!(!signal.open);
    }

    #[test]
    fn test_open_mouth_classified_open() {
        let config = DetectorConfig::default();
        let face = FaceBuilder::neutral().with_open_mouth().build();
        let signal = extract_mouth(&face, &config).unwrap();
        assert!(signal.open);
        assert!(signal.mar > 1.0);
    }

    #[test]
    fn test_short_landmark_set_yields_none() {
        let config = DetectorConfig::default();
        let set = LandmarkSet::new(vec![Point2::new(0.5, 0.5); 50]);
        assert!(extract_eyes(&set, &config).is_none());
        assert!(extract_mouth(&set, &config).is_none());
    }
}
