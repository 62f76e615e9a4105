//! Shared test fixtures: synthetic face meshes with known geometry

use face_geometry::{indices, LandmarkSet, Point2};

/// Builder for 478-point synthetic face meshes
pub struct FaceBuilder {
    points: Vec<Point2>,
}

impl FaceBuilder {
    /// Neutral centered face: eyes open (EAR ≈ 0.67), mouth closed
    /// (MAR ≈ 0.156), nose equidistant from both ears, resting pitch.
    pub fn neutral() -> Self {
        let mut b = Self {
            points: vec![Point2::new(0.5, 0.5); 478],
        };

        // Left eye, open: vertical spans 0.06 each, horizontal span 0.09
        b.set(indices::LEFT_EYE[0], 0.55, 0.40);
        b.set(indices::LEFT_EYE[1], 0.58, 0.43);
        b.set(indices::LEFT_EYE[2], 0.61, 0.43);
        b.set(indices::LEFT_EYE[3], 0.64, 0.40);
        b.set(indices::LEFT_EYE[4], 0.61, 0.37);
        b.set(indices::LEFT_EYE[5], 0.58, 0.37);

        // Right eye, open
        b.set(indices::RIGHT_EYE[0], 0.36, 0.40);
        b.set(indices::RIGHT_EYE[1], 0.39, 0.43);
        b.set(indices::RIGHT_EYE[2], 0.42, 0.43);
        b.set(indices::RIGHT_EYE[3], 0.45, 0.40);
        b.set(indices::RIGHT_EYE[4], 0.42, 0.37);
        b.set(indices::RIGHT_EYE[5], 0.39, 0.37);

        // Mouth, closed: outer height 0.04, inner height 0.01, width 0.16
        b.set(indices::MOUTH[0], 0.42, 0.62);
        b.set(indices::MOUTH[1], 0.58, 0.62);
        b.set(indices::MOUTH[2], 0.50, 0.60);
        b.set(indices::MOUTH[3], 0.50, 0.64);
        b.set(indices::MOUTH[4], 0.50, 0.615);
        b.set(indices::MOUTH[5], 0.50, 0.625);
        b.set(indices::MOUTH[6], 0.44, 0.62);
        b.set(indices::MOUTH[7], 0.56, 0.62);

        // Pose: (nose.y - eye_line.y) / nose-chin = 0.1 / 0.2 = resting 0.5
        b.set(indices::NOSE_TIP, 0.5, 0.5);
        b.set(indices::CHIN, 0.5, 0.7);
        b.set(indices::LEFT_EAR, 0.7, 0.45);
        b.set(indices::RIGHT_EAR, 0.3, 0.45);
        b.set(indices::LEFT_EYE_OUTER, 0.64, 0.40);
        b.set(indices::RIGHT_EYE_OUTER, 0.36, 0.40);

        b
    }

    /// Flatten both eye contours onto the corner line (EAR ≈ 0)
    pub fn with_closed_eyes(mut self) -> Self {
        for eye in [indices::LEFT_EYE, indices::RIGHT_EYE] {
            for &i in eye[1..3].iter().chain(eye[4..6].iter()) {
                self.points[i].y = 0.40;
            }
        }
        self
    }

    /// Drop the lower lip: outer height 0.20, inner 0.14 (MAR ≈ 1.06)
    pub fn with_open_mouth(mut self) -> Self {
        self.set(indices::MOUTH[2], 0.5, 0.55);
        self.set(indices::MOUTH[3], 0.5, 0.75);
        self.set(indices::MOUTH[4], 0.5, 0.58);
        self.set(indices::MOUTH[5], 0.5, 0.72);
        self
    }

    /// Place an individual landmark
    pub fn with_point(mut self, index: usize, x: f32, y: f32) -> Self {
        self.set(index, x, y);
        self
    }

    pub fn build(self) -> LandmarkSet {
        LandmarkSet::new(self.points)
    }

    fn set(&mut self, index: usize, x: f32, y: f32) {
        self.points[index] = Point2::new(x, y);
    }
}
