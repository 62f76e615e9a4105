//! Eye and mouth aspect ratio computation

use crate::point::Point2;
use tracing::warn;

/// Neutral EAR returned when the eye geometry is degenerate. Sits above the
/// usual closed-eye thresholds (0.2..0.25) so a bad frame reads as "open".
pub const DEFAULT_EAR: f32 = 0.3;

/// Neutral MAR returned when the mouth geometry is degenerate ("closed").
pub const DEFAULT_MAR: f32 = 0.0;

const MIN_DENOMINATOR: f32 = 1e-6;

/// Eye aspect ratio over six contour points ordered
/// [corner, upper, upper, corner, lower, lower]:
///
/// `(d(p1,p5) + d(p2,p4)) / (2 * d(p0,p3))`
///
/// A low value indicates a closed eye. When the horizontal span is zero the
/// ratio is undefined; the neutral default is returned instead of an error
/// so the frame loop keeps running.
pub fn eye_aspect_ratio(points: &[Point2; 6]) -> f32 {
    let vertical_a = points[1].distance(&points[5]);
    let vertical_b = points[2].distance(&points[4]);
    let horizontal = points[0].distance(&points[3]);

    if horizontal < MIN_DENOMINATOR {
        warn!("degenerate eye geometry: zero horizontal span");
        return DEFAULT_EAR;
    }

    (vertical_a + vertical_b) / (2.0 * horizontal)
}

/// Mouth aspect ratio over eight points ordered
/// [outer corners x2, outer lips x2, inner lips x2, inner corners x2].
///
/// Normalizes the outer and inner lip heights by the outer mouth width:
///
/// `(outer_height + inner_height) / (2 * width)`
///
/// The inner corners are accepted for layout compatibility but do not enter
/// the denominator; subtracting the inner width there diverges as the mouth
/// corners converge.
pub fn mouth_aspect_ratio(points: &[Point2; 8]) -> f32 {
    let width = points[0].distance(&points[1]);
    let outer_height = points[2].distance(&points[3]);
    let inner_height = points[4].distance(&points[5]);

    if width < MIN_DENOMINATOR {
        warn!("degenerate mouth geometry: zero width");
        return DEFAULT_MAR;
    }

    (outer_height + inner_height) / (2.0 * width)
}
