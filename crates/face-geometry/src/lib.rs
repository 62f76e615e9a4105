//! Facial Landmark Geometry
//!
//! Pure geometry over normalized facial keypoints:
//! - 2D point math (Euclidean distance)
//! - Eye and mouth aspect ratios
//! - Fixed landmark index tables for the face-mesh layout

mod landmarks;
mod point;
mod ratio;

pub use landmarks::{indices, LandmarkSet};
pub use point::Point2;
pub use ratio::{eye_aspect_ratio, mouth_aspect_ratio, DEFAULT_EAR, DEFAULT_MAR};
