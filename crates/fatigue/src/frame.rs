//! Video frame type and annotation overlay

use crate::metrics::MetricsSnapshot;
use face_geometry::{indices, LandmarkSet};
use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use tracing::warn;

const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const YELLOW: Rgb<u8> = Rgb([255, 200, 0]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);
const GRAY: Rgb<u8> = Rgb([40, 40, 40]);

/// Decoded RGB video frame
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// RGB pixel data (width * height * 3)
    pub data: Vec<u8>,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
    /// Capture timestamp (nanoseconds). Drives all temporal state.
    pub timestamp_ns: u64,
    /// Frame sequence number
    pub sequence: u32,
}

impl VideoFrame {
    /// Create a new video frame from raw RGB data
    pub fn new(data: Vec<u8>, width: u32, height: u32, timestamp_ns: u64, sequence: u32) -> Self {
        Self {
            data,
            width,
            height,
            timestamp_ns,
            sequence,
        }
    }

    /// Capture timestamp in seconds
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1e9
    }
}

/// Draw the detection overlay in place: eye/mouth landmark markers, an
/// alertness bar, and a red border while the eyes are closed. Frames with
/// no face get a yellow border instead. A malformed buffer skips the
/// overlay rather than failing the frame.
pub fn annotate(
    frame: &mut VideoFrame,
    landmarks: Option<&LandmarkSet>,
    snapshot: &MetricsSnapshot,
    eyes_closed: bool,
) {
    let expected = frame.width as usize * frame.height as usize * 3;
    if frame.data.len() != expected || frame.width < 4 || frame.height < 4 {
        warn!(
            len = frame.data.len(),
            expected, "frame buffer size mismatch, skipping overlay"
        );
        return;
    }

    let buffer: Option<RgbImage> =
        ImageBuffer::from_raw(frame.width, frame.height, std::mem::take(&mut frame.data));
    let Some(mut img) = buffer else {
        return; // unreachable: length validated above
    };

    match landmarks {
        Some(set) => {
            let marker = if eyes_closed { RED } else { GREEN };
            draw_landmark_markers(&mut img, set, marker);
            if eyes_closed {
                draw_border(&mut img, RED);
            }
        }
        None => draw_border(&mut img, YELLOW),
    }

    draw_alertness_bar(&mut img, snapshot.alertness);

    frame.data = img.into_raw();
}

fn draw_landmark_markers(img: &mut RgbImage, set: &LandmarkSet, color: Rgb<u8>) {
    let (w, h) = (img.width() as f32, img.height() as f32);
    let tracked = indices::LEFT_EYE
        .iter()
        .chain(indices::RIGHT_EYE.iter())
        .chain(indices::MOUTH.iter());

    for &i in tracked {
        if let Some(p) = set.get(i) {
            let x = (p.x * w) as i32;
            let y = (p.y * h) as i32;
            if x > 0 && y > 0 && x < w as i32 - 1 && y < h as i32 - 1 {
                draw_cross_mut(img, color, x, y);
            }
        }
    }
}

fn draw_alertness_bar(img: &mut RgbImage, alertness: u8) {
    if img.width() < 120 || img.height() < 24 {
        return;
    }

    let color = if alertness >= 80 {
        GREEN
    } else if alertness >= 60 {
        YELLOW
    } else {
        RED
    };

    draw_filled_rect_mut(img, Rect::at(10, 10).of_size(100, 8), GRAY);
    if alertness > 0 {
        draw_filled_rect_mut(img, Rect::at(10, 10).of_size(alertness as u32, 8), color);
    }
}

fn draw_border(img: &mut RgbImage, color: Rgb<u8>) {
    let (w, h) = (img.width(), img.height());
    for offset in 0..2 {
        draw_hollow_rect_mut(
            img,
            Rect::at(offset, offset).of_size(w - 2 * offset as u32, h - 2 * offset as u32),
            color,
        );
    }
}
