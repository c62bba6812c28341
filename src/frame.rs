use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::detection::Detection;
use crate::trajectory::TrajectoryPoint;

/// One analyzed video frame: the detections the tracker emitted for it,
/// in detector output order.
///
/// Frames are owned by the calling session and appended in non-decreasing
/// timestamp order; every operation here borrows, none retains.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub frame_number: u32,
    pub timestamp: f32, // in seconds
    pub detections: Vec<Detection>,
}

impl Frame {
    pub fn new(frame_number: u32, timestamp: f32, detections: Vec<Detection>) -> Self {
        Self {
            frame_number,
            timestamp,
            detections,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }
}

/// Flatten a frame sequence into the ball trajectory: one point per
/// ball detection, in stream order.
pub fn ball_points(frames: &[Frame]) -> Vec<TrajectoryPoint> {
    frames
        .iter()
        .flat_map(|f| f.iter())
        .filter(|d| d.label.is_ball())
        .map(|d| TrajectoryPoint::new(d.bbox.center(), d.timestamp, d.confidence))
        .collect()
}

/// The most confident hoop detection across the whole sequence,
/// earliest one on ties.
pub fn find_hoop(frames: &[Frame]) -> Option<na::Point2<f32>> {
    let mut best: Option<&Detection> = None;

    for det in frames.iter().flat_map(|f| f.iter()) {
        if !det.label.is_hoop() {
            continue;
        }

        match best {
            Some(b) if det.confidence <= b.confidence => {}
            _ => best = Some(det),
        }
    }

    best.map(|d| d.bbox.center())
}
