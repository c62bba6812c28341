use nalgebra as na;
use tracing::debug;

use crate::trajectory::TrajectoryPoint;

#[derive(Debug, Clone, Copy)]
pub struct SegmenterConfig {
    /// Inter-sample distance beyond which two points cannot belong to
    /// the same shot.
    pub max_gap_px: f32,
    /// Implied speed beyond which the sample pair is a discontinuity.
    pub max_speed_px_s: f32,
    /// Segments at or below this length are noise, not candidates.
    pub min_points: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_gap_px: 150.0,
            max_speed_px_s: 1000.0,
            min_points: 3,
        }
    }
}

/// Split a continuous ball-detection stream into shot attempts.
///
/// A segment closes when consecutive samples jump farther than
/// `max_gap_px` or faster than `max_speed_px_s` (a non-positive time
/// delta counts as a discontinuity too). Segments shorter than
/// `min_points` are dropped entirely.
pub fn segment(points: &[TrajectoryPoint], config: &SegmenterConfig) -> Vec<Vec<TrajectoryPoint>> {
    let mut segments = Vec::new();
    let mut current: Vec<TrajectoryPoint> = Vec::new();

    for p in points {
        if let Some(prev) = current.last() {
            if is_discontinuity(prev, p, config) {
                debug!(
                    len = current.len(),
                    ts = p.timestamp,
                    "trajectory discontinuity, closing segment"
                );

                if current.len() >= config.min_points {
                    segments.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }

        current.push(*p);
    }

    if current.len() >= config.min_points {
        segments.push(current);
    }

    segments
}

fn is_discontinuity(prev: &TrajectoryPoint, next: &TrajectoryPoint, config: &SegmenterConfig) -> bool {
    let dist = na::distance(&prev.pos, &next.pos);
    if dist > config.max_gap_px {
        return true;
    }

    let dt = next.timestamp - prev.timestamp;
    if dt <= 0.0 {
        // coincident or out-of-order timestamps carry no speed signal
        return dist > 0.0;
    }

    dist / dt > config.max_speed_px_s
}

/// Pick the segment to analyze: nearest last-point-to-hoop when the
/// hoop is known, longest otherwise. Ties go to the earliest segment.
pub fn select_best<'a>(
    segments: &'a [Vec<TrajectoryPoint>],
    hoop: Option<&na::Point2<f32>>,
) -> Option<&'a Vec<TrajectoryPoint>> {
    let mut best: Option<(usize, f32)> = None;

    for (i, seg) in segments.iter().enumerate() {
        // larger rank wins; strict comparison keeps the earliest on ties
        let rank = match hoop {
            Some(hoop) => seg
                .last()
                .map(|p| -na::distance(&p.pos, hoop))
                .unwrap_or(f32::NEG_INFINITY),
            None => seg.len() as f32,
        };

        match best {
            Some((_, br)) if rank <= br => {}
            _ => best = Some((i, rank)),
        }
    }

    best.map(|(i, _)| &segments[i])
}
