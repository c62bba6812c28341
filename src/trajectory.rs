use nalgebra as na;

use crate::math;

/// One cleaned ball-position sample: bbox center plus the detection's
/// timestamp and confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub pos: na::Point2<f32>,
    pub timestamp: f32,
    pub confidence: f32,
}

impl TrajectoryPoint {
    #[inline]
    pub fn new(pos: na::Point2<f32>, timestamp: f32, confidence: f32) -> Self {
        Self {
            pos,
            timestamp,
            confidence,
        }
    }
}

/// Insert one synthetic sample per consecutive pair, a quarter of the way
/// from the earlier point toward the later one, to soften low detector
/// frame rates before rim-crossing interpolation.
///
/// Builds a fresh list; the input is never mutated. Apply once per
/// evaluation: re-densifying an already densified list keeps inserting.
pub fn densify(points: &[TrajectoryPoint]) -> Vec<TrajectoryPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len() * 2 - 1);

    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);

        out.push(*a);
        out.push(TrajectoryPoint::new(
            math::lerp_point(&a.pos, &b.pos, 0.25),
            math::lerp(a.timestamp, b.timestamp, 0.25),
            math::lerp(a.confidence, b.confidence, 0.25),
        ));
    }

    out.push(*points.last().unwrap());
    out
}

/// Index of the sample closest to `target`, earliest on ties.
/// None for an empty list.
pub fn closest_index(points: &[TrajectoryPoint], target: &na::Point2<f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (i, p) in points.iter().enumerate() {
        let d = na::distance(&p.pos, target);

        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }

    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32, ts: f32) -> TrajectoryPoint {
        TrajectoryPoint::new(na::Point2::new(x, y), ts, 1.0)
    }

    #[test]
    fn densify_inserts_quarter_points() {
        let points = vec![pt(0.0, 0.0, 0.0), pt(100.0, 40.0, 1.0), pt(200.0, 0.0, 2.0)];
        let dense = densify(&points);

        assert_eq!(dense.len(), 5);
        assert_eq!(dense[1].pos.x, 25.0);
        assert_eq!(dense[1].pos.y, 10.0);
        assert_eq!(dense[1].timestamp, 0.25);
        assert_eq!(dense[3].pos.x, 125.0);
        // originals survive in order
        assert_eq!(dense[0], points[0]);
        assert_eq!(dense[2], points[1]);
        assert_eq!(dense[4], points[2]);
    }

    #[test]
    fn densify_short_input_is_unchanged() {
        let points = vec![pt(1.0, 2.0, 0.0)];
        assert_eq!(densify(&points), points);
        assert!(densify(&[]).is_empty());
    }

    #[test]
    fn closest_index_ties_go_to_earlier() {
        let points = vec![pt(0.0, 0.0, 0.0), pt(10.0, 0.0, 1.0), pt(0.0, 0.0, 2.0)];
        let idx = closest_index(&points, &na::Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(idx, 0);
    }
}
