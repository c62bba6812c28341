//! Stateless trajectory prediction: forward extrapolation by linear
//! regression, rim-crossing interpolation for the make/miss call, and
//! corrected-arc synthesis for the "what would have worked" overlay.
//!
//! Every function is pure over its arguments; failures degrade to the
//! documented neutral value (empty list, MISS, zero score) because this
//! code runs inline in a rendering loop.

use nalgebra as na;

use crate::math;
use crate::trajectory::{self, TrajectoryPoint};

/// Regression window: only the most recent samples carry signal about
/// where the ball is headed.
const REGRESSION_WINDOW: usize = 5;

/// Forward extrapolation stops once a projected point comes this close
/// to the hoop.
const HOOP_STOP_DISTANCE: f32 = 50.0;

/// Fraction of the hoop radius accepted as a scoring rim crossing.
/// Deliberately narrower than the full rim so near-misses stay misses.
const RIM_ACCEPT_RATIO: f32 = 0.8;

/// Corrected-arc apex height above the higher endpoint, in pixels.
const ARC_PEAK_LIFT: f32 = 100.0;

/// Sample count of a synthesized corrected arc, dense enough to render
/// as a smooth polyline.
pub const DEFAULT_ARC_STEPS: usize = 30;

/// Where (and whether) the trajectory crossed the rim plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub is_make: bool,
    pub crossing: Option<na::Point2<f32>>,
}

impl ShotOutcome {
    const MISS: ShotOutcome = ShotOutcome {
        is_make: false,
        crossing: None,
    };
}

/// Project the ball forward by fitting x(i) and y(i) independently
/// against the sample index over the last [`REGRESSION_WINDOW`] points.
///
/// Fewer than 3 points, or a degenerate fit, yields an empty list.
/// With a hoop supplied, extrapolation terminates early once a projected
/// point is within [`HOOP_STOP_DISTANCE`] of it.
pub fn predict_trajectory(
    points: &[TrajectoryPoint],
    hoop: Option<na::Point2<f32>>,
    steps: usize,
) -> Vec<na::Point2<f32>> {
    if points.len() < 3 {
        return Vec::new();
    }

    let window = &points[points.len().saturating_sub(REGRESSION_WINDOW)..];

    let idx: Vec<f32> = (0..window.len()).map(|i| i as f32).collect();
    let xs: Vec<f32> = window.iter().map(|p| p.pos.x).collect();
    let ys: Vec<f32> = window.iter().map(|p| p.pos.y).collect();

    // Sample indices are distinct by construction, but the guard costs
    // nothing and keeps the division total.
    let (fit_x, fit_y) = match (math::linear_ls(&idx, &xs), math::linear_ls(&idx, &ys)) {
        (Some(fx), Some(fy)) => (fx, fy),
        _ => return Vec::new(),
    };

    let mut out = Vec::with_capacity(steps);

    for step in 1..=steps {
        let i = (window.len() - 1 + step) as f32;
        let p = na::Point2::new(fit_x.0 * i + fit_x.1, fit_y.0 * i + fit_y.1);

        out.push(p);

        if let Some(hoop) = hoop {
            if na::distance(&p, &hoop) < HOOP_STOP_DISTANCE {
                break;
            }
        }
    }

    out
}

/// Make/miss call by rim-crossing interpolation.
///
/// The trajectory is densified once, then scanned backward for the most
/// recent consecutive pair straddling the rim plane
/// (`y = hoop.y - radius/2`, y-down), whichever side the ball crosses
/// from: the descent into the hoop on a full arc, or the ascent when
/// only the approach was captured. The crossing x is interpolated on
/// that pair; MAKE iff it lies within [`RIM_ACCEPT_RATIO`] of the
/// radius from the hoop center. A trajectory that never touches the
/// rim plane is a MISS with no crossing, and a zero-height pair is a
/// MISS rather than a NaN.
pub fn shot_outcome(
    points: &[TrajectoryPoint],
    hoop: &na::Point2<f32>,
    hoop_radius: f32,
) -> ShotOutcome {
    let dense = trajectory::densify(points);
    let rim_height = hoop.y - 0.5 * hoop_radius;

    for i in (1..dense.len()).rev() {
        let p1 = dense[i - 1].pos;
        let p2 = dense[i].pos;

        if (p1.y < rim_height) == (p2.y < rim_height) {
            continue;
        }

        if (p2.y - p1.y).abs() <= f32::EPSILON {
            return ShotOutcome::MISS;
        }

        let x = p1.x + (p2.x - p1.x) * (rim_height - p1.y) / (p2.y - p1.y);
        let is_make = (x - hoop.x).abs() <= RIM_ACCEPT_RATIO * hoop_radius;

        return ShotOutcome {
            is_make,
            crossing: Some(na::Point2::new(x, rim_height)),
        };
    }

    ShotOutcome::MISS
}

#[inline]
pub fn will_shot_go_in(
    points: &[TrajectoryPoint],
    hoop: &na::Point2<f32>,
    hoop_radius: f32,
) -> bool {
    shot_outcome(points, hoop, hoop_radius).is_make
}

/// Synthesize the arc that would have scored, anchored at the midpoint
/// of the first two samples and ending on the hoop.
///
/// This is geometric curve synthesis for the overlay renderer, not a
/// projectile solve: the vertical term is a quadratic bump lifting the
/// apex [`ARC_PEAK_LIFT`] px above the higher endpoint (y-down, so the
/// higher endpoint is the smaller y).
pub fn predict_corrected_arc(
    points: &[TrajectoryPoint],
    hoop: &na::Point2<f32>,
    steps: usize,
) -> Vec<na::Point2<f32>> {
    if points.len() < 2 || steps == 0 {
        return Vec::new();
    }

    let start = math::lerp_point(&points[0].pos, &points[1].pos, 0.5);
    let peak = start.y.min(hoop.y) - ARC_PEAK_LIFT;

    let mut out = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;

        let x = math::lerp(start.x, hoop.x, t);
        let y = math::lerp(start.y, hoop.y, t) + 4.0 * (peak - start.y) * t * (1.0 - t);

        out.push(na::Point2::new(x, y));
    }

    out
}

/// Maximum closest-approach distance still worth a nonzero score.
const ACCURACY_WINDOW: f32 = 100.0;

/// Closest approach to the hoop mapped linearly onto [0, 100].
pub fn shot_accuracy(points: &[TrajectoryPoint], hoop: &na::Point2<f32>) -> f32 {
    let closest = match trajectory::closest_index(points, hoop) {
        Some(i) => na::distance(&points[i].pos, hoop),
        None => return 0.0,
    };

    (1.0 - (closest / ACCURACY_WINDOW).min(1.0)) * 100.0
}

/// Accuracy from the rim-crossing geometry: horizontal distance from
/// the hoop center over the rim half-width, mapped onto [0, 100].
/// Falls back to [`shot_accuracy`] when the ball never crossed the rim
/// plane.
pub fn shot_accuracy_from_rim_crossing(
    points: &[TrajectoryPoint],
    hoop: &na::Point2<f32>,
    hoop_radius: f32,
) -> f32 {
    match shot_outcome(points, hoop, hoop_radius).crossing {
        Some(crossing) if hoop_radius > 0.0 => {
            let off = (crossing.x - hoop.x).abs() / hoop_radius;
            (1.0 - off.min(1.0)) * 100.0
        }
        _ => shot_accuracy(points, hoop),
    }
}
