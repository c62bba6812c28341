//! Four-factor shot-form scorer: arc shape, release angle, closest
//! approach to the hoop, and path smoothness, summed into a 0-100
//! score with threshold-driven feedback text.

use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::math;
use crate::trajectory::{self, TrajectoryPoint};

const MIN_POINTS: usize = 5;

const ARC_MAX: f32 = 30.0;
const RELEASE_MAX: f32 = 25.0;
const DISTANCE_MAX: f32 = 25.0;
const CONSISTENCY_MAX: f32 = 20.0;

/// Ideal band for the rise-to-drop ratio of the arc.
const ARC_RATIO_LO: f32 = 1.2;
const ARC_RATIO_HI: f32 = 1.8;

/// Immutable scoring output; plain floats so the rendering layer can
/// consume it directly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotQualityResult {
    pub overall_score: f32,
    pub arc_score: f32,
    pub release_angle_score: f32,
    pub distance_score: f32,
    pub consistency_score: f32,
    pub feedback: String,
}

impl ShotQualityResult {
    fn insufficient() -> Self {
        Self {
            overall_score: 0.0,
            arc_score: 0.0,
            release_angle_score: 0.0,
            distance_score: 0.0,
            consistency_score: 0.0,
            feedback: "Not enough trajectory data to evaluate the shot".to_string(),
        }
    }
}

/// Score a completed ball trajectory against the hoop.
///
/// Fewer than [`MIN_POINTS`] samples yields the all-zero result with
/// explanatory feedback instead of an error.
pub fn evaluate(
    points: &[TrajectoryPoint],
    hoop: &na::Point2<f32>,
    hoop_radius: f32,
) -> ShotQualityResult {
    if points.len() < MIN_POINTS {
        return ShotQualityResult::insufficient();
    }

    let arc = arc_score(points, hoop);
    let release = release_angle_score(points);
    let distance = distance_score(points, hoop, hoop_radius);
    let consistency = consistency_score(points);

    let overall = (arc + release + distance + consistency).clamp(0.0, 100.0);

    ShotQualityResult {
        overall_score: overall,
        arc_score: arc,
        release_angle_score: release,
        distance_score: distance,
        consistency_score: consistency,
        feedback: feedback(arc, release, distance, consistency),
    }
}

/// Arc shape, 0-30: half for how centered the apex sits in the segment,
/// half for the rise-to-drop ratio landing in the ideal band.
fn arc_score(points: &[TrajectoryPoint], hoop: &na::Point2<f32>) -> f32 {
    // apex = minimum y (y-down: smaller y is higher)
    let apex_idx = points
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.pos.y.partial_cmp(&b.1.pos.y).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let centered = 1.0 - (apex_idx as f32 / (points.len() - 1) as f32 - 0.5).abs() * 2.0;
    let mut score = ARC_MAX / 2.0 * centered.clamp(0.0, 1.0);

    let release_y = points[0].pos.y;
    let apex_y = points[apex_idx].pos.y;
    let drop = release_y - hoop.y;

    if drop > 0.0 {
        let ratio = (release_y - apex_y) / drop;

        let deviation = if ratio < ARC_RATIO_LO {
            ARC_RATIO_LO - ratio
        } else if ratio > ARC_RATIO_HI {
            ratio - ARC_RATIO_HI
        } else {
            0.0
        };

        let goodness = (1.0 - deviation / ARC_RATIO_LO).max(0.0);
        score += ARC_MAX / 2.0 * goodness;
    }
    // drop <= 0: shooting level with or below the rim, the ratio term
    // is meaningless and contributes nothing

    score
}

/// Release angle, 0-25: the direction over the first few samples,
/// measured above the horizontal (y-down, hence the negated dy).
/// 45-55 degrees is ideal, linear falloff to 35/65, floor outside.
fn release_angle_score(points: &[TrajectoryPoint]) -> f32 {
    const FLOOR: f32 = 5.0;

    let from = points[0].pos;
    let to = points[(points.len() - 1).min(2)].pos;

    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx.abs() <= f32::EPSILON && dy.abs() <= f32::EPSILON {
        return FLOOR;
    }

    let angle = (-dy).atan2(dx).to_degrees();

    if (45.0..=55.0).contains(&angle) {
        RELEASE_MAX
    } else if (35.0..45.0).contains(&angle) {
        FLOOR + (RELEASE_MAX - FLOOR) * (angle - 35.0) / 10.0
    } else if (55.0..=65.0).contains(&angle) {
        FLOOR + (RELEASE_MAX - FLOOR) * (65.0 - angle) / 10.0
    } else {
        FLOOR
    }
}

/// Closest approach to the hoop, 0-25, tiered at 1x/2x/3x the radius.
fn distance_score(points: &[TrajectoryPoint], hoop: &na::Point2<f32>, hoop_radius: f32) -> f32 {
    let closest = match trajectory::closest_index(points, hoop) {
        Some(i) => na::distance(&points[i].pos, hoop),
        None => return 0.0,
    };

    if closest <= hoop_radius {
        DISTANCE_MAX
    } else if closest <= 2.0 * hoop_radius {
        18.0
    } else if closest <= 3.0 * hoop_radius {
        10.0
    } else {
        3.0
    }
}

/// Path smoothness, 0-20: mean absolute turning angle between
/// consecutive displacements. Zero-length displacements are skipped
/// rather than poisoning the mean with NaN.
fn consistency_score(points: &[TrajectoryPoint]) -> f32 {
    const FLOOR: f32 = 5.0;

    let mut sum = 0.0;
    let mut count = 0u32;

    for window in points.windows(3) {
        let u = window[1].pos - window[0].pos;
        let v = window[2].pos - window[1].pos;

        if u.norm() <= f32::EPSILON || v.norm() <= f32::EPSILON {
            continue;
        }

        sum += math::angle_between(&u, &v);
        count += 1;
    }

    if count == 0 {
        return FLOOR;
    }

    let mean = sum / count as f32;

    if mean < 0.2 {
        CONSISTENCY_MAX
    } else if mean < 0.5 {
        12.0
    } else {
        FLOOR
    }
}

fn feedback(arc: f32, release: f32, distance: f32, consistency: f32) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if arc < ARC_MAX * 0.5 {
        parts.push("Put more arc on the shot");
    }
    if release < RELEASE_MAX * 0.6 {
        parts.push("Adjust your release angle toward 45-55 degrees");
    }
    if distance < DISTANCE_MAX * 0.6 {
        parts.push("The ball strayed from the hoop, square up your aim");
    }
    if consistency < CONSISTENCY_MAX * 0.6 {
        parts.push("Smooth out the ball flight, the path is wobbly");
    }

    if parts.is_empty() {
        "Great shot mechanics".to_string()
    } else {
        parts.join(". ")
    }
}
