//! Analysis façade: isolates the primary shot from a frame sequence and
//! derives the human-facing shot record (arc height, entry angle,
//! distance, tier, tips) on top of the quality scorer.

use nalgebra as na;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::frame::{self, Frame};
use crate::quality::{self, ShotQualityResult};
use crate::segmenter::{self, SegmenterConfig};
use crate::trajectory::{self, TrajectoryPoint};

#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Pixel-to-court scale. Fixed constant, not calibrated per video.
    pub pixels_per_foot: f32,
    pub hoop_radius: f32,
    pub segmenter: SegmenterConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            pixels_per_foot: 30.0,
            hoop_radius: 30.0,
            segmenter: SegmenterConfig::default(),
        }
    }
}

/// Overall form classification on the 0-4 rubric of arc-height and
/// entry-angle buckets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotTier {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

/// The complete per-shot record handed to the presentation layer.
/// Plain values, safe to render without further interpretation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotAnalysis {
    /// Vertical excursion of the shot, in feet.
    pub arc_height_ft: f32,
    /// Approach angle at the hoop, in degrees below horizontal.
    pub entry_angle_deg: f32,
    /// Release-point-to-hoop distance, in feet.
    pub shot_distance_ft: f32,
    /// Trajectory point nearest the hoop, (x, y) pixels.
    pub rim_contact: (f32, f32),
    pub tier: ShotTier,
    pub quality: ShotQualityResult,
    /// Threshold-driven improvement hints; empty when nothing stood out.
    pub tips: Vec<String>,
}

/// Stateless façade over segmentation, measurement and scoring.
pub struct ShotAnalyzer {
    config: AnalyzerConfig,
}

impl ShotAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze the dominant shot in a frame sequence.
    ///
    /// The hoop may be supplied by the caller; otherwise the most
    /// confident hoop detection in the sequence is used.
    pub fn analyze(
        &self,
        frames: &[Frame],
        hoop: Option<na::Point2<f32>>,
    ) -> Result<ShotAnalysis, Error> {
        let points = frame::ball_points(frames);
        if points.is_empty() {
            return Err(Error::NoBallTrajectory);
        }

        let hoop = hoop.or_else(|| frame::find_hoop(frames)).ok_or(Error::NoHoop)?;

        let segments = segmenter::segment(&points, &self.config.segmenter);
        let shot = segmenter::select_best(&segments, Some(&hoop)).ok_or(Error::NoShotSegment)?;

        debug!(
            segments = segments.len(),
            shot_len = shot.len(),
            "selected shot segment"
        );

        let arc_height_ft = arc_height_px(shot) / self.config.pixels_per_foot;
        let entry_angle_deg = entry_angle(shot);
        let shot_distance_ft = na::distance(&shot[0].pos, &hoop) / self.config.pixels_per_foot;

        let rim_idx = trajectory::closest_index(shot, &hoop).unwrap_or(0);
        let rim_contact = (shot[rim_idx].pos.x, shot[rim_idx].pos.y);

        let quality = quality::evaluate(shot, &hoop, self.config.hoop_radius);
        let tier = classify(arc_height_ft, entry_angle_deg);
        let tips = tips(
            arc_height_ft,
            entry_angle_deg,
            shot,
            &hoop,
            self.config.hoop_radius,
        );

        Ok(ShotAnalysis {
            arc_height_ft,
            entry_angle_deg,
            shot_distance_ft,
            rim_contact,
            tier,
            quality,
            tips,
        })
    }
}

impl Default for ShotAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Max vertical excursion of the segment, in pixels.
fn arc_height_px(points: &[TrajectoryPoint]) -> f32 {
    let min_y = points.iter().map(|p| p.pos.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.pos.y).fold(f32::NEG_INFINITY, f32::max);

    (max_y - min_y).max(0.0)
}

/// Approach angle over the last few samples. Positive dy (downward) is
/// a descending approach; |dx| folds left- and right-side approaches
/// onto the same scale.
fn entry_angle(points: &[TrajectoryPoint]) -> f32 {
    let tail = &points[points.len().saturating_sub(5)..];

    let (from, to) = match (tail.first(), tail.last()) {
        (Some(f), Some(t)) => (f.pos, t.pos),
        _ => return 0.0,
    };

    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx.abs() <= f32::EPSILON && dy.abs() <= f32::EPSILON {
        return 0.0;
    }

    dy.atan2(dx.abs()).to_degrees()
}

/// 0-4 rubric: arc-height bucket plus entry-angle bucket.
fn classify(arc_height_ft: f32, entry_angle_deg: f32) -> ShotTier {
    let arc_points = if arc_height_ft >= 3.0 {
        2
    } else if arc_height_ft >= 1.5 {
        1
    } else {
        0
    };

    let angle_points = if (40.0..=50.0).contains(&entry_angle_deg) {
        2
    } else if (30.0..=60.0).contains(&entry_angle_deg) {
        1
    } else {
        0
    };

    match arc_points + angle_points {
        4 => ShotTier::Excellent,
        3 => ShotTier::Good,
        2 => ShotTier::Fair,
        1 => ShotTier::Poor,
        _ => ShotTier::VeryPoor,
    }
}

fn tips(
    arc_height_ft: f32,
    entry_angle_deg: f32,
    points: &[TrajectoryPoint],
    hoop: &na::Point2<f32>,
    hoop_radius: f32,
) -> Vec<String> {
    let mut out = Vec::new();

    if arc_height_ft < 1.5 {
        out.push("Shot is flat: release higher to add arc".to_string());
    }

    if entry_angle_deg < 30.0 {
        out.push("Entry angle is shallow: a higher arc drops the ball in more steeply".to_string());
    } else if entry_angle_deg > 60.0 {
        out.push("Entry angle is very steep: flatten the shot slightly".to_string());
    }

    if let Some(last) = points.last() {
        let drift = last.pos.x - hoop.x;

        if drift > hoop_radius * 0.5 {
            out.push("Ball drifts right of the hoop: aim slightly left".to_string());
        } else if drift < -hoop_radius * 0.5 {
            out.push("Ball drifts left of the hoop: aim slightly right".to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BBox;
    use crate::detection::{Detection, Label};
    use crate::math;

    fn ball_frame(n: u32, x: f32, y: f32, ts: f32) -> Frame {
        Frame::new(
            n,
            ts,
            vec![Detection {
                track_id: 1,
                bbox: BBox::ltrb(x - 10.0, y - 10.0, x + 10.0, y + 10.0),
                confidence: 0.9,
                timestamp: ts,
                label: Label::Ball,
            }],
        )
    }

    fn hoop_frame(n: u32, ts: f32) -> Frame {
        Frame::new(
            n,
            ts,
            vec![Detection {
                track_id: 2,
                bbox: BBox::ltrb(480.0, 290.0, 520.0, 310.0),
                confidence: 0.95,
                timestamp: ts,
                label: Label::Hoop,
            }],
        )
    }

    /// Parabolic shot from (100,500) onto the hoop at (500,300).
    fn shot_frames() -> Vec<Frame> {
        let mut frames = vec![hoop_frame(0, 0.0)];

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let x = math::lerp(100.0, 500.0, t);
            let y = math::lerp(500.0, 300.0, t) + 4.0 * (300.0 - 500.0) * t * (1.0 - t);
            frames.push(ball_frame(i + 1, x, y, 0.1 + t * 2.0));
        }

        frames
    }

    #[test]
    fn analyze_produces_a_full_record() {
        let analyzer = ShotAnalyzer::default();
        let analysis = analyzer.analyze(&shot_frames(), None).unwrap();

        // 300 px of vertical excursion at 30 px/ft
        assert!((analysis.arc_height_ft - 10.0).abs() < 0.5);
        assert!(analysis.entry_angle_deg > 30.0);
        assert!(analysis.shot_distance_ft > 10.0);
        assert!(analysis.quality.overall_score > 0.0);
        // ends on the hoop
        assert!((analysis.rim_contact.0 - 500.0).abs() < 1.0);
    }

    #[test]
    fn analyze_without_ball_fails() {
        let analyzer = ShotAnalyzer::default();
        let frames = vec![hoop_frame(0, 0.0)];

        assert_eq!(analyzer.analyze(&frames, None), Err(Error::NoBallTrajectory));
    }

    #[test]
    fn analyze_without_hoop_fails() {
        let analyzer = ShotAnalyzer::default();
        let frames: Vec<Frame> = (0..6)
            .map(|i| ball_frame(i, 100.0 + i as f32 * 30.0, 400.0, i as f32 * 0.1))
            .collect();

        assert_eq!(analyzer.analyze(&frames, None), Err(Error::NoHoop));
    }

    #[test]
    fn explicit_hoop_overrides_detection_scan() {
        let analyzer = ShotAnalyzer::default();
        let frames: Vec<Frame> = (0..6)
            .map(|i| ball_frame(i, 100.0 + i as f32 * 30.0, 400.0 - i as f32 * 20.0, i as f32 * 0.1))
            .collect();

        let hoop = na::Point2::new(260.0, 290.0);
        let analysis = analyzer.analyze(&frames, Some(hoop)).unwrap();
        assert!(analysis.shot_distance_ft > 0.0);
    }

    #[test]
    fn flat_shot_earns_arc_tip() {
        let analyzer = ShotAnalyzer::default();

        let mut frames = vec![hoop_frame(0, 0.0)];
        for i in 0..8 {
            frames.push(ball_frame(
                i + 1,
                100.0 + i as f32 * 50.0,
                320.0 - i as f32 * 2.0,
                0.1 + i as f32 * 0.1,
            ));
        }

        let analysis = analyzer.analyze(&frames, None).unwrap();
        assert!(analysis.tips.iter().any(|t| t.contains("flat")));
        assert!(matches!(analysis.tier, ShotTier::Poor | ShotTier::VeryPoor));
    }

    #[test]
    fn tier_rubric_buckets() {
        assert_eq!(classify(3.5, 45.0), ShotTier::Excellent);
        assert_eq!(classify(2.0, 45.0), ShotTier::Good);
        assert_eq!(classify(2.0, 35.0), ShotTier::Fair);
        assert_eq!(classify(1.0, 35.0), ShotTier::Poor);
        assert_eq!(classify(0.5, 10.0), ShotTier::VeryPoor);
    }
}
