use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Axis-aligned pixel box in corner format (left-top, right-bottom),
/// y grows downward (image convention).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct BBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BBox {
    #[inline]
    pub fn ltrb(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Inverted boxes (x2 < x1 or y2 < y1) read as zero-size rather
    /// than negative; upstream does not enforce the corner order.
    #[inline(always)]
    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }

    #[inline(always)]
    pub fn cx(&self) -> f32 {
        (self.x1 + self.x2) / 2.0
    }

    #[inline(always)]
    pub fn cy(&self) -> f32 {
        (self.y1 + self.y2) / 2.0
    }

    #[inline(always)]
    pub fn center(&self) -> na::Point2<f32> {
        na::Point2::new(self.cx(), self.cy())
    }

}
