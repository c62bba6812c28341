use nalgebra as na;
use num_traits::Float;

/// Closed-form ordinary least squares fit of y against x, returning
/// (slope, intercept). None when the denominator vanishes (fewer than
/// two distinct x values), instead of dividing by zero.
pub fn linear_ls<T: na::ComplexField + Float>(xs: &[T], ys: &[T]) -> Option<(T, T)> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return None;
    }

    let n = T::from(xs.len()).unwrap();

    let mut s_x = T::zero();
    let mut s_y = T::zero();
    let mut s_xy = T::zero();
    let mut s_x2 = T::zero();

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        s_x = s_x + x;
        s_y = s_y + y;
        s_xy = s_xy + x * y;
        s_x2 = s_x2 + x * x;
    }

    let denom = n * s_x2 - s_x * s_x;
    if denom == T::zero() {
        return None;
    }

    let slope = (n * s_xy - s_x * s_y) / denom;
    let intercept = (s_y - slope * s_x) / n;

    Some((slope, intercept))
}

#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_point(a: &na::Point2<f32>, b: &na::Point2<f32>, t: f32) -> na::Point2<f32> {
    na::Point2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Unsigned angle between two vectors, in radians. Zero-length input
/// yields 0 rather than NaN.
pub fn angle_between(u: &na::Vector2<f32>, v: &na::Vector2<f32>) -> f32 {
    let nu = u.norm();
    let nv = v.norm();

    if nu <= f32::EPSILON || nv <= f32::EPSILON {
        return 0.0;
    }

    let cos = (u.dot(v) / (nu * nv)).clamp(-1.0, 1.0);
    cos.acos()
}
