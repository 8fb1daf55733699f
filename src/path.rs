//! Closed path the squares travel along.
//!
//! The path is four segments joined end to end: a quadratic from `v1` to
//! `qv2`, a cubic from `qv2` to `bv3`, a straight return from `bv3` to `v1`,
//! and the same cubic again at a finer sampling.

use crate::curve::{bezier_point, line_point, quadratic_point, Point};
use crate::rng::Lcg;

/// The raw random draws behind the control points. These are the persistent
/// state; scaled points are derived from them whenever the scale changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRatios {
    values: [f64; 12],
}

/// Per-draw `(multiplier, offset)` in 720-pixel reference units, in draw
/// order `v1.x, v1.y, qv1.x, qv1.y, qv2.x, ... bv3.y`.
const AXES: [(f64, f64); 12] = [
    (360.0, 0.0),
    (360.0, 0.0),
    (1000.0, 0.0),
    (1000.0, 0.0),
    (500.0, 0.0),
    (1000.0, 500.0),
    (1150.0, -150.0),
    (1000.0, 0.0),
    (1000.0, 0.0),
    (1000.0, 0.0),
    (1150.0, -150.0),
    (1000.0, 500.0),
];

impl ControlRatios {
    pub fn draw(rng: &mut Lcg) -> Self {
        let mut values = [0.0; 12];
        for v in &mut values {
            *v = rng.next_f64();
        }
        Self { values }
    }

    #[cfg(test)]
    pub(crate) fn from_values(values: [f64; 12]) -> Self {
        Self { values }
    }

    /// Control points in pixels for the given scale.
    pub fn scaled(&self, scale: f64) -> ControlPoints {
        let mut c = [0.0; 12];
        for ((out, r), (mul, off)) in c.iter_mut().zip(self.values).zip(AXES) {
            *out = r * mul * scale + off * scale;
        }
        ControlPoints {
            v1: Point::new(c[0], c[1]),
            qv1: Point::new(c[2], c[3]),
            qv2: Point::new(c[4], c[5]),
            bv1: Point::new(c[6], c[7]),
            bv2: Point::new(c[8], c[9]),
            bv3: Point::new(c[10], c[11]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub v1: Point,
    pub qv1: Point,
    pub qv2: Point,
    pub bv1: Point,
    pub bv2: Point,
    pub bv3: Point,
}

/// Appends `i / divisions` samples for `i` in `0..=floor(divisions)`.
/// `divisions` may be fractional, in which case the segment stops short of
/// `t = 1`.
fn sample(out: &mut Vec<Point>, divisions: f64, f: impl Fn(f64) -> Point) {
    let last = divisions.floor() as usize;
    out.extend((0..=last).map(|i| f(i as f64 / divisions)));
}

/// Number of samples [`build`] produces for `total_points`.
pub fn sample_count(total_points: usize) -> usize {
    3 * (total_points / 3 + 1) + total_points / 2 + 1
}

/// Samples the closed path. Pure: same inputs, same sequence.
pub fn build(cp: &ControlPoints, total_points: usize) -> Vec<Point> {
    let third = total_points as f64 / 3.0;
    let half = total_points as f64 / 2.0;
    let mut points = Vec::with_capacity(sample_count(total_points));

    sample(&mut points, third, |t| quadratic_point(cp.v1, cp.qv1, cp.qv2, t));
    sample(&mut points, third, |t| {
        bezier_point(cp.qv2, cp.bv1, cp.bv2, cp.bv3, t)
    });
    sample(&mut points, third, |t| line_point(cp.bv3, cp.v1, t));
    sample(&mut points, half, |t| {
        bezier_point(cp.qv2, cp.bv1, cp.bv2, cp.bv3, t)
    });

    points
}
