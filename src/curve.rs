/// A position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn lerp(start: f64, end: f64, amt: f64) -> f64 {
    (1.0 - amt) * start + amt * end
}

/// Point on the straight line from `a` to `b`.
pub fn line_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Quadratic Bezier from `p0` to `p1` pulled towards `pc`, evaluated by
/// nested interpolation. `t` is not clamped.
pub fn quadratic_point(p0: Point, pc: Point, p1: Point, t: f64) -> Point {
    line_point(line_point(p0, pc, t), line_point(pc, p1, t), t)
}

/// Cubic Bezier through the power-basis form `a t^3 + b t^2 + c t + p0`,
/// with each axis using its own coefficients and start value.
pub fn bezier_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    Point::new(
        cubic(p0.x, p1.x, p2.x, p3.x, t),
        cubic(p0.y, p1.y, p2.y, p3.y, t),
    )
}

fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let c = 3.0 * (p1 - p0);
    let b = 3.0 * (p2 - p1) - c;
    let a = p3 - p0 - c - b;
    a * t.powi(3) + b * t.powi(2) + c * t + p0
}
