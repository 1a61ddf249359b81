use std::ops::Add;

use bevy::math::Vec2;

/// Canvas space coordinate, origin top left, y growing downward.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copies any point-like value.
    pub fn from_point(point: impl Into<Point>) -> Self {
        point.into()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x as f32, p.y as f32)
    }
}

/// Offset of a bob hanging `radius` away from its pivot at `angle` from vertical.
pub fn to_polar_point(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), radius * angle.cos())
}

/// Moves `point` into the frame whose origin is `origin`.
pub fn translate(origin: Point, point: Point) -> Point {
    origin + point
}

/// The fixed anchor and both bobs, each placed relative to its parent pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotChain {
    pub anchor: Point,
    pub bob1: Point,
    pub bob2: Point,
}

impl PivotChain {
    pub fn compute(anchor: Point, radius: [f64; 2], theta: [f64; 2]) -> Self {
        let bob1 = translate(anchor, to_polar_point(radius[0], theta[0]));
        let bob2 = translate(bob1, to_polar_point(radius[1], theta[1]));
        Self { anchor, bob1, bob2 }
    }
}
