//! Value types shared by the geometry modules.

use std::fmt;
use std::ops::{Add, Sub};

use glam::{DVec2, dvec2};

/// A point in integer pixel space. Pure value, no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Lift into float space for vector math.
    pub fn as_dvec2(self) -> DVec2 {
        dvec2(f64::from(self.x), f64::from(self.y))
    }

    /// Drop back to pixel space, rounding each coordinate to the
    /// nearest integer (halves round away from zero).
    pub fn from_rounded(v: DVec2) -> Point {
        Point {
            x: v.x.round() as i32,
            y: v.y.round() as i32,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point::new(x, y)
    }
}

/// The four vertices of a diamond link decoration, in closed-polygon
/// fill order: first wing, apex (the decorated line endpoint), second
/// wing, far tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiamondPolygon(pub [Point; 4]);

impl DiamondPolygon {
    /// The vertex exactly at the decorated line endpoint.
    pub fn apex(&self) -> Point {
        self.0[1]
    }

    /// Vertices in the order a renderer must fill them.
    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3, 4);
        let b = Point::new(1, -2);

        assert_eq!(a + b, Point::new(4, 2));
        assert_eq!(a - b, Point::new(2, 6));
    }

    #[test]
    fn point_round_trip_through_float() {
        let p = Point::new(-17, 42);
        assert_eq!(Point::from_rounded(p.as_dvec2()), p);
    }

    #[test]
    fn rounding_halves_away_from_zero() {
        assert_eq!(Point::from_rounded(dvec2(0.5, -0.5)), Point::new(1, -1));
        assert_eq!(Point::from_rounded(dvec2(2.49, 2.51)), Point::new(2, 3));
    }

    #[test]
    fn diamond_apex_is_second_vertex() {
        let diamond = DiamondPolygon([
            Point::new(0, 1),
            Point::new(5, 5),
            Point::new(2, 3),
            Point::new(9, 9),
        ]);
        assert_eq!(diamond.apex(), Point::new(5, 5));
    }
}
