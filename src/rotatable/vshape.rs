//! The virtual shape catalog.
//!
//! Each `V*` type is one drawing primitive (or a pen/brush state
//! command) with its own geometric parameters. A [`VShape`] value is
//! owned by exactly one shape definition; rotation and scaling are pure
//! functions returning new values, so a stored definition is never
//! mutated behind a consumer's back.

use enum_dispatch::enum_dispatch;

use super::{Quadrant, convert, convert_point};
use crate::rotatable::surface::{BrushStyle, PenStyle, Surface};
use crate::types::Point;

fn scale_i32(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}

fn scale_point(p: Point, factor: f64) -> Point {
    Point::from_rounded(p.as_dvec2() * factor)
}

/// Common rendering behavior: draw the primitive translated by `origin`
/// and scaled by `scale`. Pen/brush variants mutate the surface's
/// drawing state instead of emitting geometry.
#[enum_dispatch]
pub trait Render {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64);
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VRectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl VRectangle {
    pub fn rotated(&self, quadrant: Quadrant) -> VRectangle {
        let (x, y) = convert(quadrant, self.x, self.y);
        let (width, height) = convert(quadrant, self.width, self.height);
        VRectangle {
            x,
            y,
            width,
            height,
        }
    }

    pub fn scaled(&self, factor: f64) -> VRectangle {
        if factor == 1.0 {
            return *self;
        }
        VRectangle {
            x: scale_i32(self.x, factor),
            y: scale_i32(self.y, factor),
            width: scale_i32(self.width, factor),
            height: scale_i32(self.height, factor),
        }
    }
}

impl Render for VRectangle {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        surface.draw_rectangle(origin.x + s.x, origin.y + s.y, s.width, s.height);
    }
}

/// An ellipse bounded by an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VEllipse {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl VEllipse {
    pub fn rotated(&self, quadrant: Quadrant) -> VEllipse {
        let (x, y) = convert(quadrant, self.x, self.y);
        let (width, height) = convert(quadrant, self.width, self.height);
        VEllipse {
            x,
            y,
            width,
            height,
        }
    }

    pub fn scaled(&self, factor: f64) -> VEllipse {
        if factor == 1.0 {
            return *self;
        }
        VEllipse {
            x: scale_i32(self.x, factor),
            y: scale_i32(self.y, factor),
            width: scale_i32(self.width, factor),
            height: scale_i32(self.height, factor),
        }
    }
}

impl Render for VEllipse {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        surface.draw_ellipse(origin.x + s.x, origin.y + s.y, s.width, s.height);
    }
}

/// A circle around a center point. The radius is rotation-invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VCircle {
    pub center: Point,
    pub radius: i32,
}

impl VCircle {
    pub fn rotated(&self, quadrant: Quadrant) -> VCircle {
        VCircle {
            center: convert_point(quadrant, self.center),
            radius: self.radius,
        }
    }

    pub fn scaled(&self, factor: f64) -> VCircle {
        if factor == 1.0 {
            return *self;
        }
        VCircle {
            center: scale_point(self.center, factor),
            radius: scale_i32(self.radius, factor),
        }
    }
}

impl Render for VCircle {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        surface.draw_circle(s.center + origin, s.radius);
    }
}

/// A circular arc from `start` to `end` around `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VArc {
    pub start: Point,
    pub end: Point,
    pub center: Point,
}

impl VArc {
    pub fn rotated(&self, quadrant: Quadrant) -> VArc {
        VArc {
            start: convert_point(quadrant, self.start),
            end: convert_point(quadrant, self.end),
            center: convert_point(quadrant, self.center),
        }
    }

    pub fn scaled(&self, factor: f64) -> VArc {
        if factor == 1.0 {
            return *self;
        }
        VArc {
            start: scale_point(self.start, factor),
            end: scale_point(self.end, factor),
            center: scale_point(self.center, factor),
        }
    }
}

impl Render for VArc {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        surface.draw_arc(s.start + origin, s.end + origin, s.center + origin);
    }
}

/// An elliptic arc: the slice of the ellipse bounded by the given
/// rectangle between `start_deg` and `end_deg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VEllipticArc {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub start_deg: i32,
    pub end_deg: i32,
}

impl VEllipticArc {
    /// Rotates the bounding rectangle through the transform table and
    /// the sweep angles by the matching quarter turns.
    pub fn rotated(&self, quadrant: Quadrant) -> VEllipticArc {
        let (x, y) = convert(quadrant, self.x, self.y);
        let (width, height) = convert(quadrant, self.width, self.height);
        let shift = i32::from(quadrant.turns()) * 90;
        VEllipticArc {
            x,
            y,
            width,
            height,
            start_deg: self.start_deg - shift,
            end_deg: self.end_deg - shift,
        }
    }

    /// Scales the bounding rectangle only; the sweep angles are
    /// dimensionless and never scale.
    pub fn scaled(&self, factor: f64) -> VEllipticArc {
        if factor == 1.0 {
            return *self;
        }
        VEllipticArc {
            x: scale_i32(self.x, factor),
            y: scale_i32(self.y, factor),
            width: scale_i32(self.width, factor),
            height: scale_i32(self.height, factor),
            start_deg: self.start_deg,
            end_deg: self.end_deg,
        }
    }
}

impl Render for VEllipticArc {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        surface.draw_elliptic_arc(
            origin.x + s.x,
            origin.y + s.y,
            s.width,
            s.height,
            s.start_deg,
            s.end_deg,
        );
    }
}

/// A line segment between two absolute points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VLine {
    pub start: Point,
    pub end: Point,
}

impl VLine {
    pub fn rotated(&self, quadrant: Quadrant) -> VLine {
        VLine {
            start: convert_point(quadrant, self.start),
            end: convert_point(quadrant, self.end),
        }
    }

    pub fn scaled(&self, factor: f64) -> VLine {
        if factor == 1.0 {
            return *self;
        }
        VLine {
            start: scale_point(self.start, factor),
            end: scale_point(self.end, factor),
        }
    }
}

impl Render for VLine {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        surface.draw_line(s.start + origin, s.end + origin);
    }
}

/// A closed polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VPolygon {
    pub points: Vec<Point>,
}

impl VPolygon {
    pub fn rotated(&self, quadrant: Quadrant) -> VPolygon {
        VPolygon {
            points: self
                .points
                .iter()
                .map(|&p| convert_point(quadrant, p))
                .collect(),
        }
    }

    pub fn scaled(&self, factor: f64) -> VPolygon {
        if factor == 1.0 {
            return self.clone();
        }
        VPolygon {
            points: self.points.iter().map(|&p| scale_point(p, factor)).collect(),
        }
    }
}

impl Render for VPolygon {
    fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        let s = self.scaled(scale);
        let translated: Vec<Point> = s.points.iter().map(|&p| p + origin).collect();
        surface.draw_polygon(&translated);
    }
}

/// Pen change: applies to every geometric draw after it in the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VPen {
    pub style: PenStyle,
}

impl VPen {
    pub fn rotated(&self, _quadrant: Quadrant) -> VPen {
        *self
    }

    pub fn scaled(&self, _factor: f64) -> VPen {
        *self
    }
}

impl Render for VPen {
    fn render(&self, surface: &mut dyn Surface, _origin: Point, _scale: f64) {
        surface.set_pen(self.style);
    }
}

/// Brush change: applies to every geometric draw after it in the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VBrush {
    pub style: BrushStyle,
}

impl VBrush {
    pub fn rotated(&self, _quadrant: Quadrant) -> VBrush {
        *self
    }

    pub fn scaled(&self, _factor: f64) -> VBrush {
        *self
    }
}

impl Render for VBrush {
    fn render(&self, surface: &mut dyn Surface, _origin: Point, _scale: f64) {
        surface.set_brush(self.style);
    }
}

/// One entry of a shape definition: either a drawing primitive or a
/// pen/brush state command, consumed left to right by the renderer.
#[enum_dispatch(Render)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VShape {
    Rectangle(VRectangle),
    Ellipse(VEllipse),
    Circle(VCircle),
    Arc(VArc),
    EllipticArc(VEllipticArc),
    Line(VLine),
    Polygon(VPolygon),
    Pen(VPen),
    Brush(VBrush),
}

impl VShape {
    /// The shape re-expressed after a quarter-turn rotation. Pen and
    /// brush commands pass through unchanged.
    pub fn rotated(&self, quadrant: Quadrant) -> VShape {
        match self {
            VShape::Rectangle(s) => VShape::Rectangle(s.rotated(quadrant)),
            VShape::Ellipse(s) => VShape::Ellipse(s.rotated(quadrant)),
            VShape::Circle(s) => VShape::Circle(s.rotated(quadrant)),
            VShape::Arc(s) => VShape::Arc(s.rotated(quadrant)),
            VShape::EllipticArc(s) => VShape::EllipticArc(s.rotated(quadrant)),
            VShape::Line(s) => VShape::Line(s.rotated(quadrant)),
            VShape::Polygon(s) => VShape::Polygon(s.rotated(quadrant)),
            VShape::Pen(s) => VShape::Pen(s.rotated(quadrant)),
            VShape::Brush(s) => VShape::Brush(s.rotated(quadrant)),
        }
    }

    /// The shape with every geometric field multiplied by `factor`.
    /// A factor of exactly 1.0 returns the stored values untouched, so
    /// unscaled rendering never picks up rounding noise.
    pub fn scaled(&self, factor: f64) -> VShape {
        match self {
            VShape::Rectangle(s) => VShape::Rectangle(s.scaled(factor)),
            VShape::Ellipse(s) => VShape::Ellipse(s.scaled(factor)),
            VShape::Circle(s) => VShape::Circle(s.scaled(factor)),
            VShape::Arc(s) => VShape::Arc(s.scaled(factor)),
            VShape::EllipticArc(s) => VShape::EllipticArc(s.scaled(factor)),
            VShape::Line(s) => VShape::Line(s.scaled(factor)),
            VShape::Polygon(s) => VShape::Polygon(s.scaled(factor)),
            VShape::Pen(s) => VShape::Pen(s.scaled(factor)),
            VShape::Brush(s) => VShape::Brush(s.scaled(factor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotatable::surface::{CommandRecorder, DrawCommand};

    #[test]
    fn rectangle_quarter_turn() {
        let rect = VRectangle {
            x: 10,
            y: 5,
            width: 40,
            height: 20,
        };
        let turned = rect.rotated(Quadrant::R90);

        // x' = -y, y' = x for both the position and the extent pair
        assert_eq!(
            turned,
            VRectangle {
                x: -5,
                y: 10,
                width: -20,
                height: 40,
            }
        );
    }

    #[test]
    fn elliptic_arc_rotates_sweep_angles() {
        let arc = VEllipticArc {
            x: 0,
            y: 0,
            width: 60,
            height: 30,
            start_deg: 45,
            end_deg: 135,
        };
        let turned = arc.rotated(Quadrant::R90);

        assert_eq!(turned.start_deg, -45);
        assert_eq!(turned.end_deg, 45);
    }

    #[test]
    fn scale_identity_is_exact() {
        let poly = VPolygon {
            points: vec![Point::new(3, 3), Point::new(-7, 13), Point::new(0, -1)],
        };
        assert_eq!(poly.scaled(1.0), poly);

        let circle = VCircle {
            center: Point::new(9, 9),
            radius: 5,
        };
        assert_eq!(circle.scaled(1.0), circle);
    }

    #[test]
    fn scale_multiplies_every_field() {
        let rect = VRectangle {
            x: 10,
            y: 5,
            width: 40,
            height: 20,
        };
        assert_eq!(
            rect.scaled(2.0),
            VRectangle {
                x: 20,
                y: 10,
                width: 80,
                height: 40,
            }
        );
    }

    #[test]
    fn scale_never_touches_arc_angles() {
        let arc = VEllipticArc {
            x: 2,
            y: 2,
            width: 10,
            height: 10,
            start_deg: 30,
            end_deg: 300,
        };
        let scaled = arc.scaled(3.0);
        assert_eq!(scaled.start_deg, 30);
        assert_eq!(scaled.end_deg, 300);
        assert_eq!(scaled.width, 30);
    }

    #[test]
    fn render_translates_by_origin() {
        let mut recorder = CommandRecorder::new();
        let line = VShape::from(VLine {
            start: Point::new(0, 0),
            end: Point::new(10, 0),
        });
        line.render(&mut recorder, Point::new(100, 200), 1.0);

        assert_eq!(
            recorder.commands(),
            &[DrawCommand::Line {
                start: Point::new(100, 200),
                end: Point::new(110, 200),
            }]
        );
    }

    #[test]
    fn pen_renders_as_state_change() {
        let mut recorder = CommandRecorder::new();
        let pen = VShape::from(VPen {
            style: PenStyle::BLACK,
        });
        pen.render(&mut recorder, Point::new(50, 50), 2.0);

        assert_eq!(recorder.commands(), &[DrawCommand::Pen(PenStyle::BLACK)]);
    }
}
