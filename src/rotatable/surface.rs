//! The narrow drawing interface rotatable shapes render through.
//!
//! The consuming application implements [`Surface`] on top of whatever
//! device context its toolkit provides; this crate only ships
//! [`CommandRecorder`], which captures the draw calls as values so tests
//! (and headless consumers) can inspect them.

use crate::types::Point;

/// Outline style, set by a pen command before subsequent geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenStyle {
    /// RGB color packed as 0xRRGGBB
    pub color: u32,
}

impl PenStyle {
    pub const BLACK: PenStyle = PenStyle { color: 0x000000 };
    pub const WHITE: PenStyle = PenStyle { color: 0xFFFFFF };
}

/// Fill style, set by a brush command before subsequent geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushStyle {
    /// RGB color packed as 0xRRGGBB
    pub color: u32,
    /// Transparent brushes outline without filling.
    pub solid: bool,
}

impl BrushStyle {
    pub const BLACK: BrushStyle = BrushStyle {
        color: 0x000000,
        solid: true,
    };
    pub const WHITE: BrushStyle = BrushStyle {
        color: 0xFFFFFF,
        solid: true,
    };
    pub const TRANSPARENT: BrushStyle = BrushStyle {
        color: 0xFFFFFF,
        solid: false,
    };
}

/// Device-context drawing primitives, already translated to absolute
/// pixel coordinates by the caller.
///
/// Pen and brush changes are sequencing-sensitive: they apply to every
/// geometric call after them, so implementations must process calls in
/// order.
pub trait Surface {
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn draw_circle(&mut self, center: Point, radius: i32);
    /// Counter-clockwise arc from `start` to `end` around `center`.
    fn draw_arc(&mut self, start: Point, end: Point, center: Point);
    /// Arc of the ellipse bounded by the given rectangle, between
    /// `start_deg` and `end_deg`.
    fn draw_elliptic_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_deg: i32,
        end_deg: i32,
    );
    fn draw_line(&mut self, start: Point, end: Point);
    fn draw_polygon(&mut self, points: &[Point]);
    fn set_pen(&mut self, pen: PenStyle);
    fn set_brush(&mut self, brush: BrushStyle);
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Ellipse {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Circle {
        center: Point,
        radius: i32,
    },
    Arc {
        start: Point,
        end: Point,
        center: Point,
    },
    EllipticArc {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_deg: i32,
        end_deg: i32,
    },
    Line {
        start: Point,
        end: Point,
    },
    Polygon {
        points: Vec<Point>,
    },
    Pen(PenStyle),
    Brush(BrushStyle),
}

/// A [`Surface`] that records every call as a [`DrawCommand`].
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> CommandRecorder {
        CommandRecorder::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Surface for CommandRecorder {
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::Rectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::Ellipse {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn draw_arc(&mut self, start: Point, end: Point, center: Point) {
        self.commands.push(DrawCommand::Arc { start, end, center });
    }

    fn draw_elliptic_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_deg: i32,
        end_deg: i32,
    ) {
        self.commands.push(DrawCommand::EllipticArc {
            x,
            y,
            width,
            height,
            start_deg,
            end_deg,
        });
    }

    fn draw_line(&mut self, start: Point, end: Point) {
        self.commands.push(DrawCommand::Line { start, end });
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
        });
    }

    fn set_pen(&mut self, pen: PenStyle) {
        self.commands.push(DrawCommand::Pen(pen));
    }

    fn set_brush(&mut self, brush: BrushStyle) {
        self.commands.push(DrawCommand::Brush(brush));
    }
}
