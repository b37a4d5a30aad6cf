//! Rotatable vector shapes.
//!
//! A rotatable shape is an ordered list of layers, each an ordered list
//! of [`VShape`] primitives (painter's algorithm: later entries draw
//! over earlier ones). The whole definition rotates by quarter turns
//! through an integer transform table — exact, no floating-point drift —
//! and scales uniformly at render time.
//!
//! Submodules:
//! - `vshape`: the primitive catalog and the render trait
//! - `surface`: the drawing interface and the command recorder

pub mod surface;
pub mod vshape;

pub use surface::{BrushStyle, CommandRecorder, DrawCommand, PenStyle, Surface};
pub use vshape::{
    Render, VArc, VBrush, VCircle, VEllipse, VEllipticArc, VLine, VPen, VPolygon, VRectangle,
    VShape,
};

use crate::log::debug;
use crate::types::Point;

/// One of the four quarter-turn rotation states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Quadrant {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

/// The 2x2 integer rotation matrices for 0, 90, 180 and 270 degrees
/// clockwise, stored row-major as [a, b, c, d] with x' = a*x + b*y and
/// y' = c*x + d*y.
const ROTATIONS: [[i32; 4]; 4] = [[1, 0, 0, 1], [0, -1, 1, 0], [-1, 0, 0, -1], [0, 1, -1, 0]];

impl Quadrant {
    /// Number of clockwise quarter turns (0..=3).
    pub fn turns(self) -> u8 {
        match self {
            Quadrant::R0 => 0,
            Quadrant::R90 => 1,
            Quadrant::R180 => 2,
            Quadrant::R270 => 3,
        }
    }

    /// Quadrant for a turn count, wrapping modulo 4.
    pub fn from_turns(turns: u8) -> Quadrant {
        match turns % 4 {
            0 => Quadrant::R0,
            1 => Quadrant::R90,
            2 => Quadrant::R180,
            _ => Quadrant::R270,
        }
    }

    fn matrix(self) -> [i32; 4] {
        ROTATIONS[usize::from(self.turns())]
    }
}

/// Rotate `(x, y)` by the quadrant's quarter-turn matrix. Integer-exact:
/// four applications of any quadrant return the original coordinates.
pub fn convert(quadrant: Quadrant, x: i32, y: i32) -> (i32, i32) {
    let t = quadrant.matrix();
    (t[0] * x + t[1] * y, t[2] * x + t[3] * y)
}

/// [`convert`] applied to a [`Point`].
pub fn convert_point(quadrant: Quadrant, p: Point) -> Point {
    let (x, y) = convert(quadrant, p.x, p.y);
    Point::new(x, y)
}

/// An ordered run of shapes drawn as one pass; pen/brush commands apply
/// to the entries after them.
pub type Layer = Vec<VShape>;

/// A complete rotatable icon: layers in back-to-front order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RotatableShape {
    layers: Vec<Layer>,
}

impl RotatableShape {
    pub fn new(layers: Vec<Layer>) -> RotatableShape {
        RotatableShape { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The definition with every shape in every layer rotated by the
    /// same quadrant. Layer and shape order is render order and is
    /// preserved exactly.
    pub fn rotated(&self, quadrant: Quadrant) -> RotatableShape {
        debug!(?quadrant, layers = self.layers.len(), "rotating shape definition");
        RotatableShape {
            layers: self
                .layers
                .iter()
                .map(|layer| layer.iter().map(|shape| shape.rotated(quadrant)).collect())
                .collect(),
        }
    }

    /// Draw every layer in order, translated by `origin` and scaled by
    /// `scale`.
    pub fn render(&self, surface: &mut dyn Surface, origin: Point, scale: f64) {
        for layer in &self.layers {
            for shape in layer {
                shape.render(surface, origin, scale);
            }
        }
    }
}
