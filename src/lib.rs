//! Geometry core for UML diagram shapes.
//!
//! This crate holds the toolkit-independent math behind a UML diagram
//! editor's graphical shape layer:
//!
//! - [`link`]: derived geometry of a connecting line — direction vector,
//!   length, midpoint, cardinality-label positions, and the vertices of
//!   the aggregation/composition diamond decoration.
//! - [`rotatable`]: a catalog of small vector-shape primitives that
//!   compose into layered icons, rotate by exact quarter turns, and
//!   scale uniformly before rendering through a [`rotatable::Surface`].
//! - [`hit`]: point-in-rectangle and point-near-segment hit testing with
//!   the click tolerances the editor uses for selection.
//! - [`grid`]: snapping coordinates to the diagram grid.
//!
//! Everything here is a pure coordinate transform. Drawing primitives,
//! event handling, and the diagram's data model live in the consuming
//! application; this crate only takes numbers in and hands numbers out.

pub mod defaults;
pub mod errors;
pub mod grid;
pub mod hit;
pub mod link;
pub mod log;
pub mod rotatable;
pub mod types;

pub use errors::GeometryError;
pub use types::{DiamondPolygon, Point};
