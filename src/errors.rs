//! Error types with diagnostic codes using miette.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from the geometry operations.
///
/// Everything not covered here is a total function over its numeric
/// domain; these are the two input conditions the crate refuses to
/// compute through rather than divide by zero or index out of range.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Source and destination endpoints coincide, so the link has no
    /// direction and label offsets would divide by zero.
    #[error("link endpoints are coincident")]
    #[diagnostic(
        code(oglru::link::degenerate_link),
        help("treat coincident endpoints as degenerate and skip label placement")
    )]
    DegenerateLink,

    /// A poly-line needs at least two points before it has a terminal
    /// segment to orient a decoration on.
    #[error("segment list has {found} point(s), need at least 2")]
    #[diagnostic(code(oglru::link::too_few_segment_points))]
    TooFewSegmentPoints { found: usize },
}
