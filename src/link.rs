//! Link geometry: derived quantities of the line connecting two shapes.
//!
//! Given the source and destination anchor points of a link, these
//! functions compute the direction vector, midpoint, the fixed-offset
//! positions where cardinality labels are drawn near each endpoint, and
//! the vertices of the diamond decoration placed at the owning end of an
//! aggregation or composition.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;

use crate::defaults;
use crate::errors::GeometryError;
use crate::log::debug;
use crate::types::{DiamondPolygon, Point};

/// Direction and length of a link, derived on demand from its two
/// endpoints. Never zero-length: construction rejects coincident
/// endpoints so downstream offset math cannot divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkVector {
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
    /// Direction in radians, measured from the positive x axis.
    pub angle: f64,
}

impl LinkVector {
    /// Compute the vector from `src` to `dst`.
    ///
    /// Errors with [`GeometryError::DegenerateLink`] when the endpoints
    /// coincide; callers should skip label placement for such links.
    pub fn between(src: Point, dst: Point) -> Result<LinkVector, GeometryError> {
        if src == dst {
            return Err(GeometryError::DegenerateLink);
        }
        let d = dst.as_dvec2() - src.as_dvec2();
        Ok(LinkVector {
            dx: d.x,
            dy: d.y,
            length: d.length(),
            angle: d.y.atan2(d.x),
        })
    }
}

/// Arithmetic mean of two points, rounded to pixel space.
/// Order-independent: `midpoint(a, b) == midpoint(b, a)`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::from_rounded((a.as_dvec2() + b.as_dvec2()) * 0.5)
}

/// Offset a label position away from an anchor point, `along` pixels in
/// the link direction plus a `perp` correction term.
///
/// The perpendicular term applies with opposite signs on the two axes
/// (`+perp` on x, `-perp` on y), which is what pushes the label off the
/// line instead of sliding it further along.
pub fn offset_near_endpoint(anchor: Point, link: &LinkVector, along: f64, perp: f64) -> Point {
    let x = ((along + perp) * link.dx / link.length).round() as i32 + anchor.x;
    let y = ((along - perp) * link.dy / link.length).round() as i32 + anchor.y;
    Point::new(x, y)
}

/// Where the source-end cardinality label goes: 20 px along the link
/// from the source anchor, 5 px perpendicular correction.
pub fn source_cardinality_position(src: Point, link: &LinkVector) -> Point {
    offset_near_endpoint(
        src,
        link,
        defaults::CARDINALITY_ALONG_OFFSET,
        -defaults::CARDINALITY_PERP_OFFSET,
    )
}

/// Where the destination-end cardinality label goes: 20 px back along
/// the link from the destination anchor, 5 px perpendicular correction.
pub fn destination_cardinality_position(dst: Point, link: &LinkVector) -> Point {
    offset_near_endpoint(
        dst,
        link,
        -defaults::CARDINALITY_ALONG_OFFSET,
        defaults::CARDINALITY_PERP_OFFSET,
    )
}

/// Compute the diamond decoration for a link's terminal segment, using
/// the default diamond size.
///
/// `segments[0]` is the point nearest the decorated shape and becomes
/// the diamond's apex exactly; `segments[1]` is the next point back
/// along the poly-line and only sets the orientation.
pub fn diamond_polygon(segments: &[Point]) -> Result<DiamondPolygon, GeometryError> {
    diamond_polygon_with_size(segments, defaults::DIAMOND_SIZE)
}

/// [`diamond_polygon`] with an explicit half-length `size`.
///
/// The wings spread ±30 degrees from the line direction at distance
/// `size` from the apex; the far tip sits at `2 * size` back along the
/// line. All vertices except the apex are rounded to the nearest pixel.
pub fn diamond_polygon_with_size(
    segments: &[Point],
    size: f64,
) -> Result<DiamondPolygon, GeometryError> {
    if segments.len() < 2 {
        return Err(GeometryError::TooFewSegmentPoints {
            found: segments.len(),
        });
    }
    let apex = segments[0];
    let back = segments[1];
    let a = f64::from(apex.x - back.x);
    let b = f64::from(apex.y - back.y);

    let mut alpha = if a.abs() < defaults::VERTICAL_SLOPE_EPSILON {
        // vertical segment
        if b > 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 }
    } else {
        (b / a).atan()
    };
    // atan is pi-periodic; flip into the half-plane pointing back along
    // the segment so the diamond opens away from the decorated shape
    if a > 0.0 {
        alpha += PI;
    }
    let wing1 = alpha + defaults::WING_ANGLE;
    let wing2 = alpha - defaults::WING_ANGLE;

    let apex_v = apex.as_dvec2();
    let p0 = Point::from_rounded(apex_v + size * DVec2::from_angle(wing1));
    let p2 = Point::from_rounded(apex_v + size * DVec2::from_angle(wing2));
    let p3 = Point::from_rounded(apex_v + 2.0 * size * DVec2::from_angle(alpha));

    let diamond = DiamondPolygon([p0, apex, p2, p3]);
    debug!(?diamond, alpha, "computed diamond decoration");
    Ok(diamond)
}
