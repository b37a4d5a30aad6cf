//! Fixed design parameters (all in integer pixel space unless noted).

use std::f64::consts::FRAC_PI_6;

/// Diamond half-length for aggregation/composition decorations; the far
/// tip sits at twice this distance back along the line.
pub const DIAMOND_SIZE: f64 = 7.0;

/// Wing spread of the diamond decoration, measured from the line
/// direction (±30 degrees).
pub const WING_ANGLE: f64 = FRAC_PI_6;

/// Along-link distance from an anchor to its cardinality label.
pub const CARDINALITY_ALONG_OFFSET: f64 = 20.0;

/// Perpendicular-term distance for cardinality label placement.
pub const CARDINALITY_PERP_OFFSET: f64 = 5.0;

/// Maximum perpendicular distance at which a click still selects a line.
pub const CLICK_TOLERANCE: f64 = 4.0;

/// Minimum hit-target dimension; shapes thinner than this are widened so
/// small or zero-size shapes stay selectable.
pub const MIN_HIT_EXTENT: f64 = 4.0;

/// Below this |dx| a terminal segment is treated as vertical when
/// orienting a diamond decoration.
pub const VERTICAL_SLOPE_EPSILON: f64 = 0.01;
