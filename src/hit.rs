//! Hit-testing primitives for selection.
//!
//! Shape hit tests work in absolute coordinates; the segment and
//! bounding-box tests work relative to a segment's start point, which is
//! how line shapes hand their click coordinates down.

use glam::dvec2;

use crate::defaults;

/// Whether `(x, y)` falls inside the rectangle at `(left, top)` with the
/// given extents.
///
/// Inclusive on all four boundaries. Negative width/height are
/// normalized first (the rectangle may be described from any corner),
/// and any dimension thinner than [`defaults::MIN_HIT_EXTENT`] is
/// widened around its center so degenerate shapes stay selectable.
pub fn inside_rectangle(left: f64, top: f64, width: f64, height: f64, x: f64, y: f64) -> bool {
    let (left, width) = widen_to_minimum(normalize_extent((left, width)));
    let (top, height) = widen_to_minimum(normalize_extent((top, height)));
    left <= x && x <= left + width && top <= y && y <= top + height
}

fn normalize_extent((origin, extent): (f64, f64)) -> (f64, f64) {
    if extent < 0.0 {
        (origin + extent, -extent)
    } else {
        (origin, extent)
    }
}

fn widen_to_minimum((origin, extent): (f64, f64)) -> (f64, f64) {
    if extent < defaults::MIN_HIT_EXTENT {
        let grow = (defaults::MIN_HIT_EXTENT - extent) / 2.0;
        (origin - grow, defaults::MIN_HIT_EXTENT)
    } else {
        (origin, extent)
    }
}

/// Whether a click lands within `tolerance` pixels of a line segment.
///
/// `(click_dx, click_dy)` is the click position relative to the
/// segment's start; `(diff_x, diff_y)` is the segment's extent. The
/// click is projected onto the segment (dot product, clamped to the
/// segment's ends) and accepted when the remaining distance is within
/// `tolerance`. A zero-length segment degrades to a point-distance test.
pub fn inside_segment(
    click_dx: f64,
    click_dy: f64,
    diff_x: f64,
    diff_y: f64,
    tolerance: f64,
) -> bool {
    let segment = dvec2(diff_x, diff_y);
    let click = dvec2(click_dx, click_dy);

    let length_sq = segment.length_squared();
    if length_sq == 0.0 {
        return click.length() <= tolerance;
    }

    let t = (click.dot(segment) / length_sq).clamp(0.0, 1.0);
    (click - t * segment).length() <= tolerance
}

/// Whether a click lands in a line segment's bounding box, with the
/// minimum hit extent applied to thin boxes.
///
/// Same relative coordinates as [`inside_segment`]; used as the cheap
/// pre-test before the exact segment distance check.
pub fn inside_bounding_box(click_dx: f64, click_dy: f64, diff_x: f64, diff_y: f64) -> bool {
    inside_rectangle(
        diff_x.min(0.0),
        diff_y.min(0.0),
        diff_x.abs(),
        diff_y.abs(),
        click_dx,
        click_dy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::CLICK_TOLERANCE;

    #[test]
    fn rectangle_is_inclusive_at_all_edges() {
        assert!(inside_rectangle(10.0, 10.0, 20.0, 10.0, 10.0, 10.0));
        assert!(inside_rectangle(10.0, 10.0, 20.0, 10.0, 30.0, 20.0));
        assert!(inside_rectangle(10.0, 10.0, 20.0, 10.0, 10.0, 20.0));
        assert!(inside_rectangle(10.0, 10.0, 20.0, 10.0, 30.0, 10.0));

        assert!(!inside_rectangle(10.0, 10.0, 20.0, 10.0, 30.1, 15.0));
        assert!(!inside_rectangle(10.0, 10.0, 20.0, 10.0, 9.9, 15.0));
    }

    #[test]
    fn rectangle_accepts_negative_extents() {
        // same rectangle described from the opposite corner
        for (x, y, expected) in [(15.0, 15.0, true), (35.0, 15.0, false)] {
            assert_eq!(inside_rectangle(10.0, 10.0, 20.0, 10.0, x, y), expected);
            assert_eq!(inside_rectangle(30.0, 20.0, -20.0, -10.0, x, y), expected);
        }
    }

    #[test]
    fn thin_rectangle_gets_minimum_hit_target() {
        // zero-width shape still catches clicks within 2 px either side
        assert!(inside_rectangle(100.0, 0.0, 0.0, 50.0, 101.0, 25.0));
        assert!(inside_rectangle(100.0, 0.0, 0.0, 50.0, 98.0, 25.0));
        assert!(!inside_rectangle(100.0, 0.0, 0.0, 50.0, 104.0, 25.0));
    }

    #[test]
    fn click_near_vertical_segment() {
        // line (100,100)-(100,200), click (101,150)
        assert!(inside_segment(1.0, 50.0, 0.0, 100.0, CLICK_TOLERANCE));
    }

    #[test]
    fn click_beyond_tolerance_misses_segment() {
        // click at x = 100 + tolerance + 1
        assert!(!inside_segment(
            CLICK_TOLERANCE + 1.0,
            50.0,
            0.0,
            100.0,
            CLICK_TOLERANCE
        ));
    }

    #[test]
    fn click_past_segment_end_misses() {
        // on the infinite line but 50 px past the end point
        assert!(!inside_segment(0.0, 150.0, 0.0, 100.0, CLICK_TOLERANCE));
        // just past the end is still within the tolerance radius
        assert!(inside_segment(0.0, 103.0, 0.0, 100.0, CLICK_TOLERANCE));
    }

    #[test]
    fn zero_length_segment_is_a_point_test() {
        assert!(inside_segment(2.0, 2.0, 0.0, 0.0, CLICK_TOLERANCE));
        assert!(!inside_segment(4.0, 4.0, 0.0, 0.0, CLICK_TOLERANCE));
    }

    #[test]
    fn bounding_box_around_vertical_line() {
        assert!(inside_bounding_box(1.0, 50.0, 0.0, 100.0));
        assert!(!inside_bounding_box(CLICK_TOLERANCE, 50.0, 0.0, 100.0));
    }

    #[test]
    fn bounding_box_handles_negative_direction() {
        // segment pointing up-left from its start
        assert!(inside_bounding_box(-50.0, -25.0, -100.0, -50.0));
        assert!(!inside_bounding_box(10.0, -25.0, -100.0, -50.0));
    }
}
