//! Grid snapping for shape placement.

/// Snap coordinates down to the nearest grid intersection.
///
/// Each coordinate is floored to the closest lower multiple of
/// `interval`; coordinates already on the grid are unchanged. `interval`
/// must be positive.
pub fn snap_to_grid(x: i32, y: i32, interval: i32) -> (i32, i32) {
    (x - x.rem_euclid(interval), y - y.rem_euclid(interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_down_to_grid_interval() {
        assert_eq!(snap_to_grid(335, 142, 25), (325, 125));
    }

    #[test]
    fn aligned_coordinates_are_unchanged() {
        assert_eq!(snap_to_grid(300, 200, 25), (300, 200));
    }

    #[test]
    fn negative_coordinates_snap_toward_negative_infinity() {
        assert_eq!(snap_to_grid(-1, -26, 25), (-25, -50));
    }
}
