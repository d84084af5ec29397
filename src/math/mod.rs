pub mod polygon_2d;

/// 2D point type with exact integer coordinates.
pub type Point2 = nalgebra::Point2<i64>;

/// 2D vector type with exact integer coordinates.
pub type Vector2 = nalgebra::Vector2<i64>;

/// Largest coordinate magnitude accepted by the kernel.
///
/// With all inputs in `[-MAX_COORD, MAX_COORD]`, every predicate in the
/// crate evaluates in `i128` without overflow: coordinate differences fit
/// in 33 bits and their pairwise products in 66.
pub const MAX_COORD: i64 = 1 << 31;

/// Exact 2D cross product (`a.x * b.y - a.y * b.x`), widened to `i128`.
#[must_use]
pub fn cross_2d(a: Vector2, b: Vector2) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

/// Exact 2D dot product, widened to `i128`.
#[must_use]
pub fn dot_2d(a: Vector2, b: Vector2) -> i128 {
    i128::from(a.x) * i128::from(b.x) + i128::from(a.y) * i128::from(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_matches_turn_direction() {
        let right = Vector2::new(1, 0);
        let up = Vector2::new(0, 1);
        assert_eq!(cross_2d(right, up), 1);
        assert_eq!(cross_2d(up, right), -1);
        assert_eq!(cross_2d(right, right), 0);
    }

    #[test]
    fn products_do_not_overflow_at_the_coordinate_bound() {
        // Largest magnitudes reachable from in-range coordinate differences.
        let a = Vector2::new(2 * MAX_COORD, -2 * MAX_COORD);
        let b = Vector2::new(-2 * MAX_COORD, 2 * MAX_COORD);
        let m = i128::from(MAX_COORD);
        assert_eq!(cross_2d(a, b), 0);
        assert_eq!(dot_2d(a, b), -8 * m * m);
    }
}
