use super::Point2;

/// Computes twice the signed area of a polygon (shoelace formula), exactly.
///
/// Positive for counter-clockwise, negative for clockwise. Doubling keeps the
/// result integral; callers only ever look at the sign.
#[must_use]
pub fn signed_area_doubled(points: &[Point2]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0i128;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += i128::from(points[i].x) * i128::from(points[j].y)
            - i128::from(points[j].x) * i128::from(points[i].y);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1)];
        assert_eq!(signed_area_doubled(&pts), 2);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0, 0), p(0, 1), p(1, 1), p(1, 0)];
        assert_eq!(signed_area_doubled(&pts), -2);
    }

    #[test]
    fn signed_area_collinear_is_zero() {
        let pts = vec![p(0, 0), p(1, 1), p(3, 3)];
        assert_eq!(signed_area_doubled(&pts), 0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_eq!(signed_area_doubled(&[p(0, 0)]), 0);
        assert_eq!(signed_area_doubled(&[]), 0);
    }
}
