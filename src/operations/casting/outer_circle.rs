use crate::geometry::{Direction, DirectionArc, Orientation};

/// Computes the forbidden arc of one polygon edge: the open half-circle of
/// pull directions that would press the part into the mold wall lining that
/// edge.
///
/// For a counterclockwise polygon the outward normal is the edge direction
/// rotated a quarter turn clockwise, so the blocked half runs clockwise from
/// the edge direction to its opposite. A clockwise polygon flips the pair.
#[must_use]
pub fn outer_half_circle<D: Direction>(
    edge_direction: &D,
    orientation: Orientation,
) -> DirectionArc<D> {
    let forward = edge_direction.clone();
    let backward = edge_direction.opposite();
    match orientation {
        Orientation::CounterClockwise => DirectionArc::new(forward, backward),
        Orientation::Clockwise => DirectionArc::new(backward, forward),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Direction2;
    use crate::math::Vector2;

    fn d(x: i64, y: i64) -> Direction2 {
        Direction2::new(Vector2::new(x, y)).unwrap()
    }

    #[test]
    fn ccw_bottom_edge_blocks_downward_pulls() {
        let arc = outer_half_circle(&d(1, 0), Orientation::CounterClockwise);
        assert_eq!(arc.start, d(1, 0));
        assert_eq!(arc.end, d(-1, 0));
        assert!(d(0, -1).cw_in_between(&arc.start, &arc.end));
        assert!(d(1, -1).cw_in_between(&arc.start, &arc.end));
        assert!(!d(0, 1).cw_in_between(&arc.start, &arc.end));
    }

    #[test]
    fn cw_orientation_flips_the_sweep() {
        let arc = outer_half_circle(&d(1, 0), Orientation::Clockwise);
        assert_eq!(arc.start, d(-1, 0));
        assert_eq!(arc.end, d(1, 0));
        assert!(d(0, 1).cw_in_between(&arc.start, &arc.end));
        assert!(!d(0, -1).cw_in_between(&arc.start, &arc.end));
    }

    #[test]
    fn edge_direction_itself_is_never_blocked() {
        for orientation in [Orientation::CounterClockwise, Orientation::Clockwise] {
            let arc = outer_half_circle(&d(3, -2), orientation);
            assert!(!d(3, -2).cw_in_between(&arc.start, &arc.end));
            assert!(!d(-3, 2).cw_in_between(&arc.start, &arc.end));
            assert!(!d(6, -4).cw_in_between(&arc.start, &arc.end));
        }
    }
}
