use std::cmp::Ordering;

use crate::error::{DirectionError, Result};
use crate::math::{cross_2d, dot_2d, Point2, Vector2, MAX_COORD};

use super::Direction;

/// Largest component magnitude a direction may carry. Twice the coordinate
/// bound, so the edge vector of any in-range polygon is always admissible.
const MAX_COMPONENT: i64 = 2 * MAX_COORD;

/// An exact direction in the plane, backed by an integer vector.
///
/// Two directions compare equal iff they point the same way, regardless of
/// magnitude: `(1, 2)` and `(3, 6)` are the same direction, `(-1, -2)` is
/// its opposite. Equality and ordering are decided by the signs of widened
/// cross and dot products; nothing is normalized and nothing goes through
/// floating point.
#[derive(Debug, Clone, Copy)]
pub struct Direction2 {
    v: Vector2,
}

impl Direction2 {
    /// Creates a direction from a vector.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::ZeroVector`] for the zero vector, and
    /// [`DirectionError::ComponentOutOfRange`] when a component magnitude
    /// exceeds twice [`MAX_COORD`].
    pub fn new(v: Vector2) -> Result<Self> {
        if v.x == 0 && v.y == 0 {
            return Err(DirectionError::ZeroVector.into());
        }
        for value in [v.x, v.y] {
            if value < -MAX_COMPONENT || value > MAX_COMPONENT {
                return Err(DirectionError::ComponentOutOfRange { value }.into());
            }
        }
        Ok(Self { v })
    }

    /// Creates the direction pointing from `source` towards `target`.
    ///
    /// Coordinates are expected within [`MAX_COORD`], as enforced for
    /// polygon vertices.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::ZeroVector`] when the points coincide.
    pub fn from_points(source: Point2, target: Point2) -> Result<Self> {
        Self::new(target - source)
    }

    /// X component of the underlying vector.
    #[must_use]
    pub fn dx(&self) -> i64 {
        self.v.x
    }

    /// Y component of the underlying vector.
    #[must_use]
    pub fn dy(&self) -> i64 {
        self.v.y
    }
}

impl PartialEq for Direction2 {
    fn eq(&self, other: &Self) -> bool {
        cross_2d(self.v, other.v) == 0 && dot_2d(self.v, other.v) > 0
    }
}

impl Eq for Direction2 {}

impl Direction for Direction2 {
    fn opposite(&self) -> Self {
        Self { v: -self.v }
    }

    fn cw_in_between(&self, from: &Self, to: &Self) -> bool {
        if self == from {
            return false;
        }
        if from == to {
            // Full-circle sweep: everything except `from` itself is strictly
            // between.
            return true;
        }
        match cw_class(from, self).cmp(&cw_class(from, to)) {
            Ordering::Less => true,
            Ordering::Greater => false,
            // Same open half relative to `from`; their mutual rotation is
            // below a half turn, so one cross sign settles the order.
            Ordering::Equal => cross_2d(self.v, to.v) < 0,
        }
    }
}

/// Classifies the clockwise rotation carrying `from` onto `x` into one of
/// four bands: 0 for no rotation, 1 for (0, π), 2 for exactly π, 3 for
/// (π, 2π).
fn cw_class(from: &Direction2, x: &Direction2) -> u8 {
    match cross_2d(from.v, x.v).cmp(&0) {
        Ordering::Less => 1,
        Ordering::Greater => 3,
        Ordering::Equal => {
            if dot_2d(from.v, x.v) > 0 {
                0
            } else {
                2
            }
        }
    }
}
