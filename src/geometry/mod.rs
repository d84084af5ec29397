mod direction;
mod polygon;

pub use direction::Direction2;
pub use polygon::{Orientation, Polygon, PolygonEdge};

/// Trait for exact directions on the circle of directions.
///
/// This is the seam between the casting analysis and its geometry kernel:
/// the algorithms consume nothing beyond equality, the antipode and one
/// cyclic ordering predicate, all of which must be exact. [`Direction2`]
/// is the crate's integer-backed implementation; any other exact substrate
/// (rationals, algebraic numbers) can stand in.
pub trait Direction: Clone + PartialEq + std::fmt::Debug {
    /// Returns the antipodal direction.
    #[must_use]
    fn opposite(&self) -> Self;

    /// Cyclic betweenness, clockwise: true iff rotating clockwise starting
    /// at `from`, `self` is reached strictly before `to`.
    ///
    /// `self == from` and `self == to` both yield `false`. When
    /// `from == to` the rotation sweeps the full circle, so every other
    /// direction lies strictly between.
    fn cw_in_between(&self, from: &Self, to: &Self) -> bool;
}

/// An arc on the circle of directions, swept clockwise from `start` to `end`.
///
/// Whether the bounding directions themselves belong to the arc is decided
/// by context (a forbidden arc is open, a reported pullout range is closed);
/// the pair only fixes the sweep. An arc with `start == end` is degenerate
/// and denotes that single direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionArc<D> {
    /// Direction at which the clockwise sweep begins.
    pub start: D,
    /// Direction at which the clockwise sweep ends.
    pub end: D,
}

impl<D: Direction> DirectionArc<D> {
    /// Creates a new arc sweeping clockwise from `start` to `end`.
    #[must_use]
    pub fn new(start: D, end: D) -> Self {
        Self { start, end }
    }

    /// Returns whether the arc denotes a single direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns whether `d` lies on the arc, endpoints included.
    ///
    /// A degenerate arc contains exactly its one direction.
    #[must_use]
    pub fn contains(&self, d: &D) -> bool {
        if self.is_degenerate() {
            return *d == self.start;
        }
        *d == self.start || *d == self.end || d.cw_in_between(&self.start, &self.end)
    }
}
