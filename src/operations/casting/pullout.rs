use crate::geometry::{Direction, Direction2, DirectionArc, Polygon};

use super::coverage::CoverageArrangement;
use super::outer_circle::outer_half_circle;

/// A maximal range of feasible pull directions sharing one top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PulloutRange {
    /// Index of the polygon edge that coincides with the mold opening.
    pub top_edge: usize,
    /// Clockwise arc of feasible pull directions, degenerate when only a
    /// single direction is feasible. Both boundary directions are feasible.
    pub directions: DirectionArc<Direction2>,
}

/// Finds every pull direction along which a polygonal part can leave a
/// single-piece mold, grouped into maximal ranges sharing one top edge.
///
/// A direction is feasible for a top edge when it presses into no other
/// edge's mold wall, that is, when it avoids the forbidden arcs of all
/// other edges. Equivalently it is covered exactly once on the circle of
/// directions, by the top edge itself.
pub struct PulloutDirections<'a> {
    polygon: &'a Polygon,
}

impl<'a> PulloutDirections<'a> {
    /// Creates a new `PulloutDirections` search.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the search, returning the maximal feasible ranges in
    /// sequence order of the underlying subdivision.
    ///
    /// An empty result means every direction is blocked by at least two
    /// edges and the part cannot be cast in a single-piece mold.
    #[must_use]
    pub fn execute(&self) -> Vec<PulloutRange> {
        let orientation = self.polygon.orientation();
        let mut edges = self.polygon.edges();
        let Some(first) = edges.next() else {
            return Vec::new();
        };
        let mut arrangement =
            CoverageArrangement::new(outer_half_circle(&first.direction, orientation));
        for edge in edges {
            arrangement.insert(&outer_half_circle(&edge.direction, orientation), edge.index);
            if arrangement.fully_blocked() {
                return Vec::new();
            }
        }
        arrangement
            .single_cover_ranges()
            .into_iter()
            .map(|(top_edge, directions)| PulloutRange { top_edge, directions })
            .collect()
    }
}

/// Tests whether one direction is a feasible pull direction of a polygon.
pub struct IsPulloutDirection<'a> {
    polygon: &'a Polygon,
    direction: Direction2,
}

impl<'a> IsPulloutDirection<'a> {
    /// Creates a new `IsPulloutDirection` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, direction: Direction2) -> Self {
        Self { polygon, direction }
    }

    /// Executes the query, returning the index of the top edge when the
    /// direction is feasible and `None` when it is blocked.
    ///
    /// Scans the forbidden arcs directly instead of building the full
    /// subdivision: the direction is feasible exactly when one arc strictly
    /// contains it, and that arc's edge is the top edge.
    #[must_use]
    pub fn execute(&self) -> Option<usize> {
        let orientation = self.polygon.orientation();
        let mut top_edge = None;
        for edge in self.polygon.edges() {
            let arc = outer_half_circle(&edge.direction, orientation);
            if self.direction.cw_in_between(&arc.start, &arc.end) {
                if top_edge.is_some() {
                    return None;
                }
                top_edge = Some(edge.index);
            }
        }
        top_edge
    }
}
