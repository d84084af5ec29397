use crate::error::{PolygonError, Result};
use crate::math::polygon_2d::signed_area_doubled;
use crate::math::{Point2, MAX_COORD};

use super::Direction2;

/// Winding orientation of a polygon's vertex loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Negative signed area.
    Clockwise,
    /// Positive signed area.
    CounterClockwise,
}

/// One edge of a polygon. Edge `index` runs from vertex `index` to the
/// cyclically next vertex.
#[derive(Debug, Clone, Copy)]
pub struct PolygonEdge {
    /// Index of the edge in vertex order.
    pub index: usize,
    /// Start vertex.
    pub source: Point2,
    /// End vertex.
    pub target: Point2,
    /// Exact direction from `source` to `target`.
    pub direction: Direction2,
}

/// A simple polygon with exact integer vertices.
///
/// Construction validates everything the casting analysis relies on:
/// vertex count, the coordinate bound, absence of zero-length edges and a
/// nonzero signed area (which also fixes the winding orientation). Edge
/// directions are computed once here, so edge iteration never fails.
///
/// Simplicity of the boundary (no self-intersection) is a precondition
/// left to the caller.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point2>,
    directions: Vec<Direction2>,
    orientation: Orientation,
}

impl Polygon {
    /// Creates a polygon from its vertex loop, in either winding order.
    ///
    /// # Errors
    ///
    /// Returns a [`PolygonError`] when there are fewer than 3 vertices, a
    /// coordinate lies outside `[-MAX_COORD, MAX_COORD]`, two consecutive
    /// vertices coincide, or the signed area is zero.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        let count = vertices.len();
        if count < 3 {
            return Err(PolygonError::TooFewVertices { count }.into());
        }
        for vertex in &vertices {
            for value in [vertex.x, vertex.y] {
                if value < -MAX_COORD || value > MAX_COORD {
                    return Err(PolygonError::CoordinateOutOfRange { value }.into());
                }
            }
        }
        let mut directions = Vec::with_capacity(count);
        for (index, vertex) in vertices.iter().enumerate() {
            let target = vertices[(index + 1) % count];
            let direction = Direction2::from_points(*vertex, target)
                .map_err(|_| PolygonError::ZeroLengthEdge { index })?;
            directions.push(direction);
        }
        let orientation = match signed_area_doubled(&vertices) {
            0 => return Err(PolygonError::ZeroArea.into()),
            area if area < 0 => Orientation::Clockwise,
            _ => Orientation::CounterClockwise,
        };
        Ok(Self {
            vertices,
            directions,
            orientation,
        })
    }

    /// Returns the vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of edges (equal to the number of vertices).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the winding orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterates the edges in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = PolygonEdge> + '_ {
        (0..self.vertices.len()).map(move |index| {
            let target = self.vertices[(index + 1) % self.vertices.len()];
            PolygonEdge {
                index,
                source: self.vertices[index],
                target,
                direction: self.directions[index],
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MoldisError;

    fn p(x: i64, y: i64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_square_orientation() {
        let poly = Polygon::new(vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1)]).unwrap();
        assert_eq!(poly.orientation(), Orientation::CounterClockwise);
        assert_eq!(poly.edge_count(), 4);
    }

    #[test]
    fn cw_square_orientation() {
        let poly = Polygon::new(vec![p(0, 0), p(0, 1), p(1, 1), p(1, 0)]).unwrap();
        assert_eq!(poly.orientation(), Orientation::Clockwise);
    }

    #[test]
    fn edges_wrap_around_to_the_first_vertex() {
        let poly = Polygon::new(vec![p(0, 0), p(2, 0), p(0, 3)]).unwrap();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].source, p(0, 3));
        assert_eq!(edges[2].target, p(0, 0));
        assert_eq!(edges[2].index, 2);
        let expected = Direction2::from_points(p(0, 3), p(0, 0)).unwrap();
        assert_eq!(edges[2].direction, expected);
    }

    #[test]
    fn too_few_vertices_rejected() {
        let err = Polygon::new(vec![p(0, 0), p(1, 0)]).unwrap_err();
        assert!(matches!(
            err,
            MoldisError::Polygon(PolygonError::TooFewVertices { count: 2 })
        ));
    }

    #[test]
    fn consecutive_duplicate_vertex_rejected() {
        let err = Polygon::new(vec![p(0, 0), p(1, 0), p(1, 0), p(0, 1)]).unwrap_err();
        assert!(matches!(
            err,
            MoldisError::Polygon(PolygonError::ZeroLengthEdge { index: 1 })
        ));
    }

    #[test]
    fn collinear_loop_rejected() {
        let err = Polygon::new(vec![p(0, 0), p(1, 1), p(3, 3)]).unwrap_err();
        assert!(matches!(err, MoldisError::Polygon(PolygonError::ZeroArea)));
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let err = Polygon::new(vec![p(0, 0), p(MAX_COORD + 1, 0), p(0, 1)]).unwrap_err();
        assert!(matches!(
            err,
            MoldisError::Polygon(PolygonError::CoordinateOutOfRange { .. })
        ));
    }
}
