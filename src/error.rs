use thiserror::Error;

/// Top-level error type for the Moldis casting-analysis kernel.
#[derive(Debug, Error)]
pub enum MoldisError {
    #[error(transparent)]
    Direction(#[from] DirectionError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Errors constructing exact directions.
#[derive(Debug, Error)]
pub enum DirectionError {
    #[error("zero-length vector has no direction")]
    ZeroVector,

    #[error("direction component {value} exceeds the supported range [-{max}, {max}]", max = 2 * crate::math::MAX_COORD)]
    ComponentOutOfRange { value: i64 },
}

/// Errors validating input polygons.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("edge {index} has zero length")]
    ZeroLengthEdge { index: usize },

    #[error("polygon has zero signed area")]
    ZeroArea,

    #[error("coordinate {value} exceeds the supported range [-{max}, {max}]", max = crate::math::MAX_COORD)]
    CoordinateOutOfRange { value: i64 },
}

/// Convenience type alias for results using [`MoldisError`].
pub type Result<T> = std::result::Result<T, MoldisError>;
