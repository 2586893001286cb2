use thiserror::Error;

use crate::math::MIN_VERTEX_MERGE_TOLERANCE;

/// Top-level error type for the crease pattern engine.
#[derive(Debug, Error)]
pub enum CreaseError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while ingesting geometry. Each one concerns a single input
/// element; the rest of the batch is still processed.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("malformed segment {start:?} -> {end:?}: {reason}")]
    MalformedSegment {
        start: (f64, f64),
        end: (f64, f64),
        reason: &'static str,
    },

    #[error("malformed rectangle: width {width}, height {height}")]
    MalformedRectangle { width: f64, height: f64 },

    #[error(
        "vertex merge tolerance must be finite and at least {min}, got {0}",
        min = MIN_VERTEX_MERGE_TOLERANCE
    )]
    InvalidTolerance(f64),
}

/// Errors raised while building the planar graph. These abort the pattern.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("face walk starting at {from} -> {to} did not close after {walked} steps")]
    UnresolvedFaceWalk {
        from: usize,
        to: usize,
        walked: usize,
    },

    #[error("no traversal entry for directed edge {from} -> {to}")]
    MissingTraversal { from: usize, to: usize },

    #[error("edge endpoint ({0}, {1}) is not in the vertex set")]
    UnknownVertex(f64, f64),
}

/// Convenience type alias for results using [`CreaseError`].
pub type Result<T> = std::result::Result<T, CreaseError>;
