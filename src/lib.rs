pub mod error;
pub mod math;
pub mod operations;
pub mod pattern;
pub mod topology;

pub use error::{CreaseError, Result};
pub use pattern::{CreasePattern, PatternConfig};
pub use topology::{Edge, Face, FoldKind, PlanarGraph, Segment, Vertex};
