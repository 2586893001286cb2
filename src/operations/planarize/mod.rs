//! Deduplication and segment splitting: turns a raw line drawing into a
//! planar straight-line graph.

pub mod dedup;
mod split;

pub use dedup::{dedup, dedup_segments, dedup_vertices};
pub use split::{classify_crossing, Crossing, Planarize, PlanarizeReport, Planarized};
