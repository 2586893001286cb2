use crate::error::{CreaseError, GeometryError, Result};
use crate::math::{Point2, Point3, DEFAULT_VERTEX_MERGE_TOLERANCE, MIN_VERTEX_MERGE_TOLERANCE};
use crate::operations::creation::{MakeRectangle, MakeSegment};
use crate::operations::faces::{
    build_adjacency, number_vertices, resolve_edges, sort_by_angle, trace_faces, Adjacency,
    NextMap,
};
use crate::operations::planarize::{dedup, Planarize};
use crate::topology::{FoldKind, PlanarGraph, Segment};

/// Tunables of the pattern engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    /// Distance under which a crossing is treated as touching a segment
    /// endpoint rather than splitting the segment.
    pub vertex_merge_tolerance: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            vertex_merge_tolerance: DEFAULT_VERTEX_MERGE_TOLERANCE,
        }
    }
}

impl PatternConfig {
    /// Returns a copy with a different vertex merge tolerance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` if `tolerance` is not finite
    /// or below [`MIN_VERTEX_MERGE_TOLERANCE`].
    pub fn with_vertex_merge_tolerance(self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < MIN_VERTEX_MERGE_TOLERANCE {
            return Err(GeometryError::InvalidTolerance(tolerance).into());
        }
        Ok(Self {
            vertex_merge_tolerance: tolerance,
        })
    }
}

/// One crease pattern being assembled from typed line segments.
///
/// Segments and rectangles are added one by one; [`CreasePattern::build`]
/// then planarizes the drawing and enumerates its bounded faces in a single
/// batch pass.
#[derive(Debug, Clone, Default)]
pub struct CreasePattern {
    config: PatternConfig,
    vertices: Vec<Point3>,
    segments: Vec<Segment>,
}

impl CreasePattern {
    /// Creates an empty pattern with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pattern with the given configuration.
    #[must_use]
    pub fn with_config(config: PatternConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Number of raw vertices added so far (duplicates included).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of raw segments added so far (duplicates included).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Adds one typed segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedSegment` for a zero-length or
    /// non-finite segment; the pattern is left unchanged.
    pub fn add_segment(
        &mut self,
        start: Point2,
        end: Point2,
        kind: FoldKind,
        fold_angle: f64,
    ) -> Result<()> {
        let segment = MakeSegment::new(start, end, kind, fold_angle).execute()?;
        self.push(segment);
        Ok(())
    }

    /// Adds a line as drawn: kind from its stroke colour, fold angle from its
    /// opacity. Returns `false` if the stroke colour is not a known kind, in
    /// which case the line is ignored.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedSegment` for a zero-length or
    /// non-finite segment.
    pub fn add_line(
        &mut self,
        start: Point2,
        end: Point2,
        stroke: &str,
        opacity: f64,
    ) -> Result<bool> {
        let Some(kind) = FoldKind::from_stroke(stroke) else {
            tracing::debug!(stroke, "ignoring line with unknown stroke");
            return Ok(false);
        };
        let segment = MakeSegment::from_opacity(start, end, kind, opacity).execute()?;
        self.push(segment);
        Ok(true)
    }

    /// Adds the four border segments of an axis-aligned rectangle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedRectangle` if the width or height is
    /// not strictly positive.
    pub fn add_rectangle(&mut self, origin: Point2, width: f64, height: f64) -> Result<()> {
        for side in MakeRectangle::new(origin, width, height).execute()? {
            self.push(side);
        }
        Ok(())
    }

    /// Adds a batch of `(start, end, kind, fold_angle)` records.
    ///
    /// Malformed records are skipped and returned; the rest are added.
    pub fn add_segments<I>(&mut self, records: I) -> Vec<CreaseError>
    where
        I: IntoIterator<Item = (Point2, Point2, FoldKind, f64)>,
    {
        let mut skipped = Vec::new();
        for (start, end, kind, fold_angle) in records {
            if let Err(err) = self.add_segment(start, end, kind, fold_angle) {
                tracing::warn!(%err, "skipping malformed segment");
                skipped.push(err);
            }
        }
        skipped
    }

    fn push(&mut self, segment: Segment) {
        self.vertices.push(segment.start);
        self.vertices.push(segment.end);
        self.segments.push(segment);
    }

    /// Planarizes the pattern and traces its bounded faces.
    ///
    /// # Errors
    ///
    /// Returns a `TopologyError` if the planarized graph is inconsistent and a
    /// face boundary cannot be closed.
    pub fn build(self) -> Result<PlanarGraph> {
        let Self {
            config,
            mut vertices,
            mut segments,
        } = self;

        dedup(&mut vertices, &mut segments);

        let planarized = Planarize::new(config.vertex_merge_tolerance).execute(segments);
        let report = planarized.report;
        vertices.extend(planarized.new_vertices);
        let mut segments = planarized.segments;

        dedup(&mut vertices, &mut segments);

        let vertices = number_vertices(&vertices);
        let edges = resolve_edges(&vertices, &segments)?;
        let Adjacency {
            lists: mut adjacency,
            collapsed,
        } = build_adjacency(vertices.len(), &edges);
        sort_by_angle(&vertices, &mut adjacency);

        let next = NextMap::build(&adjacency);
        let traced = trace_faces(&vertices, &next)?;

        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            collapsed = collapsed.len(),
            faces = traced.bounded.len(),
            "built planar graph"
        );
        for face in &traced.bounded {
            tracing::trace!(%face, "face");
        }

        Ok(PlanarGraph::new(
            vertices,
            edges,
            adjacency,
            collapsed,
            traced.bounded,
            report,
        ))
    }
}
