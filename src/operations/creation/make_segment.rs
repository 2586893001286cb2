use crate::error::{GeometryError, Result};
use crate::math::{pattern_point, Point2, TOLERANCE};
use crate::topology::{FoldKind, Segment};

/// Validates one raw `(start, end, kind, angle)` record from the drawing.
pub struct MakeSegment {
    start: Point2,
    end: Point2,
    kind: FoldKind,
    fold_angle: f64,
}

impl MakeSegment {
    /// Creates a new `MakeSegment` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2, kind: FoldKind, fold_angle: f64) -> Self {
        Self {
            start,
            end,
            kind,
            fold_angle,
        }
    }

    /// Creates the segment for a line whose fold angle comes from its opacity.
    #[must_use]
    pub fn from_opacity(start: Point2, end: Point2, kind: FoldKind, opacity: f64) -> Self {
        Self::new(start, end, kind, kind.fold_angle_from_opacity(opacity))
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedSegment` if a coordinate or the fold
    /// angle is not finite, or if the segment has zero length.
    pub fn execute(&self) -> Result<Segment> {
        let coords = [self.start.x, self.start.y, self.end.x, self.end.y];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(self.malformed("non-finite coordinate"));
        }
        if !self.fold_angle.is_finite() {
            return Err(self.malformed("non-finite fold angle"));
        }
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        if dx * dx + dy * dy < TOLERANCE * TOLERANCE {
            return Err(self.malformed("zero length"));
        }
        Ok(Segment::new(
            pattern_point(self.start.x, self.start.y),
            pattern_point(self.end.x, self.end.y),
            self.kind,
            self.fold_angle,
        ))
    }

    fn malformed(&self, reason: &'static str) -> crate::error::CreaseError {
        GeometryError::MalformedSegment {
            start: (self.start.x, self.start.y),
            end: (self.end.x, self.end.y),
            reason,
        }
        .into()
    }
}
