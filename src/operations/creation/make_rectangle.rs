use crate::error::{GeometryError, Result};
use crate::math::{pattern_point, Point2};
use crate::topology::{FoldKind, Segment};

/// Expands an axis-aligned rectangle into its four border segments.
pub struct MakeRectangle {
    origin: Point2,
    width: f64,
    height: f64,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Executes the operation, returning bottom, left, right and top borders.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedRectangle` if the width or height is
    /// not strictly positive, or if any input is not finite.
    pub fn execute(&self) -> Result<[Segment; 4]> {
        let finite = self.origin.x.is_finite()
            && self.origin.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(GeometryError::MalformedRectangle {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        let (x, y) = (self.origin.x, self.origin.y);
        let p00 = pattern_point(x, y);
        let p10 = pattern_point(x + self.width, y);
        let p01 = pattern_point(x, y + self.height);
        let p11 = pattern_point(x + self.width, y + self.height);

        let border = |a, b| Segment::new(a, b, FoldKind::Border, 0.0);
        Ok([
            border(p00, p10),
            border(p00, p01),
            border(p10, p11),
            border(p01, p11),
        ])
    }
}
