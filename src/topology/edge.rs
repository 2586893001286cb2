use std::f64::consts::PI;
use std::fmt;

use crate::math::intersect_2d::segment_length_2d;
use crate::math::polygon_2d::compare_points;
use crate::math::Point3;

/// Classification of a crease pattern line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FoldKind {
    /// Paper boundary.
    Border,
    /// Mountain crease; carries a negative fold angle.
    Mountain,
    /// Valley crease; carries a positive fold angle.
    Valley,
    /// Cut line.
    Cut,
    /// Triangulation aid (flat, never folded).
    Triangulation,
    /// Hinge line.
    Hinge,
}

impl FoldKind {
    /// All kinds, in declaration order.
    pub const ALL: [FoldKind; 6] = [
        FoldKind::Border,
        FoldKind::Mountain,
        FoldKind::Valley,
        FoldKind::Cut,
        FoldKind::Triangulation,
        FoldKind::Hinge,
    ];

    /// Maps a stroke colour attribute to a fold kind.
    ///
    /// Accepts hex (`#ff0000`, `#f00`), colour names (`red`) and `rgb(255,0,0)`
    /// spellings, case-insensitively. Unknown colours yield `None`.
    #[must_use]
    pub fn from_stroke(stroke: &str) -> Option<Self> {
        let stroke: String = stroke
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match stroke.as_str() {
            "#000000" | "#000" | "black" | "rgb(0,0,0)" => Some(Self::Border),
            "#ff0000" | "#f00" | "red" | "rgb(255,0,0)" => Some(Self::Mountain),
            "#0000ff" | "#00f" | "blue" | "rgb(0,0,255)" => Some(Self::Valley),
            "#00ff00" | "#0f0" | "green" | "rgb(0,255,0)" => Some(Self::Cut),
            "#ffff00" | "#ff0" | "yellow" | "rgb(255,255,0)" => Some(Self::Triangulation),
            "#ff00ff" | "#f0f" | "magenta" | "rgb(255,0,255)" => Some(Self::Hinge),
            _ => None,
        }
    }

    /// Fold angle in radians for a line drawn with the given opacity.
    ///
    /// The magnitude is `opacity * PI`. Mountains fold negative, valleys
    /// positive; every other kind is flat.
    #[must_use]
    pub fn fold_angle_from_opacity(self, opacity: f64) -> f64 {
        match self {
            Self::Mountain => -opacity * PI,
            Self::Valley => opacity * PI,
            Self::Border | Self::Cut | Self::Triangulation | Self::Hinge => 0.0,
        }
    }

    /// Returns `true` for mountain and valley creases.
    #[must_use]
    pub fn is_fold(self) -> bool {
        matches!(self, Self::Mountain | Self::Valley)
    }
}

impl fmt::Display for FoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Border => "Border",
            Self::Mountain => "Mountain",
            Self::Valley => "Valley",
            Self::Cut => "Cut",
            Self::Triangulation => "Triangulation",
            Self::Hinge => "Hinge",
        };
        f.write_str(name)
    }
}

/// A typed line segment in pattern space, before vertices are numbered.
///
/// Endpoint order carries no meaning: `(a, b)` and `(b, a)` of the same kind
/// describe the same crease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
    pub kind: FoldKind,
    /// Signed fold angle in radians (0 for non-fold kinds).
    pub fold_angle: f64,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point3, end: Point3, kind: FoldKind, fold_angle: f64) -> Self {
        Self {
            start,
            end,
            kind,
            fold_angle,
        }
    }

    /// 2D length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        segment_length_2d(&self.start, &self.end)
    }

    /// Returns `true` if both endpoints are the same point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the segment with its endpoints in lexicographic order.
    #[must_use]
    pub fn canonical(self) -> Self {
        if compare_points(&self.start, &self.end).is_gt() {
            Self {
                start: self.end,
                end: self.start,
                ..self
            }
        } else {
            self
        }
    }

    /// Returns `true` if both segments join the same two points with the same kind.
    #[must_use]
    pub fn same_crease(&self, other: &Segment) -> bool {
        self.kind == other.kind
            && ((self.start == other.start && self.end == other.end)
                || (self.start == other.end && self.end == other.start))
    }

    /// Splits the segment at `point`, returning `point -> start` and
    /// `point -> end`. Both halves keep this segment's kind and fold angle.
    #[must_use]
    pub fn split_at(&self, point: Point3) -> [Segment; 2] {
        [
            Segment::new(point, self.start, self.kind, self.fold_angle),
            Segment::new(point, self.end, self.kind, self.fold_angle),
        ]
    }
}

/// An edge of the planar graph, joining two numbered vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v1: usize,
    pub v2: usize,
    pub kind: FoldKind,
    pub fold_angle: f64,
}

impl Edge {
    /// Returns the endpoint opposite to `vertex`, or `None` if the edge does
    /// not touch it.
    #[must_use]
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.v1 == vertex {
            Some(self.v2)
        } else if self.v2 == vertex {
            Some(self.v1)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} (angle {:.4})",
            self.kind, self.v1, self.v2, self.fold_angle
        )
    }
}
