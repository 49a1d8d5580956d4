use serde::{Deserialize, Serialize};

use crate::geom::{BoundingBox, Point2};

/// A geometric primitive of a drawing, in drawing units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Primitive {
    /// Open two-point segment.
    Line { p0: Point2, p1: Point2 },
    /// Connected chain of at least two points, optionally closed back to the first.
    Polyline { points: Vec<Point2>, closed: bool },
    /// Single-line annotation.
    Text {
        position: Point2,
        content: String,
        height: f64,
        rotation_degrees: f64,
    },
}

impl Primitive {
    pub fn line(p0: Point2, p1: Point2) -> Self {
        Primitive::Line { p0, p1 }
    }

    pub fn closed_polyline(points: Vec<Point2>) -> Self {
        Primitive::Polyline {
            points,
            closed: true,
        }
    }

    pub fn text(
        position: Point2,
        content: impl Into<String>,
        height: f64,
        rotation_degrees: f64,
    ) -> Self {
        Primitive::Text {
            position,
            content: content.into(),
            height,
            rotation_degrees,
        }
    }

    /// Closed axis-aligned rectangle through two opposite corners.
    ///
    /// Corner order: `a`, `(b.x, a.y)`, `b`, `(a.x, b.y)`.
    pub fn rectangle(a: Point2, b: Point2) -> Self {
        Self::closed_polyline(vec![a, Point2::new(b.x, a.y), b, Point2::new(a.x, b.y)])
    }

    /// The defining points of the primitive (text contributes its insertion point).
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Primitive::Line { p0, p1 } => vec![*p0, *p1],
            Primitive::Polyline { points, .. } => points.clone(),
            Primitive::Text { position, .. } => vec![*position],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Primitive::Text { .. })
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(self.points())
    }

    /// Translate every point of the primitive.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            Primitive::Line { p0, p1 } => Primitive::Line {
                p0: p0.translated(dx, dy),
                p1: p1.translated(dx, dy),
            },
            Primitive::Polyline { points, closed } => Primitive::Polyline {
                points: points.iter().map(|p| p.translated(dx, dy)).collect(),
                closed: *closed,
            },
            Primitive::Text {
                position,
                content,
                height,
                rotation_degrees,
            } => Primitive::Text {
                position: position.translated(dx, dy),
                content: content.clone(),
                height: *height,
                rotation_degrees: *rotation_degrees,
            },
        }
    }
}
