//! Helper functions: error type and primitive inspection.

use bridge_params::ValidationReport;
use bridge_types::{Point2, Primitive};
use design_file::{LoadError, SaveError};
use gad_engine::GenError;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("generation failed: {0}")]
    Generation(#[from] GenError),

    #[error("parameter table rejected: {0}")]
    Parameters(#[from] ValidationReport),

    #[error("save failed: {0}")]
    Save(#[from] SaveError),

    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    #[error("no scene generated for design {name}")]
    NoScene { name: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

impl HarnessError {
    pub(crate) fn failed(detail: impl Into<String>) -> Self {
        HarnessError::AssertionFailed {
            detail: detail.into(),
        }
    }
}

// ── Primitive Inspection ────────────────────────────────────────────────────

/// Points of a polyline, or `None` for any other primitive.
pub fn polyline_points(p: &Primitive) -> Option<&[Point2]> {
    match p {
        Primitive::Polyline { points, .. } => Some(points),
        _ => None,
    }
}

/// Text content of every label in a batch, in order.
pub fn text_labels(batch: &[Primitive]) -> Vec<&str> {
    batch
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

/// Labels drawn at the given rotation.
pub fn labels_with_rotation(batch: &[Primitive], rotation_degrees: f64) -> Vec<&str> {
    batch
        .iter()
        .filter_map(|p| match p {
            Primitive::Text {
                content,
                rotation_degrees: r,
                ..
            } if *r == rotation_degrees => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

/// Short human-readable name of a primitive's kind.
pub fn kind_name(p: &Primitive) -> &'static str {
    match p {
        Primitive::Line { .. } => "line",
        Primitive::Polyline { closed: true, .. } => "closed polyline",
        Primitive::Polyline { closed: false, .. } => "open polyline",
        Primitive::Text { .. } => "text",
    }
}
