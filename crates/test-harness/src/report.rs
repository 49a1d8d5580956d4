//! Structured text reports of a generated scene.
//!
//! Reports are plain text so a failing test can print them directly.

use std::fmt;

use bridge_types::{BoundingBox, Component, Primitive, Scene};

/// One component's share of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    pub component: Component,
    pub primitive_count: usize,
    pub line_count: usize,
    pub polyline_count: usize,
    pub text_count: usize,
    pub bounding_box: Option<BoundingBox>,
}

/// A complete scene report.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneReport {
    pub entries: Vec<SectionEntry>,
    pub total: usize,
    pub bounding_box: Option<BoundingBox>,
}

impl SceneReport {
    pub fn from_scene(scene: &Scene) -> Self {
        let entries = scene
            .sections()
            .iter()
            .map(|section| {
                let batch = scene.primitives_of(section.component);
                let count = |pred: fn(&Primitive) -> bool| batch.iter().filter(|p| pred(p)).count();
                SectionEntry {
                    component: section.component,
                    primitive_count: batch.len(),
                    line_count: count(|p| matches!(p, Primitive::Line { .. })),
                    polyline_count: count(|p| matches!(p, Primitive::Polyline { .. })),
                    text_count: count(Primitive::is_text),
                    bounding_box: BoundingBox::of_points(batch.iter().flat_map(|p| p.points())),
                }
            })
            .collect();
        Self {
            entries,
            total: scene.len(),
            bounding_box: scene.bounding_box(),
        }
    }

    pub fn entry(&self, component: Component) -> Option<&SectionEntry> {
        self.entries.iter().find(|e| e.component == component)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Bridge GAD Scene Report ===\n\n");
        out.push_str(&format!(
            "Components ({} sections, {} primitives):\n",
            self.entries.len(),
            self.total,
        ));

        for e in &self.entries {
            out.push_str(&format!(
                "  {}: {} primitives ({} lines, {} polylines, {} texts)\n",
                e.component, e.primitive_count, e.line_count, e.polyline_count, e.text_count,
            ));
            if let Some(bb) = e.bounding_box {
                out.push_str(&format!("      {}\n", describe_box(&bb)));
            }
        }

        match self.bounding_box {
            Some(bb) => out.push_str(&format!("\nExtent: {}\n", describe_box(&bb))),
            None => out.push_str("\nExtent: empty\n"),
        }
        out
    }
}

fn describe_box(bb: &BoundingBox) -> String {
    format!(
        "({:.1}, {:.1}) -> ({:.1}, {:.1}), {:.1} x {:.1}",
        bb.min.x,
        bb.min.y,
        bb.max.x,
        bb.max.y,
        bb.width(),
        bb.height(),
    )
}

impl fmt::Display for SceneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
