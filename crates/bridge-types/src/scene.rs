use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::geom::BoundingBox;
use crate::primitive::Primitive;

/// The drawing component that produced a run of primitives.
///
/// Declaration order is generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    LayoutGrid,
    Superstructure,
    Abutments,
    Piers,
    ApproachSlabs,
    PlanView,
}

impl Component {
    /// All components in generation order.
    pub const ALL: [Component; 6] = [
        Component::LayoutGrid,
        Component::Superstructure,
        Component::Abutments,
        Component::Piers,
        Component::ApproachSlabs,
        Component::PlanView,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Component::LayoutGrid => "layout grid",
            Component::Superstructure => "superstructure",
            Component::Abutments => "abutments",
            Component::Piers => "piers",
            Component::ApproachSlabs => "approach slabs",
            Component::PlanView => "plan view",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Contiguous run of scene primitives produced by one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSection {
    pub component: Component,
    pub range: Range<usize>,
}

impl SceneSection {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Ordered, append-only list of drawing primitives.
///
/// Primitive order is generation order; `sections` records which contiguous
/// range each component produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    primitives: Vec<Primitive>,
    sections: Vec<SceneSection>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component's batch, recording its range. Empty batches still
    /// get a (zero-length) section.
    pub fn append(&mut self, component: Component, batch: Vec<Primitive>) {
        let start = self.primitives.len();
        self.primitives.extend(batch);
        self.sections.push(SceneSection {
            component,
            range: start..self.primitives.len(),
        });
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn sections(&self) -> &[SceneSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn section(&self, component: Component) -> Option<&SceneSection> {
        self.sections.iter().find(|s| s.component == component)
    }

    /// Primitives produced by a component (empty if it never ran).
    pub fn primitives_of(&self, component: Component) -> &[Primitive] {
        match self.section(component) {
            Some(section) => &self.primitives[section.range.clone()],
            None => &[],
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(self.primitives.iter().flat_map(|p| p.points()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point2;

    fn tick(x: f64) -> Primitive {
        Primitive::line(Point2::new(x, 0.0), Point2::new(x, 1.0))
    }

    #[test]
    fn append_records_contiguous_sections() {
        let mut scene = Scene::new();
        scene.append(Component::LayoutGrid, vec![tick(0.0), tick(1.0)]);
        scene.append(Component::Piers, Vec::new());
        scene.append(Component::PlanView, vec![tick(2.0)]);

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.section(Component::LayoutGrid).unwrap().range, 0..2);
        assert!(scene.section(Component::Piers).unwrap().is_empty());
        assert_eq!(scene.primitives_of(Component::PlanView), &[tick(2.0)]);
        assert!(scene.primitives_of(Component::Abutments).is_empty());
    }

    #[test]
    fn components_are_in_generation_order() {
        let mut sorted = Component::ALL;
        sorted.sort();
        assert_eq!(sorted, Component::ALL);
    }
}
