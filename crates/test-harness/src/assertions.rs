//! Assertion helpers with diagnostic output.
//!
//! Every failure names the context, the expected value and what was found.

use bridge_types::{Component, Point2, Primitive, Scene};

use crate::helpers::{kind_name, HarnessError};

/// Assert two points agree within `tol` on both axes.
pub fn assert_point_near(
    actual: Point2,
    expected: Point2,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let dx = (actual.x - expected.x).abs();
    let dy = (actual.y - expected.y).abs();
    if dx <= tol && dy <= tol {
        Ok(())
    } else {
        Err(HarnessError::failed(format!(
            "[{}] expected ({:.6}, {:.6}), got ({:.6}, {:.6}) (tol={})",
            ctx, expected.x, expected.y, actual.x, actual.y, tol,
        )))
    }
}

/// Assert a primitive is a closed polyline with `expected_len` points and
/// return those points.
pub fn assert_closed_polyline<'a>(
    primitive: &'a Primitive,
    expected_len: usize,
    ctx: &str,
) -> Result<&'a [Point2], HarnessError> {
    match primitive {
        Primitive::Polyline {
            points,
            closed: true,
        } if points.len() == expected_len => Ok(points),
        Primitive::Polyline {
            points,
            closed: true,
        } => Err(HarnessError::failed(format!(
            "[{}] expected {} points, got {}",
            ctx,
            expected_len,
            points.len(),
        ))),
        other => Err(HarnessError::failed(format!(
            "[{}] expected closed polyline, got {}",
            ctx,
            kind_name(other),
        ))),
    }
}

/// Assert `right` is `left` reflected about the vertical line `x = axis_x`:
/// x coordinates sum to `2·axis_x` pairwise and y coordinates match.
pub fn assert_mirrored_about(
    left: &[Point2],
    right: &[Point2],
    axis_x: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if left.len() != right.len() {
        return Err(HarnessError::failed(format!(
            "[{}] point count mismatch: left {}, right {}",
            ctx,
            left.len(),
            right.len(),
        )));
    }
    for (i, (l, r)) in left.iter().zip(right).enumerate() {
        let reflected = Point2::new(2.0 * axis_x - l.x, l.y);
        assert_point_near(*r, reflected, tol, &format!("{} point {}", ctx, i + 1))?;
    }
    Ok(())
}

/// Assert the scene section for `component` holds `expected` primitives.
pub fn assert_section_len(
    scene: &Scene,
    component: Component,
    expected: usize,
) -> Result<(), HarnessError> {
    let section = scene.section(component).ok_or_else(|| {
        HarnessError::failed(format!("scene has no {} section", component))
    })?;
    if section.len() == expected {
        Ok(())
    } else {
        let counts: Vec<String> = scene
            .sections()
            .iter()
            .map(|s| format!("{}={}", s.component, s.len()))
            .collect();
        Err(HarnessError::failed(format!(
            "{} section: expected {} primitives, got {}. Sections: [{}]",
            component,
            expected,
            section.len(),
            counts.join(", "),
        )))
    }
}
