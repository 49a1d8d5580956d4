use bridge_params::{BridgeParams, ParameterMap};
use bridge_types::{Component, Primitive, Scene};
use tracing::{info, instrument};

use crate::scale::ScaleContext;
use crate::types::{GenError, GenOptions};
use crate::{abutment, approach, grid, pier, plan, superstructure};

/// Reject a batch containing any non-finite coordinate.
fn checked(component: Component, batch: Vec<Primitive>) -> Result<Vec<Primitive>, GenError> {
    let bad = batch
        .iter()
        .flat_map(|p| p.points())
        .find(|p| !p.is_finite());
    match bad {
        Some(p) => Err(GenError::computation(
            component,
            format!("non-finite coordinate ({}, {})", p.x, p.y),
        )),
        None => Ok(batch),
    }
}

/// Generate the complete two-view drawing.
///
/// Components run in a fixed order and their output is appended to the
/// scene in that order. The first failure aborts the whole scene.
#[instrument(skip_all, fields(nspan = params.nspan))]
pub fn generate(params: &BridgeParams, options: &GenOptions) -> Result<Scene, GenError> {
    let ctx = ScaleContext::new(params)?;
    let mut scene = Scene::new();

    for component in Component::ALL {
        let batch = match component {
            Component::LayoutGrid => grid::generate_grid(params, &ctx, options)?,
            Component::Superstructure => {
                superstructure::generate_superstructure(params, &ctx, options)?
            }
            Component::Abutments => abutment::generate_abutments(params, &ctx)?,
            Component::Piers => pier::generate_piers(params, &ctx)?,
            Component::ApproachSlabs => approach::generate_approach_slabs(params, &ctx)?,
            Component::PlanView => plan::generate_plan_view(params, &ctx, options)?,
        };
        scene.append(component, checked(component, batch)?);
    }

    info!(
        primitives = scene.len(),
        sections = scene.sections().len(),
        "scene assembled"
    );
    Ok(scene)
}

/// Resolve the typed record from a parameter map, then [`generate`].
pub fn generate_from_map(map: &ParameterMap, options: &GenOptions) -> Result<Scene, GenError> {
    let params = BridgeParams::from_map(map)?;
    generate(&params, options)
}
