use bridge_params::BridgeParams;
use bridge_types::{Point2, Primitive};
use tracing::{debug, instrument};

use crate::scale::ScaleContext;
use crate::types::GenError;

const COMPONENT: &str = "piers";

/// Chainages of the intermediate piers, `abtl + i·span1` for `i = 1..nspan`.
pub fn pier_chainages(params: &BridgeParams) -> Vec<f64> {
    (1..params.nspan)
        .map(|i| params.abtl + f64::from(i) * params.span1)
        .collect()
}

/// Horizontal widening of the column on each side between cap and footing.
pub fn batter_expansion(params: &BridgeParams) -> Result<f64, GenError> {
    if params.battr == 0.0 {
        return Err(GenError::DegenerateBatter {
            component: COMPONENT.to_string(),
            parameter: "battr",
        });
    }
    if params.battr < 0.0 {
        return Err(GenError::geometry(
            COMPONENT,
            format!("battr {} must be positive", params.battr),
        ));
    }
    let height = params.capb - params.futrl - params.futd;
    if height <= 0.0 {
        return Err(GenError::geometry(
            COMPONENT,
            format!(
                "column height capb - futrl - futd = {} must be positive",
                height
            ),
        ));
    }
    Ok(height / params.battr)
}

/// Draw cap, battered column and footing for every intermediate pier.
/// Nothing is drawn for a single-span bridge.
#[instrument(skip_all, fields(nspan = params.nspan))]
pub fn generate_piers(
    params: &BridgeParams,
    ctx: &ScaleContext,
) -> Result<Vec<Primitive>, GenError> {
    if params.nspan <= 1 {
        return Ok(Vec::new());
    }
    let expansion = ctx.hlen(batter_expansion(params)?);

    let cap_half = ctx.hlen(params.capw / 2.0);
    let top_half = ctx.hlen(params.piertw / 2.0);
    let footing_half = ctx.hlen(params.futw / 2.0);

    let cap_top = ctx.vpos(params.capt);
    let cap_bottom = ctx.vpos(params.capb);
    let footing_top = ctx.vpos(params.futrl + params.futd);
    let footing_bottom = ctx.vpos(params.futrl);

    let mut out = Vec::new();
    for chainage in pier_chainages(params) {
        let x = ctx.hpos(chainage);

        out.push(Primitive::rectangle(
            Point2::new(x - cap_half, cap_bottom),
            Point2::new(x + cap_half, cap_top),
        ));

        out.push(Primitive::closed_polyline(vec![
            Point2::new(x - top_half, cap_bottom),
            Point2::new(x + top_half, cap_bottom),
            Point2::new(x + top_half + expansion, footing_top),
            Point2::new(x - top_half - expansion, footing_top),
        ]));

        out.push(Primitive::rectangle(
            Point2::new(x - footing_half, footing_bottom),
            Point2::new(x + footing_half, footing_top),
        ));
    }

    debug!(piers = params.pier_count(), primitives = out.len(), "piers drawn");
    Ok(out)
}
