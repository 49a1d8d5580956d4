use bridge_params::BridgeParams;
use bridge_types::{Point2, Primitive};
use tracing::{debug, instrument};

use crate::scale::ScaleContext;
use crate::types::GenError;

/// Draw the two approach slabs and the wearing course running over both.
#[instrument(skip_all)]
pub fn generate_approach_slabs(
    params: &BridgeParams,
    ctx: &ScaleContext,
) -> Result<Vec<Primitive>, GenError> {
    let top = ctx.vpos(params.rtl);
    let bottom = ctx.vpos(params.rtl - params.apthk);
    let surface = ctx.vpos(params.rtl + params.wcth);

    let left_start = ctx.hpos(params.abtl - params.laslab);
    let left_end = ctx.hpos(params.abtl);
    let right_start = ctx.hpos(params.deck_end());
    let right_end = ctx.hpos(params.deck_end() + params.laslab);

    let out = vec![
        Primitive::rectangle(Point2::new(left_start, top), Point2::new(left_end, bottom)),
        Primitive::rectangle(Point2::new(right_start, top), Point2::new(right_end, bottom)),
        Primitive::rectangle(Point2::new(left_start, top), Point2::new(right_end, surface)),
    ];

    debug!(primitives = out.len(), "approach slabs drawn");
    Ok(out)
}
