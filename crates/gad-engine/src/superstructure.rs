use bridge_params::BridgeParams;
use bridge_types::{Point2, Primitive};
use tracing::{debug, instrument};

use crate::scale::ScaleContext;
use crate::types::{GenError, GenOptions};

/// Draw one deck rectangle per span, inset at both ends, tiled along the
/// bridge by the span length.
#[instrument(skip_all, fields(nspan = params.nspan))]
pub fn generate_superstructure(
    params: &BridgeParams,
    ctx: &ScaleContext,
    options: &GenOptions,
) -> Result<Vec<Primitive>, GenError> {
    let inset = options.deck_end_inset;
    let top_left = Point2::new(ctx.hpos(params.abtl) + inset, ctx.vpos(params.rtl));
    let bottom_right = Point2::new(
        ctx.hpos(params.abtl + params.span1) - inset,
        ctx.vpos(params.sofl),
    );
    let first = Primitive::rectangle(top_left, bottom_right);

    let step = params.span1 * ctx.hhs;
    let out: Vec<Primitive> = (0..params.nspan)
        .map(|i| first.translated(f64::from(i) * step, 0.0))
        .collect();

    debug!(spans = out.len(), "superstructure drawn");
    Ok(out)
}
