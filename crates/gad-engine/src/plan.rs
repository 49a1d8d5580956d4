//! Plan (top-down) view.
//!
//! Chainage runs along x as in elevation; the transverse direction is laid
//! along y about a centreline `plan_centerline_drop` below datum. Everything
//! goes through `h2pos`/`v2pos` and is then shifted by `plan_offset_y`.

use bridge_params::BridgeParams;
use bridge_types::{Point2, Primitive};
use tracing::{debug, instrument};

use crate::abutment::{Mirror, Side};
use crate::scale::ScaleContext;
use crate::types::{GenError, GenOptions};

/// Plan projection with the view offset applied.
#[derive(Debug, Clone, Copy)]
pub struct PlanFrame<'a> {
    ctx: &'a ScaleContext,
    offset_y: f64,
    /// Transverse centreline, in engineering units.
    pub yc: f64,
}

impl<'a> PlanFrame<'a> {
    pub fn new(ctx: &'a ScaleContext, options: &GenOptions) -> Self {
        Self {
            ctx,
            offset_y: options.plan_offset_y,
            yc: ctx.datum - options.plan_centerline_drop,
        }
    }

    /// Drawing point for (chainage, transverse ordinate).
    pub fn point(&self, a: f64, b: f64) -> Point2 {
        let p = self.ctx.p2t(a, b);
        Point2::new(p.x, p.y + self.offset_y)
    }

    /// Closed rectangle from corner `(x0, y0)` to `(x1, y1)`, in the order
    /// `(x0,y0) (x1,y0) (x1,y1) (x0,y1)`.
    pub fn rectangle(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Primitive {
        Primitive::closed_polyline(vec![
            self.point(x0, y0),
            self.point(x1, y0),
            self.point(x1, y1),
            self.point(x0, y1),
        ])
    }
}

/// Footing then column outline for each intermediate pier.
pub fn pier_outlines(params: &BridgeParams, frame: &PlanFrame<'_>) -> Vec<Primitive> {
    if params.nspan <= 1 {
        return Vec::new();
    }
    let yc = frame.yc;
    let mut out = Vec::new();
    for i in 1..params.nspan {
        let xc = params.abtl + f64::from(i) * params.lspan;

        let x7 = xc - params.futw / 2.0;
        let x8 = x7 + params.futw;
        let y7 = yc + params.futl / 2.0;
        let y8 = y7 - params.futl;
        out.push(frame.rectangle(x7, y7, x8, y8));

        let x1 = xc - params.piertw / 2.0;
        let x2 = xc + params.piertw / 2.0;
        let y1 = yc + params.pierst / 2.0;
        let y2 = yc - params.pierst / 2.0;
        out.push(frame.rectangle(x1, y1, x2, y2));
    }
    out
}

/// Abutment footing outline for one side, spanning `x14..x3` along the
/// bridge and the kerb-to-kerb width plus a margin across it.
pub fn abutment_footing(
    params: &BridgeParams,
    frame: &PlanFrame<'_>,
    options: &GenOptions,
    side: Side,
) -> Primitive {
    let width = params.ccbr + 2.0 * params.kerbw;
    let y20 = frame.yc + width / 2.0;
    let y21 = y20 - width;
    let y16 = y20 + options.abutment_footing_margin;
    let y17 = y21 - options.abutment_footing_margin;

    let mirror = Mirror::for_side(side, params);
    let x1 = params.abtl;
    let x3 = mirror.apply(x1 + params.alcw);
    let x14 = mirror.apply(x1 - params.dwth);

    frame.rectangle(x14, y16, x3, y17)
}

/// Deck outline, `lbridge` long from `abtl` and `bridgew` wide.
pub fn deck_outline(params: &BridgeParams, frame: &PlanFrame<'_>) -> Primitive {
    let half = params.bridgew / 2.0;
    frame.rectangle(
        params.abtl,
        frame.yc + half,
        params.abtl + params.lbridge,
        frame.yc - half,
    )
}

/// Draw pier footings and columns, both abutment footings, then the deck.
#[instrument(skip_all, fields(nspan = params.nspan))]
pub fn generate_plan_view(
    params: &BridgeParams,
    ctx: &ScaleContext,
    options: &GenOptions,
) -> Result<Vec<Primitive>, GenError> {
    let frame = PlanFrame::new(ctx, options);

    let mut out = pier_outlines(params, &frame);
    out.push(abutment_footing(params, &frame, options, Side::Left));
    out.push(abutment_footing(params, &frame, options, Side::Right));
    out.push(deck_outline(params, &frame));

    debug!(primitives = out.len(), "plan view drawn");
    Ok(out)
}
