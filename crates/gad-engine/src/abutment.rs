//! End abutment profiles.
//!
//! Both abutments come from one derivation chain in chainage space. The left
//! abutment uses chainages as-is; the right one reflects every chainage about
//! `left + lbridge` and swaps in the right-side batter levels. Levels are
//! never reflected.

use bridge_params::BridgeParams;
use bridge_types::{Point2, Primitive};
use tracing::{debug, instrument};

use crate::scale::ScaleContext;
use crate::types::GenError;

/// Which end of the bridge an abutment sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn component(&self) -> &'static str {
        match self {
            Side::Left => "left abutment",
            Side::Right => "right abutment",
        }
    }
}

/// Chainage reflection `x -> anchor + sign * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    pub anchor: f64,
    pub sign: f64,
}

impl Mirror {
    /// Identity, used for the left abutment.
    pub const IDENTITY: Mirror = Mirror {
        anchor: 0.0,
        sign: 1.0,
    };

    /// Reflection `x -> edge - x`.
    pub fn about(edge: f64) -> Self {
        Mirror {
            anchor: edge,
            sign: -1.0,
        }
    }

    pub fn for_side(side: Side, params: &BridgeParams) -> Self {
        match side {
            Side::Left => Mirror::IDENTITY,
            Side::Right => Mirror::about(params.right_edge()),
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        self.anchor + self.sign * x
    }
}

/// Batter levels for one side. Runs are shared by both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterLevels {
    pub front: f64,
    pub toe: f64,
    pub back: f64,
}

impl BatterLevels {
    pub fn for_side(side: Side, params: &BridgeParams) -> Self {
        match side {
            Side::Left => BatterLevels {
                front: params.alfbl,
                toe: params.altbl,
                back: params.albbl,
            },
            Side::Right => BatterLevels {
                front: params.alfbr,
                toe: params.altbr,
                back: params.albbr,
            },
        }
    }
}

/// Chainages and levels of one abutment profile, before reflection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbutmentChain {
    pub x1: f64,
    pub x3: f64,
    pub x5: f64,
    pub x6: f64,
    pub x7: f64,
    pub x10: f64,
    pub x12: f64,
    pub x14: f64,
    pub capt: f64,
    pub capb: f64,
    /// Underside of the front and back toe steps.
    pub y8: f64,
    /// Top of the dirt wall, under the approach slab.
    pub ytop: f64,
    pub levels: BatterLevels,
}

fn batter_offset(
    side: Side,
    parameter: &'static str,
    drop: f64,
    run: f64,
) -> Result<f64, GenError> {
    if run == 0.0 {
        return Err(GenError::DegenerateBatter {
            component: side.component().to_string(),
            parameter,
        });
    }
    Ok(drop / run)
}

/// Derive the profile chainages from the anchor `abtl`.
pub fn derive_chain(params: &BridgeParams, side: Side) -> Result<AbutmentChain, GenError> {
    let levels = BatterLevels::for_side(side, params);

    let x1 = params.abtl;
    let x3 = x1 + params.alcw;
    let capb = params.capt - params.alcd;
    let p1 = batter_offset(side, "alfb", capb - levels.front, params.alfb)?;
    let x5 = x3 + p1;
    let p2 = batter_offset(side, "altb", levels.front - levels.toe, params.altb)?;
    let x6 = x5 + p2;
    let x7 = x6 + params.alfo;
    let y8 = levels.toe - params.alfd;
    let x14 = x1 - params.dwth;
    let p3 = batter_offset(side, "albb", capb - levels.back, params.albb)?;
    let x12 = x14 - p3;
    let x10 = x12 - params.alfo;

    Ok(AbutmentChain {
        x1,
        x3,
        x5,
        x6,
        x7,
        x10,
        x12,
        x14,
        capt: params.capt,
        capb,
        y8,
        ytop: params.rtl + params.apthk - params.slbtht,
        levels,
    })
}

/// Place `pt1..pt15` in drawing units.
pub fn profile_points(chain: &AbutmentChain, mirror: Mirror, ctx: &ScaleContext) -> [Point2; 15] {
    let p = |x: f64, y: f64| ctx.pt(mirror.apply(x), y);
    let c = chain;
    [
        p(c.x1, c.ytop),
        p(c.x1, c.capt),
        p(c.x3, c.capt),
        p(c.x3, c.capb),
        p(c.x5, c.levels.front),
        p(c.x6, c.levels.toe),
        p(c.x7, c.levels.toe),
        p(c.x7, c.y8),
        p(c.x10, c.y8),
        p(c.x10, c.levels.toe),
        p(c.x12, c.levels.toe),
        p(c.x12, c.levels.back),
        p(c.x14, c.capb),
        p(c.x14, c.ytop),
        p(c.x12, c.ytop),
    ]
}

/// Outline plus the four internal construction lines.
///
/// The outline lists `pt1..pt14` and returns to `pt1`; `pt15` only appears in
/// the construction lines.
pub fn profile_primitives(pts: &[Point2; 15]) -> Vec<Primitive> {
    let mut outline: Vec<Point2> = pts[..14].to_vec();
    outline.push(pts[0]);
    vec![
        Primitive::closed_polyline(outline),
        Primitive::line(pts[12], pts[3]),
        Primitive::line(pts[9], pts[6]),
        Primitive::line(pts[11], pts[14]),
        Primitive::line(pts[14], pts[13]),
    ]
}

/// Draw one abutment.
pub fn generate_abutment(
    params: &BridgeParams,
    ctx: &ScaleContext,
    side: Side,
) -> Result<Vec<Primitive>, GenError> {
    let chain = derive_chain(params, side)?;
    let pts = profile_points(&chain, Mirror::for_side(side, params), ctx);
    Ok(profile_primitives(&pts))
}

/// Draw the left then the right abutment.
#[instrument(skip_all)]
pub fn generate_abutments(
    params: &BridgeParams,
    ctx: &ScaleContext,
) -> Result<Vec<Primitive>, GenError> {
    let mut out = generate_abutment(params, ctx, Side::Left)?;
    out.extend(generate_abutment(params, ctx, Side::Right)?);
    debug!(primitives = out.len(), "abutments drawn");
    Ok(out)
}
