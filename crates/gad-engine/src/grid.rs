//! Reference axes with level and chainage annotation.

use bridge_params::BridgeParams;
use bridge_types::{Point2, Primitive};
use tracing::{debug, instrument};

use crate::scale::ScaleContext;
use crate::types::{GenError, GenOptions};

/// Largest number of labels either axis may carry.
pub const MAX_AXIS_LABELS: usize = 10_000;

/// Number of level labels drawn from datum up to `toprl`.
pub fn level_count(datum: f64, toprl: f64, yincr: f64) -> usize {
    let nov = (toprl - datum).floor();
    let n = (nov / yincr).floor().max(1.0);
    (n as usize).saturating_add(1)
}

/// Number of chainage labels drawn from `left` towards `right`.
pub fn chainage_count(left: f64, right: f64, xincr: f64) -> usize {
    let n = ((right - left) / xincr).floor() + 2.0;
    n.max(0.0) as usize
}

/// Draw the reference lines, row captions, level axis and chainage axis.
#[instrument(skip_all)]
pub fn generate_grid(
    params: &BridgeParams,
    ctx: &ScaleContext,
    options: &GenOptions,
) -> Result<Vec<Primitive>, GenError> {
    if !(params.xincr > 0.0) {
        return Err(GenError::InvalidIncrement {
            parameter: "xincr",
            value: params.xincr,
        });
    }
    if !(params.yincr > 0.0) {
        return Err(GenError::InvalidIncrement {
            parameter: "yincr",
            value: params.yincr,
        });
    }
    let levels = level_count(ctx.datum, ctx.toprl, params.yincr);
    if levels > MAX_AXIS_LABELS {
        return Err(GenError::InvalidIncrement {
            parameter: "yincr",
            value: params.yincr,
        });
    }
    let chainages = chainage_count(ctx.left, ctx.right, params.xincr);
    if chainages > MAX_AXIS_LABELS {
        return Err(GenError::InvalidIncrement {
            parameter: "xincr",
            value: params.xincr,
        });
    }

    let s = ctx.scale1;
    let left = ctx.left;
    let datum = ctx.datum;
    let d1 = options.grid_row_spacing;
    let d2 = options.tick_half_length;
    let mut out = Vec::new();

    // Datum line spans the approach slabs, both ends measured from left in
    // drawing units. The two annotation rows span the axis.
    out.push(Primitive::line(
        Point2::new(ctx.hpos(left - params.laslab), datum),
        Point2::new(ctx.hpos(left + params.lbridge + params.laslab), datum),
    ));
    out.push(Primitive::line(
        Point2::new(left, datum - d1 * s),
        Point2::new(ctx.hpos(ctx.right), datum - d1 * s),
    ));
    out.push(Primitive::line(
        Point2::new(left, datum - 2.0 * d1 * s),
        Point2::new(ctx.hpos(ctx.right), datum - 2.0 * d1 * s),
    ));
    out.push(Primitive::line(
        Point2::new(left, datum - 2.0 * d1 * s),
        Point2::new(left, ctx.vpos(ctx.toprl)),
    ));

    let caption_height = options.caption_text_height * s;
    out.push(Primitive::text(
        Point2::new(left - 25.0 * s, datum - d1 * 0.5 * s),
        "BED LEVEL",
        caption_height,
        0.0,
    ));
    out.push(Primitive::text(
        Point2::new(left - 25.0 * s, datum - d1 * 1.5 * s),
        "CHAINAGE",
        caption_height,
        0.0,
    ));

    out.push(Primitive::line(
        Point2::new(left - d2 * s, datum),
        Point2::new(left + d2 * s, datum),
    ));

    let value_height = options.value_text_height * s;

    for a in 0..levels {
        let lvl = datum + a as f64 * params.yincr;
        let y = ctx.vpos(lvl);
        out.push(Primitive::text(
            Point2::new(left - 13.0 * s, y - s),
            format!("{:.3}", lvl),
            value_height,
            0.0,
        ));
        out.push(Primitive::line(
            Point2::new(left - d2 * s, y),
            Point2::new(left + d2 * s, y),
        ));
    }

    // Chainage row offsets below datum, in multiples of scale1.
    let d4 = 2.0 * d1;
    let d5 = d4 - 2.0;
    let d6 = d1 + 2.0;
    let d7 = d1 - 2.0;
    let d8 = d4 - 4.0;

    for a in 0..chainages {
        let ch = left + a as f64 * params.xincr;
        let x = ctx.hpos(ch);
        out.push(Primitive::text(
            Point2::new(s + x, datum - d8 * s),
            format!("{:.3}", ch),
            value_height,
            90.0,
        ));
        out.push(Primitive::line(
            Point2::new(x, datum - d4 * s),
            Point2::new(x, datum - d5 * s),
        ));
        out.push(Primitive::line(
            Point2::new(x, datum - d6 * s),
            Point2::new(x, datum - d7 * s),
        ));
    }

    debug!(levels, chainages, primitives = out.len(), "layout grid drawn");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_count_has_a_floor_of_two() {
        assert_eq!(level_count(95.0, 105.0, 1.0), 11);
        assert_eq!(level_count(95.0, 105.0, 2.5), 5);
        assert_eq!(level_count(95.0, 95.4, 1.0), 2);
        assert_eq!(level_count(95.0, 90.0, 1.0), 2);
    }

    #[test]
    fn chainage_count_includes_one_past_right() {
        assert_eq!(chainage_count(0.0, 100.0, 5.0), 22);
        assert_eq!(chainage_count(0.0, 99.0, 5.0), 21);
        assert_eq!(chainage_count(0.0, 0.0, 5.0), 2);
        assert_eq!(chainage_count(100.0, 0.0, 5.0), 0);
    }

    #[test]
    fn counts_saturate_for_vanishing_increments() {
        assert_eq!(level_count(95.0, 105.0, 1e-300), usize::MAX);
        assert!(chainage_count(0.0, 100.0, 1e-300) > MAX_AXIS_LABELS);
    }
}
