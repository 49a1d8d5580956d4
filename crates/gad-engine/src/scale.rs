//! Conversion from engineering coordinates (chainage, level) to drawing units.

use bridge_params::BridgeParams;
use bridge_types::{Component, Point2};

use crate::types::GenError;

/// Horizontal scale divisor. Fixed.
const HS: f64 = 1.0;
/// Vertical scale divisor. Fixed.
const VS: f64 = 1.0;

/// Scale factors and datum for one generation run.
///
/// `left` is the fixed point of the horizontal transforms and `datum` the
/// fixed point of the vertical ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    pub scale1: f64,
    pub scale2: f64,
    /// Plan-view multiplier, `scale1 / scale2`.
    pub sc: f64,
    pub hhs: f64,
    pub vvs: f64,
    /// Skew in radians.
    pub skew1: f64,
    pub datum: f64,
    pub left: f64,
    pub right: f64,
    pub toprl: f64,
}

impl ScaleContext {
    pub fn new(params: &BridgeParams) -> Result<Self, GenError> {
        Self::from_raw(
            params.scale1,
            params.scale2,
            params.skew,
            params.datum,
            params.left,
            params.right,
            params.toprl,
        )
    }

    pub fn from_raw(
        scale1: f64,
        scale2: f64,
        skew: f64,
        datum: f64,
        left: f64,
        right: f64,
        toprl: f64,
    ) -> Result<Self, GenError> {
        if scale2 == 0.0 {
            return Err(GenError::computation(
                Component::PlanView,
                "scale2 is zero, plan scale scale1/scale2 is undefined",
            ));
        }
        let sc = scale1 / scale2;
        if !sc.is_finite() {
            return Err(GenError::computation(
                Component::PlanView,
                format!("plan scale {}/{} is not finite", scale1, scale2),
            ));
        }
        Ok(Self {
            scale1,
            scale2,
            sc,
            hhs: 1000.0 / HS,
            vvs: 1000.0 / VS,
            skew1: skew * std::f64::consts::PI / 180.0,
            datum,
            left,
            right,
            toprl,
        })
    }

    /// Elevation x for a chainage.
    pub fn hpos(&self, a: f64) -> f64 {
        self.left + self.hhs * (a - self.left)
    }

    /// Elevation y for a level.
    pub fn vpos(&self, a: f64) -> f64 {
        self.datum + self.vvs * (a - self.datum)
    }

    /// Plan x for a chainage.
    pub fn h2pos(&self, a: f64) -> f64 {
        self.left + self.sc * self.hhs * (a - self.left)
    }

    /// Plan y for a transverse ordinate.
    pub fn v2pos(&self, a: f64) -> f64 {
        self.datum + self.sc * self.vvs * (a - self.datum)
    }

    /// Elevation point for (chainage, level).
    pub fn pt(&self, a: f64, b: f64) -> Point2 {
        Point2::new(self.hpos(a), self.vpos(b))
    }

    /// Plan point for (chainage, transverse ordinate), before the plan offset.
    pub fn p2t(&self, a: f64, b: f64) -> Point2 {
        Point2::new(self.h2pos(a), self.v2pos(b))
    }

    /// A horizontal length (not a chainage) in elevation drawing units.
    pub fn hlen(&self, d: f64) -> f64 {
        self.hhs * d
    }
}
