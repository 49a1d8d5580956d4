use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ParamError;
use crate::map::ParameterMap;

/// Typed view of every parameter the drawing engine reads.
///
/// Built once per generation run. All fields are mandatory except `lspan`
/// and `bridgew`, which fall back to `span1` and `ccbr + 2·kerbw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeParams {
    // Scale, datum and grid
    pub scale1: f64,
    pub scale2: f64,
    pub skew: f64,
    pub datum: f64,
    pub toprl: f64,
    pub left: f64,
    pub right: f64,
    pub xincr: f64,
    pub yincr: f64,

    // Deck
    pub nspan: u32,
    pub lbridge: f64,
    pub abtl: f64,
    pub rtl: f64,
    pub sofl: f64,
    pub kerbw: f64,
    pub ccbr: f64,
    pub slbtht: f64,
    pub span1: f64,
    /// Pier spacing used in plan.
    pub lspan: f64,
    /// Overall deck width used in plan.
    pub bridgew: f64,

    // Pier
    pub capt: f64,
    pub capb: f64,
    pub capw: f64,
    pub piertw: f64,
    pub battr: f64,
    pub pierst: f64,
    pub futrl: f64,
    pub futd: f64,
    pub futw: f64,
    pub futl: f64,

    // Abutment (runs are shared by both sides, levels are per side)
    pub dwth: f64,
    pub alcw: f64,
    pub alcd: f64,
    pub alfb: f64,
    pub alfbl: f64,
    pub alfbr: f64,
    pub altb: f64,
    pub altbl: f64,
    pub altbr: f64,
    pub alfo: f64,
    pub alfd: f64,
    pub albb: f64,
    pub albbl: f64,
    pub albbr: f64,

    // Approach slabs
    pub laslab: f64,
    pub apthk: f64,
    pub wcth: f64,
}

impl BridgeParams {
    /// Resolve the record from a parameter map.
    ///
    /// Fails on the first missing or non-finite mandatory parameter, and on
    /// a span count that is not a whole number of at least one.
    pub fn from_map(map: &ParameterMap) -> Result<Self, ParamError> {
        let r = |name: &str| map.require(name);

        let nspan = span_count(r("nspan")?)?;
        let span1 = r("span1")?;
        let kerbw = r("kerbw")?;
        let ccbr = r("ccbr")?;

        let lspan = match map.optional("lspan")? {
            Some(v) => v,
            None => {
                warn!(fallback = span1, "lspan not supplied, using span1");
                span1
            }
        };
        let bridgew = match map.optional("bridgew")? {
            Some(v) => v,
            None => {
                let fallback = ccbr + 2.0 * kerbw;
                warn!(fallback, "bridgew not supplied, using ccbr + 2*kerbw");
                fallback
            }
        };

        Ok(Self {
            scale1: r("scale1")?,
            scale2: r("scale2")?,
            skew: r("skew")?,
            datum: r("datum")?,
            toprl: r("toprl")?,
            left: r("left")?,
            right: r("right")?,
            xincr: r("xincr")?,
            yincr: r("yincr")?,

            nspan,
            lbridge: r("lbridge")?,
            abtl: r("abtl")?,
            rtl: r("rtl")?,
            sofl: r("sofl")?,
            kerbw,
            ccbr,
            slbtht: r("slbtht")?,
            span1,
            lspan,
            bridgew,

            capt: r("capt")?,
            capb: r("capb")?,
            capw: r("capw")?,
            piertw: r("piertw")?,
            battr: r("battr")?,
            pierst: r("pierst")?,
            futrl: r("futrl")?,
            futd: r("futd")?,
            futw: r("futw")?,
            futl: r("futl")?,

            dwth: r("dwth")?,
            alcw: r("alcw")?,
            alcd: r("alcd")?,
            alfb: r("alfb")?,
            alfbl: r("alfbl")?,
            alfbr: r("alfbr")?,
            altb: r("altb")?,
            altbl: r("altbl")?,
            altbr: r("altbr")?,
            alfo: r("alfo")?,
            alfd: r("alfd")?,
            albb: r("albb")?,
            albbl: r("albbl")?,
            albbr: r("albbr")?,

            laslab: r("laslab")?,
            apthk: r("apthk")?,
            wcth: r("wcth")?,
        })
    }

    /// Chainage the right abutment is mirrored about.
    pub fn right_edge(&self) -> f64 {
        self.left + self.lbridge
    }

    /// Chainage where the last span ends.
    pub fn deck_end(&self) -> f64 {
        self.abtl + f64::from(self.nspan) * self.span1
    }

    /// Number of intermediate piers.
    pub fn pier_count(&self) -> u32 {
        self.nspan.saturating_sub(1)
    }
}

fn span_count(value: f64) -> Result<u32, ParamError> {
    if value < 1.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ParamError::InvalidSpanCount { value });
    }
    Ok(value as u32)
}
