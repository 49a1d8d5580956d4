use bridge_params::ParamError;
use bridge_types::Component;
use serde::{Deserialize, Serialize};

/// Errors from drawing generation. Any error aborts the whole scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenError {
    #[error("{component}: batter run {parameter} is zero")]
    DegenerateBatter {
        component: String,
        parameter: &'static str,
    },

    #[error("{component}: computation failed: {reason}")]
    Computation { component: String, reason: String },

    #[error("grid increment {parameter} = {value} must be positive and give a bounded label count")]
    InvalidIncrement { parameter: &'static str, value: f64 },

    #[error("{component}: invalid geometry: {reason}")]
    InvalidGeometry { component: String, reason: String },

    #[error("parameter error: {0}")]
    Param(#[from] ParamError),
}

impl GenError {
    pub(crate) fn computation(component: Component, reason: impl Into<String>) -> Self {
        GenError::Computation {
            component: component.name().to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn geometry(component: &str, reason: impl Into<String>) -> Self {
        GenError::InvalidGeometry {
            component: component.to_string(),
            reason: reason.into(),
        }
    }
}

/// Fixed drafting constants. Lengths marked "× scale1" are multiplied by
/// `scale1` where they are used; the rest are absolute.
///
/// Fields missing from a serialized form take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenOptions {
    /// Gap left at each end of a span rectangle, in drawing units.
    pub deck_end_inset: f64,
    /// Vertical shift applied to the whole plan view, in drawing units.
    pub plan_offset_y: f64,
    /// Distance of the plan centreline below datum, in engineering units.
    pub plan_centerline_drop: f64,
    /// Footing projection beyond the abutment in plan, in engineering units.
    pub abutment_footing_margin: f64,
    /// Spacing between the grid reference rows (× scale1).
    pub grid_row_spacing: f64,
    /// Half length of axis ticks (× scale1).
    pub tick_half_length: f64,
    /// Height of the row captions (× scale1).
    pub caption_text_height: f64,
    /// Height of level and chainage labels (× scale1).
    pub value_text_height: f64,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            deck_end_inset: 25.0,
            plan_offset_y: -5000.0,
            plan_centerline_drop: 30.0,
            abutment_footing_margin: 0.15,
            grid_row_spacing: 20.0,
            tick_half_length: 2.5,
            caption_text_height: 2.5,
            value_text_height: 2.0,
        }
    }
}

impl GenOptions {
    /// Defaults with the plan view placed at a different vertical offset.
    pub fn with_plan_offset(plan_offset_y: f64) -> Self {
        Self {
            plan_offset_y,
            ..Self::default()
        }
    }
}
