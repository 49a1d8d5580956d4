use bridge_params::{ParamError, ParameterMap};
use serde::Serialize;

use crate::errors::SaveError;
use crate::metadata::DesignMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier written to every file.
pub const FORMAT_ID: &str = "bridge-gad";

/// The top-level file structure.
#[derive(Debug, Serialize)]
pub struct DesignFile<'a> {
    pub format: &'static str,
    pub version: u32,
    pub design: &'a DesignMetadata,
    pub parameters: &'a ParameterMap,
}

/// Serialize a design to a pretty-printed JSON string.
///
/// JSON has no encoding for NaN or infinity, so non-finite parameters are
/// refused here rather than written as `null`.
pub fn save_design(
    parameters: &ParameterMap,
    metadata: &DesignMetadata,
) -> Result<String, SaveError> {
    if let Some((name, value)) = parameters.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ParamError::NonNumericValue {
            name: name.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    let file = DesignFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        design: metadata,
        parameters,
    };
    serde_json::to_string_pretty(&file).map_err(|e| SaveError::Serialize(e.to_string()))
}
