use bridge_params::{ParamError, ParameterMap};
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::DesignMetadata;
use crate::save::{FORMAT_ID, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignFileRaw {
    pub format: String,
    pub version: u32,
    pub design: DesignMetadata,
    pub parameters: ParameterMap,
}

/// Deserialize a design from a JSON string.
///
/// Validates the format identifier and version, then re-keys the parameters
/// in lower case and checks every value is finite.
pub fn load_design(json: &str) -> Result<(ParameterMap, DesignMetadata), LoadError> {
    let raw: DesignFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }
    if raw.version == 0 {
        return Err(LoadError::InvalidVersion(raw.version));
    }
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    // Hand-edited files may use the sheet's upper-case names.
    let parameters = ParameterMap::from_pairs(raw.parameters.iter());
    if let Some((name, value)) = parameters.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ParamError::NonNumericValue {
            name: name.to_string(),
            value: value.to_string(),
        }
        .into());
    }

    Ok((parameters, raw.design))
}
