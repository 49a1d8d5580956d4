use bridge_params::ParamError;

/// Errors during design file loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("file version {0} is not a valid format version")]
    InvalidVersion(u32),

    #[error("invalid parameter in file: {0}")]
    Parameter(#[from] ParamError),
}

/// Errors during design file saving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error("cannot save parameter: {0}")]
    Parameter(#[from] ParamError),

    #[error("serialization failed: {0}")]
    Serialize(String),
}
