use std::fmt;

/// Errors raised while loading or resolving bridge parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("missing required parameter: {name}")]
    MissingRequiredParameter { name: String },

    #[error("non-numeric value for parameter {name}: {value:?}")]
    NonNumericValue { name: String, value: String },

    #[error("invalid span count {value}: must be a whole number of at least 1")]
    InvalidSpanCount { value: f64 },

    #[error("invalid value for {name}: {value} ({reason})")]
    InvalidValue {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("parameter table has no variable column")]
    MissingVariableColumn,
}

impl ParamError {
    /// The parameter the error refers to, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ParamError::MissingRequiredParameter { name }
            | ParamError::NonNumericValue { name, .. }
            | ParamError::InvalidValue { name, .. } => Some(name),
            ParamError::InvalidSpanCount { .. } => Some("nspan"),
            ParamError::MissingVariableColumn => None,
        }
    }
}

/// Every problem found in one pass over a parameter table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub errors: Vec<ParamError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ParamError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ok if nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Names of all missing required parameters, in report order.
    pub fn missing_names(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| match e {
                ParamError::MissingRequiredParameter { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "parameter validation failed: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationReport {}
