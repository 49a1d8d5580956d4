use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ParamError;

/// Named real-valued parameters, keyed by lower-cased name.
///
/// Backed by a `BTreeMap` so iteration and serialization order never depend
/// on hashing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap {
    values: BTreeMap<String, f64>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs. Names are lower-cased; later
    /// duplicates win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (name, value) in pairs {
            map.insert(name.as_ref(), value);
        }
        map
    }

    pub fn insert(&mut self, name: &str, value: f64) -> Option<f64> {
        self.values.insert(name.to_lowercase(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(&name.to_lowercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&name.to_lowercase())
    }

    /// Look up a mandatory parameter. Missing names and non-finite values
    /// are both errors.
    pub fn require(&self, name: &str) -> Result<f64, ParamError> {
        match self.get(name) {
            None => Err(ParamError::MissingRequiredParameter {
                name: name.to_lowercase(),
            }),
            Some(v) if !v.is_finite() => Err(ParamError::NonNumericValue {
                name: name.to_lowercase(),
                value: v.to_string(),
            }),
            Some(v) => Ok(v),
        }
    }

    /// Look up an optional parameter. A present but non-finite value is
    /// still an error.
    pub fn optional(&self, name: &str) -> Result<Option<f64>, ParamError> {
        match self.get(name) {
            None => Ok(None),
            Some(_) => self.require(name).map(Some),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
