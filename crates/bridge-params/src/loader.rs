use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalogue;
use crate::errors::{ParamError, ValidationReport};
use crate::map::ParameterMap;

/// One row of an input parameter table, as read from a spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub variable: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ParameterRow {
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
            description: None,
        }
    }

    fn is_header(&self) -> bool {
        self.variable.trim().eq_ignore_ascii_case("variable")
            && self.value.trim().eq_ignore_ascii_case("value")
    }
}

/// Turn table rows into a [`ParameterMap`].
///
/// A leading header row is skipped and rows without a name are ignored.
/// Every catalogue name must be present and every value must parse as a
/// finite number; all problems are collected before failing.
#[instrument(skip(rows))]
pub fn load_rows<I>(rows: I) -> Result<ParameterMap, ValidationReport>
where
    I: IntoIterator<Item = ParameterRow>,
{
    let mut report = ValidationReport::new();
    let mut map = ParameterMap::new();
    let mut seen: Vec<String> = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        if index == 0 && row.is_header() {
            continue;
        }
        let name = row.variable.trim();
        if name.is_empty() {
            continue;
        }
        seen.push(name.to_lowercase());
        match parse_value(&row.value) {
            Some(v) => {
                map.insert(name, v);
            }
            None => report.push(ParamError::NonNumericValue {
                name: name.to_string(),
                value: row.value.clone(),
            }),
        }
    }

    if seen.is_empty() {
        report.push(ParamError::MissingVariableColumn);
    }

    for required in catalogue::required_names() {
        let lower = required.to_lowercase();
        if !seen.contains(&lower) {
            report.push(ParamError::MissingRequiredParameter {
                name: required.to_string(),
            });
        }
    }

    debug!(rows = seen.len(), errors = report.errors.len(), "loaded parameter table");
    report.into_result().map(|()| map)
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
