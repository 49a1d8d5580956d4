//! Reference parameter sets.
//!
//! The reference bridge is a three-span, 90 m crossing with 30 m spans,
//! drawn at 1:100 in elevation and 1:50 in plan. Scenario builders start
//! from it and change only what the scenario is about.

use bridge_params::{BridgeParams, ParameterMap, ParameterRow, CATALOGUE};

use crate::helpers::HarnessError;

const REFERENCE: &[(&str, f64)] = &[
    ("scale1", 100.0),
    ("scale2", 50.0),
    ("skew", 0.0),
    ("datum", 95.0),
    ("toprl", 105.0),
    ("left", 0.0),
    ("right", 100.0),
    ("xincr", 5.0),
    ("yincr", 1.0),
    ("noch", 2.0),
    ("nspan", 3.0),
    ("lbridge", 90.0),
    ("abtl", 0.0),
    ("rtl", 104.0),
    ("sofl", 103.0),
    ("kerbw", 0.5),
    ("kerbd", 0.2),
    ("ccbr", 7.5),
    ("slbthc", 0.9),
    ("slbthe", 0.75),
    ("slbtht", 0.15),
    ("capt", 102.4),
    ("capb", 101.2),
    ("capw", 1.2),
    ("piertw", 1.0),
    ("battr", 10.0),
    ("pierst", 8.0),
    ("piern", 1.0),
    ("span1", 30.0),
    ("futrl", 96.0),
    ("futd", 1.5),
    ("futw", 4.0),
    ("futl", 10.0),
    ("dwth", 0.3),
    ("alcw", 0.75),
    ("alcd", 1.2),
    ("alfb", 10.0),
    ("alfbl", 101.0),
    ("altb", 10.0),
    ("altbl", 100.5),
    ("alfo", 0.5),
    ("albb", 5.0),
    ("albbl", 101.5),
    ("abtlen", 12.0),
    ("laslab", 3.5),
    ("apwth", 8.5),
    ("apthk", 0.3),
    ("wcth", 0.075),
    ("alfl", 99.0),
    ("arfl", 99.0),
    ("alfbr", 101.0),
    ("altbr", 100.5),
    ("alfd", 1.5),
    ("albbr", 101.5),
];

pub fn reference_map() -> ParameterMap {
    ParameterMap::from_pairs(REFERENCE.iter().copied())
}

/// Reference map with some values replaced or added.
pub fn map_with(overrides: &[(&str, f64)]) -> ParameterMap {
    let mut map = reference_map();
    for (name, value) in overrides {
        map.insert(name, *value);
    }
    map
}

pub fn reference_params() -> Result<BridgeParams, HarnessError> {
    params_with(&[])
}

pub fn params_with(overrides: &[(&str, f64)]) -> Result<BridgeParams, HarnessError> {
    let map = map_with(overrides);
    BridgeParams::from_map(&map).map_err(|e| HarnessError::failed(format!("fixture: {}", e)))
}

/// The reference bridge as spreadsheet rows: a header, then one row per
/// catalogue entry under its upper-case name.
pub fn reference_rows() -> Vec<ParameterRow> {
    let map = reference_map();
    let mut rows = vec![ParameterRow::new("Variable", "Value")];
    for spec in CATALOGUE {
        let value = map.get(spec.name).map(|v| v.to_string()).unwrap_or_default();
        rows.push(ParameterRow {
            variable: spec.name.to_string(),
            value,
            description: Some(spec.description.to_string()),
        });
    }
    rows
}

// ── Scenarios ───────────────────────────────────────────────────────────────

/// Grid annotation at unit scale: datum 95, top 105, yincr 1, chainage
/// 0..100 every 5.
pub fn level_grid_scenario() -> Result<BridgeParams, HarnessError> {
    params_with(&[("scale1", 1.0)])
}

/// One 30 m span: no intermediate piers anywhere.
pub fn single_span_scenario() -> Result<BridgeParams, HarnessError> {
    params_with(&[("nspan", 1.0), ("lbridge", 30.0)])
}

/// Three 30 m spans starting at chainage 0.
pub fn three_span_scenario() -> Result<BridgeParams, HarnessError> {
    reference_params()
}

/// Right batter levels differing from the left ones.
pub fn asymmetric_batter_scenario() -> Result<BridgeParams, HarnessError> {
    params_with(&[("alfbr", 100.8), ("altbr", 100.2), ("albbr", 101.0)])
}
