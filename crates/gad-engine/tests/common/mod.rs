#![allow(dead_code)]

use bridge_params::BridgeParams;
use test_harness::fixtures;

pub use test_harness::fixtures::reference_map;

pub fn reference_params() -> BridgeParams {
    fixtures::reference_params().expect("reference parameters resolve")
}

/// Reference parameters with some values replaced.
pub fn params_with(overrides: &[(&str, f64)]) -> BridgeParams {
    fixtures::params_with(overrides).expect("overridden parameters resolve")
}
