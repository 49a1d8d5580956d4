//! Test harness for bridge drawing generation.
//!
//! Provides reference parameter sets, a driver that runs a design through
//! generation and persistence, and diagnostic checks over the produced scene.
//!
//! # Key Components
//!
//! - [`DesignRun`]: One design taken from parameters to scene and saved file
//! - [`fixtures`]: Reference bridge and the standard scenario builders
//! - [`assertions`]: Geometry checks returning contextual errors
//! - [`report`]: Per-component text summary of a scene

pub mod assertions;
pub mod fixtures;
pub mod helpers;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use report::SceneReport;
pub use workflow::DesignRun;
