//! Parameter handling for bridge general-arrangement drawings.
//!
//! The external loader hands over a table of named values; this crate turns
//! it into a [`ParameterMap`], checks it against the [`catalogue`], and builds
//! the typed [`BridgeParams`] record the drawing engine consumes.

pub mod catalogue;
pub mod errors;
pub mod loader;
pub mod map;
pub mod record;
pub mod validate;

pub use catalogue::{required_names, ParameterSpec, CATALOGUE};
pub use errors::{ParamError, ValidationReport};
pub use loader::{load_rows, ParameterRow};
pub use map::ParameterMap;
pub use record::BridgeParams;
pub use validate::validate_ranges;
