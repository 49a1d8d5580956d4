//! Parametric general-arrangement drawing of a multi-span girder bridge.
//!
//! [`generate`] turns a [`BridgeParams`](bridge_params::BridgeParams) record
//! into a [`Scene`](bridge_types::Scene): layout grid, superstructure,
//! abutments, piers and approach slabs in elevation, followed by the plan
//! view. Every generator is a pure function of the parameters, the
//! [`ScaleContext`] and the [`GenOptions`].

pub mod abutment;
pub mod approach;
pub mod assemble;
pub mod grid;
pub mod pier;
pub mod plan;
pub mod scale;
pub mod superstructure;
pub mod types;

pub use abutment::{generate_abutments, Mirror, Side};
pub use approach::generate_approach_slabs;
pub use assemble::{generate, generate_from_map};
pub use grid::{chainage_count, generate_grid, level_count};
pub use pier::generate_piers;
pub use plan::generate_plan_view;
pub use scale::ScaleContext;
pub use superstructure::generate_superstructure;
pub use types::{GenError, GenOptions};
