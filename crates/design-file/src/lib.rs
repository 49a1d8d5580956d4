//! Versioned JSON persistence of a bridge design: the parameter map plus the
//! bookkeeping record kept alongside it.

pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;

pub use errors::{LoadError, SaveError};
pub use load::load_design;
pub use metadata::{DesignMetadata, DesignStatus};
pub use save::{save_design, FORMAT_ID, FORMAT_VERSION};
