pub mod geom;
pub mod primitive;
pub mod scene;

pub use geom::*;
pub use primitive::*;
pub use scene::*;
