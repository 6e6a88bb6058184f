#![allow(clippy::module_inception)]

mod collection;
mod geometry;
mod geometry_type;
mod types;
mod unknown;

pub use collection::*;
pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
pub use unknown::*;
