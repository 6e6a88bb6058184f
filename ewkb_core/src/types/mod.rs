//! Contains the byte container type shared by the writers.

mod blob;
pub use blob::*;
