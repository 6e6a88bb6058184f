//! Byte-level building blocks for the EWKB encoder: the [`Blob`] container and
//! the little-endian [`io::ValueWriter`] used to pack primitives.

pub mod io;

pub mod types;

pub use types::*;
