//! (E)WKB encoding.
//!
//! # Overview
//!
//! [`encode`] writes a byte-order mark, a header and a coordinate body for a [`Geometry`]:
//!
//! | field                                   | size     | present when         |
//! |-----------------------------------------|----------|----------------------|
//! | byte-order mark (always `1`)            | 1 byte   | always               |
//! | type code, optionally `\| 0x20000000`   | 4 bytes  | always               |
//! | SRID                                    | 4 bytes  | SRID is set and not 0 |
//! | coordinate / ring / element body        | variable | always               |
//!
//! All integers and doubles are little-endian. Line strings and polygon rings are flat
//! coordinate arrays, while the elements of Multi- geometries are complete geometries with their
//! own header.
//!
//! [`Geometry`]: crate::Geometry

mod config;
mod coordinates;
mod encoder;
mod error;
mod header;

pub use config::*;
pub use coordinates::*;
pub use encoder::*;
pub use error::*;
pub use header::*;
