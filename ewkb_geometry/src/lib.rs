//! Encodes two-dimensional vector geometries into Well-Known Binary (WKB) and its PostGIS
//! extension EWKB.
//!
//! A geometry without SRID is written as plain OGC WKB. A geometry with a non-zero SRID gets
//! the EWKB "has SRID" flag in its type code followed by the SRID itself.
//!
//! ```rust
//! use ewkb_geometry::{Geometry, GeometryTrait, encode};
//!
//! let point = Geometry::new_point([1.5, 2.5]);
//! assert_eq!(
//! 	encode(&point).unwrap().as_hex_upper(),
//! 	"0101000000000000000000F83F0000000000000440"
//! );
//!
//! let point = point.with_srid(4326);
//! assert_eq!(encode(&point).unwrap().len(), 25);
//! ```

pub mod ewkb;
mod geometry;

pub use ewkb::{EwkbConfig, EwkbEncoder, EwkbError, EwkbMode, SridPolicy, encode, encode_hex};
pub use geometry::*;
