use super::{Geometry, GeometryTrait, GeometryType, normalize_srid};
use anyhow::Result;
use std::fmt::Debug;

/// A heterogeneous collection of geometries.
///
/// The kind has a type code, but no (E)WKB body encoding is defined for it, so encoding a
/// collection fails.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection {
	pub geometries: Vec<Geometry>,
	pub srid: Option<u32>,
}

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self { geometries, srid: None }
	}
}

impl GeometryTrait for GeometryCollection {
	fn geometry_type(&self) -> Result<GeometryType> {
		Ok(GeometryType::Collection)
	}

	fn srid(&self) -> Option<u32> {
		normalize_srid(self.srid)
	}

	fn set_srid(&mut self, srid: Option<u32>) {
		self.srid = srid;
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.geometries).finish()
	}
}
