use super::{GeometryTrait, GeometryType, normalize_srid};
use crate::EwkbError;
use anyhow::{Result, bail};

/// A geometry handed over by a foreign object model whose kind has no type code here,
/// e.g. a `CircularString` or a `Triangle`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownGeometry {
	pub type_name: String,
	pub srid: Option<u32>,
}

impl UnknownGeometry {
	#[must_use]
	pub fn new(type_name: &str) -> Self {
		Self {
			type_name: type_name.to_string(),
			srid: None,
		}
	}
}

impl GeometryTrait for UnknownGeometry {
	/// Always fails: the type tag does not match any mapped kind.
	fn geometry_type(&self) -> Result<GeometryType> {
		bail!(EwkbError::UnsupportedSpatialType {
			type_name: self.type_name.clone(),
		})
	}

	fn srid(&self) -> Option<u32> {
		normalize_srid(self.srid)
	}

	fn set_srid(&mut self, srid: Option<u32>) {
		self.srid = srid;
	}
}
