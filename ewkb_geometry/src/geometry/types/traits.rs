use crate::geometry::GeometryType;
use anyhow::Result;
use std::fmt::Debug;

/// Drops a zero SRID: both `None` and `Some(0)` mean "no spatial reference".
#[must_use]
pub fn normalize_srid(srid: Option<u32>) -> Option<u32> {
	srid.filter(|&srid| srid != 0)
}

/// Defines the read interface every geometry offers to an encoder: a type tag and an optional
/// spatial reference identifier.
pub trait GeometryTrait: Debug + Clone {
	/// Returns the type tag of the geometry.
	///
	/// Fails with [`EwkbError::UnsupportedSpatialType`](crate::EwkbError::UnsupportedSpatialType)
	/// if the geometry's kind has no type code.
	fn geometry_type(&self) -> Result<GeometryType>;

	/// Returns the SRID, or `None` if it is absent or zero.
	fn srid(&self) -> Option<u32>;

	/// Replaces the SRID.
	fn set_srid(&mut self, srid: Option<u32>);

	/// Returns the geometry with the given SRID.
	fn with_srid(mut self, srid: u32) -> Self {
		self.set_srid(Some(srid));
		self
	}

	/// Returns the geometry without an SRID.
	fn without_srid(mut self) -> Self {
		self.set_srid(None);
		self
	}
}

/// Represents composite geometries that are ordered collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
