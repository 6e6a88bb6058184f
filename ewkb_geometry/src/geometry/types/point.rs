use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// Represents a single point defined by x and y coordinates.
///
/// Points are the building block of every other kind. When stored inside a
/// [`MultiPointGeometry`](super::MultiPointGeometry) each point keeps its own SRID.
#[derive(Clone, PartialEq)]
pub struct PointGeometry {
	pub coord: Coordinates,
	pub srid: Option<u32>,
}

impl PointGeometry {
	/// Constructs a new `PointGeometry` without SRID.
	#[must_use]
	pub fn new(coord: Coordinates) -> Self {
		Self { coord, srid: None }
	}
	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.coord.x()
	}
	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.coord.y()
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.coord
	}
}

crate::impl_geometry_trait!(PointGeometry => Point);

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]`, followed by the SRID if one is set.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.coord.fmt(f)?;
		match self.srid() {
			Some(srid) => write!(f, " SRID={srid}"),
			None => Ok(()),
		}
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self::new(Coordinates::from(value))
	}
}
