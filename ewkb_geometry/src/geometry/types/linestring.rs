use super::Coordinates;
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line.
///
/// Also used as the ring type of [`PolygonGeometry`](super::PolygonGeometry).
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry {
	pub points: Vec<Coordinates>,
	pub srid: Option<u32>,
}

crate::impl_geometry_trait!(LineStringGeometry => LineString);
crate::impl_composite!(LineStringGeometry, points, Coordinates);
crate::impl_from_array!(LineStringGeometry, points, Coordinates);

impl Debug for LineStringGeometry {
	/// Prints the list of coordinates in a developer-friendly format.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.points).finish()
	}
}

impl From<::geo::LineString> for LineStringGeometry {
	fn from(value: ::geo::LineString) -> Self {
		Self::from(value.into_inner())
	}
}
