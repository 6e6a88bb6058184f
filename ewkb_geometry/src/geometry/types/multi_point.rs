use super::PointGeometry;
use std::fmt::Debug;

/// Represents a collection of points.
///
/// Every point is a full geometry with its own SRID; the encoder writes each one with its own
/// header.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry {
	pub points: Vec<PointGeometry>,
	pub srid: Option<u32>,
}

crate::impl_geometry_trait!(MultiPointGeometry => MultiPoint);
crate::impl_composite!(MultiPointGeometry, points, PointGeometry);
crate::impl_from_array!(MultiPointGeometry, points, PointGeometry);

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.points).finish()
	}
}

impl From<::geo::MultiPoint> for MultiPointGeometry {
	fn from(value: ::geo::MultiPoint) -> Self {
		Self::from(value.0)
	}
}
