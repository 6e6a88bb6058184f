use super::PolygonGeometry;
use std::fmt::Debug;

/// Represents a collection of polygons, each a self-contained geometry with its own SRID.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry {
	pub polygons: Vec<PolygonGeometry>,
	pub srid: Option<u32>,
}

crate::impl_geometry_trait!(MultiPolygonGeometry => MultiPolygon);
crate::impl_composite!(MultiPolygonGeometry, polygons, PolygonGeometry);
crate::impl_from_array!(MultiPolygonGeometry, polygons, PolygonGeometry);

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.polygons).finish()
	}
}

impl From<::geo::MultiPolygon> for MultiPolygonGeometry {
	fn from(value: ::geo::MultiPolygon) -> Self {
		Self::from(value.0)
	}
}
