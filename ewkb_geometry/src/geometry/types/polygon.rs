use super::*;
use std::fmt::Debug;

/// A polygon as an ordered list of rings.
///
/// By convention the first ring is the exterior and the remaining rings are holes. Ring closure
/// and orientation are the caller's responsibility and are not checked.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	pub rings: Vec<LineStringGeometry>,
	pub srid: Option<u32>,
}

impl PolygonGeometry {
	/// Returns the exterior ring, if the polygon has any rings.
	#[must_use]
	pub fn exterior(&self) -> Option<&LineStringGeometry> {
		self.rings.first()
	}

	/// Returns the interior rings (holes).
	#[must_use]
	pub fn interiors(&self) -> &[LineStringGeometry] {
		self.rings.get(1..).unwrap_or_default()
	}
}

crate::impl_geometry_trait!(PolygonGeometry => Polygon);
crate::impl_composite!(PolygonGeometry, rings, LineStringGeometry);
crate::impl_from_array!(PolygonGeometry, rings, LineStringGeometry);

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.rings).finish()
	}
}

impl From<::geo::Polygon> for PolygonGeometry {
	fn from(geometry: ::geo::Polygon) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(LineStringGeometry::from(exterior));
		rings.extend(interiors.into_iter().map(LineStringGeometry::from));
		PolygonGeometry { rings, srid: None }
	}
}
