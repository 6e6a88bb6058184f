use super::LineStringGeometry;
use std::fmt::Debug;

/// Represents a collection of line strings, each a self-contained geometry with its own SRID.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry {
	pub line_strings: Vec<LineStringGeometry>,
	pub srid: Option<u32>,
}

crate::impl_geometry_trait!(MultiLineStringGeometry => MultiLineString);
crate::impl_composite!(MultiLineStringGeometry, line_strings, LineStringGeometry);
crate::impl_from_array!(MultiLineStringGeometry, line_strings, LineStringGeometry);

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.line_strings).finish()
	}
}

impl From<::geo::MultiLineString> for MultiLineStringGeometry {
	fn from(value: ::geo::MultiLineString) -> Self {
		Self::from(value.0)
	}
}
