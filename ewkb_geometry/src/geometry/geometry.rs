use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// Any geometry of the object model.
///
/// The six encodable kinds are listed first. `Collection` has a type code but no body encoding,
/// and `Unknown` stands for kinds without a type code at all.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Collection(GeometryCollection),
	Unknown(UnknownGeometry),
}

impl Geometry {
	pub fn new_point<T: Convertible>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(&value))
	}
	pub fn new_line_string<T: Convertible>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(&value))
	}
	pub fn new_polygon<T: Convertible>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(&value))
	}
	pub fn new_multi_point<T: Convertible>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(&value))
	}
	pub fn new_multi_line_string<T: Convertible>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(&value))
	}
	pub fn new_multi_polygon<T: Convertible>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(&value))
	}
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::Collection(GeometryCollection::new(geometries))
	}
	pub fn new_unknown(type_name: &str) -> Self {
		Self::Unknown(UnknownGeometry::new(type_name))
	}

	/// Returns the name of the geometry's kind, including kinds without a type code.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Collection(_) => "GeometryCollection",
			Geometry::Unknown(g) => &g.type_name,
		}
	}
}

/// Runs `$body` with `$g` bound to the geometry inside whichever variant `$value` holds.
macro_rules! with_kind {
	($value:expr, $g:ident => $body:expr) => {
		match $value {
			Geometry::Point($g) => $body,
			Geometry::LineString($g) => $body,
			Geometry::Polygon($g) => $body,
			Geometry::MultiPoint($g) => $body,
			Geometry::MultiLineString($g) => $body,
			Geometry::MultiPolygon($g) => $body,
			Geometry::Collection($g) => $body,
			Geometry::Unknown($g) => $body,
		}
	};
}

impl GeometryTrait for Geometry {
	fn geometry_type(&self) -> Result<GeometryType> {
		with_kind!(self, g => g.geometry_type())
	}

	fn srid(&self) -> Option<u32> {
		with_kind!(self, g => g.srid())
	}

	fn set_srid(&mut self, srid: Option<u32>) {
		with_kind!(self, g => g.set_srid(srid));
	}
}

/// Numeric types accepted by the array constructors of [`Geometry`].
pub trait Convertible: Copy + Into<f64> {}
impl<T: Copy + Into<f64>> Convertible for T {}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::Collection(g) => g,
			Geometry::Unknown(g) => return f.debug_tuple(&g.type_name).finish(),
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_from_kind {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*}
}

impl_from_kind!(
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Collection(GeometryCollection),
	Unknown(UnknownGeometry)
);

impl From<::geo::Geometry> for Geometry {
	/// Converts a `geo` geometry. `GeometryCollection` maps to [`Geometry::Collection`]; kinds
	/// without a counterpart here (`Line`, `Rect`, `Triangle`) map to [`Geometry::Unknown`].
	fn from(value: ::geo::Geometry) -> Self {
		match value {
			::geo::Geometry::Point(g) => Geometry::Point(PointGeometry::from(g)),
			::geo::Geometry::LineString(g) => Geometry::LineString(g.into()),
			::geo::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
			::geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
			::geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
			::geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
			::geo::Geometry::GeometryCollection(g) => {
				Geometry::new_collection(g.0.into_iter().map(Geometry::from).collect())
			}
			::geo::Geometry::Line(_) => Geometry::new_unknown("Line"),
			::geo::Geometry::Rect(_) => Geometry::new_unknown("Rect"),
			::geo::Geometry::Triangle(_) => Geometry::new_unknown("Triangle"),
		}
	}
}
