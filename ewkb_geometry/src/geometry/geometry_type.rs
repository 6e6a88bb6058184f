use crate::EwkbError;
use std::{fmt::Display, str::FromStr};

/// The type tag of a geometry and its (E)WKB type code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum GeometryType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPoint = 4,
	MultiLineString = 5,
	MultiPolygon = 6,
	Collection = 7,
}

impl GeometryType {
	/// Every mapped type tag, ordered by type code.
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPoint,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
		GeometryType::Collection,
	];

	/// Returns the 32-bit type code written into the (E)WKB header.
	#[must_use]
	pub fn code(self) -> u32 {
		self as u32
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::Collection => "GeometryCollection",
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl TryFrom<u32> for GeometryType {
	type Error = EwkbError;

	fn try_from(code: u32) -> Result<Self, Self::Error> {
		GeometryType::ALL
			.into_iter()
			.find(|t| t.code() == code)
			.ok_or_else(|| EwkbError::UnsupportedSpatialType {
				type_name: format!("type code {code}"),
			})
	}
}

impl FromStr for GeometryType {
	type Err = EwkbError;

	/// Parses a type name case-insensitively. `Collection` is accepted as an alias of
	/// `GeometryCollection`.
	fn from_str(name: &str) -> Result<Self, Self::Err> {
		if name.eq_ignore_ascii_case("Collection") {
			return Ok(GeometryType::Collection);
		}
		GeometryType::ALL
			.into_iter()
			.find(|t| t.name().eq_ignore_ascii_case(name))
			.ok_or_else(|| EwkbError::UnsupportedSpatialType {
				type_name: name.to_string(),
			})
	}
}
