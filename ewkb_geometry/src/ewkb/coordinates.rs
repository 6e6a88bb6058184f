use super::{EwkbEncoder, EwkbError};
use crate::{
	Geometry, GeometryTrait, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry,
	PointGeometry, PolygonGeometry,
};
use anyhow::{Context, Result, bail};
use byteorder::LE;
use ewkb_core::io::ValueWriter;

/// Writes the body that follows a geometry's header.
///
/// `srid` is the SRID the geometry itself was written with. Multi- geometries hand it to their
/// elements, which the encoder's [`SridPolicy`](super::SridPolicy) may use for elements without
/// an SRID of their own.
pub trait WriteCoordinates {
	fn write_coordinates(&self, writer: &mut dyn ValueWriter<LE>, encoder: &EwkbEncoder, srid: Option<u32>)
	-> Result<()>;
}

/// Writes the body of `geometry` without any header, using the default encoder settings.
pub fn write_coordinates(writer: &mut dyn ValueWriter<LE>, geometry: &Geometry) -> Result<()> {
	geometry.write_coordinates(writer, &EwkbEncoder::default(), geometry.srid())
}

fn write_count(writer: &mut dyn ValueWriter<LE>, len: usize, what: &str) -> Result<()> {
	let count = u32::try_from(len).with_context(|| format!("{what} count {len} exceeds 32 bits"))?;
	writer.write_u32(count)
}

impl WriteCoordinates for PointGeometry {
	fn write_coordinates(&self, writer: &mut dyn ValueWriter<LE>, _: &EwkbEncoder, _: Option<u32>) -> Result<()> {
		writer.write_xy(self.x(), self.y())
	}
}

impl WriteCoordinates for LineStringGeometry {
	fn write_coordinates(&self, writer: &mut dyn ValueWriter<LE>, _: &EwkbEncoder, _: Option<u32>) -> Result<()> {
		write_count(writer, self.points.len(), "point")?;
		for point in &self.points {
			writer.write_xy(point.x(), point.y())?;
		}
		Ok(())
	}
}

impl WriteCoordinates for PolygonGeometry {
	fn write_coordinates(
		&self,
		writer: &mut dyn ValueWriter<LE>,
		encoder: &EwkbEncoder,
		srid: Option<u32>,
	) -> Result<()> {
		write_count(writer, self.rings.len(), "ring")?;
		for (i, ring) in self.rings.iter().enumerate() {
			ring
				.write_coordinates(writer, encoder, srid)
				.with_context(|| format!("Failed to write ring {i} of polygon"))?;
		}
		Ok(())
	}
}

macro_rules! impl_write_elements {
	($($t:ty, $field:ident, $what:literal),*) => {$(
		impl WriteCoordinates for $t {
			fn write_coordinates(
				&self,
				writer: &mut dyn ValueWriter<LE>,
				encoder: &EwkbEncoder,
				srid: Option<u32>,
			) -> Result<()> {
				write_count(writer, self.$field.len(), $what)?;
				for (i, element) in self.$field.iter().enumerate() {
					encoder
						.write_element(writer, element, srid)
						.with_context(|| format!("Failed to write {} {i} of {}", $what, stringify!($t)))?;
				}
				Ok(())
			}
		}
	)*}
}

impl_write_elements!(
	MultiPointGeometry,
	points,
	"point",
	MultiLineStringGeometry,
	line_strings,
	"line string",
	MultiPolygonGeometry,
	polygons,
	"polygon"
);

impl WriteCoordinates for Geometry {
	fn write_coordinates(
		&self,
		writer: &mut dyn ValueWriter<LE>,
		encoder: &EwkbEncoder,
		srid: Option<u32>,
	) -> Result<()> {
		match self {
			Geometry::Point(g) => g.write_coordinates(writer, encoder, srid),
			Geometry::LineString(g) => g.write_coordinates(writer, encoder, srid),
			Geometry::Polygon(g) => g.write_coordinates(writer, encoder, srid),
			Geometry::MultiPoint(g) => g.write_coordinates(writer, encoder, srid),
			Geometry::MultiLineString(g) => g.write_coordinates(writer, encoder, srid),
			Geometry::MultiPolygon(g) => g.write_coordinates(writer, encoder, srid),
			Geometry::Collection(_) | Geometry::Unknown(_) => bail!(EwkbError::UnsupportedSpatialInterface {
				type_name: self.type_name().to_string(),
			}),
		}
	}
}
