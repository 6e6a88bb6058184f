use super::{EwkbConfig, EwkbError, EwkbMode, WriteCoordinates, write_header};
use crate::{Geometry, GeometryTrait};
use anyhow::Result;
use byteorder::LE;
use ewkb_core::{Blob, io::ValueWriter, io::ValueWriterBlob};
use log::{debug, trace};

/// Encodes geometries into WKB or EWKB.
///
/// The encoder holds no state besides its configuration, so a single instance can be shared
/// between threads.
#[derive(Clone, Debug, Default)]
pub struct EwkbEncoder {
	config: EwkbConfig,
}

impl EwkbEncoder {
	#[must_use]
	pub fn new(config: EwkbConfig) -> Self {
		Self { config }
	}

	#[must_use]
	pub fn config(&self) -> &EwkbConfig {
		&self.config
	}

	/// Encodes a geometry into a new [`Blob`].
	///
	/// On failure no bytes are returned; the error can be downcast to [`EwkbError`].
	pub fn encode(&self, geometry: &Geometry) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();
		self.write(&mut writer, geometry).inspect_err(|err| match err.downcast_ref::<EwkbError>() {
			Some(reason) => debug!("cannot encode {}: {reason}", geometry.type_name()),
			None => debug!("failed to encode {}: {err:#}", geometry.type_name()),
		})?;
		Ok(writer.into_blob())
	}

	/// Encodes a geometry and returns its bytes as uppercase hex, the textual form PostGIS uses.
	pub fn encode_hex(&self, geometry: &Geometry) -> Result<String> {
		Ok(self.encode(geometry)?.as_hex_upper())
	}

	/// Appends the encoding of a geometry to `writer`.
	///
	/// If this fails, `writer` may already hold a partial encoding.
	pub fn write(&self, writer: &mut dyn ValueWriter<LE>, geometry: &Geometry) -> Result<()> {
		self.write_element(writer, geometry, None)
	}

	/// Writes header and body of a geometry nested in a container written with `container_srid`.
	pub(crate) fn write_element<G: GeometryTrait + WriteCoordinates>(
		&self,
		writer: &mut dyn ValueWriter<LE>,
		geometry: &G,
		container_srid: Option<u32>,
	) -> Result<()> {
		let own_srid = geometry.srid();
		let srid = self.config.srid_policy.effective_srid(own_srid, container_srid);
		if srid != own_srid {
			debug!("element without SRID inherits SRID {srid:?} from its container");
		}

		let mode = EwkbMode::for_srid(srid);
		let geometry_type = geometry.geometry_type()?;
		trace!("write {geometry_type} header in {mode:?}");

		write_header(writer, geometry_type, mode)?;
		geometry.write_coordinates(writer, self, mode.srid())
	}
}

/// Encodes a geometry with the default settings.
///
/// ```rust
/// use ewkb_geometry::{Geometry, encode};
///
/// let line = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]);
/// assert_eq!(encode(&line).unwrap().len(), 41);
/// ```
pub fn encode(geometry: &Geometry) -> Result<Blob> {
	EwkbEncoder::default().encode(geometry)
}

/// Encodes a geometry with the default settings and returns uppercase hex.
pub fn encode_hex(geometry: &Geometry) -> Result<String> {
	EwkbEncoder::default().encode_hex(geometry)
}
