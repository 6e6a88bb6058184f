use crate::GeometryType;
use anyhow::{Context, Result};
use byteorder::LE;
use ewkb_core::io::ValueWriter;

/// Byte-order mark for little-endian (NDR) payloads. The only order this encoder emits.
pub const BYTE_ORDER_LITTLE_ENDIAN: u8 = 0x01;

/// Bit 29 of the EWKB type field, set when an SRID follows the type code.
pub const DIMENSION_FLAG: u32 = 0x2000_0000;

/// Whether a geometry is written as plain OGC WKB or as EWKB with an SRID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EwkbMode {
	/// Byte-order mark, plain type code, body.
	Wkb,
	/// Byte-order mark, flagged type code, SRID, body.
	Ewkb { srid: u32 },
}

impl EwkbMode {
	/// Picks the mode for an SRID: absent or zero selects WKB.
	#[must_use]
	pub fn for_srid(srid: Option<u32>) -> Self {
		match srid {
			None | Some(0) => EwkbMode::Wkb,
			Some(srid) => EwkbMode::Ewkb { srid },
		}
	}

	/// Returns the SRID written in this mode.
	#[must_use]
	pub fn srid(self) -> Option<u32> {
		match self {
			EwkbMode::Wkb => None,
			EwkbMode::Ewkb { srid } => Some(srid),
		}
	}

	/// Returns the number of header bytes written in this mode, byte-order mark included.
	#[must_use]
	pub fn header_len(self) -> usize {
		match self {
			EwkbMode::Wkb => 5,
			EwkbMode::Ewkb { .. } => 9,
		}
	}
}

pub fn write_byte_order_mark(writer: &mut dyn ValueWriter<LE>) -> Result<()> {
	writer
		.write_u8(BYTE_ORDER_LITTLE_ENDIAN)
		.context("Failed to write byte-order mark")
}

pub fn write_type(writer: &mut dyn ValueWriter<LE>, geometry_type: GeometryType) -> Result<()> {
	writer
		.write_u32(geometry_type.code())
		.with_context(|| format!("Failed to write type code of {geometry_type}"))
}

/// Writes the type code with the [`DIMENSION_FLAG`] set. Z and M flags are never set.
pub fn write_type_and_dimension_flag(writer: &mut dyn ValueWriter<LE>, geometry_type: GeometryType) -> Result<()> {
	writer
		.write_u32(geometry_type.code() | DIMENSION_FLAG)
		.with_context(|| format!("Failed to write flagged type code of {geometry_type}"))
}

pub fn write_srid(writer: &mut dyn ValueWriter<LE>, srid: u32) -> Result<()> {
	writer.write_u32(srid).context("Failed to write SRID")
}

/// Writes byte-order mark, type code and, in EWKB mode, the SRID.
pub fn write_header(writer: &mut dyn ValueWriter<LE>, geometry_type: GeometryType, mode: EwkbMode) -> Result<()> {
	write_byte_order_mark(writer)?;
	match mode {
		EwkbMode::Wkb => write_type(writer, geometry_type),
		EwkbMode::Ewkb { srid } => {
			write_type_and_dimension_flag(writer, geometry_type)?;
			write_srid(writer, srid)
		}
	}
}
