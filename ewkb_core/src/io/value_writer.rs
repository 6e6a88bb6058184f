//! This module defines the `ValueWriter` trait for packing fixed-width values into a byte destination.
//!
//! # Overview
//!
//! The `ValueWriter` trait provides an interface for writing bytes, 32-bit unsigned integers and
//! IEEE-754 doubles with a byte order chosen by the implementation. Coordinate pairs get their own
//! method because every 2D position in a binary geometry is exactly two doubles, x then y.
//!
//! # Examples
//!
//! ```rust
//! use ewkb_core::io::ValueWriter;
//! use anyhow::Result;
//! use byteorder::LittleEndian;
//! use std::io::Cursor;
//!
//! struct MockValueWriter {
//!     cursor: Cursor<Vec<u8>>,
//! }
//!
//! impl ValueWriter<LittleEndian> for MockValueWriter {
//!     fn get_writer(&mut self) -> &mut dyn std::io::Write {
//!         &mut self.cursor
//!     }
//!
//!     fn position(&mut self) -> Result<u64> {
//!         Ok(self.cursor.position())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut writer = MockValueWriter { cursor: Cursor::new(Vec::new()) };
//!     writer.write_u32(1)?;
//!     assert_eq!(writer.cursor.into_inner(), vec![1, 0, 0, 0]);
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// A trait for writing values to various destinations with support for different byte orders.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position as an offset from the start.
	///
	/// # Errors
	///
	/// Returns an error if the position cannot be determined.
	fn position(&mut self) -> Result<u64>;

	/// Returns `true` if nothing has been written yet.
	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an 8-bit unsigned integer to the writer.
	///
	/// # Errors
	///
	/// Returns an error if writing to the underlying writer fails.
	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	/// Writes a 32-bit unsigned integer using the specified byte order.
	///
	/// # Errors
	///
	/// Returns an error if writing to the underlying writer fails.
	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	/// Writes a 64-bit floating-point value using the specified byte order.
	///
	/// # Errors
	///
	/// Returns an error if writing to the underlying writer fails.
	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	/// Writes a coordinate pair as two doubles, `x` first.
	///
	/// # Errors
	///
	/// Returns an error if writing to the underlying writer fails.
	fn write_xy(&mut self, x: f64, y: f64) -> Result<()> {
		self.write_f64(x)?;
		self.write_f64(y)
	}

	/// Writes a slice of bytes to the writer.
	///
	/// # Errors
	///
	/// Returns an error if writing to the underlying writer fails.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}
}
