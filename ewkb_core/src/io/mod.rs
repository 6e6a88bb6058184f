//! This module re-exports the value writer trait and its in-memory implementation.
//!
//! # Overview
//!
//! Writers pack integers and floating-point numbers with a fixed byte order. The in-memory
//! writer collects everything into a [`Blob`](crate::Blob) that is only handed out once
//! writing is finished.
//!
//! # Examples
//!
//! ```rust
//! use ewkb_core::io::*;
//!
//! let mut writer = ValueWriterBlob::new_le();
//! writer.write_u8(1).unwrap();
//! assert_eq!(writer.into_blob().into_vec(), vec![1]);
//! ```

mod value_writer;
mod value_writer_blob;

pub use value_writer::*;
pub use value_writer_blob::*;
