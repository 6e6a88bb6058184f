use thiserror::Error;

/// The failures an encoding call can end with.
///
/// Encoding functions return `anyhow::Result`; use `error.downcast_ref::<EwkbError>()` to find
/// out which of these aborted the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EwkbError {
	/// The geometry's type tag has no type code (header stage).
	#[error("unsupported spatial type: {type_name}")]
	UnsupportedSpatialType { type_name: String },
	/// The geometry's kind has no coordinate encoding (coordinate stage). Raised for collections
	/// and for kinds without a type code.
	#[error("unsupported spatial interface: {type_name} has no coordinate encoding")]
	UnsupportedSpatialInterface { type_name: String },
}
