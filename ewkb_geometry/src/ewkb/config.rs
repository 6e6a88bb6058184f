/// How the elements of a Multi- geometry obtain the SRID written into their own header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SridPolicy {
	/// Every element is written with its own SRID only. A container's SRID is not propagated.
	#[default]
	PerGeometry,
	/// An element without SRID (absent or zero) is written with the SRID of the nearest
	/// enclosing container. Elements with their own SRID keep it.
	InheritFromContainer,
}

impl SridPolicy {
	/// Returns the SRID to encode for an element whose own SRID is `own` inside a container
	/// encoded with `container`.
	#[must_use]
	pub fn effective_srid(self, own: Option<u32>, container: Option<u32>) -> Option<u32> {
		match self {
			SridPolicy::PerGeometry => own,
			SridPolicy::InheritFromContainer => own.or(container),
		}
	}
}

/// Settings of an [`EwkbEncoder`](super::EwkbEncoder).
#[derive(Clone, Debug, Default)]
pub struct EwkbConfig {
	pub srid_policy: SridPolicy,
}

impl EwkbConfig {
	#[must_use]
	pub fn with_srid_policy(mut self, srid_policy: SridPolicy) -> Self {
		self.srid_policy = srid_policy;
		self
	}
}
