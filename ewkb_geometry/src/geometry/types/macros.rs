/// Implements `From` conversions from vectors, slices and arrays for a composite geometry whose
/// elements are stored in `$field`. Converted geometries carry no SRID.
#[macro_export]
macro_rules! impl_from_array {
	($($t:ty, $field:ident, $i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self {
					$field: value.into_iter().map(<$i>::from).collect(),
					srid: None,
				}
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self {
					$field: value.iter().map(<$i>::from).collect(),
					srid: None,
				}
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self {
					$field: value.iter().map(<$i>::from).collect(),
					srid: None,
				}
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self {
					$field: value.iter().map(|v| <$i>::from(v)).collect(),
					srid: None,
				}
			}
		}
	)*}
}

/// Implements `GeometryTrait` for a geometry kind with a fixed type tag and an `srid` field.
#[macro_export]
macro_rules! impl_geometry_trait {
	($($t:ty => $kind:ident),*) => {$(
		impl $crate::GeometryTrait for $t {
			fn geometry_type(&self) -> anyhow::Result<$crate::GeometryType> {
				Ok($crate::GeometryType::$kind)
			}

			fn srid(&self) -> Option<u32> {
				$crate::normalize_srid(self.srid)
			}

			fn set_srid(&mut self, srid: Option<u32>) {
				self.srid = srid;
			}
		}
	)*}
}

/// Implements `CompositeGeometryTrait` for a geometry kind whose elements live in `$field`.
#[macro_export]
macro_rules! impl_composite {
	($($t:ty, $field:ident, $i:ty),*) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn new() -> Self {
				Self {
					$field: Vec::new(),
					srid: None,
				}
			}
			fn as_vec(&self) -> &Vec<$i> {
				&self.$field
			}
			fn as_mut_vec(&mut self) -> &mut Vec<$i> {
				&mut self.$field
			}
			fn into_inner(self) -> Vec<$i> {
				self.$field
			}
		}
	)*}
}
