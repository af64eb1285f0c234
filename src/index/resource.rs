/* src/index/resource.rs */

/// A content resource type, reduced to the one thing the index needs: its name.
///
/// Implemented for `str` and `String` so a plain type name can be passed
/// directly; richer resource type objects implement this on their own.
pub trait ResourceType {
	/// The type name used as the filter key, e.g. `"article"`.
	fn type_name(&self) -> &str;
}

impl ResourceType for str {
	fn type_name(&self) -> &str {
		self
	}
}

impl ResourceType for String {
	fn type_name(&self) -> &str {
		self
	}
}

impl<T: ResourceType + ?Sized> ResourceType for &T {
	fn type_name(&self) -> &str {
		(**self).type_name()
	}
}
