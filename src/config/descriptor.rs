/* src/config/descriptor.rs */

use std::collections::BTreeSet;

/// A single formatter entry of a sitemap configuration.
///
/// A formatter is a named rendering strategy: it applies to one or more
/// resource types and can render into one or more container types. The
/// descriptor is immutable once handed to a [`SitemapConfig`]; the index
/// layer only ever reads it.
///
/// [`SitemapConfig`]: super::SitemapConfig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterDescriptor {
	key: String,
	nice_name: Option<String>,
	resource_type_names: BTreeSet<String>,
	container_types: BTreeSet<String>,
}

impl FormatterDescriptor {
	/// Creates a descriptor with the given key and no applicability.
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			nice_name: None,
			resource_type_names: BTreeSet::new(),
			container_types: BTreeSet::new(),
		}
	}

	/// Sets the display name used by presentation wrappers.
	pub fn with_nice_name(mut self, name: impl Into<String>) -> Self {
		self.nice_name = Some(name.into());
		self
	}

	/// Sets the resource type names this formatter applies to.
	pub fn with_resource_types<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.resource_type_names = names.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the container types this formatter can render into.
	pub fn with_container_types<I, S>(mut self, types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.container_types = types.into_iter().map(Into::into).collect();
		self
	}

	#[cfg(any(feature = "json", feature = "toml"))]
	pub(crate) fn from_parts(
		key: String,
		nice_name: Option<String>,
		resource_type_names: BTreeSet<String>,
		container_types: BTreeSet<String>,
	) -> Self {
		Self {
			key,
			nice_name,
			resource_type_names,
			container_types,
		}
	}

	/// The configuration key identifying this formatter.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The display name, if one was configured.
	pub fn nice_name(&self) -> Option<&str> {
		self.nice_name.as_deref()
	}

	/// The resource type names this formatter applies to.
	pub fn resource_type_names(&self) -> &BTreeSet<String> {
		&self.resource_type_names
	}

	/// The container types this formatter can render into.
	pub fn container_types(&self) -> &BTreeSet<String> {
		&self.container_types
	}

	/// Returns true if this formatter applies to the given resource type.
	pub fn matches_type(&self, type_name: &str) -> bool {
		self.resource_type_names.contains(type_name)
	}
}
