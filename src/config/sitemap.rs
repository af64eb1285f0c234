/* src/config/sitemap.rs */

use std::sync::Arc;

use indexmap::IndexMap;

#[cfg(any(feature = "json", feature = "toml"))]
use super::ConfigFormat;
use super::{ConfigError, FormatterDescriptor};

/// A fully resolved sitemap configuration snapshot.
///
/// The snapshot owns the active formatter descriptors in a stable order:
/// insertion order for programmatic construction, document order when
/// decoded from a file. That order is what the index layer reproduces, so
/// two snapshots with the same content in the same order yield identical
/// views.
///
/// Descriptors are stored behind `Arc` so views can share them without
/// copying; the snapshot itself exposes no mutation after construction.
#[derive(Debug, Clone, Default)]
pub struct SitemapConfig {
	formatters: IndexMap<String, Arc<FormatterDescriptor>>,
}

impl SitemapConfig {
	/// Starts building a snapshot programmatically.
	pub fn builder() -> SitemapConfigBuilder {
		SitemapConfigBuilder::default()
	}

	/// The active formatters, in snapshot order.
	pub fn active_formatters(&self) -> impl Iterator<Item = &Arc<FormatterDescriptor>> {
		self.formatters.values()
	}

	/// Looks up a formatter by its configuration key.
	pub fn formatter(&self, key: &str) -> Option<&Arc<FormatterDescriptor>> {
		self.formatters.get(key)
	}

	/// Number of active formatters.
	pub fn len(&self) -> usize {
		self.formatters.len()
	}

	/// Returns true if the snapshot holds no formatters.
	pub fn is_empty(&self) -> bool {
		self.formatters.is_empty()
	}

	/// Decodes a snapshot from raw bytes in the given format.
	#[cfg(any(feature = "json", feature = "toml"))]
	pub fn from_slice(input: &[u8], format: ConfigFormat) -> Result<Self, ConfigError> {
		let raw: raw::RawConfig = format.parse(input)?;
		Ok(raw.into_config())
	}

	/// Decodes a snapshot from a JSON document.
	#[cfg(feature = "json")]
	pub fn from_json(input: &str) -> Result<Self, ConfigError> {
		Self::from_slice(input.as_bytes(), ConfigFormat::Json)
	}

	/// Decodes a snapshot from a TOML document.
	#[cfg(feature = "toml")]
	pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
		Self::from_slice(input.as_bytes(), ConfigFormat::Toml)
	}

	/// Reads and decodes a snapshot, selecting the format by file extension.
	#[cfg(any(feature = "json", feature = "toml"))]
	pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let ext = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or_default();
		let format = ConfigFormat::from_extension(ext)
			.ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))?;
		let bytes = std::fs::read(path)?;
		Self::from_slice(&bytes, format)
	}
}

/// Builder for programmatic snapshot construction.
///
/// Formatter keys must be unique; `build` rejects duplicates instead of
/// silently replacing an earlier entry.
#[derive(Debug, Default)]
pub struct SitemapConfigBuilder {
	formatters: Vec<FormatterDescriptor>,
}

impl SitemapConfigBuilder {
	/// Appends a formatter descriptor to the snapshot.
	pub fn formatter(mut self, descriptor: FormatterDescriptor) -> Self {
		self.formatters.push(descriptor);
		self
	}

	/// Finalizes the snapshot.
	pub fn build(self) -> Result<SitemapConfig, ConfigError> {
		let mut formatters = IndexMap::with_capacity(self.formatters.len());
		for descriptor in self.formatters {
			let key = descriptor.key().to_string();
			if formatters.insert(key.clone(), Arc::new(descriptor)).is_some() {
				return Err(ConfigError::DuplicateFormatter { key });
			}
		}
		Ok(SitemapConfig { formatters })
	}
}

#[cfg(any(feature = "json", feature = "toml"))]
mod raw {
	use std::collections::BTreeSet;
	use std::sync::Arc;

	use indexmap::IndexMap;
	use serde::Deserialize;

	use super::super::FormatterDescriptor;
	use super::SitemapConfig;

	/// Serde-facing model; the descriptor key is the map key.
	#[derive(Deserialize)]
	pub(super) struct RawConfig {
		#[serde(default)]
		formatters: IndexMap<String, RawFormatter>,
	}

	#[derive(Deserialize)]
	struct RawFormatter {
		#[serde(default)]
		nice_name: Option<String>,
		#[serde(default)]
		resource_types: BTreeSet<String>,
		#[serde(default)]
		container_types: BTreeSet<String>,
	}

	impl RawConfig {
		pub(super) fn into_config(self) -> SitemapConfig {
			let formatters = self
				.formatters
				.into_iter()
				.map(|(key, raw)| {
					let descriptor = FormatterDescriptor::from_parts(
						key.clone(),
						raw.nice_name,
						raw.resource_types,
						raw.container_types,
					);
					(key, Arc::new(descriptor))
				})
				.collect();
			SitemapConfig { formatters }
		}
	}
}
