/* src/index/info.rs */

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::{FormatterDescriptor, SitemapConfig};

/// Presentation wrapper around one matched formatter.
///
/// Closes over the context and config snapshot the view was built with, so
/// downstream rendering code has everything it needs without further
/// lookups.
#[derive(Debug, Clone)]
pub struct FormatterInfo<C> {
	context: C,
	config: Arc<SitemapConfig>,
	formatter: Arc<FormatterDescriptor>,
}

impl<C> FormatterInfo<C> {
	/// Wraps a descriptor together with the context and snapshot it was
	/// resolved against.
	pub fn new(context: C, config: Arc<SitemapConfig>, formatter: Arc<FormatterDescriptor>) -> Self {
		Self {
			context,
			config,
			formatter,
		}
	}

	/// The formatter's configuration key.
	pub fn key(&self) -> &str {
		self.formatter.key()
	}

	/// The display name, falling back to the key when none is configured.
	pub fn nice_name(&self) -> &str {
		self.formatter.nice_name().unwrap_or_else(|| self.formatter.key())
	}

	/// The resource type names the formatter applies to.
	pub fn resource_types(&self) -> &BTreeSet<String> {
		self.formatter.resource_type_names()
	}

	/// The container types the formatter renders into.
	pub fn container_types(&self) -> &BTreeSet<String> {
		self.formatter.container_types()
	}

	/// The context the view was built with.
	pub fn context(&self) -> &C {
		&self.context
	}

	/// The config snapshot the formatter was resolved against.
	pub fn config(&self) -> &SitemapConfig {
		&self.config
	}

	/// The underlying descriptor.
	pub fn descriptor(&self) -> &Arc<FormatterDescriptor> {
		&self.formatter
	}
}
