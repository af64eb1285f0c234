/* src/index/view.rs */

use std::sync::Arc;

use indexmap::IndexMap;

use super::{FormatterIndexBuilder, FormatterInfo, ResourceType};
use crate::config::{FormatterDescriptor, SitemapConfig};

/// The formatters applicable to one resource type, indexed by container type.
///
/// Constructed by [`FormatterIndexBuilder::build`]; immutable afterwards.
/// All query methods return fresh or borrowed read-only data, so a view can
/// be shared across threads for concurrent reads when the context type
/// allows it.
///
/// Ordering is deterministic: `active_formatters` preserves the snapshot's
/// iteration order, container types appear first-seen first, and each
/// container bucket preserves the snapshot order of its formatters.
#[derive(Debug, Clone)]
pub struct ResourceTypeFormatterView<C> {
	pub(crate) context: C,
	pub(crate) config: Arc<SitemapConfig>,
	pub(crate) type_name: String,
	pub(crate) active: Vec<Arc<FormatterDescriptor>>,
	pub(crate) by_container: IndexMap<String, Vec<Arc<FormatterDescriptor>>>,
}

impl<C: Clone> ResourceTypeFormatterView<C> {
	/// Builds the view for one resource type directly.
	///
	/// Shorthand for a single-use [`FormatterIndexBuilder`].
	pub fn new<R: ResourceType>(context: C, config: Arc<SitemapConfig>, ty: R) -> Self {
		FormatterIndexBuilder::new(context, config).build(ty)
	}

	/// The resource type name this view was built for.
	pub fn name(&self) -> &str {
		&self.type_name
	}

	/// The matched formatter descriptors, in snapshot order.
	pub fn active_formatters(&self) -> &[Arc<FormatterDescriptor>] {
		&self.active
	}

	/// The distinct container types any matched formatter renders into,
	/// first-seen order.
	pub fn container_types(&self) -> impl Iterator<Item = &str> {
		self.by_container.keys().map(String::as_str)
	}

	/// Presentation wrappers for all matched formatters, in snapshot order.
	pub fn formatter_info(&self) -> Vec<FormatterInfo<C>> {
		self.wrap(&self.active)
	}

	/// Presentation wrappers for the formatters of one container type.
	///
	/// A container type no matched formatter renders into yields an empty
	/// list, never an error.
	pub fn formatter_info_for_container(&self, container_type: &str) -> Vec<FormatterInfo<C>> {
		match self.by_container.get(container_type) {
			Some(bucket) => self.wrap(bucket),
			None => Vec::new(),
		}
	}

	/// Applies a caller-supplied adaptation to every matched formatter.
	///
	/// The standard [`FormatterInfo`] wrapping is one instance of this;
	/// callers needing a different presentation shape can supply their own
	/// `(context, config, descriptor)` transformation.
	pub fn map_formatters<T, F>(&self, f: F) -> Vec<T>
	where
		F: Fn(&C, &SitemapConfig, &Arc<FormatterDescriptor>) -> T,
	{
		self.active
			.iter()
			.map(|formatter| f(&self.context, &self.config, formatter))
			.collect()
	}

	fn wrap(&self, formatters: &[Arc<FormatterDescriptor>]) -> Vec<FormatterInfo<C>> {
		formatters
			.iter()
			.map(|formatter| {
				FormatterInfo::new(
					self.context.clone(),
					Arc::clone(&self.config),
					Arc::clone(formatter),
				)
			})
			.collect()
	}
}
