/* src/index/builder.rs */

use std::sync::Arc;

use indexmap::IndexMap;

use super::view::ResourceTypeFormatterView;
use super::ResourceType;
use crate::config::{FormatterDescriptor, SitemapConfig};

/// Resolves the formatters applicable to a resource type and indexes them
/// by container type.
///
/// The builder pairs an opaque context with a config snapshot and can
/// produce views for any number of resource types against that snapshot.
/// The context is not inspected here; it is carried into the view and
/// handed to each [`FormatterInfo`] wrapper.
///
/// The snapshot must be stable for the duration of `build`. Since
/// [`SitemapConfig`] is immutable after construction this holds by
/// default; callers assembling a snapshot concurrently must finish before
/// building views from it.
///
/// [`FormatterInfo`]: super::FormatterInfo
#[derive(Debug, Clone)]
pub struct FormatterIndexBuilder<C> {
	context: C,
	config: Arc<SitemapConfig>,
}

impl<C: Clone> FormatterIndexBuilder<C> {
	/// Creates a builder over the given context and config snapshot.
	pub fn new(context: C, config: Arc<SitemapConfig>) -> Self {
		Self { context, config }
	}

	/// Builds the formatter view for one resource type.
	///
	/// Iterates the snapshot's active formatters in order, keeps those
	/// whose resource type names contain the target type, and records one
	/// bucket entry per container type of each kept formatter. No match is
	/// not an error; the result is simply an empty view.
	pub fn build<R: ResourceType>(&self, ty: R) -> ResourceTypeFormatterView<C> {
		let type_name = ty.type_name().to_string();
		let mut active: Vec<Arc<FormatterDescriptor>> = Vec::new();
		let mut by_container: IndexMap<String, Vec<Arc<FormatterDescriptor>>> = IndexMap::new();

		for formatter in self.config.active_formatters() {
			if !formatter.matches_type(&type_name) {
				continue;
			}
			active.push(Arc::clone(formatter));
			for container_type in formatter.container_types() {
				by_container
					.entry(container_type.clone())
					.or_default()
					.push(Arc::clone(formatter));
			}
		}

		tracing::debug!(
			"resolved {} active formatters for type {}",
			active.len(),
			type_name
		);

		ResourceTypeFormatterView {
			context: self.context.clone(),
			config: Arc::clone(&self.config),
			type_name,
			active,
			by_container,
		}
	}
}
