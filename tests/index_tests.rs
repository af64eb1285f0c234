/* tests/index_tests.rs */

use std::collections::BTreeSet;
use std::sync::Arc;

use sitefmt::{
	FormatterDescriptor, FormatterIndexBuilder, ResourceType, ResourceTypeFormatterView,
	SitemapConfig,
};

fn article_page_config() -> Arc<SitemapConfig> {
	Arc::new(
		SitemapConfig::builder()
			.formatter(
				FormatterDescriptor::new("d1")
					.with_resource_types(["article"])
					.with_container_types(["list", "detail"]),
			)
			.formatter(
				FormatterDescriptor::new("d2")
					.with_resource_types(["article", "page"])
					.with_container_types(["list"]),
			)
			.formatter(
				FormatterDescriptor::new("d3")
					.with_resource_types(["page"])
					.with_container_types(["detail"]),
			)
			.build()
			.unwrap(),
	)
}

fn keys<C: Clone>(view: &ResourceTypeFormatterView<C>) -> Vec<String> {
	view.active_formatters()
		.iter()
		.map(|f| f.key().to_string())
		.collect()
}

#[test]
fn test_filter_by_resource_type() {
	let view = ResourceTypeFormatterView::new((), article_page_config(), "article");

	assert_eq!(view.name(), "article");
	assert_eq!(keys(&view), ["d1", "d2"]);
}

#[test]
fn test_container_buckets() {
	let view = ResourceTypeFormatterView::new((), article_page_config(), "article");

	let list: Vec<_> = view
		.formatter_info_for_container("list")
		.iter()
		.map(|i| i.key().to_string())
		.collect();
	assert_eq!(list, ["d1", "d2"]);

	let detail: Vec<_> = view
		.formatter_info_for_container("detail")
		.iter()
		.map(|i| i.key().to_string())
		.collect();
	assert_eq!(detail, ["d1"]);

	let containers: BTreeSet<_> = view.container_types().collect();
	assert_eq!(containers, BTreeSet::from(["detail", "list"]));
}

#[test]
fn test_no_match_is_empty_not_error() {
	let view = ResourceTypeFormatterView::new((), article_page_config(), "image");

	assert_eq!(view.name(), "image");
	assert!(view.active_formatters().is_empty());
	assert!(view.formatter_info().is_empty());
	assert_eq!(view.container_types().count(), 0);
	assert!(view.formatter_info_for_container("list").is_empty());
}

#[test]
fn test_empty_config() {
	let config = Arc::new(SitemapConfig::builder().build().unwrap());
	let view = ResourceTypeFormatterView::new((), config, "article");

	assert!(view.formatter_info().is_empty());
	assert_eq!(view.container_types().count(), 0);
	assert!(view.formatter_info_for_container("anything").is_empty());
}

#[test]
fn test_descriptor_without_containers_stays_out_of_buckets() {
	let config = Arc::new(
		SitemapConfig::builder()
			.formatter(FormatterDescriptor::new("bare").with_resource_types(["article"]))
			.build()
			.unwrap(),
	);
	let view = ResourceTypeFormatterView::new((), config, "article");

	assert_eq!(keys(&view), ["bare"]);
	assert_eq!(view.container_types().count(), 0);
}

#[test]
fn test_unknown_container_type_queried() {
	let view = ResourceTypeFormatterView::new((), article_page_config(), "article");
	assert!(view.formatter_info_for_container("sidebar").is_empty());
}

#[test]
fn test_builder_reuse_across_types() {
	let builder = FormatterIndexBuilder::new((), article_page_config());

	let article = builder.build("article");
	let page = builder.build("page");

	assert_eq!(keys(&article), ["d1", "d2"]);
	assert_eq!(keys(&page), ["d2", "d3"]);
}

#[test]
fn test_rebuild_is_deterministic() {
	let builder = FormatterIndexBuilder::new((), article_page_config());

	let first = builder.build("article");
	let second = builder.build("article");

	assert_eq!(keys(&first), keys(&second));
	let a: Vec<_> = first.container_types().collect();
	let b: Vec<_> = second.container_types().collect();
	assert_eq!(a, b);
}

#[test]
fn test_fan_out_matches_descriptor_containers() {
	let view = ResourceTypeFormatterView::new((), article_page_config(), "article");

	for formatter in view.active_formatters() {
		for container in formatter.container_types() {
			let bucket = view.formatter_info_for_container(container);
			assert!(
				bucket.iter().any(|i| i.key() == formatter.key()),
				"{} missing from bucket {}",
				formatter.key(),
				container
			);
		}
	}
}

#[test]
fn test_info_closes_over_context_and_config() {
	let context = Arc::new("request-42".to_string());
	let config = article_page_config();
	let view = ResourceTypeFormatterView::new(Arc::clone(&context), Arc::clone(&config), "article");

	let infos = view.formatter_info();
	assert_eq!(infos.len(), 2);
	for info in &infos {
		assert_eq!(info.context().as_str(), "request-42");
		assert_eq!(info.config().len(), config.len());
	}
}

#[test]
fn test_nice_name_falls_back_to_key() {
	let config = Arc::new(
		SitemapConfig::builder()
			.formatter(
				FormatterDescriptor::new("teaser")
					.with_nice_name("Article Teaser")
					.with_resource_types(["article"]),
			)
			.formatter(FormatterDescriptor::new("plain").with_resource_types(["article"]))
			.build()
			.unwrap(),
	);
	let view = ResourceTypeFormatterView::new((), config, "article");

	let infos = view.formatter_info();
	assert_eq!(infos[0].nice_name(), "Article Teaser");
	assert_eq!(infos[1].nice_name(), "plain");
}

#[test]
fn test_map_formatters_custom_adaptation() {
	let view = ResourceTypeFormatterView::new(7u32, article_page_config(), "article");

	let labels = view.map_formatters(|ctx, config, formatter| {
		format!("{}/{}/{}", ctx, config.len(), formatter.key())
	});
	assert_eq!(labels, ["7/3/d1", "7/3/d2"]);
}

#[test]
fn test_resource_type_trait_impls() {
	struct ArticleType;
	impl ResourceType for ArticleType {
		fn type_name(&self) -> &str {
			"article"
		}
	}

	let builder = FormatterIndexBuilder::new((), article_page_config());
	assert_eq!(keys(&builder.build(ArticleType)), ["d1", "d2"]);
	assert_eq!(keys(&builder.build(String::from("article"))), ["d1", "d2"]);
}

#[test]
fn test_empty_type_name_matches_only_explicit_registration() {
	let config = Arc::new(
		SitemapConfig::builder()
			.formatter(
				FormatterDescriptor::new("odd")
					.with_resource_types([""])
					.with_container_types(["list"]),
			)
			.formatter(
				FormatterDescriptor::new("normal")
					.with_resource_types(["article"])
					.with_container_types(["list"]),
			)
			.build()
			.unwrap(),
	);
	let view = ResourceTypeFormatterView::new((), config, "");

	assert_eq!(keys(&view), ["odd"]);
}
