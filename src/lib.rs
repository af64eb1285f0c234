/* src/lib.rs */

//!
//! This crate integrates two components:
//!
//! - **config**: Immutable sitemap configuration snapshots holding the
//!   active formatter descriptors.
//! - **index**: Per-resource-type formatter resolution and indexing by
//!   container type.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all decoding formats.
//! - `json`, `toml`: Config snapshot decoding formats.
//!
//! ## Basic Usage
//!
//! ```
//! use std::sync::Arc;
//! use sitefmt::{FormatterDescriptor, FormatterIndexBuilder, SitemapConfig};
//!
//! let config = Arc::new(
//! 	SitemapConfig::builder()
//! 		.formatter(
//! 			FormatterDescriptor::new("article-teaser")
//! 				.with_resource_types(["article"])
//! 				.with_container_types(["list", "detail"]),
//! 		)
//! 		.build()
//! 		.unwrap(),
//! );
//!
//! let builder = FormatterIndexBuilder::new((), config);
//! let view = builder.build("article");
//! assert_eq!(view.formatter_info_for_container("list").len(), 1);
//! ```

pub mod config;
pub mod index;

#[cfg(any(feature = "json", feature = "toml"))]
pub use config::ConfigFormat;
pub use config::{ConfigError, FormatterDescriptor, SitemapConfig, SitemapConfigBuilder};
pub use index::{FormatterIndexBuilder, FormatterInfo, ResourceType, ResourceTypeFormatterView};
