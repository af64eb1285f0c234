/* src/config/mod.rs */

mod descriptor;
mod error;
#[cfg(any(feature = "json", feature = "toml"))]
mod format;
mod sitemap;

pub use descriptor::FormatterDescriptor;
pub use error::ConfigError;
#[cfg(any(feature = "json", feature = "toml"))]
pub use format::ConfigFormat;
pub use sitemap::{SitemapConfig, SitemapConfigBuilder};
