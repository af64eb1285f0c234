/* src/config/error.rs */

/// Errors raised while assembling or decoding a sitemap configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The input could not be parsed in the requested format.
	#[error("parse error: {0}")]
	Parse(String),

	/// The same formatter key was configured more than once.
	#[error("duplicate formatter key: {key}")]
	DuplicateFormatter { key: String },

	/// No decoder is available for the given file extension.
	#[error("unsupported config format: {0}")]
	UnsupportedFormat(String),

	/// IO error while reading a configuration file.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
