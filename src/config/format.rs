/* src/config/format.rs */

use serde::de::DeserializeOwned;

use super::ConfigError;

/// Decoding format for a serialized sitemap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
}

impl ConfigFormat {
	/// File extensions associated with this format.
	pub fn extensions(&self) -> &'static [&'static str] {
		match self {
			#[cfg(feature = "json")]
			Self::Json => &["json"],
			#[cfg(feature = "toml")]
			Self::Toml => &["toml"],
		}
	}

	/// Resolves a format from a file extension, if a decoder is enabled for it.
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext {
			#[cfg(feature = "json")]
			"json" => Some(Self::Json),
			#[cfg(feature = "toml")]
			"toml" => Some(Self::Toml),
			_ => None,
		}
	}

	pub(crate) fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, ConfigError> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => {
				serde_json::from_slice(input).map_err(|e| ConfigError::Parse(e.to_string()))
			}
			#[cfg(feature = "toml")]
			Self::Toml => {
				let text = std::str::from_utf8(input)
					.map_err(|e| ConfigError::Parse(e.to_string()))?;
				toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
			}
		}
	}
}
