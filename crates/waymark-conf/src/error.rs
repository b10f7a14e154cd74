//! Error types for settings and route-file loading

use std::path::PathBuf;
use waymark_routing::RoutingError;

/// Errors raised while reading settings or route files
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	#[error("IO error reading {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error in {origin}: {source}")]
	Toml {
		origin: String,
		#[source]
		source: toml::de::Error,
	},

	#[error("TOML serialization error: {0}")]
	TomlSerialize(#[from] toml::ser::Error),

	#[error("JSON error in {origin}: {source}")]
	Json {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	#[cfg(feature = "yaml")]
	#[error("YAML error in {origin}: {source}")]
	Yaml {
		origin: String,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Unsupported route file extension: {}", .0.display())]
	UnsupportedExtension(PathBuf),

	#[error("Failed to parse environment variable '{key}' (value length: {value_len})")]
	InvalidEnvValue {
		key: String,
		/// Length of the original value, the raw value is not kept
		value_len: usize,
	},

	#[error(transparent)]
	Routing(#[from] RoutingError),
}

pub type ConfResult<T> = std::result::Result<T, ConfError>;
