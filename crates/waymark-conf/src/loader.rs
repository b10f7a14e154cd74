//! Route files
//!
//! A route file is a map from route name to
//! `{ path, methods?, defaults?, requirements? }`, in TOML, JSON or YAML.
//! File order is route order, and route order is match priority.
//!
//! ```toml
//! [blog]
//! path = "/blog/{page}"
//! defaults = { page = 1, _controller = "blog::index" }
//! requirements = { page = '\d+' }
//!
//! [user_create]
//! path = "/api/users"
//! methods = ["POST"]
//! ```

use crate::error::{ConfError, ConfResult};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use waymark_routing::{RouteCollection, RouteDefinition};

type Definitions = IndexMap<String, RouteDefinition>;

/// Serialization format of a route file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFileFormat {
	Toml,
	Json,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl RouteFileFormat {
	/// Pick the format from a file extension (case-insensitive)
	///
	/// # Examples
	///
	/// ```
	/// use waymark_conf::RouteFileFormat;
	///
	/// assert_eq!(RouteFileFormat::from_path("routes.toml").unwrap(), RouteFileFormat::Toml);
	/// assert_eq!(RouteFileFormat::from_path("api/ROUTES.JSON").unwrap(), RouteFileFormat::Json);
	/// assert!(RouteFileFormat::from_path("routes.ini").is_err());
	/// ```
	pub fn from_path(path: impl AsRef<Path>) -> ConfResult<Self> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase);

		match extension.as_deref() {
			Some("toml") => Ok(Self::Toml),
			Some("json") => Ok(Self::Json),
			#[cfg(feature = "yaml")]
			Some("yaml" | "yml") => Ok(Self::Yaml),
			_ => Err(ConfError::UnsupportedExtension(path.to_path_buf())),
		}
	}

	pub fn extension(&self) -> &'static str {
		match self {
			Self::Toml => "toml",
			Self::Json => "json",
			#[cfg(feature = "yaml")]
			Self::Yaml => "yaml",
		}
	}

	fn parse(self, text: &str, origin: &str) -> ConfResult<Definitions> {
		match self {
			Self::Toml => toml::from_str(text).map_err(|source| ConfError::Toml {
				origin: origin.to_string(),
				source,
			}),
			Self::Json => serde_json::from_str(text).map_err(|source| ConfError::Json {
				origin: origin.to_string(),
				source,
			}),
			#[cfg(feature = "yaml")]
			Self::Yaml => {
				// An empty YAML document is null, not an empty map
				if text.trim().is_empty() {
					return Ok(Definitions::new());
				}
				serde_yaml::from_str(text).map_err(|source| ConfError::Yaml {
					origin: origin.to_string(),
					source,
				})
			}
		}
	}
}

/// Reads route files into [`RouteCollection`]s
///
/// Relative paths resolve against the loader's base directory.
#[derive(Debug, Clone)]
pub struct RouteFileLoader {
	base_dir: PathBuf,
}

impl RouteFileLoader {
	pub fn new(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_dir: base_dir.into(),
		}
	}

	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}

	/// Resolve `path` against the base directory
	pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
		let path = path.as_ref();
		if path.is_absolute() {
			path.to_path_buf()
		} else {
			self.base_dir.join(path)
		}
	}

	/// Load a route file, picking the format from its extension
	///
	/// # Errors
	///
	/// [`ConfError::UnsupportedExtension`] before touching the file system,
	/// then IO and parse errors naming the file.
	pub fn load_file(&self, path: impl AsRef<Path>) -> ConfResult<RouteCollection> {
		let path = self.resolve(path);
		let format = RouteFileFormat::from_path(&path)?;
		let text = fs::read_to_string(&path).map_err(|source| ConfError::Io {
			path: path.clone(),
			source,
		})?;

		let routes = self.parse(format, &text, &path.display().to_string())?;
		tracing::debug!(file = %path.display(), routes = routes.len(), "loaded route file");
		Ok(routes)
	}

	/// Load routes from text in the given format
	///
	/// # Examples
	///
	/// ```
	/// use waymark_conf::{RouteFileFormat, RouteFileLoader};
	///
	/// let loader = RouteFileLoader::new(".");
	/// let routes = loader
	///     .load_str(RouteFileFormat::Json, r#"{"home": {"path": "/"}, "about": {"path": "/about"}}"#)
	///     .unwrap();
	/// assert_eq!(routes.names().collect::<Vec<_>>(), ["home", "about"]);
	/// ```
	pub fn load_str(&self, format: RouteFileFormat, text: &str) -> ConfResult<RouteCollection> {
		self.parse(format, text, "<string>")
	}

	fn parse(&self, format: RouteFileFormat, text: &str, origin: &str) -> ConfResult<RouteCollection> {
		let definitions = format.parse(text, origin)?;
		Ok(RouteCollection::from_definitions(definitions))
	}
}

impl Default for RouteFileLoader {
	fn default() -> Self {
		Self::new(".")
	}
}

/// Render a collection as a route file
///
/// Loading the output again yields the same routes in the same order.
///
/// # Examples
///
/// ```
/// use waymark_conf::{RouteFileFormat, export_routes};
/// use waymark_routing::{Route, RouteCollection};
///
/// let mut routes = RouteCollection::new();
/// routes.add("home", Route::new("/").with_methods(["GET"])).unwrap();
///
/// let json = export_routes(&routes, RouteFileFormat::Json).unwrap();
/// assert!(json.contains(r#""path": "/""#));
/// ```
pub fn export_routes(routes: &RouteCollection, format: RouteFileFormat) -> ConfResult<String> {
	let definitions = routes.to_definitions();
	match format {
		RouteFileFormat::Toml => Ok(toml::to_string(&definitions)?),
		RouteFileFormat::Json => {
			serde_json::to_string_pretty(&definitions).map_err(|source| ConfError::Json {
				origin: "export".to_string(),
				source,
			})
		}
		#[cfg(feature = "yaml")]
		RouteFileFormat::Yaml => serde_yaml::to_string(&definitions).map_err(|source| {
			ConfError::Yaml {
				origin: "export".to_string(),
				source,
			}
		}),
	}
}
