//! Routing settings
//!
//! Settings name the route files to import and how each import is
//! mounted. They are read from TOML, and two switches can be overridden
//! from the environment:
//!
//! ```toml
//! warm_up = true
//! allow_override = false
//!
//! [[resources]]
//! path = "routes/blog.toml"
//! prefix = "/blog"
//! name_prefix = "blog_"
//! methods = ["GET"]
//!
//! [resources.defaults]
//! _format = "html"
//! ```

use crate::error::{ConfError, ConfResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use waymark_routing::{Parameters, RouteCollection};

/// Top-level routing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingSettings {
	/// Route files, imported in order
	pub resources: Vec<RouteResource>,
	/// Compile every route when the router is built
	pub warm_up: bool,
	/// Let a later resource replace a route name an earlier one defined
	pub allow_override: bool,
}

impl Default for RoutingSettings {
	fn default() -> Self {
		Self {
			resources: Vec::new(),
			warm_up: true,
			allow_override: false,
		}
	}
}

impl RoutingSettings {
	/// Parse settings from TOML text
	///
	/// # Examples
	///
	/// ```
	/// use waymark_conf::RoutingSettings;
	///
	/// let settings = RoutingSettings::from_toml_str(r#"
	/// allow_override = true
	///
	/// [[resources]]
	/// path = "routes.toml"
	/// prefix = "/api"
	/// "#).unwrap();
	///
	/// assert!(settings.warm_up);
	/// assert!(settings.allow_override);
	/// assert_eq!(settings.resources[0].prefix.as_deref(), Some("/api"));
	/// ```
	pub fn from_toml_str(text: &str) -> ConfResult<Self> {
		toml::from_str(text).map_err(|source| ConfError::Toml {
			origin: "<string>".to_string(),
			source,
		})
	}

	/// Read settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> ConfResult<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| ConfError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		toml::from_str(&text).map_err(|source| ConfError::Toml {
			origin: path.display().to_string(),
			source,
		})
	}

	/// Override the switches from `{prefix}WARM_UP` and `{prefix}ALLOW_OVERRIDE`
	///
	/// Unset variables leave the current value alone.
	///
	/// # Errors
	///
	/// [`ConfError::InvalidEnvValue`] if a set variable is not a boolean.
	pub fn apply_env(&mut self, prefix: &str) -> ConfResult<()> {
		self.apply_vars(prefix, |key| std::env::var(key).ok())
	}

	/// Same as [`apply_env`](Self::apply_env) with a custom variable lookup
	pub fn apply_vars<F>(&mut self, prefix: &str, lookup: F) -> ConfResult<()>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(value) = read_bool(&lookup, &format!("{}WARM_UP", prefix))? {
			self.warm_up = value;
		}
		if let Some(value) = read_bool(&lookup, &format!("{}ALLOW_OVERRIDE", prefix))? {
			self.allow_override = value;
		}
		Ok(())
	}
}

/// One imported route file and how it is mounted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteResource {
	/// Route file, relative to the builder's base directory
	pub path: PathBuf,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prefix: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_prefix: Option<String>,
	/// Replaces the methods of every imported route when non-empty
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub methods: Vec<String>,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub defaults: Parameters,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub requirements: IndexMap<String, String>,
}

impl RouteResource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			prefix: None,
			name_prefix: None,
			methods: Vec::new(),
			defaults: Parameters::new(),
			requirements: IndexMap::new(),
		}
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.name_prefix = Some(prefix.into());
		self
	}

	/// Mount an imported collection: prefixes first, then the
	/// collection-wide defaults, requirements and methods
	pub fn apply_to(&self, routes: &mut RouteCollection) {
		if let Some(prefix) = &self.prefix {
			routes.add_prefix(prefix);
		}
		if let Some(prefix) = &self.name_prefix {
			routes.add_name_prefix(prefix);
		}
		routes.add_defaults(&self.defaults);
		routes.add_requirements(&self.requirements);
		if !self.methods.is_empty() {
			routes.set_methods(self.methods.as_slice());
		}
	}
}

fn read_bool<F>(lookup: &F, key: &str) -> ConfResult<Option<bool>>
where
	F: Fn(&str) -> Option<String>,
{
	let Some(value) = lookup(key) else {
		return Ok(None);
	};
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(Some(true)),
		"false" | "0" | "no" | "off" => Ok(Some(false)),
		_ => Err(ConfError::InvalidEnvValue {
			key: key.to_string(),
			value_len: value.len(),
		}),
	}
}
