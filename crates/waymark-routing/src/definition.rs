//! Declarative route definitions
//!
//! The bulk form used by configuration files: a map from route name to
//! `{ path, defaults?, requirements?, methods? }`. Exporting a collection
//! produces the same shape.

use crate::route::Route;
use crate::value::{HANDLER_KEY, HandlerRef, ParamValue, Parameters};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One route in declarative form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDefinition {
	pub path: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub methods: Vec<String>,
	// Table-valued fields must follow plain values in TOML output
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub defaults: Parameters,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub requirements: IndexMap<String, String>,
}

impl RouteDefinition {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			methods: Vec::new(),
			defaults: Parameters::new(),
			requirements: IndexMap::new(),
		}
	}

	/// Build the [`Route`] this definition describes
	///
	/// A string stored under `_controller` is promoted to a handler
	/// reference.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{ParamValue, RouteDefinition};
	///
	/// let mut definition = RouteDefinition::new("/blog/{page}");
	/// definition.defaults.insert("_controller".into(), "blog::index".into());
	/// definition.methods.push("get".into());
	///
	/// let route = definition.into_route();
	/// assert_eq!(route.handler().unwrap().as_str(), "blog::index");
	/// assert_eq!(route.methods(), &["GET"]);
	/// ```
	pub fn into_route(self) -> Route {
		let mut defaults = self.defaults;
		if let Some(ParamValue::Str(handler)) = defaults.get(HANDLER_KEY) {
			let handler = HandlerRef::new(handler.clone());
			defaults.insert(HANDLER_KEY.to_string(), ParamValue::Handler(handler));
		}

		Route::new(self.path)
			.with_defaults(defaults)
			.with_requirements(self.requirements)
			.with_methods(self.methods)
	}
}

impl From<&Route> for RouteDefinition {
	fn from(route: &Route) -> Self {
		Self {
			path: route.path().to_string(),
			methods: route.methods().to_vec(),
			defaults: route.defaults().clone(),
			requirements: route.requirements().clone(),
		}
	}
}
