//! Ordered route collection
//!
//! Routes are kept in insertion order under unique names. The order is
//! load-bearing: the matcher tries routes in this order and the first
//! match wins.

use crate::definition::RouteDefinition;
use crate::error::{Result, RoutingError};
use crate::route::Route;
use crate::value::Parameters;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Insertion-ordered mapping from route name to [`Route`]
#[derive(Debug, Clone, Default)]
pub struct RouteCollection {
	routes: IndexMap<String, Route>,
}

impl RouteCollection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a route under a new name
	///
	/// # Errors
	///
	/// [`RoutingError::DuplicateRouteName`] if the name is taken.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{Route, RouteCollection};
	///
	/// let mut routes = RouteCollection::new();
	/// routes.add("home", Route::new("/")).unwrap();
	/// assert!(routes.add("home", Route::new("/index")).is_err());
	/// assert_eq!(routes.len(), 1);
	/// ```
	pub fn add(&mut self, name: impl Into<String>, route: Route) -> Result<()> {
		match self.routes.entry(name.into()) {
			Entry::Occupied(entry) => Err(RoutingError::DuplicateRouteName(entry.key().clone())),
			Entry::Vacant(entry) => {
				entry.insert(route);
				Ok(())
			}
		}
	}

	/// Merge another collection in its iteration order
	///
	/// With `allow_override`, a colliding name takes the incoming route and
	/// moves to the position it is merged at, after every route already
	/// present.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{Route, RouteCollection};
	///
	/// let mut base = RouteCollection::new();
	/// base.add("a", Route::new("/a")).unwrap();
	/// base.add("b", Route::new("/b")).unwrap();
	///
	/// let mut other = RouteCollection::new();
	/// other.add("a", Route::new("/a2")).unwrap();
	///
	/// base.add_collection(other, true).unwrap();
	/// assert_eq!(base.names().collect::<Vec<_>>(), ["b", "a"]);
	/// assert_eq!(base.get("a").unwrap().path(), "/a2");
	/// ```
	pub fn add_collection(&mut self, other: RouteCollection, allow_override: bool) -> Result<()> {
		if !allow_override
			&& let Some(name) = other.names().find(|name| self.contains(name))
		{
			return Err(RoutingError::DuplicateRouteName(name.to_string()));
		}

		for (name, route) in other.routes {
			if self.routes.shift_remove(&name).is_some() {
				tracing::debug!(route = %name, "route overridden by merged collection");
			}
			self.routes.insert(name, route);
		}
		Ok(())
	}

	/// Remove a route, keeping the order of the others
	pub fn remove(&mut self, name: &str) -> Option<Route> {
		self.routes.shift_remove(name)
	}

	/// Prepend a path prefix to every route
	///
	/// Slashes around the prefix are trimmed; an empty prefix is a no-op.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{Route, RouteCollection};
	///
	/// let mut routes = RouteCollection::new();
	/// routes.add("list", Route::new("/users")).unwrap();
	/// routes.add_prefix("/api/v1/");
	/// assert_eq!(routes.get("list").unwrap().path(), "/api/v1/users");
	/// ```
	pub fn add_prefix(&mut self, prefix: &str) {
		let prefix = prefix.trim_matches('/');
		if prefix.is_empty() {
			return;
		}

		for route in self.routes.values_mut() {
			let path = format!("/{}{}", prefix, route.path());
			route.set_path(path);
		}
	}

	/// Prepend a prefix to every route name
	pub fn add_name_prefix(&mut self, prefix: &str) {
		if prefix.is_empty() {
			return;
		}

		self.routes = std::mem::take(&mut self.routes)
			.into_iter()
			.map(|(name, route)| (format!("{}{}", prefix, name), route))
			.collect();
	}

	/// Give every route the defaults it does not define itself
	pub fn add_defaults(&mut self, defaults: &Parameters) {
		if defaults.is_empty() {
			return;
		}

		for route in self.routes.values_mut() {
			let missing: Parameters = defaults
				.iter()
				.filter(|(name, _)| !route.has_default(name))
				.map(|(name, value)| (name.clone(), value.clone()))
				.collect();
			if !missing.is_empty() {
				route.add_defaults(missing);
			}
		}
	}

	/// Give every route the requirements it does not define itself
	pub fn add_requirements(&mut self, requirements: &IndexMap<String, String>) {
		if requirements.is_empty() {
			return;
		}

		for route in self.routes.values_mut() {
			let missing: IndexMap<String, String> = requirements
				.iter()
				.filter(|(name, _)| !route.has_requirement(name))
				.map(|(name, regex)| (name.clone(), regex.clone()))
				.collect();
			if !missing.is_empty() {
				route.add_requirements(missing);
			}
		}
	}

	/// Replace the allowed methods of every route
	pub fn set_methods<S: AsRef<str>>(&mut self, methods: &[S]) {
		for route in self.routes.values_mut() {
			route.set_methods(methods);
		}
	}

	pub fn get(&self, name: &str) -> Option<&Route> {
		self.routes.get(name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut Route> {
		self.routes.get_mut(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Route names in insertion order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.routes.keys().map(String::as_str)
	}

	/// `(name, route)` pairs in insertion order
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, Route> {
		self.routes.iter()
	}

	/// Compile every route ahead of serving traffic
	///
	/// # Errors
	///
	/// The first compile error, in insertion order.
	pub fn warm_up(&self) -> Result<()> {
		for (name, route) in &self.routes {
			route.compile().inspect_err(|e| {
				tracing::warn!(route = %name, error = %e, "route failed to compile");
			})?;
		}
		tracing::debug!(routes = self.routes.len(), "route collection warmed up");
		Ok(())
	}

	/// Build a collection from the declarative bulk form
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{RouteCollection, RouteDefinition};
	/// use indexmap::IndexMap;
	///
	/// let mut definitions = IndexMap::new();
	/// definitions.insert("about".to_string(), RouteDefinition::new("/about"));
	///
	/// let routes = RouteCollection::from_definitions(definitions);
	/// assert_eq!(routes.get("about").unwrap().path(), "/about");
	/// ```
	pub fn from_definitions(definitions: IndexMap<String, RouteDefinition>) -> Self {
		Self {
			routes: definitions
				.into_iter()
				.map(|(name, definition)| (name, definition.into_route()))
				.collect(),
		}
	}

	/// Export in the declarative bulk form
	pub fn to_definitions(&self) -> IndexMap<String, RouteDefinition> {
		self.routes
			.iter()
			.map(|(name, route)| (name.clone(), RouteDefinition::from(route)))
			.collect()
	}
}

impl<'a> IntoIterator for &'a RouteCollection {
	type Item = (&'a String, &'a Route);
	type IntoIter = indexmap::map::Iter<'a, String, Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.iter()
	}
}

impl IntoIterator for RouteCollection {
	type Item = (String, Route);
	type IntoIter = indexmap::map::IntoIter<String, Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.into_iter()
	}
}
