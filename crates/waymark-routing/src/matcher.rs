//! Request path resolution.
//!
//! # Data Flow
//! ```text
//! (path, method)
//!     → each route in insertion order
//!         → method allowed and path matches → return parameters + _route
//!         → method rejected → path-only probe → collect allowed methods
//!     → any path-only hit → MethodNotAllowed(allowed)
//!     → otherwise         → RouteNotFound
//! ```
//!
//! # Design Decisions
//! - First match wins: registration order is the priority
//! - The path-only probe runs the compiled pattern directly and never
//!   touches the route's methods, so routes can be shared freely

use crate::collection::RouteCollection;
use crate::error::{Result, RoutingError};
use crate::value::{ParamValue, Parameters, ROUTE_KEY};
use std::sync::Arc;

/// Resolves request paths against a route collection.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
	routes: Arc<RouteCollection>,
}

impl UrlMatcher {
	pub fn new(routes: Arc<RouteCollection>) -> Self {
		Self { routes }
	}

	pub fn routes(&self) -> &RouteCollection {
		&self.routes
	}

	/// Resolve a path and method to the parameters of the first matching route
	///
	/// The result holds every captured or defaulted value plus `_route`.
	///
	/// # Errors
	///
	/// - [`RoutingError::MethodNotAllowed`] when routes match the path but
	///   none of them allows `method`
	/// - [`RoutingError::RouteNotFound`] when no route matches the path
	/// - compile errors of a route reached during the scan
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{ParamValue, Route, RouteCollection, RoutingError, UrlMatcher};
	/// use std::sync::Arc;
	///
	/// let mut routes = RouteCollection::new();
	/// routes.add("user_update", Route::new("/api/users").with_methods(["POST", "PUT"])).unwrap();
	/// let matcher = UrlMatcher::new(Arc::new(routes));
	///
	/// let params = matcher.match_path("/api/users", "put").unwrap();
	/// assert_eq!(params.get("_route"), Some(&ParamValue::from("user_update")));
	///
	/// match matcher.match_path("/api/users", "GET") {
	///     Err(RoutingError::MethodNotAllowed { allowed, .. }) => assert_eq!(allowed, ["POST", "PUT"]),
	///     other => panic!("unexpected: {:?}", other),
	/// }
	/// ```
	pub fn match_path(&self, path: &str, method: &str) -> Result<Parameters> {
		let mut allowed: Vec<String> = Vec::new();
		let mut path_matched = false;

		for (name, route) in &*self.routes {
			if route.allows_method(method) {
				if let Some(mut params) = route.match_path_any_method(path)? {
					tracing::debug!(route = %name, path, method, "route matched");
					params.insert(ROUTE_KEY.to_string(), ParamValue::from(name));
					return Ok(params);
				}
				continue;
			}

			if route.compile()?.is_match(path) {
				tracing::trace!(route = %name, path, method, "path matched, method rejected");
				path_matched = true;
				for m in route.methods() {
					if !allowed.contains(m) {
						allowed.push(m.clone());
					}
				}
			}
		}

		if path_matched {
			tracing::debug!(path, method, allowed = ?allowed, "method not allowed");
			return Err(RoutingError::MethodNotAllowed {
				path: path.to_string(),
				method: method.to_ascii_uppercase(),
				allowed,
			});
		}

		tracing::debug!(path, method, "no route found");
		Err(RoutingError::RouteNotFound {
			path: path.to_string(),
		})
	}

	/// Name of the route `path` and `method` resolve to
	pub fn match_route_name(&self, path: &str, method: &str) -> Result<String> {
		let mut params = self.match_path(path, method)?;
		match params.shift_remove(ROUTE_KEY) {
			Some(ParamValue::Str(name)) => Ok(name),
			_ => Err(RoutingError::RouteNotFound {
				path: path.to_string(),
			}),
		}
	}

	/// Whether `path` and `method` resolve to a route
	///
	/// Both not-found and method-not-allowed count as no match; compile
	/// errors are treated the same way.
	pub fn has_match(&self, path: &str, method: &str) -> bool {
		self.match_path(path, method).is_ok()
	}
}
