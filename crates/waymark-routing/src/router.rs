use crate::collection::RouteCollection;
use crate::definition::RouteDefinition;
use crate::error::Result;
use crate::generator::UrlGenerator;
use crate::matcher::UrlMatcher;
use crate::value::Parameters;
use indexmap::IndexMap;
use std::sync::Arc;

/// Router facade
/// One matcher and one generator over one shared, warmed-up collection.
///
/// The collection is frozen once handed to the router: it is compiled
/// eagerly and only reachable through `&`, so the router can be shared
/// across request-handling threads.
#[derive(Debug, Clone)]
pub struct Router {
	routes: Arc<RouteCollection>,
	matcher: UrlMatcher,
	generator: UrlGenerator,
}

impl Router {
	/// Create a router, compiling every route first
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{ParamValue, Route, RouteCollection, Router, params};
	///
	/// let mut routes = RouteCollection::new();
	/// routes.add("article", Route::new("/article/{id}").with_requirement("id", r"\d+")).unwrap();
	/// let router = Router::new(routes).unwrap();
	///
	/// let matched = router.match_path("/article/42", "GET").unwrap();
	/// assert_eq!(matched.get("id"), Some(&ParamValue::from("42")));
	///
	/// let url = router.generate("article", &params([("id", ParamValue::from(42))])).unwrap();
	/// assert_eq!(url, "/article/42");
	/// ```
	pub fn new(routes: RouteCollection) -> Result<Self> {
		routes.warm_up()?;
		Ok(Self::lazy(routes))
	}

	/// Create a router without compiling up front
	///
	/// Each route compiles on first use; a broken route then surfaces as
	/// an error from the first lookup that reaches it.
	pub fn lazy(routes: RouteCollection) -> Self {
		let routes = Arc::new(routes);
		Self {
			matcher: UrlMatcher::new(Arc::clone(&routes)),
			generator: UrlGenerator::new(Arc::clone(&routes)),
			routes,
		}
	}

	/// Create a router from the declarative bulk form
	pub fn from_definitions(definitions: IndexMap<String, RouteDefinition>) -> Result<Self> {
		Self::new(RouteCollection::from_definitions(definitions))
	}

	pub fn routes(&self) -> &RouteCollection {
		&self.routes
	}

	pub fn matcher(&self) -> &UrlMatcher {
		&self.matcher
	}

	pub fn generator(&self) -> &UrlGenerator {
		&self.generator
	}

	/// See [`UrlMatcher::match_path`]
	pub fn match_path(&self, path: &str, method: &str) -> Result<Parameters> {
		self.matcher.match_path(path, method)
	}

	/// See [`UrlMatcher::match_route_name`]
	pub fn match_route_name(&self, path: &str, method: &str) -> Result<String> {
		self.matcher.match_route_name(path, method)
	}

	pub fn has_match(&self, path: &str, method: &str) -> bool {
		self.matcher.has_match(path, method)
	}

	/// See [`UrlGenerator::generate`]
	pub fn generate(&self, name: &str, parameters: &Parameters) -> Result<String> {
		self.generator.generate(name, parameters)
	}

	/// See [`UrlGenerator::generate_multiple`]
	pub fn generate_multiple(
		&self,
		requests: &IndexMap<String, Parameters>,
	) -> IndexMap<String, String> {
		self.generator.generate_multiple(requests)
	}
}
