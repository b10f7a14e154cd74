//! # Waymark Routing
//!
//! URL routing core for Waymark:
//!
//! - **Route compilation**: path templates with `{name}` placeholders become
//!   anchored regexes; placeholders with defaults are optional
//! - **Ordered collections**: unique names, insertion order is the match priority
//! - **Matching**: `(path, method)` to parameters, telling "no route"
//!   apart from "wrong method"
//! - **Generation**: route name and parameters to a URL, with a query string
//!   for leftover parameters
//!
//! # Examples
//!
//! ## Matching
//!
//! ```
//! use waymark_routing::{ParamValue, Route, RouteCollection, Router, RoutingError};
//!
//! let mut routes = RouteCollection::new();
//! routes
//!     .add(
//!         "blog",
//!         Route::new("/blog/{page}")
//!             .with_default("page", "1")
//!             .with_requirement("page", r"\d+")
//!             .with_handler("blog::index"),
//!     )
//!     .unwrap();
//! routes.add("user_create", Route::new("/api/users").with_methods(["POST"])).unwrap();
//!
//! let router = Router::new(routes).unwrap();
//!
//! let params = router.match_path("/blog", "GET").unwrap();
//! assert_eq!(params.get("page"), Some(&ParamValue::from("1")));
//! assert_eq!(params.get("_route"), Some(&ParamValue::from("blog")));
//!
//! let err = router.match_path("/api/users", "GET").unwrap_err();
//! assert!(matches!(err, RoutingError::MethodNotAllowed { .. }));
//! assert_eq!(err.allow_header().as_deref(), Some("POST"));
//! ```
//!
//! ## Generation
//!
//! ```
//! use waymark_routing::{ParamValue, Route, RouteCollection, Router, params};
//!
//! let mut routes = RouteCollection::new();
//! routes.add("article", Route::new("/article/{id}").with_requirement("id", r"\d+")).unwrap();
//! let router = Router::new(routes).unwrap();
//!
//! let url = router
//!     .generate("article", &params([("id", ParamValue::from(7)), ("page", 2.into())]))
//!     .unwrap();
//! assert_eq!(url, "/article/7?page=2");
//! ```

pub mod collection;
pub mod definition;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod pattern;
pub mod route;
pub mod router;
pub mod value;

pub use collection::RouteCollection;
pub use definition::RouteDefinition;
pub use error::{Result, RoutingError};
pub use generator::UrlGenerator;
pub use matcher::UrlMatcher;
pub use pattern::{CompiledRoute, DEFAULT_REQUIREMENT, TemplateToken};
pub use route::Route;
pub use router::Router;
pub use value::{
	HANDLER_KEY, HandlerRef, INTERNAL_PREFIX, ParamValue, Parameters, ROUTE_KEY, is_internal,
	params,
};
