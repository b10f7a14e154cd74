//! # Waymark
//!
//! A URL routing engine: compiled path templates, method-aware matching
//! and reverse URL generation.
//!
//! Routes are path templates such as `/blog/{year}/{slug}` with optional
//! defaults, per-placeholder regex requirements and allowed HTTP methods.
//! A [`Router`] resolves `(path, method)` to the parameters of the first
//! matching route, distinguishing "no such route" from "wrong method", and
//! builds URLs back from a route name and parameter values.
//!
//! ## Feature Flags
//!
//! The routing core is always available. Features add configuration:
//!
//! - `conf` - settings and route files in TOML / JSON
//! - `yaml` - YAML route files
//! - `full` (default) - everything above
//!
//! ## Quick Example
//!
//! ```
//! use waymark::prelude::*;
//!
//! let mut routes = RouteCollection::new();
//! routes
//!     .add(
//!         "post",
//!         Route::new("/blog/{year}/{slug}")
//!             .with_requirement("year", r"\d{4}")
//!             .with_handler("blog::post"),
//!     )
//!     .unwrap();
//! routes.add("user_create", Route::new("/api/users").with_methods(["POST"])).unwrap();
//!
//! let router = Router::new(routes).unwrap();
//!
//! let matched = router.match_path("/blog/2024/hello", "GET").unwrap();
//! assert_eq!(matched.get("slug"), Some(&ParamValue::from("hello")));
//!
//! let err = router.match_path("/api/users", "GET").unwrap_err();
//! assert_eq!(err.status_code().as_u16(), 405);
//!
//! let url = router
//!     .generate("post", &params([("year", ParamValue::from(2024)), ("slug", "hello".into())]))
//!     .unwrap();
//! assert_eq!(url, "/blog/2024/hello");
//! ```

#[cfg(feature = "conf")]
pub mod conf;
pub mod routing;

pub use waymark_routing::{
	CompiledRoute, HandlerRef, ParamValue, Parameters, Route, RouteCollection, RouteDefinition,
	Router, RoutingError, UrlGenerator, UrlMatcher, params,
};

#[cfg(feature = "conf")]
pub use waymark_conf::{
	ConfError, RouteFileFormat, RouteFileLoader, RouteResource, RouterBuilder, RoutingSettings,
	export_routes,
};

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```
/// use waymark::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		HandlerRef, ParamValue, Parameters, Route, RouteCollection, Router, RoutingError, params,
	};

	// Settings and route files
	#[cfg(feature = "conf")]
	pub use crate::{RouteFileFormat, RouteFileLoader, RouterBuilder, RoutingSettings};
}
