//! Routing core module.
//!
//! Route compilation, ordered collections, the matcher and the generator.
//! Available whatever features are enabled.
//!
//! # Examples
//!
//! ```rust
//! use waymark::routing::{Parameters, Route, RouteCollection, UrlGenerator, UrlMatcher};
//! use std::sync::Arc;
//!
//! let mut routes = RouteCollection::new();
//! routes.add("about", Route::new("/about")).unwrap();
//! let routes = Arc::new(routes);
//! let matcher = UrlMatcher::new(Arc::clone(&routes));
//! assert!(matcher.has_match("/about", "GET"));
//!
//! let generator = UrlGenerator::new(routes);
//! assert_eq!(generator.generate("about", &Parameters::new()).unwrap(), "/about");
//! ```

pub use waymark_routing::*;
