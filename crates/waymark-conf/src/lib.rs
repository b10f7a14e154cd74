//! # Waymark Conf
//!
//! Settings and route files for Waymark routers.
//!
//! - [`RouteFileLoader`]: route files in TOML, JSON or (with the `yaml`
//!   feature) YAML, into a [`RouteCollection`](waymark_routing::RouteCollection)
//! - [`RoutingSettings`]: which files to import, how each is mounted, and
//!   the `warm_up` / `allow_override` switches, with environment overrides
//! - [`RouterBuilder`]: settings plus files into a ready [`Router`](waymark_routing::Router)
//! - [`export_routes`]: the reverse of loading
//!
//! # Examples
//!
//! ```
//! use waymark_conf::{RouteFileFormat, RouteFileLoader};
//! use waymark_routing::Router;
//!
//! let routes = RouteFileLoader::default()
//!     .load_str(RouteFileFormat::Toml, r#"
//! [article]
//! path = "/article/{id}"
//! requirements = { id = '\d+' }
//! "#)
//!     .unwrap();
//!
//! let router = Router::new(routes).unwrap();
//! assert_eq!(router.match_route_name("/article/3", "GET").unwrap(), "article");
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod settings;

pub use builder::RouterBuilder;
pub use error::{ConfError, ConfResult};
pub use loader::{RouteFileFormat, RouteFileLoader, export_routes};
pub use settings::{RouteResource, RoutingSettings};
