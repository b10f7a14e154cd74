//! Router assembly from settings

use crate::error::ConfResult;
use crate::loader::RouteFileLoader;
use crate::settings::{RouteResource, RoutingSettings};
use std::path::{Path, PathBuf};
use waymark_routing::{RouteCollection, Router};

/// Builds a [`Router`] from settings and route files
///
/// Routes added in code come first, then each settings resource in order.
///
/// # Examples
///
/// ```
/// use waymark_conf::{RouterBuilder, RoutingSettings};
/// use waymark_routing::{Route, RouteCollection};
///
/// let mut routes = RouteCollection::new();
/// routes.add("home", Route::new("/")).unwrap();
///
/// let router = RouterBuilder::new(".")
///     .with_settings(RoutingSettings::default())
///     .with_routes(routes)
///     .build()
///     .unwrap();
///
/// assert!(router.has_match("/", "GET"));
/// ```
#[derive(Debug, Clone)]
pub struct RouterBuilder {
	loader: RouteFileLoader,
	settings: RoutingSettings,
	routes: RouteCollection,
}

impl RouterBuilder {
	/// Create a builder resolving route files against `base_dir`
	pub fn new(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			loader: RouteFileLoader::new(base_dir),
			settings: RoutingSettings::default(),
			routes: RouteCollection::new(),
		}
	}

	/// Read settings from a TOML file; route files resolve against its directory
	pub fn from_settings_file(path: impl AsRef<Path>) -> ConfResult<Self> {
		let path = path.as_ref();
		let settings = RoutingSettings::from_file(path)?;
		let base_dir = path
			.parent()
			.map(Path::to_path_buf)
			.unwrap_or_else(|| PathBuf::from("."));
		Ok(Self::new(base_dir).with_settings(settings))
	}

	pub fn with_settings(mut self, settings: RoutingSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Routes registered ahead of every resource
	pub fn with_routes(mut self, routes: RouteCollection) -> Self {
		self.routes = routes;
		self
	}

	/// Queue one more route file after those in the settings
	pub fn with_resource(mut self, resource: RouteResource) -> Self {
		self.settings.resources.push(resource);
		self
	}

	pub fn settings(&self) -> &RoutingSettings {
		&self.settings
	}

	pub fn settings_mut(&mut self) -> &mut RoutingSettings {
		&mut self.settings
	}

	/// Load and mount every resource into one collection
	///
	/// # Errors
	///
	/// Loading errors of the first failing resource, or
	/// [`RoutingError::DuplicateRouteName`](waymark_routing::RoutingError::DuplicateRouteName)
	/// when resources collide and overriding is off.
	pub fn build_collection(&self) -> ConfResult<RouteCollection> {
		let mut routes = self.routes.clone();

		for resource in &self.settings.resources {
			let mut imported = self.loader.load_file(&resource.path)?;
			resource.apply_to(&mut imported);
			tracing::debug!(
				file = %resource.path.display(),
				routes = imported.len(),
				"mounting route resource"
			);
			routes.add_collection(imported, self.settings.allow_override)?;
		}

		Ok(routes)
	}

	/// Build the router, compiling every route when `warm_up` is set
	pub fn build(&self) -> ConfResult<Router> {
		let routes = self.build_collection()?;
		let count = routes.len();

		let router = if self.settings.warm_up {
			Router::new(routes)?
		} else {
			Router::lazy(routes)
		};

		tracing::info!(routes = count, warm_up = self.settings.warm_up, "router built");
		Ok(router)
	}
}
