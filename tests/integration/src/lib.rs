//! Integration test utilities for Waymark
//!
//! Shared route tables and a scratch project directory for tests that
//! exercise the routing core and the settings layer together.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use waymark::prelude::*;

/// Blog application routes used across the integration tests
///
/// | name          | path                          | notes                     |
/// |---------------|-------------------------------|---------------------------|
/// | `home`        | `/`                           |                           |
/// | `blog`        | `/blog/{page}`                | `page` defaults to 1      |
/// | `post`        | `/blog/{year}/{month}/{slug}` | `year`, `month` numeric   |
/// | `article`     | `/article/{id}`               | `id` numeric              |
/// | `user_create` | `/api/users`                  | POST                      |
/// | `user_update` | `/api/users`                  | PUT                       |
pub fn blog_routes() -> RouteCollection {
	let mut routes = RouteCollection::new();
	let entries = [
		("home", Route::new("/").with_handler("pages::home")),
		(
			"blog",
			Route::new("/blog/{page}")
				.with_default("page", 1)
				.with_requirement("page", r"\d+")
				.with_handler("blog::index"),
		),
		(
			"post",
			Route::new("/blog/{year}/{month}/{slug}")
				.with_requirement("year", r"\d{4}")
				.with_requirement("month", r"\d{2}")
				.with_handler("blog::post"),
		),
		(
			"article",
			Route::new("/article/{id}")
				.with_requirement("id", r"\d+")
				.with_handler("article::show"),
		),
		(
			"user_create",
			Route::new("/api/users")
				.with_methods(["POST"])
				.with_handler("users::create"),
		),
		(
			"user_update",
			Route::new("/api/users")
				.with_methods(["PUT"])
				.with_handler("users::update"),
		),
	];
	for (name, route) in entries {
		routes
			.add(name, route)
			.unwrap_or_else(|e| panic!("fixture route {} rejected: {}", name, e));
	}
	routes
}

/// Router over [`blog_routes`]
pub fn blog_router() -> Router {
	Router::new(blog_routes()).unwrap_or_else(|e| panic!("fixture routes failed to compile: {}", e))
}

/// Scratch directory holding route files and settings
pub struct Project {
	dir: TempDir,
}

impl Project {
	pub fn new() -> Self {
		Self {
			dir: TempDir::new().unwrap_or_else(|e| panic!("cannot create temp dir: {}", e)),
		}
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	/// Write `contents` to `relative`, creating parent directories
	pub fn write(&self, relative: &str, contents: &str) -> &Self {
		let path = self.dir.path().join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)
				.unwrap_or_else(|e| panic!("cannot create {}: {}", parent.display(), e));
		}
		fs::write(&path, contents).unwrap_or_else(|e| panic!("cannot write {}: {}", path.display(), e));
		self
	}
}

impl Default for Project {
	fn default() -> Self {
		Self::new()
	}
}
