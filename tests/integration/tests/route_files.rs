//! Integration tests for settings-driven router assembly
//!
//! This test file verifies the integration between:
//! - Route files in TOML, JSON and YAML
//! - Settings resources (prefixes, name prefixes, collection-wide options)
//! - Environment overrides of the settings switches
//! - Exported route files loading back into the same router

use rstest::{fixture, rstest};
use waymark::prelude::*;
use waymark::{ConfError, RouteResource, export_routes};
use waymark_integration_tests::{Project, blog_routes};

#[fixture]
fn project() -> Project {
	let project = Project::new();
	project
		.write(
			"routing.toml",
			r#"
[[resources]]
path = "routes/site.toml"

[[resources]]
path = "routes/api.yaml"
prefix = "/api/v1"
name_prefix = "api_"
requirements = { id = '\d+' }

[resources.defaults]
_format = "json"

[[resources]]
path = "routes/admin.json"
prefix = "/admin"
name_prefix = "admin_"
methods = ["GET", "POST"]
"#,
		)
		.write(
			"routes/site.toml",
			r#"
[home]
path = "/"
defaults = { _controller = "site::home" }
"#,
		)
		.write(
			"routes/api.yaml",
			r#"
user_list:
  path: /users
  methods: [GET]
user_show:
  path: /users/{id}
  defaults:
    _controller: api::user_show
"#,
		)
		.write(
			"routes/admin.json",
			r#"{ "dashboard": { "path": "/" }, "user_edit": { "path": "/users/{id}/edit" } }"#,
		);
	project
}

/// Test Intent: Verify resources in three formats mount in settings order
/// Integration Point: RouterBuilder + RouteFileLoader + RouteResource
#[rstest]
fn test_mixed_format_resources(project: Project) {
	let router = RouterBuilder::from_settings_file(project.path().join("routing.toml"))
		.unwrap()
		.build()
		.unwrap();

	assert_eq!(
		router.routes().names().collect::<Vec<_>>(),
		[
			"home",
			"api_user_list",
			"api_user_show",
			"admin_dashboard",
			"admin_user_edit"
		]
	);

	let show = router.match_path("/api/v1/users/42", "GET").unwrap();
	assert_eq!(show["_route"], ParamValue::from("api_user_show"));
	assert_eq!(show["_format"], ParamValue::from("json"));
	assert_eq!(
		show["_controller"].as_handler().map(|h| h.as_str()),
		Some("api::user_show")
	);
	assert!(!router.has_match("/api/v1/users/abc", "GET"));

	let err = router.match_path("/admin/users/3/edit", "DELETE").unwrap_err();
	assert_eq!(err.allow_header().as_deref(), Some("GET, POST"));

	assert_eq!(
		router
			.generate("admin_user_edit", &params([("id", ParamValue::from(3))]))
			.unwrap(),
		"/admin/users/3/edit"
	);
}

/// Test Intent: Verify an environment override rejects a colliding re-import
/// Integration Point: RoutingSettings::apply_vars + allow_override
#[rstest]
#[case("false", true)]
#[case("true", false)]
fn test_allow_override_from_environment(
	project: Project,
	#[case] allow_override: &str,
	#[case] fails: bool,
) {
	project.write("routes/extra.toml", "[home]\npath = \"/start\"\n");
	let mut builder = RouterBuilder::from_settings_file(project.path().join("routing.toml"))
		.unwrap()
		.with_resource(RouteResource::new("routes/extra.toml"));

	builder
		.settings_mut()
		.apply_vars("WAYMARK_", |key| {
			(key == "WAYMARK_ALLOW_OVERRIDE").then(|| allow_override.to_string())
		})
		.unwrap();

	match builder.build() {
		Err(ConfError::Routing(RoutingError::DuplicateRouteName(name))) => {
			assert!(fails);
			assert_eq!(name, "home");
		}
		Ok(router) => {
			assert!(!fails);
			assert_eq!(router.match_route_name("/start", "GET").unwrap(), "home");
			assert!(!router.has_match("/", "GET"));
		}
		Err(other) => panic!("unexpected error: {}", other),
	}
}

/// Test Intent: Verify an exported route file rebuilds the same routes in every format
/// Integration Point: export_routes + RouteFileLoader::load_file
#[rstest]
#[case(RouteFileFormat::Toml)]
#[case(RouteFileFormat::Json)]
#[case(RouteFileFormat::Yaml)]
fn test_export_reload(#[case] format: RouteFileFormat) {
	let project = Project::new();
	let routes = blog_routes();
	let file = format!("exported.{}", format.extension());
	project.write(&file, &export_routes(&routes, format).unwrap());

	let reloaded = RouteFileLoader::new(project.path()).load_file(&file).unwrap();

	assert_eq!(reloaded.to_definitions(), routes.to_definitions());
	let router = Router::new(reloaded).unwrap();
	assert_eq!(
		router.match_route_name("/blog/2024/05/x", "GET").unwrap(),
		"post"
	);
}
